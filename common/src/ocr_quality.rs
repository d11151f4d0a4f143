//! OCR品質チェック
//!
//! 読み取りが怪しい本文を検出して、手作業での修正対象を洗い出す。

use crate::types::LetterRecord;
use regex::Regex;

/// 検出された問題
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrProblem {
    /// 20文字未満または空
    TooShort,
    /// `|=[]{}` が10%超
    SpecialChars,
    /// 孤立した1文字が5%超
    Fragmented,
    /// 大文字の塊が空白を挟んで並ぶ箇所が5個超
    Gibberish,
    /// 5文字未満の行が半数超
    ShortLines,
}

impl OcrProblem {
    pub fn description(&self) -> &'static str {
        match self {
            OcrProblem::TooShort => "Texto muito curto ou vazio",
            OcrProblem::SpecialChars => "Muitos caracteres especiais",
            OcrProblem::Fragmented => "Texto fragmentado",
            OcrProblem::Gibberish => "Padroes de OCR incorreto",
            OcrProblem::ShortLines => "Muitas linhas curtas",
        }
    }
}

impl std::fmt::Display for OcrProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

const MIN_CHARS: usize = 20;

lazy_static::lazy_static! {
    static ref SPECIAL_RE: Regex = Regex::new(r"[|=\[\]{}]").unwrap();
    static ref FRAGMENT_RE: Regex = Regex::new(r"\b[A-Za-z]\b").unwrap();
    static ref GIBBERISH_RE: Regex = Regex::new(r"[A-Z]{2,}\s+[A-Z]{2,}").unwrap();
}

/// 最初に該当した問題を返す（問題なしは None）
pub fn detect_problem(text: &str) -> Option<OcrProblem> {
    let len = text.chars().count();
    if len < MIN_CHARS {
        return Some(OcrProblem::TooShort);
    }
    let len = len as f64;

    if SPECIAL_RE.find_iter(text).count() as f64 > len * 0.1 {
        return Some(OcrProblem::SpecialChars);
    }

    if FRAGMENT_RE.find_iter(text).count() as f64 > len * 0.05 {
        return Some(OcrProblem::Fragmented);
    }

    if GIBBERISH_RE.find_iter(text).count() > 5 {
        return Some(OcrProblem::Gibberish);
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let short_lines = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && l.chars().count() < 5)
        .count();
    if short_lines as f64 > lines.len() as f64 * 0.5 {
        return Some(OcrProblem::ShortLines);
    }

    None
}

/// 修正が必要なレコード
#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedLetter<'a> {
    pub record: &'a LetterRecord,
    pub problem: OcrProblem,
}

/// カタログ全体をチェック（カタログ順）
pub fn flag_letters(records: &[LetterRecord]) -> Vec<FlaggedLetter<'_>> {
    records
        .iter()
        .filter_map(|record| {
            detect_problem(record.text()).map(|problem| FlaggedLetter { record, problem })
        })
        .collect()
}

/// 手作業で修正した本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub id: String,
    pub text: String,
}

/// 修正を反映し、変更した件数を返す
///
/// 空の修正は無視する。IDが見つからないものは返り値に含めない。
pub fn apply_corrections(records: &mut [LetterRecord], corrections: &[Correction]) -> usize {
    let mut applied = 0;
    for correction in corrections {
        let text = correction.text.trim();
        if text.is_empty() {
            continue;
        }
        if let Some(record) = records.iter_mut().find(|r| r.id == correction.id) {
            if record.ocr_text.as_deref() != Some(text) {
                record.ocr_text = Some(text.to_string());
                applied += 1;
            }
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "Prezado senhor redator,\nescrevo para comentar a reportagem de ontem sobre a cidade.";

    #[test]
    fn test_good_text() {
        assert_eq!(detect_problem(GOOD), None);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(detect_problem(""), Some(OcrProblem::TooShort));
        assert_eq!(detect_problem("curto demais"), Some(OcrProblem::TooShort));
    }

    #[test]
    fn test_special_chars() {
        let text = "texto |||| ==== [[]] {{}} com lixo";
        assert_eq!(detect_problem(text), Some(OcrProblem::SpecialChars));
    }

    #[test]
    fn test_fragmented() {
        let text = "a b c d e f g h texto quebrado aqui";
        assert_eq!(detect_problem(text), Some(OcrProblem::Fragmented));
    }

    #[test]
    fn test_gibberish() {
        let text = "AB CD EF GH IJ KL MN OP QR ST UV WX tudo em caixa alta mesmo";
        assert_eq!(detect_problem(text), Some(OcrProblem::Gibberish));
    }

    #[test]
    fn test_short_lines() {
        let text = "Linha inteira de texto ok\nab\ncd\nef\ngh";
        assert_eq!(detect_problem(text), Some(OcrProblem::ShortLines));
    }

    #[test]
    fn test_flag_letters() {
        let records = vec![
            LetterRecord { id: "ok".into(), ocr_text: Some(GOOD.into()), ..Default::default() },
            LetterRecord { id: "vazio".into(), ..Default::default() },
        ];
        let flagged = flag_letters(&records);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].record.id, "vazio");
        assert_eq!(flagged[0].problem.to_string(), "Texto muito curto ou vazio");
        assert_eq!(flagged[0], FlaggedLetter { record: &records[1], problem: OcrProblem::TooShort });
    }

    #[test]
    fn test_apply_corrections() {
        let mut records = vec![
            LetterRecord { id: "a".into(), ocr_text: Some("l1xo".into()), ..Default::default() },
            LetterRecord { id: "b".into(), ..Default::default() },
        ];
        let corrections = vec![
            Correction { id: "a".into(), text: " texto corrigido ".into() },
            Correction { id: "b".into(), text: "   ".into() },
            Correction { id: "zzz".into(), text: "sem carta".into() },
        ];
        assert_eq!(apply_corrections(&mut records, &corrections), 1);
        assert_eq!(records[0].text(), "texto corrigido");
        assert_eq!(records[1].ocr_text, None);
    }
}
