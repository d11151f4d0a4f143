//! OCRテキストからのメタデータ推定
//!
//! - 件名: キーワード表による分類（部分一致、該当なしは "Geral"）
//! - 年: 日付表記→4桁の数字の順に探し、巻ごとの年の範囲に入るもの
//! - 掲載日: 最初の dd/mm/yyyy 表記

use crate::types::LetterRecord;
use regex::Regex;

/// どの件名にも当てはまらない場合
pub const FALLBACK_SUBJECT: &str = "Geral";

/// 件名とキーワード（小文字、部分一致）
pub const SUBJECT_KEYWORDS: &[(&str, &[&str])] = &[
    ("Brasil", &[
        "brasil", "brasileiro", "brasileiros", "pátria", "nação", "nacional",
        "país", "terra", "verde-amarelo", "bandeira", "hino",
    ]),
    ("Política", &[
        "governo", "presidente", "eleição", "eleições", "partido", "político",
        "políticos", "política", "congresso", "senado", "câmara", "deputado",
        "senador", "ministro", "prefeito", "governador", "voto", "votos",
        "democracia", "república", "estado", "poder",
    ]),
    ("Economia", &[
        "economia", "econômico", "inflação", "dólar", "real", "dinheiro",
        "emprego", "desemprego", "pib", "banco", "juros", "preço", "preços",
        "salário", "imposto", "impostos", "crise", "mercado", "indústria",
    ]),
    ("Educação", &[
        "educação", "escola", "escolas", "universidade", "ensino", "professor",
        "professores", "aluno", "alunos", "estudante", "estudantes", "aula",
        "livro", "livros", "aprender", "conhecimento", "formação",
    ]),
    ("Ética", &[
        "ética", "moral", "valores", "honestidade", "corrupção", "corrupto",
        "caráter", "dignidade", "integridade", "justiça", "verdade", "mentira",
        "honra", "respeito", "decência",
    ]),
    ("Família", &[
        "família", "pai", "mãe", "filho", "filhos", "filha", "esposa", "marido",
        "casamento", "lar", "casa", "amor", "criança", "crianças", "pais",
    ]),
    ("Religião", &[
        "deus", "jesus", "cristo", "igreja", "fé", "bíblia", "oração",
        "religião", "cristão", "católico", "evangélico", "espírito", "santo",
        "pecado", "salvação", "céu",
    ]),
    ("Sociedade", &[
        "sociedade", "social", "comunidade", "povo", "população", "cidadão",
        "cidadãos", "direito", "direitos", "dever", "deveres", "lei", "leis",
        "ordem", "segurança", "violência", "crime",
    ]),
    ("Cultura", &[
        "cultura", "cultural", "arte", "artista", "música", "teatro", "cinema",
        "literatura", "tradição", "história", "histórico", "patrimônio",
    ]),
    ("Meio Ambiente", &[
        "ambiente", "ambiental", "natureza", "ecologia", "floresta", "água",
        "poluição", "sustentável", "preservação", "animais", "plantas",
    ]),
    ("Saúde", &[
        "saúde", "hospital", "médico", "doença", "remédio", "tratamento",
        "paciente", "sus", "medicina", "cura", "prevenção",
    ]),
    ("Trabalho", &[
        "trabalho", "trabalhador", "emprego", "profissão", "carreira",
        "empresa", "negócio", "patrão", "funcionário", "salário",
    ]),
];

lazy_static::lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"\b([0-9]{1,2})[/\-.]([0-9]{1,2})[/\-.]([0-9]{4})\b").unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"\b([0-9]{4})\b").unwrap();
}

/// 件名を分類（表の順序で返す）
pub fn classify_subjects(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let subjects: Vec<String> = SUBJECT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(subject, _)| subject.to_string())
        .collect();

    if subjects.is_empty() {
        vec![FALLBACK_SUBJECT.to_string()]
    } else {
        subjects
    }
}

/// 巻ごとの年の範囲（両端含む）
pub fn year_window(volume: u32) -> (i32, i32) {
    if volume == 1 {
        (1958, 2008)
    } else {
        (2009, 2025)
    }
}

/// 本文から年を推定
pub fn extract_year(text: &str, volume: u32) -> Option<i32> {
    let (min, max) = year_window(volume);
    let in_window = |y: &i32| (min..=max).contains(y);

    DATE_RE
        .captures_iter(text)
        .filter_map(|c| c[3].parse::<i32>().ok())
        .find(in_window)
        .or_else(|| {
            YEAR_RE
                .captures_iter(text)
                .filter_map(|c| c[1].parse::<i32>().ok())
                .find(in_window)
        })
}

/// 本文から掲載日を推定（dd/mm/yyyy に正規化）
pub fn extract_date(text: &str) -> Option<String> {
    let caps = DATE_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    Some(format!("{:02}/{:02}/{}", day, month, &caps[3]))
}

/// classify の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOutcome {
    pub subjects_set: bool,
    pub year_set: bool,
    pub date_set: bool,
}

impl ClassifyOutcome {
    pub fn changed(&self) -> bool {
        self.subjects_set || self.year_set || self.date_set
    }
}

/// レコードのメタデータを本文から補完
///
/// `overwrite` が false なら既に値のある項目は変更しない。
/// 本文のないレコードは何もしない。
pub fn enrich_record(record: &mut LetterRecord, overwrite: bool) -> ClassifyOutcome {
    let mut outcome = ClassifyOutcome::default();
    let Some(text) = record.ocr_text.as_deref().filter(|t| !t.trim().is_empty()) else {
        return outcome;
    };

    let subjects = classify_subjects(text);
    let year = extract_year(text, record.volume);
    let date = extract_date(text);

    if (overwrite || record.subjects.is_empty()) && record.subjects != subjects {
        record.subjects = subjects;
        outcome.subjects_set = true;
    }
    if (overwrite || record.year.is_none()) && year.is_some() && record.year != year {
        record.year = year;
        outcome.year_set = true;
    }
    if (overwrite || record.publication_date.is_none()) && date.is_some() && record.publication_date != date {
        record.publication_date = date;
        outcome.date_set = true;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_subjects() {
        let subjects = classify_subjects("O GOVERNO e a inflação no Brasil");
        assert_eq!(subjects, vec!["Brasil", "Política", "Economia"]);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify_subjects("xyz"), vec![FALLBACK_SUBJECT]);
        assert_eq!(classify_subjects(""), vec![FALLBACK_SUBJECT]);
    }

    #[test]
    fn test_classify_substring_match() {
        // "paisagem" に "pai" が含まれるため家族に分類される
        assert_eq!(classify_subjects("uma paisagem bonita"), vec!["Família"]);
        // "país" は "pai" を含まない（í と i は別の文字）
        assert_eq!(classify_subjects("meu país"), vec!["Brasil"]);
    }

    #[test]
    fn test_extract_year_from_date_first() {
        let text = "Em 1999 escrevi... Rio, 12/03/1962";
        assert_eq!(extract_year(text, 1), Some(1962));
    }

    #[test]
    fn test_extract_year_window_by_volume() {
        let text = "Ano 1975 e depois 2015";
        assert_eq!(extract_year(text, 1), Some(1975));
        assert_eq!(extract_year(text, 2), Some(2015));
        assert_eq!(extract_year("3000 e 1200", 1), None);
    }

    #[test]
    fn test_extract_date() {
        assert_eq!(extract_date("Rio, 5-3-1962."), Some("05/03/1962".to_string()));
        assert_eq!(extract_date("Rio, 12.11.2010"), Some("12/11/2010".to_string()));
        assert_eq!(extract_date("sem data"), None);
    }

    #[test]
    fn test_enrich_record_fills_missing() {
        let mut record = LetterRecord {
            id: "a".into(),
            volume: 1,
            page: 1,
            ocr_text: Some("Escola, 01/02/1970".into()),
            ..Default::default()
        };
        let outcome = enrich_record(&mut record, false);
        assert!(outcome.changed());
        assert_eq!(record.subjects, vec!["Educação"]);
        assert_eq!(record.year, Some(1970));
        assert_eq!(record.publication_date.as_deref(), Some("01/02/1970"));
    }

    #[test]
    fn test_enrich_record_keeps_existing() {
        let mut record = LetterRecord {
            id: "a".into(),
            volume: 1,
            page: 1,
            year: Some(1960),
            subjects: vec!["Cultura".into()],
            ocr_text: Some("Escola, 01/02/1970".into()),
            ..Default::default()
        };
        let outcome = enrich_record(&mut record, false);
        assert!(!outcome.subjects_set);
        assert!(!outcome.year_set);
        assert!(outcome.date_set);
        assert_eq!(record.year, Some(1960));

        let outcome = enrich_record(&mut record, true);
        assert!(outcome.year_set);
        assert_eq!(record.year, Some(1970));
    }

    #[test]
    fn test_enrich_record_without_text() {
        let mut record = LetterRecord::default();
        assert!(!enrich_record(&mut record, true).changed());
    }
}
