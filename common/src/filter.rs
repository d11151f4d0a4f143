//! フィルタエンジン
//!
//! 巻・年範囲・件名・本文検索の4条件をANDで組み合わせる。
//! 件名は選択されたもののいずれかを持てば通過（OR）。

use crate::types::LetterRecord;
use std::collections::BTreeSet;

/// 巻フィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VolumeFilter {
    /// すべて（フォーム値 "todos"）
    #[default]
    All,
    Volume(u32),
    /// 数値として読めない値。どのレコードにも一致しない
    Unknown(String),
}

impl VolumeFilter {
    pub const ALL_VALUE: &'static str = "todos";

    /// フォーム/URLの値から変換（parseInt 相当で先頭の数字を読む）
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            return VolumeFilter::All;
        }
        match parse_leading_int(value).and_then(|n| u32::try_from(n).ok()) {
            Some(n) => VolumeFilter::Volume(n),
            None => VolumeFilter::Unknown(value.to_string()),
        }
    }

    pub fn as_value(&self) -> String {
        match self {
            VolumeFilter::All => Self::ALL_VALUE.to_string(),
            VolumeFilter::Volume(n) => n.to_string(),
            VolumeFilter::Unknown(raw) => raw.clone(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, VolumeFilter::All)
    }
}

/// フィルタ状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub volume: VolumeFilter,
    /// 開始年（含む）。None は下限なし
    pub year_start: Option<i32>,
    /// 終了年（含む）。None は上限なし
    pub year_end: Option<i32>,
    /// 空なら件名で絞らない
    pub subjects: BTreeSet<String>,
    /// 小文字化済みの検索語。空なら絞らない
    pub search_text: String,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// 検索欄の入力を検索語に変換（前後の空白を除いて小文字化）
    pub fn normalize_search(input: &str) -> String {
        input.trim().to_lowercase()
    }

    fn has_year_bound(&self) -> bool {
        self.year_start.is_some() || self.year_end.is_some()
    }
}

/// レコードがすべての条件を満たすか
pub fn matches(record: &LetterRecord, filters: &FilterState) -> bool {
    match &filters.volume {
        VolumeFilter::All => {}
        VolumeFilter::Volume(v) => {
            if record.volume != *v {
                return false;
            }
        }
        VolumeFilter::Unknown(_) => return false,
    }

    // 年のないレコードは範囲指定があれば除外
    if filters.has_year_bound() {
        let Some(year) = record.year else {
            return false;
        };
        if filters.year_start.is_some_and(|start| year < start) {
            return false;
        }
        if filters.year_end.is_some_and(|end| year > end) {
            return false;
        }
    }

    if !filters.subjects.is_empty() && !filters.subjects.iter().any(|s| record.has_subject(s)) {
        return false;
    }

    if !filters.search_text.is_empty()
        && !record.text().to_lowercase().contains(&filters.search_text)
    {
        return false;
    }

    true
}

/// 条件に一致するレコードのインデックス（カタログ順）
pub fn filter_indices(catalog: &[LetterRecord], filters: &FilterState) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, filters))
        .map(|(i, _)| i)
        .collect()
}

/// JavaScript の parseInt と同じく、先頭の空白と符号の後の数字だけを読む
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, volume: u32, year: Option<i32>, subjects: &[&str], text: Option<&str>) -> LetterRecord {
        LetterRecord {
            id: id.to_string(),
            volume,
            page: 1,
            year,
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            ocr_text: text.map(str::to_string),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<LetterRecord> {
        vec![
            record("a", 1, Some(1961), &["Brasil"], Some("Caro Lee, saudações")),
            record("b", 1, Some(1962), &["Política", "Economia"], Some("Sobre o governo")),
            record("c", 2, Some(1963), &["Família"], None),
            record("d", 2, None, &[], Some("LEEDS")),
        ]
    }

    fn filter_records<'a>(catalog: &'a [LetterRecord], filters: &FilterState) -> Vec<&'a LetterRecord> {
        filter_indices(catalog, filters).into_iter().map(|i| &catalog[i]).collect()
    }

    fn ids(records: &[&LetterRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_default_filters_pass_everything() {
        let catalog = catalog();
        let result = filter_records(&catalog, &FilterState::default());
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_volume_filter() {
        let catalog = catalog();
        let filters = FilterState {
            volume: VolumeFilter::Volume(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&catalog, &filters)), vec!["c", "d"]);
    }

    #[test]
    fn test_unknown_volume_matches_nothing() {
        let catalog = catalog();
        let filters = FilterState {
            volume: VolumeFilter::from_value("abc"),
            ..Default::default()
        };
        assert!(filter_records(&catalog, &filters).is_empty());
    }

    #[test]
    fn test_year_range_inclusive() {
        let catalog = catalog();
        let filters = FilterState {
            year_start: Some(1962),
            year_end: Some(1963),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&catalog, &filters)), vec!["b", "c"]);
    }

    #[test]
    fn test_year_bound_requires_year() {
        let catalog = catalog();
        let only_end = FilterState {
            year_end: Some(2000),
            ..Default::default()
        };
        assert!(!ids(&filter_records(&catalog, &only_end)).contains(&"d".to_string()));

        let only_start = FilterState {
            year_start: Some(1900),
            ..Default::default()
        };
        assert_eq!(filter_records(&catalog, &only_start).len(), 3);
    }

    #[test]
    fn test_subjects_or_semantics() {
        let catalog = catalog();
        let filters = FilterState {
            subjects: ["Brasil", "Família"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&catalog, &filters)), vec!["a", "c"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = catalog();
        let filters = FilterState {
            search_text: FilterState::normalize_search("  Lee "),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&catalog, &filters)), vec!["a", "d"]);
    }

    #[test]
    fn test_search_absent_text_is_empty() {
        let catalog = catalog();
        let filters = FilterState {
            search_text: "governo".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&catalog, &filters)), vec!["b"]);
    }

    #[test]
    fn test_and_across_categories() {
        let catalog = catalog();
        let filters = FilterState {
            volume: VolumeFilter::Volume(1),
            search_text: "lee".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&catalog, &filters)), vec!["a"]);
    }

    #[test]
    fn test_filter_indices_subset_iff_matches() {
        let catalog = catalog();
        let filters = FilterState {
            year_start: Some(1962),
            subjects: ["Economia"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let indices = filter_indices(&catalog, &filters);
        for (i, r) in catalog.iter().enumerate() {
            assert_eq!(indices.contains(&i), matches(r, &filters));
        }
    }

    #[test]
    fn test_volume_filter_values() {
        assert_eq!(VolumeFilter::from_value("todos"), VolumeFilter::All);
        assert_eq!(VolumeFilter::from_value("2"), VolumeFilter::Volume(2));
        assert_eq!(VolumeFilter::from_value("2abc"), VolumeFilter::Volume(2));
        assert_eq!(
            VolumeFilter::from_value("-1"),
            VolumeFilter::Unknown("-1".to_string())
        );
        assert_eq!(VolumeFilter::Volume(1).as_value(), "1");
        assert_eq!(VolumeFilter::All.as_value(), "todos");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("1962"), Some(1962));
        assert_eq!(parse_leading_int(" 1962x"), Some(1962));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("x1962"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
