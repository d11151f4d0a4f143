//! 並び替え
//!
//! 安定ソートのため、同じキーのレコードはフィルタ結果の順序を保つ。

use crate::types::LetterRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// 巻→ページ（既定、フォーム値 "pagina"）
    #[default]
    #[serde(rename = "pagina")]
    Page,
    /// 巻→ページ
    #[serde(rename = "volume")]
    Volume,
    /// 年の昇順（年なしは0）
    #[serde(rename = "ano-asc")]
    YearAsc,
    /// 年の降順（年なしは0）
    #[serde(rename = "ano-desc")]
    YearDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [SortMode::Page, SortMode::Volume, SortMode::YearAsc, SortMode::YearDesc];

    pub fn as_value(&self) -> &'static str {
        match self {
            SortMode::Page => "pagina",
            SortMode::Volume => "volume",
            SortMode::YearAsc => "ano-asc",
            SortMode::YearDesc => "ano-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Page => "Página",
            SortMode::Volume => "Volume",
            SortMode::YearAsc => "Ano (mais antigo)",
            SortMode::YearDesc => "Ano (mais recente)",
        }
    }

    /// 不明な値は既定（ページ順）
    pub fn from_value(value: &str) -> Self {
        match value {
            "volume" => SortMode::Volume,
            "ano-asc" => SortMode::YearAsc,
            "ano-desc" => SortMode::YearDesc,
            _ => SortMode::Page,
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pagina" | "page" => Ok(SortMode::Page),
            "volume" => Ok(SortMode::Volume),
            "ano-asc" | "year-asc" => Ok(SortMode::YearAsc),
            "ano-desc" | "year-desc" => Ok(SortMode::YearDesc),
            _ => Err(format!("Unknown sort: {}. Use pagina, volume, ano-asc or ano-desc", s)),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_value())
    }
}

/// 2件を比較
pub fn compare(a: &LetterRecord, b: &LetterRecord, mode: SortMode) -> Ordering {
    match mode {
        SortMode::YearAsc => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
        SortMode::YearDesc => b.year.unwrap_or(0).cmp(&a.year.unwrap_or(0)),
        SortMode::Page | SortMode::Volume => (a.volume, a.page).cmp(&(b.volume, b.page)),
    }
}

/// カタログへのインデックス列を並び替え
pub fn sort_indices(catalog: &[LetterRecord], indices: &mut [usize], mode: SortMode) {
    indices.sort_by(|&a, &b| compare(&catalog[a], &catalog[b], mode));
}
