//! カタログ読み込み
//!
//! JSON文字列からレコードを取り出し、フィルタUIの選択肢
//! （年の範囲・件名一覧）を導出する。取得（HTTP/ファイル）は呼び出し側。

use crate::error::Result;
use crate::types::{CatalogDocument, LetterRecord};
use std::collections::BTreeSet;

/// data/cartas.json の既定パス
pub const DATA_PATH: &str = "data/cartas.json";

/// カタログJSONをパース
pub fn parse_catalog(json: &str) -> Result<Vec<LetterRecord>> {
    let doc: CatalogDocument = serde_json::from_str(json)?;
    Ok(doc.cartas)
}

/// カタログJSONを書き出し（整形済み）
pub fn to_catalog_json(records: &[LetterRecord]) -> Result<String> {
    #[derive(serde::Serialize)]
    struct Doc<'a> {
        cartas: &'a [LetterRecord],
    }
    Ok(serde_json::to_string_pretty(&Doc { cartas: records })?)
}

/// フィルタの選択肢
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// 最小年〜最大年の連続した範囲（年のあるレコードがなければ空）
    pub years: Vec<i32>,
    /// 件名（辞書順・重複なし）
    pub subjects: Vec<String>,
    /// 出現する巻
    pub volumes: Vec<u32>,
}

impl FilterOptions {
    pub fn from_records(records: &[LetterRecord]) -> Self {
        // 0 は「年なし」と同じ扱い
        let years: BTreeSet<i32> = records
            .iter()
            .filter_map(|r| r.year)
            .filter(|&y| y != 0)
            .collect();

        let years = match (years.first(), years.last()) {
            (Some(&min), Some(&max)) => (min..=max).collect(),
            _ => Vec::new(),
        };

        let subjects: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.subjects.iter().map(String::as_str))
            .collect();

        let volumes: BTreeSet<u32> = records.iter().map(|r| r.volume).collect();

        Self {
            years,
            subjects: subjects.into_iter().map(str::to_string).collect(),
            volumes: volumes.into_iter().collect(),
        }
    }

    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }
}
