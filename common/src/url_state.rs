//! URLクエリとフィルタ状態の相互変換
//!
//! 読み込み時に `volume` / `ano` / `assunto` / `busca` から初期状態を作る。
//! 「フィルタ解除」ではクエリを外したパスに置き換える。

use crate::filter::{parse_leading_int, FilterState, VolumeFilter};
use url::form_urlencoded;

pub const PARAM_VOLUME: &str = "volume";
pub const PARAM_YEAR: &str = "ano";
pub const PARAM_SUBJECT: &str = "assunto";
pub const PARAM_SEARCH: &str = "busca";

/// クエリから復元した初期状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSeed {
    pub filters: FilterState,
    /// 検索欄に戻す元の文字列（大文字小文字そのまま）
    pub search_input: Option<String>,
}

/// クエリ文字列をパース（先頭の `?` は任意）
///
/// 同じキーが複数ある場合は最初の値を使う。
pub fn parse_query(query: &str) -> UrlSeed {
    let query = query.strip_prefix('?').unwrap_or(query);
    let get = |key: &str| -> Option<String> {
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    };

    let mut seed = UrlSeed::default();

    if let Some(volume) = get(PARAM_VOLUME) {
        seed.filters.volume = VolumeFilter::from_value(&volume);
    }

    // 単年指定: 開始年=終了年。読めない値や0は指定なし
    if let Some(year) = get(PARAM_YEAR) {
        let year = parse_leading_int(&year)
            .and_then(|y| i32::try_from(y).ok())
            .filter(|&y| y != 0);
        seed.filters.year_start = year;
        seed.filters.year_end = year;
    }

    if let Some(subject) = get(PARAM_SUBJECT) {
        seed.filters.subjects.insert(subject);
    }

    if let Some(search) = get(PARAM_SEARCH) {
        seed.filters.search_text = search.to_lowercase();
        seed.search_input = Some(search);
    }

    seed
}

/// フィルタ状態をクエリ文字列に変換（`?` なし）
///
/// URLで表せるのは巻・単年・単一件名・検索語のみ。
/// 年の範囲や複数件名は出力しない。
pub fn to_query(filters: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !filters.volume.is_all() {
        serializer.append_pair(PARAM_VOLUME, &filters.volume.as_value());
    }

    if let (Some(start), Some(end)) = (filters.year_start, filters.year_end) {
        if start == end {
            serializer.append_pair(PARAM_YEAR, &start.to_string());
        }
    }

    if filters.subjects.len() == 1 {
        if let Some(subject) = filters.subjects.iter().next() {
            serializer.append_pair(PARAM_SUBJECT, subject);
        }
    }

    if !filters.search_text.is_empty() {
        serializer.append_pair(PARAM_SEARCH, &filters.search_text);
    }

    serializer.finish()
}

/// 共有用URL（パス＋クエリ）
pub fn shareable_url(path: &str, filters: &FilterState) -> String {
    let base = clear_location(path);
    let query = to_query(filters);
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, query)
    }
}

/// クエリとフラグメントを除いたパス
pub fn clear_location(path: &str) -> &str {
    path.split(&['?', '#'][..]).next().unwrap_or(path)
}
