//! カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - LetterRecord: 1通の手紙（スキャン画像1枚）
//! - CatalogDocument: data/cartas.json のトップレベル

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// 手紙レコード
///
/// JSONのキーはサイトのデータ形式（ポルトガル語）に合わせる。
/// 読み込み後は変更しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,

    /// 画像URL（サイトルートからの相対パス）
    #[serde(rename = "imagem", default, deserialize_with = "lenient")]
    pub image_url: String,

    pub volume: u32,

    /// 書籍上のページ番号（ページネーションのページとは別物）
    #[serde(rename = "pagina")]
    pub page: u32,

    #[serde(rename = "ano", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(
        rename = "data_publicacao",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub publication_date: Option<String>,

    /// 表示順は保持、フィルタ時は集合として扱う
    #[serde(rename = "assuntos", default, deserialize_with = "lenient")]
    pub subjects: Vec<String>,

    #[serde(rename = "texto", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
}

impl LetterRecord {
    /// OCRテキスト（未設定は空文字）
    pub fn text(&self) -> &str {
        self.ocr_text.as_deref().unwrap_or("")
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

/// data/cartas.json
///
/// 巻・ページのないレコードは読み飛ばす（文書全体は失敗させない）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, deserialize_with = "skip_malformed")]
    pub cartas: Vec<LetterRecord>,
}

/// 型が合えばその値、合わなければ捨てる
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// `null` や型違いの値を既定値として扱う
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Valid(value)) => Ok(value),
        _ => Ok(T::default()),
    }
}

fn skip_malformed<'de, D>(deserializer: D) -> Result<Vec<LetterRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Lenient<LetterRecord>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match entry {
            Lenient::Valid(record) => Some(record),
            Lenient::Invalid(_) => {
                log::warn!("cartas[{}]: volume/pagina が読めないため除外", i);
                None
            }
        })
        .collect())
}
