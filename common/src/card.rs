//! カード表示・詳細表示の内容
//!
//! 描画先（DOM/端末）に依存しない表示用の値を作る。

use crate::modal::Modal;
use crate::types::LetterRecord;

/// グリッドに表示する件名の最大数
pub const CARD_SUBJECTS: usize = 2;

pub const UNKNOWN_YEAR: &str = "Desconhecido";
pub const UNKNOWN_DATE: &str = "Desconhecida";
pub const NO_TEXT: &str = "Texto não disponível";

/// 一覧カード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub id: String,
    pub image_url: String,
    pub image_alt: String,
    pub volume: u32,
    pub volume_badge: String,
    /// 年、不明なら "?"
    pub year: String,
    pub page_label: String,
    pub subjects: Vec<String>,
    /// 絞り込み結果上の位置（クリックでモーダルを開く）
    pub index: usize,
}

impl CardSummary {
    pub fn from_record(record: &LetterRecord, index: usize) -> Self {
        Self {
            id: record.id.clone(),
            image_url: record.image_url.clone(),
            image_alt: format!("Carta {}", record.id),
            volume: record.volume,
            volume_badge: format!("Vol. {}", record.volume),
            year: record
                .year
                .filter(|&y| y != 0)
                .map(|y| y.to_string())
                .unwrap_or_else(|| "?".to_string()),
            page_label: format!("Página {}", record.page),
            subjects: record.subjects.iter().take(CARD_SUBJECTS).cloned().collect(),
            index,
        }
    }

    /// 巻ごとの色分け用クラス
    pub fn volume_class(&self) -> String {
        format!("carta-volume vol{}", self.volume)
    }
}

/// モーダルの詳細表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterDetail {
    pub image_url: String,
    pub volume: String,
    pub page: String,
    pub year: String,
    pub publication_date: String,
    pub subjects: Vec<String>,
    pub text: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl LetterDetail {
    /// `modal` は開いている位置、`len` は絞り込み結果の総数
    pub fn from_record(record: &LetterRecord, modal: Modal, len: usize) -> Self {
        Self {
            image_url: record.image_url.clone(),
            volume: format!("Volume {}", record.volume),
            page: record.page.to_string(),
            year: record
                .year
                .filter(|&y| y != 0)
                .map(|y| y.to_string())
                .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
            publication_date: record
                .publication_date
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            subjects: record.subjects.clone(),
            text: record
                .ocr_text
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TEXT.to_string()),
            prev_disabled: !modal.can_prev(),
            next_disabled: !modal.can_next(len),
        }
    }
}
