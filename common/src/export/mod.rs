//! エクスポート（共通ライブラリ）

#[cfg(feature = "excel")]
pub mod ocr_report;
