//! OCR問題レポート（Excel）
//!
//! 修正が必要な手紙を一覧にし、E列に修正後の本文を書き込んでもらう。
//! 書き戻しは CLI の apply-corrections が行う。

use crate::ocr_quality::FlaggedLetter;
use rust_xlsxwriter::*;

pub const SHEET_NAME: &str = "OCR Problems";

/// 列見出し（A〜E）
pub const HEADERS: [&str; 5] = [
    "Link da Carta",
    "ID",
    "Pagina",
    "Texto com Problema (OCR)",
    "Texto Corrigido (preencher)",
];

/// ID列
pub const COL_ID: u16 = 1;
/// 修正本文の列
pub const COL_CORRECTED: u16 = 4;

const COLUMN_WIDTHS: [f64; 5] = [50.0, 20.0, 10.0, 80.0, 80.0];
const MAX_TEXT_CHARS: usize = 2000;
const EMPTY_TEXT: &str = "(vazio)";

/// サイト上の手紙へのリンク
pub fn letter_link(base_url: &str, id: &str) -> String {
    format!("{}#{}", base_url, id)
}

/// レポートをバッファに生成
///
/// # Arguments
/// * `flagged` - 問題のある手紙（カタログ順）
/// * `base_url` - 手紙ページのURL（`#id` を付けてリンクにする）
pub fn generate_ocr_report_buffer(flagged: &[FlaggedLetter<'_>], base_url: &str) -> Result<Vec<u8>, String> {
    build_workbook(flagged, base_url)
        .and_then(|mut workbook| workbook.save_to_buffer())
        .map_err(|e| format!("Excel生成エラー: {}", e))
}

fn build_workbook(flagged: &[FlaggedLetter<'_>], base_url: &str) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    let wrap = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
        worksheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
    }

    for (i, item) in flagged.iter().enumerate() {
        let row = (i + 1) as u32;
        let record = item.record;

        worksheet.write_url(row, 0, letter_link(base_url, &record.id).as_str())?;
        worksheet.write_string(row, COL_ID, &record.id)?;
        worksheet.write_number(row, 2, record.page)?;

        let text = record.text();
        let text: String = if text.is_empty() {
            EMPTY_TEXT.to_string()
        } else {
            text.chars().take(MAX_TEXT_CHARS).collect()
        };
        worksheet.write_string_with_format(row, 3, &text, &wrap)?;
        worksheet.write_blank(row, COL_CORRECTED, &wrap)?;
    }

    Ok(workbook)
}
