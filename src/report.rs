//! OCRレポートの書き出しと修正の取り込み

use crate::error::{CartasError, Result};
use cartas_common::export::ocr_report::{generate_ocr_report_buffer, COL_CORRECTED, COL_ID, SHEET_NAME};
use cartas_common::ocr_quality::{flag_letters, Correction};
use cartas_common::LetterRecord;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};

/// 既定の出力ファイル名（ocr_problems_YYYYMMDD.xlsx）
pub fn default_report_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y%m%d");
    PathBuf::from(format!("ocr_problems_{}.xlsx", date))
}

/// 問題のある手紙をxlsxに書き出し、件数を返す
pub fn write_ocr_report(records: &[LetterRecord], output: &Path, base_url: &str) -> Result<usize> {
    let flagged = flag_letters(records);
    for item in &flagged {
        log::debug!("{}: {}", item.record.id, item.problem);
    }

    let buffer = generate_ocr_report_buffer(&flagged, base_url).map_err(CartasError::ExcelGeneration)?;
    std::fs::write(output, buffer)?;
    Ok(flagged.len())
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// レポートから修正を読み込む（E列が空の行は除く）
pub fn read_corrections(path: &Path) -> Result<Vec<Correction>> {
    if !path.exists() {
        return Err(CartasError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| CartasError::ExcelRead(e.to_string()))?;
    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|e| CartasError::ExcelRead(format!("{}: {}", SHEET_NAME, e)))?;

    let corrections = range
        .rows()
        .skip(1)
        .filter_map(|row| {
            let id = cell_text(row.get(COL_ID as usize));
            let text = cell_text(row.get(COL_CORRECTED as usize));
            if id.is_empty() || text.is_empty() {
                None
            } else {
                Some(Correction { id, text })
            }
        })
        .collect();

    Ok(corrections)
}
