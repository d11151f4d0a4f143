//! カタログファイル（data/cartas.json）の読み書き

use crate::error::{CartasError, Result};
use cartas_common::{parse_catalog, to_catalog_json, LetterRecord};
use std::path::Path;

/// カタログを読み込み
pub fn load_catalog(path: &Path) -> Result<Vec<LetterRecord>> {
    if !path.exists() {
        return Err(CartasError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records = parse_catalog(&content)?;
    log::debug!("{}件を読み込み: {}", records.len(), path.display());
    Ok(records)
}

/// カタログを保存（親フォルダがなければ作成）
pub fn save_catalog(path: &Path, records: &[LetterRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let json = to_catalog_json(records)?;
    std::fs::write(path, json)?;
    log::debug!("{}件を保存: {}", records.len(), path.display());
    Ok(())
}
