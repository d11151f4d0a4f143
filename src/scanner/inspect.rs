//! 画像1枚ごとの検査（サイズ・解像度・ハッシュ）

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::Path;

/// 検査結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// ファイルサイズが小さすぎる（アイコン等）
    TooSmall { bytes: u64 },
    /// 解像度が低すぎる
    LowResolution { width: u32, height: u32 },
    /// 採用候補（重複判定は呼び出し側）
    Candidate { bytes: u64, hash: String },
}

/// ファイル内容のSHA-256（16進）
pub fn file_hash(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("読み込み失敗: {}", path.display()))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// 1枚を検査（サイズ→解像度→ハッシュの順、早い段階で落ちたものは読み込まない）
pub fn inspect_image(path: &Path, min_file_size: u64, min_dimension: u32) -> Result<Inspection> {
    let bytes = std::fs::metadata(path)
        .with_context(|| format!("メタデータ取得失敗: {}", path.display()))?
        .len();
    if bytes < min_file_size {
        return Ok(Inspection::TooSmall { bytes });
    }

    let (width, height) = image::image_dimensions(path)
        .with_context(|| format!("画像として読めません: {}", path.display()))?;
    if width < min_dimension || height < min_dimension {
        return Ok(Inspection::LowResolution { width, height });
    }

    let hash = file_hash(path)?;
    Ok(Inspection::Candidate { bytes, hash })
}
