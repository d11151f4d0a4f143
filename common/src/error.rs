//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// カタログの取得・読み込みに失敗（再試行しない）
    #[error("Load error: {0}")]
    Load(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
