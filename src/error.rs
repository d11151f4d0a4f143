use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartasError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("カタログエラー: {0}")]
    Catalog(#[from] cartas_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("手紙が見つかりません: {0}")]
    LetterNotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, CartasError>;
