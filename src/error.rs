use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フォルダではありません: {0}")]
    NotADirectory(String),

    #[error("スキャンエラー: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("出力エラー: {0}")]
    Export(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] spell_catalog_common::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
