use portfolio_common::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フィクスチャの読み込みに失敗: {0}")]
    Fixture(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
