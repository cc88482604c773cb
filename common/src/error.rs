//! エラー型定義

use thiserror::Error;

/// 設定未完了時のメッセージ（画面にそのまま表示される）
pub const NOT_CONFIGURED_MESSAGE: &str = "Database not configured";

/// データ取得エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// 接続先URLまたはキーが未設定
    #[error("Database not configured")]
    NotConfigured,

    /// リモート側のエラー。メッセージは加工せずに通す
    #[error("{0}")]
    Remote(String),

    /// 行データのデコード失敗
    #[error("Invalid project data: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Decode(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_message() {
        let error = QueryError::NotConfigured;
        assert_eq!(error.to_string(), NOT_CONFIGURED_MESSAGE);
    }

    #[test]
    fn test_remote_message_passthrough() {
        let error = QueryError::Remote("permission denied for table projects".to_string());
        assert_eq!(format!("{}", error), "permission denied for table projects");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: QueryError = json_error.into();
        assert!(matches!(error, QueryError::Decode(_)));
    }
}
