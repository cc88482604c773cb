//! エラーケーステスト

use portfolio_common::QueryError;
use portfolio_site::config::Config;
use portfolio_site::error::PortfolioError;
use tempfile::tempdir;

/// 壊れた設定ファイル
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(PortfolioError::JsonParse(_))));
}

/// PortfolioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::Config("テスト設定エラー".to_string()),
        PortfolioError::Fixture("rows.json".to_string()),
        PortfolioError::ProjectNotFound("p-9".to_string()),
        PortfolioError::Query(QueryError::NotConfigured),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 取得エラーのメッセージは加工しない
#[test]
fn test_query_error_passthrough() {
    let err: PortfolioError = QueryError::NotConfigured.into();
    assert_eq!(err.to_string(), "Database not configured");

    let err: PortfolioError = QueryError::Remote("permission denied".to_string()).into();
    assert_eq!(err.to_string(), "permission denied");
}

#[test]
fn test_not_found_display() {
    let err = PortfolioError::ProjectNotFound("missing-id".to_string());
    assert_eq!(err.to_string(), "Project not found: missing-id");
}
