//! RESTストアのテスト
//!
//! mockitoでPostgRESTのエンドポイントを立てて検証

use mockito::Matcher;
use portfolio_common::{CategoryFilter, Portfolio, QueryError};
use portfolio_site::config::Endpoint;
use portfolio_site::store::RestStore;

const ROWS: &str = r#"[
  {"id": "b1", "title": "Mar Azul", "category": "branding", "image_url": "/c/1.jpg",
   "order_index": 1, "images": "[\"/g/1.jpg\",\"/g/2.jpg\"]", "year": 2024},
  {"id": "m1", "title": "Loop", "category": "motion", "image_url": "/c/2.jpg",
   "order_index": 2, "images": ["/g/3.jpg", 4], "year": "2023"}
]"#;

fn portfolio(url: String) -> Portfolio<RestStore> {
    let endpoint = Endpoint {
        url,
        anon_key: "test-anon-key".to_string(),
    };
    Portfolio::new(RestStore::new(endpoint).expect("クライアント生成失敗"))
}

/// 全件取得とimages正規化
#[tokio::test]
async fn test_list_all_projects() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "*".into()),
            Matcher::UrlEncoded("order".into(), "order_index.asc".into()),
        ]))
        .match_header("apikey", "test-anon-key")
        .match_header("authorization", "Bearer test-anon-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ROWS)
        .create_async()
        .await;

    let projects = portfolio(server.url())
        .list_projects(&CategoryFilter::All)
        .await
        .expect("取得失敗");

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "b1");
    assert_eq!(
        projects[0].images,
        Some(vec!["/g/1.jpg".to_string(), "/g/2.jpg".to_string()])
    );
    assert_eq!(projects[1].images, Some(vec!["/g/3.jpg".to_string()]));
}

/// 複数カテゴリは順序に関係なく同じクエリになる
#[tokio::test]
async fn test_list_filter_in_sorted() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/projects")
        .match_query(Matcher::UrlEncoded(
            "category".into(),
            r#"in.("motion","photography")"#.into(),
        ))
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let portfolio = portfolio(server.url());
    let a = portfolio
        .list_projects(&CategoryFilter::any(["photography", "motion"]))
        .await
        .unwrap();
    let b = portfolio
        .list_projects(&CategoryFilter::any(["motion", "photography"]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(a.is_empty());
    assert_eq!(a, b);
}

/// 単一カテゴリ
#[tokio::test]
async fn test_list_single_category() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/projects")
        .match_query(Matcher::UrlEncoded("category".into(), "eq.photography".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    portfolio(server.url())
        .list_projects(&CategoryFilter::one("photography"))
        .await
        .unwrap();
    mock.assert_async().await;
}

/// null列は空扱い、読めない行だけ飛ばす
#[tokio::test]
async fn test_list_tolerates_null_columns() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[
              {"id": "a1", "title": "Draft", "category": "uiux", "image_url": null, "order_index": 1},
              {"id": null, "title": "Broken", "category": "uiux"},
              {"id": "a2", "title": null, "category": "motion", "image_url": "/c/a2.jpg", "order_index": 2}
            ]"#,
        )
        .create_async()
        .await;

    let projects = portfolio(server.url())
        .list_projects(&CategoryFilter::All)
        .await
        .expect("取得失敗");

    mock.assert_async().await;
    let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
    assert_eq!(projects[0].image_url, "");
    assert_eq!(projects[1].title, "");
}

/// ID指定で見つからない場合はエラーではない
#[tokio::test]
async fn test_project_by_id_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("id".into(), "eq.missing-id".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let result = portfolio(server.url()).project_by_id(Some("missing-id")).await;
    mock.assert_async().await;
    assert_eq!(result, Ok(None));
}

/// ID未指定は通信しない
#[tokio::test]
async fn test_project_by_id_none_skips_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = portfolio(server.url()).project_by_id(None).await;
    mock.assert_async().await;
    assert_eq!(result, Ok(None));
}

/// エラーレスポンスのメッセージをそのまま返す
#[tokio::test]
async fn test_remote_error_message_passthrough() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/projects")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message":"Invalid API key","hint":"Double check your Supabase anon key."}"#)
        .create_async()
        .await;

    let err = portfolio(server.url())
        .list_projects(&CategoryFilter::All)
        .await
        .unwrap_err();
    assert_eq!(err, QueryError::Remote("Invalid API key".to_string()));
}

/// 接続できない場合もエラー文字列になる
#[tokio::test]
async fn test_unreachable_store() {
    let err = portfolio("http://127.0.0.1:9".to_string())
        .project_by_id(Some("b1"))
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::Remote(_)));
}
