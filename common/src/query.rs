//! クエリ記述とデータソース
//!
//! `projects` コレクションへの問い合わせを記述し、
//! PostgREST形式のクエリパラメータに変換する。

use crate::error::{QueryError, Result};
use crate::filter::CategoryConstraint;
use crate::project::ProjectRow;

/// プロジェクトのコレクション名
pub const PROJECTS_TABLE: &str = "projects";

/// 1回分の問い合わせ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub category: CategoryConstraint,
    pub id: Option<String>,
    pub limit: Option<usize>,
}

impl ProjectQuery {
    /// 一覧取得（order_index 昇順）
    pub fn list(category: CategoryConstraint) -> Self {
        Self {
            category,
            id: None,
            limit: None,
        }
    }

    /// ID指定の1件取得
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            category: CategoryConstraint::All,
            id: Some(id.into()),
            limit: Some(1),
        }
    }

    /// PostgRESTのクエリパラメータ
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("select".to_string(), "*".to_string()),
            ("order".to_string(), "order_index.asc".to_string()),
        ];

        match &self.category {
            CategoryConstraint::All => {}
            CategoryConstraint::Eq(token) => {
                params.push(("category".to_string(), format!("eq.{}", token)));
            }
            CategoryConstraint::In(tokens) => {
                let quoted: Vec<String> = tokens.iter().map(|t| quote_value(t)).collect();
                params.push(("category".to_string(), format!("in.({})", quoted.join(","))));
            }
        }

        if let Some(id) = &self.id {
            params.push(("id".to_string(), format!("eq.{}", id)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }

    /// 行が条件に合うか（インメモリ実装用）
    pub fn matches(&self, row: &ProjectRow) -> bool {
        let category_ok = match &self.category {
            CategoryConstraint::All => true,
            CategoryConstraint::Eq(token) => row.category.token() == token,
            CategoryConstraint::In(tokens) => tokens.iter().any(|t| t == row.category.token()),
        };
        let id_ok = self.id.as_deref().map_or(true, |id| row.id == id);
        category_ok && id_ok
    }
}

/// `in.()` の要素をダブルクォートで囲む
///
/// `,` や括弧を含むトークンでも1要素として扱われる。
fn quote_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// エラーレスポンスからメッセージを取り出す
///
/// PostgRESTは `{"message": ...}` を返す。取れなければステータスを使う。
pub fn remote_error_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// リモートのデータストア
///
/// 並行制御はソース側の責務。呼び出し側はロックしない。
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    async fn fetch_rows(&self, query: &ProjectQuery) -> Result<Vec<ProjectRow>>;
}

impl<S: ProjectSource + ?Sized> ProjectSource for &S {
    async fn fetch_rows(&self, query: &ProjectQuery) -> Result<Vec<ProjectRow>> {
        (**self).fetch_rows(query).await
    }
}

impl<S: ProjectSource + ?Sized> ProjectSource for std::rc::Rc<S> {
    async fn fetch_rows(&self, query: &ProjectQuery) -> Result<Vec<ProjectRow>> {
        (**self).fetch_rows(query).await
    }
}

impl<S: ProjectSource + ?Sized> ProjectSource for std::sync::Arc<S> {
    async fn fetch_rows(&self, query: &ProjectQuery) -> Result<Vec<ProjectRow>> {
        (**self).fetch_rows(query).await
    }
}

/// インメモリのストア
///
/// order_index の null は末尾、同値は挿入順を保つ（PostgRESTの昇順と同じ）。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<ProjectRow>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new(rows: Vec<ProjectRow>) -> Self {
        Self { rows, failure: None }
    }

    /// JSON配列から生成
    pub fn from_json(json: &str) -> Result<Self> {
        let rows = ProjectRow::decode_rows(json)?;
        Ok(Self::new(rows))
    }

    /// 常に失敗するストア
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 同期版の問い合わせ
    pub fn query(&self, query: &ProjectQuery) -> Result<Vec<ProjectRow>> {
        if let Some(message) = &self.failure {
            return Err(QueryError::Remote(message.clone()));
        }

        let mut rows: Vec<ProjectRow> = self
            .rows
            .iter()
            .filter(|row| query.matches(row))
            .cloned()
            .collect();
        rows.sort_by_key(|row| (row.order_index.is_none(), row.order_index));

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }
}

impl ProjectSource for MemoryStore {
    async fn fetch_rows(&self, query: &ProjectQuery) -> Result<Vec<ProjectRow>> {
        self.query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &str = r#"[
        {"id": "c", "title": "C", "category": "photography", "order_index": 3},
        {"id": "n", "title": "N", "category": "uiux"},
        {"id": "a", "title": "A", "category": "branding", "order_index": 1},
        {"id": "b", "title": "B", "category": "motion", "order_index": 2}
    ]"#;

    fn ids(rows: &[ProjectRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_list_params() {
        let query = ProjectQuery::list(CategoryConstraint::All);
        assert_eq!(
            query.to_params(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("order".to_string(), "order_index.asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_category_params() {
        let eq = ProjectQuery::list(CategoryConstraint::Eq("motion".to_string()));
        assert!(eq
            .to_params()
            .contains(&("category".to_string(), "eq.motion".to_string())));

        let any = ProjectQuery::list(CategoryConstraint::In(vec![
            "motion".to_string(),
            "photography".to_string(),
        ]));
        assert!(any
            .to_params()
            .contains(&("category".to_string(), r#"in.("motion","photography")"#.to_string())));
    }

    #[test]
    fn test_in_values_are_quoted() {
        let query = ProjectQuery::list(CategoryConstraint::In(vec![
            "a,b".to_string(),
            "c)".to_string(),
            r#"say "hi""#.to_string(),
        ]));
        assert!(query.to_params().contains(&(
            "category".to_string(),
            r#"in.("a,b","c)","say \"hi\"")"#.to_string()
        )));
    }

    #[test]
    fn test_by_id_params() {
        let params = ProjectQuery::by_id("p-1").to_params();
        assert!(params.contains(&("id".to_string(), "eq.p-1".to_string())));
        assert!(params.contains(&("limit".to_string(), "1".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "category"));
    }

    #[test]
    fn test_memory_store_orders_by_index_nulls_last() {
        let store = MemoryStore::from_json(ROWS).unwrap();
        let rows = store.query(&ProjectQuery::list(CategoryConstraint::All)).unwrap();
        assert_eq!(ids(&rows), vec!["a", "b", "c", "n"]);
    }

    #[test]
    fn test_memory_store_filters() {
        let store = MemoryStore::from_json(ROWS).unwrap();
        let rows = store
            .query(&ProjectQuery::list(CategoryConstraint::In(vec![
                "motion".to_string(),
                "photography".to_string(),
            ])))
            .unwrap();
        assert_eq!(ids(&rows), vec!["b", "c"]);

        let rows = store.query(&ProjectQuery::by_id("n")).unwrap();
        assert_eq!(ids(&rows), vec!["n"]);

        let rows = store.query(&ProjectQuery::by_id("missing")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_remote_error_message() {
        assert_eq!(
            remote_error_message(401, r#"{"message":"Invalid API key","hint":null}"#),
            "Invalid API key"
        );
        assert_eq!(remote_error_message(502, "<html>Bad Gateway</html>"), "HTTP 502");
        assert_eq!(remote_error_message(500, r#"{"message":""}"#), "HTTP 500");
    }

    #[test]
    fn test_failing_store() {
        let store = MemoryStore::failing("relation \"projects\" does not exist");
        let err = store
            .query(&ProjectQuery::list(CategoryConstraint::All))
            .unwrap_err();
        assert_eq!(err.to_string(), "relation \"projects\" does not exist");
    }
}
