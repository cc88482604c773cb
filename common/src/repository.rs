//! ポートフォリオのデータアクセス層
//!
//! 一覧取得とID指定取得の2つだけ。キャッシュ・リトライは持たない。

use crate::error::{QueryError, Result};
use crate::filter::CategoryFilter;
use crate::project::Project;
use crate::query::{ProjectQuery, ProjectSource};
use tracing::{debug, error};

/// データアクセス層
///
/// ソースが `None` の場合は未設定扱いで、通信せずに
/// [`QueryError::NotConfigured`] を返す。
#[derive(Debug, Clone)]
pub struct Portfolio<S> {
    source: Option<S>,
}

impl<S: ProjectSource> Portfolio<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// 未設定のデータアクセス層
    pub fn unconfigured() -> Self {
        Self { source: None }
    }

    pub fn from_option(source: Option<S>) -> Self {
        Self { source }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    fn source(&self) -> Result<&S> {
        self.source.as_ref().ok_or(QueryError::NotConfigured)
    }

    /// プロジェクト一覧（ストアの order_index 昇順のまま）
    pub async fn list_projects(&self, filter: &CategoryFilter) -> Result<Vec<Project>> {
        let source = self.source()?;
        let query = ProjectQuery::list(filter.resolve());
        debug!(key = %filter.cache_key(), "fetching projects");

        let rows = source.fetch_rows(&query).await.map_err(|e| {
            error!("Error fetching projects: {}", e);
            e
        })?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// ID指定で1件取得
    ///
    /// - `id` が `None` → 通信せず `Ok(None)`（未選択）
    /// - 該当なし → `Ok(None)`（見つからないのはエラーではない）
    pub async fn project_by_id(&self, id: Option<&str>) -> Result<Option<Project>> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };
        let source = self.source()?;
        debug!(id, "fetching project");

        let rows = source.fetch_rows(&ProjectQuery::by_id(id)).await.map_err(|e| {
            error!("Error fetching project: {}", e);
            e
        })?;
        Ok(rows.into_iter().next().map(Project::from))
    }
}
