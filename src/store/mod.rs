//! データストア
//!
//! - RestStore: PostgREST（Supabase）へのHTTPアクセス
//! - フィクスチャ: ローカルJSONファイルをインメモリで提供

pub mod fixture;
pub mod rest;

pub use fixture::load_fixture;
pub use rest::RestStore;

use crate::config::Config;
use crate::error::Result;
use portfolio_common::{MemoryStore, Portfolio, ProjectQuery, ProjectRow, ProjectSource};
use std::path::Path;
use tracing::{info, warn};

/// CLIが使うストア
#[derive(Debug)]
pub enum Store {
    Rest(RestStore),
    Fixture(MemoryStore),
}

impl ProjectSource for Store {
    async fn fetch_rows(&self, query: &ProjectQuery) -> portfolio_common::Result<Vec<ProjectRow>> {
        match self {
            Store::Rest(store) => store.fetch_rows(query).await,
            Store::Fixture(store) => store.fetch_rows(query).await,
        }
    }
}

/// 設定からデータアクセス層を組み立てる
///
/// フィクスチャ指定があればそれを優先。接続先が無ければ未設定のまま返し、
/// 各操作は通信せずに `Database not configured` になる。
pub fn open_portfolio(config: &Config, fixture: Option<&Path>) -> Result<Portfolio<Store>> {
    if let Some(path) = fixture {
        let store = load_fixture(path)?;
        info!(path = %path.display(), rows = store.len(), "using fixture store");
        return Ok(Portfolio::new(Store::Fixture(store)));
    }

    match config.endpoint() {
        Some(endpoint) => {
            info!(url = %endpoint.url, "using remote store");
            Ok(Portfolio::new(Store::Rest(RestStore::new(endpoint)?)))
        }
        None => {
            warn!("[Supabase] Missing configuration. Set PORTFOLIO_SUPABASE_URL and PORTFOLIO_SUPABASE_ANON_KEY.");
            Ok(Portfolio::unconfigured())
        }
    }
}
