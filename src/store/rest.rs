//! PostgREST（Supabase）クライアント
//!
//! `projects` テーブルへのGETのみ。キャンセルは呼び出し側で結果を捨てるだけで、
//! 通信自体は中断しない。

use crate::config::Endpoint;
use crate::error::Result;
use portfolio_common::{
    remote_error_message, ProjectQuery, ProjectRow, ProjectSource, QueryError, PROJECTS_TABLE,
};
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    endpoint: Endpoint,
}

impl RestStore {
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

impl ProjectSource for RestStore {
    async fn fetch_rows(&self, query: &ProjectQuery) -> portfolio_common::Result<Vec<ProjectRow>> {
        let url = self.endpoint.table_url(PROJECTS_TABLE);
        let params = query.to_params();
        debug!(%url, ?params, "GET");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header("apikey", &self.endpoint.anon_key)
            .bearer_auth(&self.endpoint.anon_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| QueryError::Remote(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Remote(e.to_string()))?;

        if !status.is_success() {
            return Err(QueryError::Remote(remote_error_message(status.as_u16(), &body)));
        }

        ProjectRow::decode_rows(&body)
    }
}
