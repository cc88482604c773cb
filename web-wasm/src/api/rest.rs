//! PostgREST（Supabase）へのfetch
//!
//! 結果を捨てるかどうかは呼び出し側の世代チェックで決める。
//! ここでは通信を中断しない。

use portfolio_common::{
    remote_error_message, ProjectQuery, ProjectRow, ProjectSource, QueryError, PROJECTS_TABLE,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザのfetchを使うストア
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserStore {
    url: String,
    anon_key: String,
}

impl BrowserStore {
    /// URLとキーが両方そろっているときだけ生成
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|s| !s.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    fn request_url(&self, query: &ProjectQuery) -> String {
        let params: Vec<String> = query
            .to_params()
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    js_sys::encode_uri_component(k),
                    js_sys::encode_uri_component(v)
                )
            })
            .collect();
        format!("{}?{}", self.table_url(PROJECTS_TABLE), params.join("&"))
    }

    /// GETしてステータスと本文を返す
    async fn get(&self, url: &str) -> Result<(u16, String), JsValue> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)?;
        let headers = request.headers();
        headers.set("apikey", &self.anon_key)?;
        headers.set("Authorization", &format!("Bearer {}", self.anon_key))?;
        headers.set("Accept", "application/json")?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let text = JsFuture::from(resp.text()?).await?;
        Ok((resp.status(), text.as_string().unwrap_or_default()))
    }
}

/// JS例外からメッセージを取り出す
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Failed to fetch".to_string())
}

impl ProjectSource for BrowserStore {
    async fn fetch_rows(&self, query: &ProjectQuery) -> portfolio_common::Result<Vec<ProjectRow>> {
        let url = self.request_url(query);
        let (status, body) = self
            .get(&url)
            .await
            .map_err(|e| QueryError::Remote(js_error_message(&e)))?;

        if !(200..300).contains(&status) {
            return Err(QueryError::Remote(remote_error_message(status, &body)));
        }

        ProjectRow::decode_rows(&body)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use portfolio_common::CategoryFilter;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_request_url_encodes_params() {
        let store = BrowserStore::from_parts(Some("https://x.supabase.co"), Some("k")).unwrap();
        let query = ProjectQuery::list(CategoryFilter::any(["photography", "motion"]).resolve());
        assert_eq!(
            store.request_url(&query),
            "https://x.supabase.co/rest/v1/projects?select=*&order=order_index.asc&category=in.(%22motion%22%2C%22photography%22)"
        );
    }
}
