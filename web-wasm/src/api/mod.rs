//! データストアへのアクセス

pub mod rest;

pub use rest::BrowserStore;

use portfolio_common::Portfolio;

/// サイト全体で使うデータアクセス層
pub type SitePortfolio = Portfolio<BrowserStore>;

/// ビルド時の環境変数から接続先を組み立てる
///
/// どちらかが欠けていれば未設定のまま返す（各取得は `Database not configured`）。
pub fn portfolio() -> SitePortfolio {
    let url = option_env!("PORTFOLIO_SUPABASE_URL").or(option_env!("SUPABASE_URL"));
    let key = option_env!("PORTFOLIO_SUPABASE_ANON_KEY").or(option_env!("SUPABASE_ANON_KEY"));

    let store = BrowserStore::from_parts(url, key);
    if store.is_none() {
        web_sys::console::warn_1(
            &"[Supabase] Missing environment variables. Check PORTFOLIO_SUPABASE_URL and PORTFOLIO_SUPABASE_ANON_KEY."
                .into(),
        );
    }
    Portfolio::from_option(store)
}
