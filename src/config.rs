use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数名（優先順）
pub const URL_VARS: [&str; 2] = ["PORTFOLIO_SUPABASE_URL", "SUPABASE_URL"];
pub const KEY_VARS: [&str; 2] = ["PORTFOLIO_SUPABASE_ANON_KEY", "SUPABASE_ANON_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
}

/// 接続先（URLとキーが両方そろったもの）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub anon_key: String,
}

impl Endpoint {
    /// テーブルのRESTエンドポイント
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table)
    }
}

impl Config {
    /// 設定ファイルを読み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio").join("config.json"))
    }

    /// 環境変数を優先
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let first = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(*name).filter(|v| !v.trim().is_empty()))
        };

        if let Some(url) = first(&URL_VARS[..]) {
            self.supabase_url = Some(url);
        }
        if let Some(key) = first(&KEY_VARS[..]) {
            self.supabase_anon_key = Some(key);
        }
    }

    /// URLとキーが両方あるときだけ接続先を返す
    pub fn endpoint(&self) -> Option<Endpoint> {
        let url = self.supabase_url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let key = self
            .supabase_anon_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some(Endpoint {
            url: url.to_string(),
            anon_key: key.to_string(),
        })
    }

    pub fn set_url(&mut self, url: String) {
        self.supabase_url = Some(url);
    }

    pub fn set_anon_key(&mut self, key: String) {
        self.supabase_anon_key = Some(key);
    }

    /// 表示用にマスクしたキー
    pub fn masked_key(&self) -> String {
        match self.supabase_anon_key.as_deref() {
            None | Some("") => "未設定".to_string(),
            Some(key) if key.chars().count() <= 8 => "********".to_string(),
            Some(key) => {
                let head: String = key.chars().take(4).collect();
                format!("{}…（{}文字）", head, key.chars().count())
            }
        }
    }
}
