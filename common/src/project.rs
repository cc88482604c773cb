//! プロジェクトの型定義
//!
//! - ProjectRow: ストアから届く生の行（images が多態）
//! - Project: 正規化済み。画面・CLIはこちらだけを扱う

use crate::error::Result;
use crate::images::normalize_images;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// カテゴリ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Branding,
    UiUx,
    Motion,
    Photography,
    /// 未知のトークン（行は捨てない）
    Other(String),
}

impl Category {
    pub fn from_token(token: &str) -> Self {
        match token {
            "branding" => Category::Branding,
            "uiux" => Category::UiUx,
            "motion" => Category::Motion,
            "photography" => Category::Photography,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Category::Branding => "branding",
            Category::UiUx => "uiux",
            Category::Motion => "motion",
            Category::Photography => "photography",
            Category::Other(token) => token,
        }
    }

    /// 画面表示用ラベル
    pub fn label(&self) -> &str {
        match self {
            Category::Branding => "Identity",
            Category::UiUx => "Digital",
            Category::Motion => "Motion",
            Category::Photography => "Photography",
            Category::Other(token) => token,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Category::from_token(&token))
    }
}

/// 制作年（文字列・数値どちらでも届く）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

/// `null` を既定値として読む（PostgRESTは空の列を `null` で返す）
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// ストアの生の行
///
/// `id` 以外の列は `null` でも受け付ける。
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub year: Option<Year>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub order_index: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    /// 多態フィールド。`normalize_images` を通すまで触らない
    #[serde(default)]
    pub images: Value,
}

impl ProjectRow {
    /// レスポンス本文（JSON配列）を行に分解する
    ///
    /// 配列でなければエラー。読めない行は警告を出して飛ばし、残りの行は返す。
    pub fn decode_rows(body: &str) -> Result<Vec<ProjectRow>> {
        let values: Vec<Value> = serde_json::from_str(body)?;
        let rows = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<ProjectRow>(value) {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!(index, error = %e, "skipping undecodable project row");
                    None
                }
            })
            .collect();
        Ok(rows)
    }
}

/// 正規化済みプロジェクト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub image_url: String,
    pub description: Option<String>,
    pub client: Option<String>,
    pub year: Option<Year>,
    pub featured: Option<bool>,
    pub order_index: Option<i64>,
    pub content: Option<String>,
    pub project_url: Option<String>,
    pub images: Option<Vec<String>>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// ギャラリー画像（無ければ空）
    pub fn gallery(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let images = normalize_images(&row.images);
        Self {
            id: row.id,
            title: row.title,
            category: row.category,
            image_url: row.image_url,
            description: row.description,
            client: row.client,
            year: row.year,
            featured: row.featured,
            order_index: row.order_index,
            content: row.content,
            project_url: row.project_url,
            images,
        }
    }
}
