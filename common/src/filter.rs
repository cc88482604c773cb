//! カテゴリフィルタ
//!
//! 呼び出し側の入力（未指定・単一トークン・トークン列）を
//! クエリ条件に解決し、再取得判定用のキーを作る。

use serde::{Deserialize, Serialize};

/// 一覧取得のフィルタ入力
///
/// 等価性は解決後の条件で判定する（`["a","b"]` と `["b","a"]` は等しい）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryFilter {
    #[default]
    All,
    One(String),
    Any(Vec<String>),
}

/// 解決済みのカテゴリ条件
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryConstraint {
    All,
    Eq(String),
    /// ソート・重複除去済み
    In(Vec<String>),
}

impl CategoryFilter {
    pub fn one(token: impl Into<String>) -> Self {
        CategoryFilter::One(token.into())
    }

    pub fn any<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CategoryFilter::Any(tokens.into_iter().map(Into::into).collect())
    }

    /// CLI等のトークン列から生成（0個は全件、1個は単一）
    pub fn from_tokens(tokens: &[String]) -> Self {
        match tokens {
            [] => CategoryFilter::All,
            [single] => CategoryFilter::One(single.clone()),
            many => CategoryFilter::Any(many.to_vec()),
        }
    }

    /// クエリ条件へ解決
    ///
    /// `"all"` 単体と空リストは全件と同じ。
    pub fn resolve(&self) -> CategoryConstraint {
        match self {
            CategoryFilter::All => CategoryConstraint::All,
            CategoryFilter::One(token) if token == "all" => CategoryConstraint::All,
            CategoryFilter::One(token) => CategoryConstraint::Eq(token.clone()),
            CategoryFilter::Any(tokens) if tokens.is_empty() => CategoryConstraint::All,
            CategoryFilter::Any(tokens) => {
                let mut sorted = tokens.clone();
                sorted.sort();
                sorted.dedup();
                CategoryConstraint::In(sorted)
            }
        }
    }

    /// 再取得判定用のキー。順序違いのリストは同じキーになる
    pub fn cache_key(&self) -> String {
        self.resolve().cache_key()
    }
}

impl PartialEq for CategoryFilter {
    fn eq(&self, other: &Self) -> bool {
        self.resolve() == other.resolve()
    }
}

impl Eq for CategoryFilter {}

impl CategoryConstraint {
    pub fn cache_key(&self) -> String {
        match self {
            CategoryConstraint::All => "all".to_string(),
            CategoryConstraint::Eq(token) => format!("eq:{}", token),
            CategoryConstraint::In(tokens) => format!("in:{}", tokens.join(",")),
        }
    }
}

/// Workページのフィルタボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkFilter {
    #[default]
    All,
    Identity,
    Digital,
    Visual,
}

impl WorkFilter {
    pub const ALL: [WorkFilter; 4] = [
        WorkFilter::All,
        WorkFilter::Identity,
        WorkFilter::Digital,
        WorkFilter::Visual,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkFilter::All => "All",
            WorkFilter::Identity => "Identity",
            WorkFilter::Digital => "Digital",
            WorkFilter::Visual => "Visual",
        }
    }

    pub fn category_filter(&self) -> CategoryFilter {
        match self {
            WorkFilter::All => CategoryFilter::All,
            WorkFilter::Identity => CategoryFilter::any(["branding"]),
            WorkFilter::Digital => CategoryFilter::any(["uiux"]),
            WorkFilter::Visual => CategoryFilter::any(["motion", "photography"]),
        }
    }
}
