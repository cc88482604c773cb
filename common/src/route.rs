//! ルート定義
//!
//! 表示中のページを表す閉じた列挙型と、URLパスとの相互変換

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ページ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Work,
    About,
    Contact,
    Visual,
    Project,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Home,
        PageKind::Work,
        PageKind::About,
        PageKind::Contact,
        PageKind::Visual,
        PageKind::Project,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Work => "work",
            PageKind::About => "about",
            PageKind::Contact => "contact",
            PageKind::Visual => "visual",
            PageKind::Project => "project",
        }
    }

    /// ナビゲーション表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Home => "Home",
            PageKind::Work => "Work",
            PageKind::About => "About",
            PageKind::Contact => "Contact",
            PageKind::Visual => "Visual",
            PageKind::Project => "Project",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown page: {}", s))
    }
}

/// 現在のルート
///
/// `Project` は空でないIDを持つ場合のみ構築できる。
/// 外部からは [`Route::new`] 経由で生成すること。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "lowercase", try_from = "RouteWire")]
pub enum Route {
    #[default]
    Home,
    Work,
    About,
    Contact,
    Visual,
    Project {
        #[serde(rename = "projectId")]
        project_id: String,
    },
}

/// デシリアライズ用の素の形。[`Route::new`] を通して検証する
#[derive(Deserialize)]
struct RouteWire {
    page: PageKind,
    #[serde(default, rename = "projectId")]
    project_id: Option<String>,
}

impl TryFrom<RouteWire> for Route {
    type Error = String;

    fn try_from(wire: RouteWire) -> Result<Self, Self::Error> {
        Route::new(wire.page, wire.project_id.as_deref())
            .ok_or_else(|| format!("{} route requires a project id", wire.page))
    }
}

impl Route {
    /// ページ種別とIDからルートを生成
    ///
    /// `Project` でIDが空または未指定の場合は `None`。
    /// それ以外の種別ではIDは無視される。
    pub fn new(kind: PageKind, project_id: Option<&str>) -> Option<Self> {
        let route = match kind {
            PageKind::Home => Route::Home,
            PageKind::Work => Route::Work,
            PageKind::About => Route::About,
            PageKind::Contact => Route::Contact,
            PageKind::Visual => Route::Visual,
            PageKind::Project => {
                let id = project_id.filter(|id| !id.is_empty())?;
                Route::Project {
                    project_id: id.to_string(),
                }
            }
        };
        Some(route)
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Route::Home => PageKind::Home,
            Route::Work => PageKind::Work,
            Route::About => PageKind::About,
            Route::Contact => PageKind::Contact,
            Route::Visual => PageKind::Visual,
            Route::Project { .. } => PageKind::Project,
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        match self {
            Route::Project { project_id } => Some(project_id),
            _ => None,
        }
    }

    /// URLパスへ変換（プロジェクトIDはパーセントエンコード）
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Project { project_id } => {
                format!("/project/{}", urlencoding::encode(project_id))
            }
            other => format!("/{}", other.kind()),
        }
    }

    /// URLパス（またはハッシュ）からルートを復元
    ///
    /// 先頭の `#`、`/` の有無と末尾の `/` は許容する。
    /// 認識できないパスは `None`。
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let trimmed = trimmed.trim_matches('/');

        if trimmed.is_empty() {
            return Some(Route::Home);
        }

        match trimmed.split_once('/') {
            Some(("project", id)) => {
                if id.contains('/') {
                    return None;
                }
                let id = urlencoding::decode(id).ok()?;
                Route::new(PageKind::Project, Some(id.as_ref()))
            }
            Some(_) => None,
            None => match trimmed.parse::<PageKind>() {
                Ok(PageKind::Project) | Err(_) => None,
                Ok(kind) => Route::new(kind, None),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Project { project_id } => write!(f, "project({})", project_id),
            other => write!(f, "{}", other.kind()),
        }
    }
}
