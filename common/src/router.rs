//! ナビゲーション制御
//!
//! 現在のルートを1つだけ保持する状態機械。履歴スタックは持たない。
//! 「戻る」は各ページに固定の遷移先として割り当てる。

use crate::route::{PageKind, Route};
use tracing::debug;

/// ルート変更後にスクロール位置を先頭へ戻す先
pub trait Viewport {
    fn scroll_to_top(&self);
}

/// 何もしないビューポート（CLI・テスト用）
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewport;

impl Viewport for NoViewport {
    fn scroll_to_top(&self) {}
}

/// ルーター
#[derive(Debug, Clone, Default)]
pub struct Router<V> {
    current: Route,
    viewport: V,
}

impl<V: Viewport> Router<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            current: Route::default(),
            viewport,
        }
    }

    /// 初期ルートを指定して生成。IDの無いプロジェクトはホームにする
    pub fn with_route(viewport: V, route: Route) -> Self {
        Self {
            current: if is_valid(&route) { route } else { Route::Home },
            viewport,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// ページ遷移
    ///
    /// `Project` でIDが無い場合は何もせず `false` を返す。
    /// 成功時はルートを丸ごと置き換え、スクロールを先頭に戻す。
    pub fn navigate(&mut self, kind: PageKind, project_id: Option<&str>) -> bool {
        match Route::new(kind, project_id) {
            Some(route) => self.replace(route),
            None => {
                debug!(page = %kind, "navigation ignored: missing project id");
                false
            }
        }
    }

    /// 構築済みのルートへ遷移
    ///
    /// IDが空の `Project` は `navigate` と同じく拒否する。
    pub fn replace(&mut self, route: Route) -> bool {
        if !is_valid(&route) {
            debug!("navigation ignored: missing project id");
            return false;
        }
        debug!(from = %self.current, to = %route, "navigate");
        self.current = route;
        self.viewport.scroll_to_top();
        true
    }

    /// 現在のルートに対応するビュー
    pub fn view(&self) -> ViewDescriptor {
        resolve_view(&self.current)
    }
}

fn is_valid(route: &Route) -> bool {
    route.project_id() != Some("")
}

/// マウントするページ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home,
    Work,
    Project { project_id: String },
    About,
    Contact,
    Visual,
}

/// ページに渡すコールバックの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Back,
    ViewWork,
    ViewAbout,
    ViewContact,
    ViewVisual,
    /// 引数にプロジェクトIDを取る
    OpenProject,
}

/// ルートから決まるビューとコールバック配線
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub view: PageView,
    pub bindings: Vec<(Binding, PageKind)>,
}

impl ViewDescriptor {
    /// バインディングの遷移先
    pub fn target(&self, binding: Binding) -> Option<PageKind> {
        self.bindings
            .iter()
            .find(|(b, _)| *b == binding)
            .map(|(_, kind)| *kind)
    }

    pub fn has(&self, binding: Binding) -> bool {
        self.target(binding).is_some()
    }
}

/// ルートからビューを決定する純関数
pub fn resolve_view(route: &Route) -> ViewDescriptor {
    use Binding::*;

    let (view, bindings) = match route {
        Route::Home => (
            PageView::Home,
            vec![
                (ViewWork, PageKind::Work),
                (ViewAbout, PageKind::About),
                (ViewContact, PageKind::Contact),
                (ViewVisual, PageKind::Visual),
                (OpenProject, PageKind::Project),
            ],
        ),
        Route::Work => (
            PageView::Work,
            vec![
                (Back, PageKind::Home),
                (OpenProject, PageKind::Project),
                (ViewAbout, PageKind::About),
                (ViewContact, PageKind::Contact),
            ],
        ),
        Route::Project { project_id } => (
            PageView::Project {
                project_id: project_id.clone(),
            },
            vec![
                (Back, PageKind::Work),
                (OpenProject, PageKind::Project),
                (ViewContact, PageKind::Contact),
            ],
        ),
        Route::About => (
            PageView::About,
            vec![
                (Back, PageKind::Home),
                (ViewContact, PageKind::Contact),
                (ViewWork, PageKind::Work),
            ],
        ),
        Route::Contact => (PageView::Contact, vec![(Back, PageKind::Home)]),
        Route::Visual => (
            PageView::Visual,
            vec![
                (Back, PageKind::Home),
                (OpenProject, PageKind::Project),
                (ViewContact, PageKind::Contact),
            ],
        ),
    };

    ViewDescriptor { view, bindings }
}
