//! 取得フック
//!
//! 入力が変わるたびに `portfolio_common` の取得処理を呼ぶ。古いレスポンスの
//! 破棄はそちらの世代チェックに任せ、ここではアンマウント時の無効化だけ行う。

use crate::api::{self, SitePortfolio};
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{
    load_project, load_projects, CategoryFilter, FetchGuard, FetchState, Project, StateSink,
};

fn site_portfolio() -> SitePortfolio {
    use_context::<SitePortfolio>().unwrap_or_else(api::portfolio)
}

/// シグナルへの書き込み。破棄済みなら何もしない
struct SignalSink<T: Send + Sync + 'static>(WriteSignal<FetchState<T>>);

impl<T: Send + Sync + 'static> StateSink<T> for SignalSink<T> {
    fn update(&self, f: impl FnOnce(&mut FetchState<T>)) {
        let _ = self.0.try_update(|state| {
            f(state);
            if let (false, Some(error)) = (state.loading, &state.error) {
                web_sys::console::error_1(&format!("Fetch failed: {}", error).into());
            }
        });
    }
}

/// プロジェクト一覧
///
/// 同じ条件（順序違いのリストを含む）への変更では取り直さない。
pub fn use_projects<F>(filter: F) -> ReadSignal<FetchState<Vec<Project>>>
where
    F: Fn() -> CategoryFilter + Send + Sync + 'static,
{
    let portfolio = site_portfolio();
    let (state, set_state) = signal(FetchState::<Vec<Project>>::new());
    let guard = FetchGuard::new();
    let filter = Memo::new(move |_| filter());

    let effect_guard = guard.clone();
    Effect::new(move |_| {
        let task = load_projects(
            portfolio.clone(),
            filter.get(),
            &effect_guard,
            SignalSink(set_state),
        );
        spawn_local(async move {
            task.await;
        });
    });

    on_cleanup(move || guard.cancel());
    state
}

/// ID指定の1件
///
/// IDが無いときは通信せず、読み込み完了・データなしにする。
pub fn use_project<F>(id: F) -> ReadSignal<FetchState<Option<Project>>>
where
    F: Fn() -> Option<String> + Send + Sync + 'static,
{
    let portfolio = site_portfolio();
    let (state, set_state) = signal(FetchState::<Option<Project>>::new());
    let guard = FetchGuard::new();
    let id = Memo::new(move |_| id());

    let effect_guard = guard.clone();
    Effect::new(move |_| {
        let task = load_project(portfolio.clone(), id.get(), &effect_guard, SignalSink(set_state));
        spawn_local(async move {
            task.await;
        });
    });

    on_cleanup(move || guard.cancel());
    state
}
