//! 取得状態の管理
//!
//! 画面ごとに持つ (data, loading, error) の三つ組と、
//! 古いレスポンスを捨てるための世代カウンタ。

use crate::error::{QueryError, Result};
use crate::filter::CategoryFilter;
use crate::project::Project;
use crate::query::ProjectSource;
use crate::repository::Portfolio;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// 取得状態
///
/// 読み込み中は前回成功時のデータを残す。
/// 失敗時はデータを空にしてエラーメッセージを持つ。
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> FetchState<T> {
    /// マウント直後の状態（読み込み中・データ空）
    pub fn new() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }

    /// 取得不要で確定した空の状態
    pub fn idle() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
        }
    }

    /// 取得開始
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// 結果を反映
    pub fn finish(&mut self, result: std::result::Result<T, QueryError>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => {
                self.data = T::default();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 世代カウンタ
///
/// `begin` のたびに世代が進み、それ以前のチケットは無効になる。
/// `cancel` は画面破棄時に呼ぶ。
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

/// 1回の取得に対応するチケット
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> FetchTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// 進行中の取得をすべて無効化
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl FetchTicket {
    /// まだ最新の取得か
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// 取得状態の書き込み先
///
/// CLI・テストでは `RefCell`、Webではシグナルを包んだ型が実装する。
pub trait StateSink<T> {
    fn update(&self, f: impl FnOnce(&mut FetchState<T>));
}

impl<T> StateSink<T> for RefCell<FetchState<T>> {
    fn update(&self, f: impl FnOnce(&mut FetchState<T>)) {
        f(&mut *self.borrow_mut());
    }
}

impl<T, K: StateSink<T> + ?Sized> StateSink<T> for &K {
    fn update(&self, f: impl FnOnce(&mut FetchState<T>)) {
        (**self).update(f)
    }
}

impl<T, K: StateSink<T> + ?Sized> StateSink<T> for Rc<K> {
    fn update(&self, f: impl FnOnce(&mut FetchState<T>)) {
        (**self).update(f)
    }
}

impl FetchGuard {
    /// 取得開始。以前のチケットを無効にし、状態を読み込み中にする
    pub fn start<T: Default>(&self, sink: &impl StateSink<T>) -> FetchTicket {
        let ticket = self.begin();
        sink.update(|s| s.start());
        ticket
    }

    /// 取得せずに空の状態で確定させる
    pub fn settle_idle<T: Default>(&self, sink: &impl StateSink<T>) {
        self.cancel();
        sink.update(|s| *s = FetchState::idle());
    }
}

impl FetchTicket {
    /// 最新のままなら結果を反映する。反映した場合に true
    pub fn commit<T: Default>(&self, sink: &impl StateSink<T>, result: Result<T>) -> bool {
        if !self.is_current() {
            debug!("discarding stale fetch result");
            return false;
        }
        sink.update(|s| s.finish(result));
        true
    }
}

/// 一覧を取得して `sink` に反映する
///
/// 開始（チケット発行と読み込み中への遷移）は呼び出し時点で同期的に行う。
/// 返る Future は結果の反映だけを担い、途中で捨ててもよい。
pub fn load_projects<S, K>(
    portfolio: Portfolio<S>,
    filter: CategoryFilter,
    guard: &FetchGuard,
    sink: K,
) -> impl Future<Output = bool>
where
    S: ProjectSource,
    K: StateSink<Vec<Project>>,
{
    let ticket = guard.start(&sink);
    async move {
        let result = portfolio.list_projects(&filter).await;
        ticket.commit(&sink, result)
    }
}

/// 1件を取得して `sink` に反映する
///
/// `id` が無い（空を含む）ときは通信せず (None, false, None) に確定し、
/// 進行中の取得も無効にする。
pub fn load_project<S, K>(
    portfolio: Portfolio<S>,
    id: Option<String>,
    guard: &FetchGuard,
    sink: K,
) -> impl Future<Output = bool>
where
    S: ProjectSource,
    K: StateSink<Option<Project>>,
{
    let id = id.filter(|id| !id.is_empty());
    let ticket = match &id {
        Some(_) => Some(guard.start(&sink)),
        None => {
            guard.settle_idle(&sink);
            None
        }
    };
    async move {
        let Some(ticket) = ticket else {
            return true;
        };
        let result = portfolio.project_by_id(id.as_deref()).await;
        ticket.commit(&sink, result)
    }
}
