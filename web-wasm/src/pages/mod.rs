//! ページコンポーネント

pub mod about;
pub mod contact;
pub mod home;
pub mod project;
pub mod visual;
pub mod work;

use crate::app::Navigate;
use leptos::prelude::Callable;
use portfolio_common::{Binding, PageKind};

/// ページに渡す遷移コールバックの束
///
/// 割り当てのないバインディングは呼んでも何もしない。
#[derive(Clone)]
pub struct PageLinks {
    bindings: Vec<(Binding, PageKind)>,
    navigate: Navigate,
}

impl PageLinks {
    pub fn new(bindings: Vec<(Binding, PageKind)>, navigate: Navigate) -> Self {
        Self { bindings, navigate }
    }

    fn target(&self, binding: Binding) -> Option<PageKind> {
        self.bindings
            .iter()
            .find(|(b, _)| *b == binding)
            .map(|(_, kind)| *kind)
    }

    pub fn has(&self, binding: Binding) -> bool {
        self.target(binding).is_some()
    }

    pub fn go(&self, binding: Binding) {
        if let Some(kind) = self.target(binding) {
            self.navigate.run((kind, None));
        }
    }

    pub fn open_project(&self, id: String) {
        if let Some(kind) = self.target(Binding::OpenProject) {
            self.navigate.run((kind, Some(id)));
        }
    }
}
