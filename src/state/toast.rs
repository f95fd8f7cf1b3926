//! Transient notification queue.
//!
//! Toasts are pushed by auth and document flows and rendered by
//! `components::toast_host`. Auto-dismiss is a browser timer; the queue
//! itself is plain data.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen.
#[cfg(feature = "csr")]
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Class-name fragment for the host component.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

impl Toast {
    #[must_use]
    pub fn new(kind: ToastKind, title: &str, body: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.to_owned(),
            body: body.to_owned(),
        }
    }
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Remove the toast with `id`; returns whether one was removed.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

/// Push a toast and schedule its auto-dismissal.
pub fn push_toast(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, body: &str) {
    let toast = Toast::new(kind, title, body);
    let id = toast.id.clone();
    toasts.update(|state| state.push(toast));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        toasts.update(|state| {
            state.dismiss(&id);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
