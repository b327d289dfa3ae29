//! Toast notifications - the app-wide notification sink.
//!
//! Screens push `(title, message, severity)` triples and forget about
//! them; `ToastHost` renders the stack and each entry dismisses itself
//! after a few seconds.

use contracts::shared::notify::{Notification, Severity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen
const TOAST_TTL_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
struct ToastEntry {
    id: u64,
    notification: Notification,
}

/// Centralized toast stack, provided once at the app root.
#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Push a notification onto the stack; it auto-dismisses after
    /// `TOAST_TTL_MS`.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ToastEntry { id, notification });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(Notification::info(title, message));
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(Notification::success(title, message));
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(Notification::error(title, message));
    }

    fn dismiss(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|entry| entry.id != id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the toast service
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in component tree")
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast",
        Severity::Success => "toast toast--success",
        Severity::Error => "toast toast--error",
    }
}

/// Renders the toast stack in a fixed corner overlay.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.stack.get()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    view! {
                        <div class=severity_class(entry.notification.severity)>
                            <div class="toast__body">
                                <p class="toast__title">{entry.notification.title.clone()}</p>
                                <p class="toast__message">{entry.notification.message.clone()}</p>
                            </div>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
