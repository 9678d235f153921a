//! Toast Notifications
//!
//! Transient success/error messages. Each toast dismisses itself after
//! the configured duration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            duration_ms,
        }
    }

    pub fn success(&self, description: impl Into<String>) {
        self.push("Success", description.into(), ToastVariant::Default);
    }

    pub fn error(&self, description: impl Into<String>) {
        self.push("Error", description.into(), ToastVariant::Destructive);
    }

    pub fn push(&self, title: &str, description: String, variant: ToastVariant) {
        let id = self.next_id.try_update_value(|n| {
            let id = *n;
            *n += 1;
            id
        });
        let Some(id) = id else { return };

        self.toasts.update(|list| {
            list.push(Toast { id, title: title.to_string(), description, variant });
        });

        let this = *self;
        let duration = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the active toasts; click to dismiss
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(id)>
                            <div class="toast-title">{toast.title}</div>
                            <div class="toast-description">{toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
