use std::time::Duration;

use leptos::prelude::*;

use crate::frontend::use_app;
use crate::services::{ToastKind, DEFAULT_TOAST_TTL_SECS};

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
    Info,
}

impl From<ToastKind> for AlertVariant {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Success => Self::Success,
            ToastKind::Error => Self::Error,
            ToastKind::Info => Self::Info,
        }
    }
}

fn variant_style(variant: AlertVariant) -> (&'static str, &'static str) {
    match variant {
        AlertVariant::Success => (
            "✓",
            "bg-emerald-500/10 border-emerald-500/30 text-emerald-400",
        ),
        AlertVariant::Error => ("✕", "bg-red-500/10 border-red-500/30 text-red-400"),
        AlertVariant::Info => ("i", "bg-sky-500/10 border-sky-500/30 text-sky-300"),
    }
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (icon, classes) = variant_style(variant);

    view! {
        <div class=format!("mb-6 p-4 rounded-lg border text-sm {}", classes)>
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
            {children.map(|c| view! { <div class="mt-3">{c()}</div> })}
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert message=message variant=AlertVariant::Error />
    }
}

/// Transient notifications, bottom right. Polls the shared notifier so
/// toasts pushed from async tasks show up without explicit wiring.
#[component]
pub fn Toaster() -> impl IntoView {
    let app = use_app();
    let toasts = app.toasts;

    let poll = app.clone();
    match set_interval_with_handle(
        move || {
            poll.notifier.expire(
                chrono::Utc::now(),
                chrono::Duration::seconds(DEFAULT_TOAST_TTL_SECS),
            );
            poll.sync_toasts();
        },
        Duration::from_millis(400),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => log::warn!("toast polling unavailable"),
    }

    let dismiss = move |id| {
        app.notifier.dismiss(id);
        app.sync_toasts();
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let (icon, classes) = variant_style(toast.kind.into());
                    let id = toast.id;
                    let dismiss = dismiss.clone();
                    view! {
                        <div class=format!("p-3 rounded-lg border text-sm shadow-lg bg-slate-900 {}", classes)>
                            <p class="flex items-center gap-2">
                                <span>{icon}</span>
                                <span class="flex-1">{toast.message}</span>
                                <button type="button" class="opacity-60 hover:opacity-100" on:click=move |_| dismiss(id)>
                                    "×"
                                </button>
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}
