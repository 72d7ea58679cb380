use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(8);
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

/// Optional link rendered next to the message, e.g. the dispatch phone line.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastAction {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
    pub action: Option<ToastAction>,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}

pub fn push_toast(toasts: Signal<Vec<ToastMessage>>, kind: ToastKind, message: impl Into<String>) {
    push_message(toasts, ToastMessage::new(kind, message));
}

pub fn push_message(mut toasts: Signal<Vec<ToastMessage>>, message: ToastMessage) {
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_TOASTS {
            entries.remove(0);
        }
        entries.push(message);
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-6 z-[2000] flex justify-center px-4",
            ul {
                class: "space-y-3 w-full max-w-md",
                for message in entries {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let mut toasts = toasts;
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let theme = match message.kind {
        ToastKind::Success => "border-emerald-500/40 bg-slate-900/95 text-emerald-100",
        ToastKind::Warning => "border-amber-500/40 bg-slate-900/95 text-amber-100",
        ToastKind::Error => "border-red-600/60 bg-slate-900/95 text-red-100",
    };
    let dismiss_id = message.id.clone();

    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-lg border px-4 py-3 shadow-xl backdrop-blur {theme}",
            p { class: "flex-1 text-sm font-medium", "{message.text}" }
            if let Some(action) = message.action.clone() {
                a {
                    class: "text-xs font-bold uppercase tracking-wide text-red-400 hover:text-red-300",
                    href: "{action.href}",
                    "{action.label}"
                }
            }
            button {
                class: "text-xs uppercase tracking-wide text-slate-400 hover:text-white",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
