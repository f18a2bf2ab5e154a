use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{Toast, ToastKind};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Page-wide toast queue, provided once by the app.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<(u64, Toast)>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn provide() -> Self {
        let toasts = Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        };
        provide_context(toasts);
        toasts
    }

    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push((id, toast)));

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(&self, id: u64) {
        // the page may be gone by the time the timer fires
        self.items.try_update(|items| items.retain(|(i, _)| *i != id));
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <ol class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm">
            <For
                each=move || toasts.items.get()
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let accent = match toast.kind {
                        ToastKind::Success => "border-cyan-300/40",
                        ToastKind::Error => "border-red-500/60",
                    };
                    view! {
                        <li
                            role="status"
                            class=format!(
                                "bg-slate-900/95 border {accent} rounded-lg p-4 shadow-lg backdrop-blur-sm",
                            )
                        >
                            <div class="flex items-start justify-between gap-4">
                                <div>
                                    <p class="font-semibold text-white">{toast.title}</p>
                                    <p class="text-sm text-slate-300">{toast.description}</p>
                                </div>
                                <button
                                    class="text-slate-400 hover:text-white"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ol>
    }
}
