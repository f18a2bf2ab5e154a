use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::anchor::Anchor;

/// Vertical offset after which the header gets its solid background.
const SCROLLED_OFFSET: f64 = 50.0;

#[component]
pub fn Header(initials: String) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class=move || {
            if scroll_y.get() > SCROLLED_OFFSET {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-slate-900/90 backdrop-blur-md shadow-lg border-b border-slate-800"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href=Anchor::Home.href() class="flex items-center gap-3 group">
                        <span class="text-white font-bold text-xl tracking-tight">
                            {initials}
                            <span class="text-cyan-400">".data"</span>
                        </span>
                    </a>
                    <nav class="hidden md:flex items-center gap-8">
                        {Anchor::ALL
                            .into_iter()
                            .map(|anchor| view! { <NavLink anchor /> })
                            .collect_view()}
                    </nav>
                    <button
                        class="md:hidden text-cyan-400 hover:opacity-80 transition-opacity"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden mt-4 flex flex-col gap-4 bg-slate-900/95 p-6 rounded-lg border border-slate-800 shadow-xl absolute left-4 right-4 top-16">
                        {Anchor::ALL
                            .into_iter()
                            .map(|anchor| {
                                view! {
                                    <a
                                        href=anchor.href()
                                        on:click=move |_| set_menu_open(false)
                                        class="flex items-center gap-3 text-slate-300 hover:text-cyan-400 transition-colors py-2 border-b border-slate-800/50 last:border-0"
                                    >
                                        <Ordinal anchor />
                                        {anchor.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn NavLink(anchor: Anchor) -> impl IntoView {
    view! {
        <a
            href=anchor.href()
            class="group flex items-center gap-1 text-sm font-medium text-slate-400 hover:text-cyan-400 transition-colors"
        >
            <Ordinal anchor />
            {anchor.label()}
        </a>
    }
}

#[component]
fn Ordinal(anchor: Anchor) -> impl IntoView {
    view! {
        <span class="text-cyan-600 font-mono text-xs opacity-70 group-hover:opacity-100 transition-opacity">
            {anchor.number()}
        </span>
    }
}
