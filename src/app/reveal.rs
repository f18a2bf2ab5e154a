use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{anchor::Anchor, reveal::ScrollReveal};

/// Register `anchor` with the shared controller and follow the section's
/// visibility. The returned signal flips to `true` once the section enters
/// the (shrunk) viewport.
pub fn use_section_reveal(anchor: Anchor, target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let controller = expect_context::<ScrollReveal>();
    let policy = controller.register(anchor);
    let (revealed, set_revealed) = signal(controller.is_revealed(anchor));

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                if let Some(visible) = controller.observe(anchor, entry.is_intersecting()) {
                    set_revealed.set(visible);
                }
            }
        },
        UseIntersectionObserverOptions::default().root_margin(policy.root_margin()),
    );

    revealed
}

/// Fades its children in when `revealed` turns on, `order` steps after the
/// first child of the same section.
#[component]
pub fn Reveal(
    anchor: Anchor,
    revealed: ReadSignal<bool>,
    #[prop(default = 0)] order: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let delay = expect_context::<ScrollReveal>()
        .stagger_delay(anchor, order)
        .as_millis();

    view! {
        <div
            class=move || {
                let state = if revealed.get() { "reveal-visible" } else { "reveal-hidden" };
                format!("reveal {state} {class}")
            }
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(anchor: Anchor, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-4xl font-bold text-white mb-2">
            <span class="text-cyan-300 font-mono text-xl mr-2">{anchor.number()}</span>
            {title}
        </h2>
        <div class="h-px bg-slate-500/20 mb-12"></div>
    }
}
