use leptos::{html, prelude::*};

use crate::{
    anchor::Anchor,
    app::reveal::{use_section_reveal, Reveal},
    portfolio::PersonalInfo,
};

#[component]
pub fn HeroSection(personal: PersonalInfo) -> impl IntoView {
    let anchor = Anchor::Home;
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(anchor, node_ref);

    view! {
        <section
            id=anchor.id()
            node_ref=node_ref
            class="min-h-screen flex items-center justify-center relative"
        >
            <div class="container mx-auto px-6 py-20 text-center">
                <div class="max-w-4xl mx-auto">
                    <Reveal anchor revealed order=0>
                        <p class="text-cyan-300 text-sm md:text-base mb-4 font-mono">
                            "Hi, my name is"
                        </p>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-white mb-4">
                            {personal.name}
                        </h1>
                    </Reveal>
                    <Reveal anchor revealed order=1>
                        <h2 class="text-2xl md:text-4xl lg:text-5xl font-bold text-slate-400 mb-6">
                            {personal.title}
                        </h2>
                        <p class="text-slate-400 text-lg md:text-xl mb-8 max-w-2xl mx-auto">
                            {personal.tagline}
                        </p>
                    </Reveal>
                    <Reveal anchor revealed order=2 class="flex gap-4 justify-center flex-wrap">
                        <a
                            href=Anchor::Projects.href()
                            class="border border-cyan-300 text-cyan-300 hover:bg-cyan-300/10 px-8 py-4 rounded-md"
                        >
                            "View My Work"
                        </a>
                        <a
                            href=Anchor::Contact.href()
                            class="bg-cyan-300 text-navy hover:bg-cyan-300/90 px-8 py-4 rounded-md"
                        >
                            "Get In Touch"
                        </a>
                    </Reveal>
                </div>
            </div>
            <a
                href=Anchor::About.href()
                aria-label="Scroll to about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-cyan-300 text-3xl animate-bounce hover:opacity-80 transition-opacity"
            >
                "↓"
            </a>
        </section>
    }
}
