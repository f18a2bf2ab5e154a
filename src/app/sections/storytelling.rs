use leptos::{html, prelude::*};

use crate::{
    anchor::Anchor,
    app::reveal::{use_section_reveal, Reveal},
    portfolio::StorytellingEntry,
};

/// Nothing at all when the document has no storytelling entry.
#[component]
pub fn StorytellingSection(storytelling: Option<StorytellingEntry>) -> impl IntoView {
    storytelling.map(|entry| view! { <DesignShowcase entry /> })
}

#[component]
fn DesignShowcase(entry: StorytellingEntry) -> impl IntoView {
    let anchor = Anchor::Design;
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(anchor, node_ref);

    view! {
        <section id=anchor.id() node_ref=node_ref class="py-24 relative">
            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-7xl mx-auto">
                    <Reveal anchor revealed order=0 class="mb-16 text-center">
                        <span class="text-pink-500 font-mono text-sm mb-2 block">
                            "// section_design"
                        </span>
                        <h2 class="text-4xl md:text-5xl font-bold text-white mb-4">
                            "Design" <span class="text-pink-400">".portfolio"</span>
                        </h2>
                        <div class="h-1 w-20 bg-pink-500 mx-auto rounded-full"></div>
                        <p class="text-slate-300 mt-4 max-w-2xl mx-auto text-lg leading-relaxed">
                            {entry.description}
                        </p>
                    </Reveal>
                    <Reveal anchor revealed order=1 class="max-w-4xl mx-auto">
                        <div class="bg-slate-900/80 border border-pink-500/30 rounded-lg p-8 shadow-lg flex flex-col items-center gap-10">
                            <img
                                src=entry.image
                                alt="Design portfolio cover"
                                loading="lazy"
                                class="w-full max-w-3xl h-auto rounded-xl border border-pink-500/20 object-cover"
                            />
                            <div class="flex flex-col items-center text-center px-4">
                                <h3 class="text-3xl font-bold text-white mb-6">{entry.title}</h3>
                                <div class="flex flex-wrap gap-4 justify-center mb-10">
                                    {entry
                                        .skills
                                        .into_iter()
                                        .map(|skill| {
                                            view! {
                                                <span class="bg-pink-950/40 text-pink-300 border border-pink-500/30 px-4 py-2 rounded-full text-sm">
                                                    {skill}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <a
                                    href=entry.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="bg-pink-600 hover:bg-pink-500 text-white font-mono px-10 py-4 rounded-xl transition-all"
                                >
                                    "EXPLORE_MY_PORTFOLIO()"
                                </a>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
