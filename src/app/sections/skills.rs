use leptos::{html, prelude::*};

use crate::{
    anchor::Anchor,
    app::reveal::{use_section_reveal, Reveal, SectionHeading},
    portfolio::Skills,
};

#[component]
pub fn SkillsSection(skills: Skills) -> impl IntoView {
    let anchor = Anchor::Skills;
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(anchor, node_ref);

    let groups = skills
        .groups()
        .enumerate()
        .map(|(index, (category, items))| {
            let badges = items
                .iter()
                .map(|skill| {
                    view! {
                        <span class="bg-slate-800 text-cyan-300 border border-cyan-300/30 hover:border-cyan-300 hover:bg-cyan-300/10 px-4 py-2 rounded-full text-sm transition-all duration-300">
                            {skill.clone()}
                        </span>
                    }
                })
                .collect_view();
            view! {
                <Reveal anchor revealed order=index>
                    <h3 class="text-xl font-semibold text-white mb-4 flex items-center gap-2">
                        <span class="w-2 h-2 bg-cyan-300 rounded-full"></span>
                        {category.title()}
                    </h3>
                    <div class="flex flex-wrap gap-3">{badges}</div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=anchor.id() node_ref=node_ref class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading anchor title="Skills & Technologies" />
                    <div class="space-y-8">{groups}</div>
                </div>
            </div>
        </section>
    }
}
