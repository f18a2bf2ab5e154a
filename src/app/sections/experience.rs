use leptos::{either::Either, html, prelude::*};

use crate::{
    anchor::Anchor,
    app::reveal::{use_section_reveal, Reveal, SectionHeading},
    markup::{parse_emphasis, Span},
    portfolio::{keyed, ExperienceEntry},
};

/// Achievement text with `**…**` runs rendered as `<strong>`.
pub fn emphasized(text: &str) -> impl IntoView {
    parse_emphasis(text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(s) => Either::Left(s.to_string()),
            Span::Strong(s) => Either::Right(view! {
                <strong class="text-white font-semibold">{s.to_string()}</strong>
            }),
        })
        .collect_view()
}

#[component]
pub fn ExperienceSection(experience: Vec<ExperienceEntry>) -> impl IntoView {
    let anchor = Anchor::Experience;
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(anchor, node_ref);
    let entries = keyed(&experience).into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <section id=anchor.id() node_ref=node_ref class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading anchor title="Work Experience" />
                    <div class="space-y-8">
                        <For
                            each=move || entries.clone()
                            key=|(_, (key, _))| *key
                            children=move |(index, (_, entry))| {
                                view! {
                                    <Reveal anchor revealed order=index>
                                        <ExperienceCard entry />
                                    </Reveal>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <article class="bg-slate-800 border border-cyan-300/20 rounded-lg p-6 md:p-8 hover:border-cyan-300 transition-all duration-300 hover:translate-x-2">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                <div>
                    <h3 class="text-xl md:text-2xl font-bold text-white mb-2">{entry.title}</h3>
                    <p class="text-cyan-300 text-lg font-semibold mb-2">{entry.company}</p>
                </div>
                <div class="flex flex-col md:items-end gap-1 text-slate-300 text-sm">
                    <span>{entry.period}</span>
                    <span>{entry.location}</span>
                </div>
            </div>
            <ul class="space-y-3">
                {entry
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <li class="text-slate-300 flex gap-3">
                                <span class="text-cyan-300 mt-1.5">"▹"</span>
                                <span>{emphasized(achievement)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
