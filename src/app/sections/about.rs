use leptos::{html, prelude::*};

use crate::{
    anchor::Anchor,
    app::reveal::{use_section_reveal, Reveal, SectionHeading},
    portfolio::{About, Education},
};

#[component]
pub fn AboutSection(about: About, education: Education) -> impl IntoView {
    let anchor = Anchor::About;
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(anchor, node_ref);

    view! {
        <section id=anchor.id() node_ref=node_ref class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading anchor title="About Me" />
                    <div class="grid md:grid-cols-2 gap-12">
                        <Reveal anchor revealed order=0>
                            <p class="text-slate-300 text-lg leading-relaxed mb-6">
                                {about.description}
                            </p>
                            <div class="border-l-2 border-cyan-300/40 pl-4">
                                <p class="text-white font-semibold">{education.degree}</p>
                                <p class="text-cyan-300">{education.school}</p>
                                <p class="text-slate-400 text-sm">
                                    {format!("{} · {}", education.period, education.location)}
                                </p>
                            </div>
                        </Reveal>
                        <div class="grid grid-cols-2 gap-4">
                            {about
                                .highlights
                                .into_iter()
                                .enumerate()
                                .map(|(index, highlight)| {
                                    view! {
                                        <Reveal
                                            anchor
                                            revealed
                                            order=index + 1
                                            class="bg-slate-800 border border-cyan-300/20 rounded-lg p-6 hover:border-cyan-300 transition-all duration-300"
                                        >
                                            <div class="text-4xl font-bold text-cyan-300 mb-2">
                                                {highlight.value}
                                            </div>
                                            <div class="text-slate-300 text-sm">{highlight.label}</div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::tests::render, portfolio::tests::sample_document};

    #[test]
    fn test_highlights_and_education() {
        let doc = sample_document();
        let html = render(move || view! { <AboutSection about=doc.about education=doc.education /> });
        assert!(html.contains("id=\"about\""));
        assert!(html.contains("15+"));
        assert!(html.contains("University of Waterloo"));
        assert!(html.contains("02."));
    }
}
