use leptos::{html, prelude::*};

use crate::{
    anchor::Anchor,
    app::reveal::{use_section_reveal, Reveal, SectionHeading},
    portfolio::{keyed, ProjectEntry},
};

#[component]
pub fn ProjectsSection(projects: Vec<ProjectEntry>) -> impl IntoView {
    let anchor = Anchor::Projects;
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(anchor, node_ref);
    let entries = keyed(&projects).into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <section id=anchor.id() node_ref=node_ref class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading anchor title="Featured Projects" />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || entries.clone()
                            key=|(_, (key, _))| *key
                            children=move |(index, (_, project))| {
                                view! {
                                    <Reveal anchor revealed order=index class="h-full">
                                        <ProjectCard project />
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
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    // values only, in the order the document lists them
    let metrics = project
        .metrics
        .iter()
        .map(|(_, value)| value.to_string())
        .collect::<Vec<_>>();

    view! {
        <article class="bg-slate-800 border border-cyan-300/20 rounded-lg overflow-hidden hover:border-cyan-300 transition-all duration-300 h-full flex flex-col">
            <div class="w-full h-48 overflow-hidden relative group">
                <img
                    src=project.image
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-110"
                />
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-xl font-bold text-white mb-3">{project.title}</h3>
                <p class="text-slate-300 text-sm mb-4 leading-relaxed">{project.description}</p>
                <div class="mb-4 space-y-1">
                    {metrics
                        .into_iter()
                        .map(|value| {
                            view! {
                                <div class="text-cyan-300 text-base font-mono font-semibold">
                                    {value}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-navy text-cyan-300 text-xs px-2 py-1 rounded">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3 mt-auto">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-cyan-300/30 text-cyan-300 hover:bg-cyan-300/10 flex-1 py-2 rounded text-center"
                    >
                        "Code"
                    </a>
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-cyan-300/30 text-cyan-300 hover:bg-cyan-300/10 flex-1 py-2 rounded text-center"
                    >
                        "Demo"
                    </a>
                </div>
            </div>
        </article>
    }
}
