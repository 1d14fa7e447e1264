use yew::prelude::*;

use crate::anchors::SectionId;
use crate::components::section_header::SectionHeader;
use crate::portfolio::{category_label, PortfolioFilter, Project, FILTER_CATEGORIES, PROJECTS};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    // Cards re-enter on every filter change; the stagger follows grid position.
    let style = format!("animation-delay: {}ms;", props.index * 100);

    html! {
        <article class="project-card" style={style}>
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
                <div class="project-overlay">
                    <button class="project-view">{"View Project"}</button>
                </div>
            </div>
            <div class="project-body">
                <div class="project-heading">
                    <h3>{ project.title }</h3>
                    if let Some(label) = category_label(project.category) {
                        <span class="project-tag">{ label }</span>
                    }
                </div>
                <p>{ project.description }</p>
                <div class="project-tech">
                    { for project.technologies.iter().map(|tech| html! {
                        <span key={*tech}>{ *tech }</span>
                    }) }
                </div>
            </div>
        </article>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let filter = use_state(|| PortfolioFilter::new(PROJECTS));

    let select = {
        let filter = filter.clone();
        move |category: &'static str| {
            let filter = filter.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut next = (*filter).clone();
                next.select_category(category);
                filter.set(next);
            })
        }
    };

    let visible = filter.visible();

    html! {
        <section id={SectionId::Work.anchor()} class="page-section work">
            <style>
                {r#"
                    .work {
                        background: #000;
                    }
                    .filter-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .filter-button {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: none;
                        font-size: 0.875rem;
                        cursor: pointer;
                        background: #1a1a1a;
                        color: #c0c0c0;
                        transition: background-color 0.3s ease, color 0.3s ease;
                    }
                    .filter-button:hover {
                        background: #404040;
                    }
                    .filter-button.active {
                        background: #c0c0c0;
                        color: #000;
                    }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .projects-empty {
                        text-align: center;
                        color: #808080;
                    }
                    @keyframes card-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .project-card {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid #333;
                        background: linear-gradient(to bottom right, #0f0f0f, #1a1a1a);
                        animation: card-in 0.5s ease-out both;
                        transition: border-color 0.3s ease;
                    }
                    .project-card:hover {
                        border-color: #505050;
                    }
                    .project-media {
                        position: relative;
                        height: 14rem;
                        overflow: hidden;
                    }
                    .project-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .project-card:hover .project-media img {
                        transform: scale(1.1);
                    }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.5);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .project-card:hover .project-overlay {
                        opacity: 1;
                    }
                    .project-view {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: none;
                        background: #c0c0c0;
                        color: #000;
                        transform: translateY(2.5rem);
                        transition: transform 0.3s ease;
                    }
                    .project-card:hover .project-view {
                        transform: translateY(0);
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .project-heading {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .project-heading h3 {
                        color: #fff;
                        font-size: 1.25rem;
                    }
                    .project-tag {
                        flex-shrink: 0;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #404040;
                        color: #c0c0c0;
                        font-size: 0.75rem;
                    }
                    .project-body p {
                        color: #a0a0a0;
                        margin-bottom: 1rem;
                    }
                    .project-tech {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .project-tech span {
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        background: #0a0a0a;
                        color: #c0c0c0;
                        font-size: 0.75rem;
                    }
                "#}
            </style>
            <div class="grid-texture faint"></div>
            <div class="section-container">
                <SectionHeader
                    badge="Our Portfolio"
                    title="Featured Projects"
                    subtitle="Explore our diverse portfolio of innovative solutions across various industries and technologies."
                />

                <div class="filter-bar">
                    { for FILTER_CATEGORIES.iter().map(|category| html! {
                        <button
                            key={category.id}
                            class={classes!("filter-button", filter.is_active(category.id).then(|| "active"))}
                            onclick={select(category.id)}
                        >
                            { category.name }
                        </button>
                    }) }
                </div>

                if visible.is_empty() {
                    <p class="projects-empty">{"No projects in this category yet."}</p>
                } else {
                    // Keyed on the filter so every selection replays the card entrance
                    <div class="projects-grid" key={filter.active().to_string()}>
                        { for visible.into_iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard key={project.id} project={project.clone()} index={index} />
                        }) }
                    </div>
                }
            </div>
        </section>
    }
}
