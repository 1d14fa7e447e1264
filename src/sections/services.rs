use yew::prelude::*;

use crate::anchors::SectionId;
use crate::animation::presets::Motion;
use crate::animation::reveal::Reveal;
use crate::components::animated_background::AnimatedBackground;
use crate::components::section_header::SectionHeader;

struct Service {
    title: &'static str,
    description: &'static str,
    icon_path: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        title: "AI Solutions",
        description: "Leverage the power of artificial intelligence to automate processes, gain insights, and create intelligent applications.",
        icon_path: "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z",
    },
    Service {
        title: "Web3 Development",
        description: "Build decentralized applications, smart contracts, and blockchain solutions for the next generation of the internet.",
        icon_path: "M19.428 15.428a2 2 0 00-1.022-.547l-2.387-.477a6 6 0 00-3.86.517l-.318.158a6 6 0 01-3.86.517L6.05 15.21a2 2 0 00-1.806.547M8 4h8l-1 1v5.172a2 2 0 00.586 1.414l5 5c1.26 1.26.367 3.414-1.415 3.414H4.828c-1.782 0-2.674-2.154-1.414-3.414l5-5A2 2 0 009 10.172V5L8 4z",
    },
    Service {
        title: "Web Applications",
        description: "Create responsive, high-performance web applications with modern frameworks and cutting-edge technologies.",
        icon_path: "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9",
    },
    Service {
        title: "Software Development",
        description: "Develop custom software solutions tailored to your business needs, from desktop applications to mobile apps.",
        icon_path: "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
    },
    Service {
        title: "UI/UX Design",
        description: "Create intuitive, engaging user experiences with beautiful interfaces that drive user engagement and satisfaction.",
        icon_path: "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zm0 0h12a2 2 0 002-2v-4a2 2 0 00-2-2h-2.343M11 7.343l1.657-1.657a2 2 0 012.828 0l2.829 2.829a2 2 0 010 2.828l-8.486 8.485M7 17h.01",
    },
    Service {
        title: "DevOps & Cloud",
        description: "Optimize your development workflow and infrastructure with cloud solutions and DevOps practices.",
        icon_path: "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10",
    },
];

// Cards cycle through three accent palettes.
const ICON_BACKGROUNDS: [&str; 3] = [
    "linear-gradient(to right, #3a1c71, #4776e6)",
    "linear-gradient(to right, #4776e6, #505070)",
    "linear-gradient(to right, #505070, #3a1c71)",
];

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    title: &'static str,
    description: &'static str,
    icon_path: &'static str,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let icon_style = format!("background: {};", ICON_BACKGROUNDS[props.index % ICON_BACKGROUNDS.len()]);

    html! {
        <Reveal motion={Motion::Rise} delay_ms={props.index as u32 * 100} class={classes!("service-card-wrap")}>
            <div class="service-card">
                <div class="service-icon" style={icon_style}>
                    <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={props.icon_path} />
                    </svg>
                </div>
                <h3>{ props.title }</h3>
                <p>{ props.description }</p>
            </div>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={SectionId::Services.anchor()} class="page-section services">
            <style>
                {r#"
                    .services {
                        background: linear-gradient(to bottom, #0a0a15, #0a0a0a);
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .service-card-wrap {
                        height: 100%;
                    }
                    .service-card {
                        height: 100%;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #333;
                        background: linear-gradient(to bottom right, #0f0f0f, #1a1a1a);
                        transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-10px);
                        border-color: #606080;
                        box-shadow: 0 10px 30px -10px rgba(71, 118, 230, 0.2);
                    }
                    .service-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.25rem;
                        color: #fff;
                    }
                    .service-icon svg {
                        width: 2rem;
                        height: 2rem;
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                        color: #fff;
                    }
                    .service-card p {
                        color: #c0c0c0;
                    }
                "#}
            </style>
            <AnimatedBackground variant="grid" />
            <div class="section-container">
                <SectionHeader
                    badge="Our Services"
                    title="Cutting-Edge Solutions"
                    subtitle="We specialize in delivering innovative technology solutions that help businesses thrive in the digital age."
                />
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard
                            key={service.title}
                            index={index}
                            title={service.title}
                            description={service.description}
                            icon_path={service.icon_path}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
