use yew::prelude::*;

use crate::anchors::SectionId;
use crate::animation::presets::Motion;
use crate::animation::reveal::Reveal;
use crate::components::section_header::SectionHeader;

struct TechGroup {
    title: &'static str,
    items: [(&'static str, &'static str); 4],
}

const TECH_GROUPS: [TechGroup; 5] = [
    TechGroup {
        title: "AI & Machine Learning",
        items: [
            ("TensorFlow", "/images/tech/tensorflow.svg"),
            ("PyTorch", "/images/tech/pytorch.svg"),
            ("OpenAI", "/images/tech/openai.svg"),
            ("Hugging Face", "/images/tech/huggingface.svg"),
        ],
    },
    TechGroup {
        title: "Web3 & Blockchain",
        items: [
            ("Ethereum", "/images/tech/ethereum.svg"),
            ("Solidity", "/images/tech/solidity.svg"),
            ("Web3.js", "/images/tech/web3js.svg"),
            ("Hardhat", "/images/tech/hardhat.svg"),
        ],
    },
    TechGroup {
        title: "Frontend Development",
        items: [
            ("React", "/images/tech/react.svg"),
            ("Next.js", "/images/tech/nextjs.svg"),
            ("TypeScript", "/images/tech/typescript.svg"),
            ("Tailwind CSS", "/images/tech/tailwindcss.svg"),
        ],
    },
    TechGroup {
        title: "Backend Development",
        items: [
            ("Node.js", "/images/tech/nodejs.svg"),
            ("Python", "/images/tech/python.svg"),
            ("Go", "/images/tech/go.svg"),
            ("GraphQL", "/images/tech/graphql.svg"),
        ],
    },
    TechGroup {
        title: "Cloud & DevOps",
        items: [
            ("AWS", "/images/tech/aws.svg"),
            ("Docker", "/images/tech/docker.svg"),
            ("Kubernetes", "/images/tech/kubernetes.svg"),
            ("CI/CD", "/images/tech/cicd.svg"),
        ],
    },
];

#[function_component(Technologies)]
pub fn technologies() -> Html {
    html! {
        <section id={SectionId::Technologies.anchor()} class="page-section technologies">
            <style>
                {r#"
                    .technologies {
                        background: #000;
                    }
                    .tech-group {
                        margin-bottom: 4rem;
                    }
                    .tech-group:last-child {
                        margin-bottom: 0;
                    }
                    .tech-group h3 {
                        text-align: center;
                        color: #fff;
                        font-size: 1.25rem;
                        margin-bottom: 2rem;
                    }
                    .tech-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 640px) {
                        .tech-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    .tech-item {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        transition: transform 0.2s ease;
                    }
                    .tech-item:hover {
                        transform: translateY(-5px);
                    }
                    .tech-badge {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #333;
                        background: #1a1a1a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 0.75rem;
                        transition: border-color 0.3s ease;
                    }
                    .tech-badge:hover {
                        border-color: #505050;
                    }
                    .tech-badge img {
                        width: 3rem;
                        height: 3rem;
                        object-fit: contain;
                    }
                    .tech-item span {
                        color: #c0c0c0;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="grid-texture faint"></div>
            <div class="section-container">
                <SectionHeader
                    badge="Our Tech Stack"
                    title="Powered by Innovation"
                    subtitle="We leverage cutting-edge technologies to build powerful, scalable, and future-proof solutions."
                />
                { for TECH_GROUPS.iter().map(|group| html! {
                    <div class="tech-group" key={group.title}>
                        <Reveal motion={Motion::FadeInDown}>
                            <h3>{ group.title }</h3>
                        </Reveal>
                        <div class="tech-grid">
                            { for group.items.iter().enumerate().map(|(index, (name, icon))| html! {
                                <Reveal key={*name} motion={Motion::ZoomIn} delay_ms={index as u32 * 100}>
                                    <div class="tech-item">
                                        <div class="tech-badge">
                                            <img src={*icon} alt={*name} />
                                        </div>
                                        <span>{ *name }</span>
                                    </div>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
