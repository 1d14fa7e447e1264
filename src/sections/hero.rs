use yew::prelude::*;

use crate::anchors::SectionId;
use crate::components::animated_background::AnimatedBackground;
use crate::scroll::smooth::scroll_to_section;

fn jump_to(id: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SectionId::Hero.anchor()} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #0a0a0a, #101020, #0a0a15);
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        animation: hero-zoom 1.5s cubic-bezier(0.22, 1, 0.36, 1) both;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 20;
                        max-width: 56rem;
                        padding: 5rem 1.5rem 0;
                        text-align: center;
                    }
                    .hero-badge {
                        display: inline-block;
                        margin-bottom: 1.5rem;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #404060, #404040);
                        color: #d0d0d0;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        animation: hero-rise 0.5s ease-out both;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        animation: hero-rise 0.8s ease-out 0.5s both;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #d0d0d0;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        animation: hero-rise 0.8s ease-out 0.9s both;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-cta-group a {
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        text-decoration: none;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                        animation: hero-rise 0.6s ease-out both;
                    }
                    .hero-cta-group a:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.4);
                    }
                    .hero-cta-group a:nth-child(1) { animation-delay: 1.3s; }
                    .hero-cta-group a:nth-child(2) { animation-delay: 1.5s; }
                    .cta-primary {
                        background: linear-gradient(to right, #c0c0c0, #a0a0c0);
                        color: #000;
                    }
                    .cta-secondary {
                        border: 1px solid #404060;
                        color: #c0c0c0;
                    }
                    .hero-wave {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 8rem;
                        z-index: 10;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        z-index: 20;
                        width: 2rem;
                        height: 3rem;
                        margin-left: -1rem;
                        border: 2px solid #c0c0c0;
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        animation: hero-bob 1s ease-in-out 2s infinite alternate both;
                    }
                    .scroll-indicator span {
                        width: 0.25rem;
                        height: 0.75rem;
                        margin-top: 0.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(to bottom, #c0c0c0, #a0a0c0);
                        animation: hero-dot 1.5s ease-in-out infinite;
                    }
                    @keyframes hero-zoom {
                        from { transform: scale(1.2); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    @keyframes hero-rise {
                        from { transform: translateY(30px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes hero-bob {
                        from { transform: translateY(-10px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes hero-dot {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                "#}
            </style>
            <div class="hero-backdrop">
                <AnimatedBackground variant="particles" />
                <div class="grid-texture"></div>
            </div>

            <div class="hero-content">
                <span class="hero-badge">{"Innovative Software Solutions"}</span>
                <h1 class="text-gradient">
                    {"Transforming Ideas Into"}<br />{"Digital Reality"}
                </h1>
                <p class="hero-subtitle">
                    {"Specialized in AI, Web3, Web Applications and Software Development. We create cutting-edge solutions that drive innovation and growth."}
                </p>
                <div class="hero-cta-group">
                    <a href={SectionId::Contact.href()} class="cta-primary" onclick={jump_to(SectionId::Contact)}>
                        {"Get Started"}
                    </a>
                    <a href={SectionId::Services.href()} class="cta-secondary" onclick={jump_to(SectionId::Services)}>
                        {"Our Services"}
                    </a>
                </div>
            </div>

            <svg class="hero-wave" viewBox="0 0 1200 120" preserveAspectRatio="none">
                <path
                    d="M321.39,56.44c58-10.79,114.16-30.13,172-41.86,82.39-16.72,168.19-17.73,250.45-.39C823.78,31,906.67,72,985.66,92.83c70.05,18.48,146.53,26.09,214.34,3V120H0V0C0,0,0,0,0,0z"
                    fill="#0a0a15"
                />
            </svg>

            <div class="scroll-indicator"><span></span></div>
        </section>
    }
}
