use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::scroll_to_top::ScrollToTop;
use crate::sections::{
    about::About, contact::Contact, hero::Hero, services::Services, technologies::Technologies,
    work::Work,
};

/// The whole site: every section stacked in nav order.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .page-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                    }
                    .section-container {
                        position: relative;
                        z-index: 1;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-badge {
                        display: inline-block;
                        padding: 0.375rem 1rem;
                        margin-bottom: 1rem;
                        border-radius: 9999px;
                        background: rgba(71, 118, 230, 0.1);
                        border: 1px solid rgba(71, 118, 230, 0.3);
                        color: #c0c0c0;
                        font-size: 0.875rem;
                    }
                    .section-title {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .section-subtitle {
                        max-width: 48rem;
                        margin: 0 auto;
                        color: #a0a0a0;
                        font-size: 1.125rem;
                    }
                    .text-gradient {
                        background: linear-gradient(to right, #e0e0e0, #4776e6, #e0e0e0);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .grid-texture {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background-image:
                            linear-gradient(rgba(255, 255, 255, 0.05) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(255, 255, 255, 0.05) 1px, transparent 1px);
                        background-size: 40px 40px;
                        opacity: 0.1;
                    }
                    .grid-texture.faint {
                        opacity: 0.05;
                    }
                "#}
            </style>
            <main>
                <Hero />
                <Services />
                <Work />
                <About />
                <Technologies />
                <Contact />
            </main>
            <Footer />
            <ScrollToTop />
        </>
    }
}
