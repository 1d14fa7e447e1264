use yew::prelude::*;

use crate::anchors::SectionId;
use crate::scroll::smooth::scroll_to_section;

#[function_component(Logo)]
pub fn logo() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(SectionId::Hero);
    });

    html! {
        <a href={SectionId::Hero.href()} class="logo" onclick={onclick}>
            <style>
                {r#"
                    .logo {
                        display: flex;
                        align-items: center;
                        text-decoration: none;
                    }
                    .logo-mark {
                        position: relative;
                        width: 2.5rem;
                        height: 2.5rem;
                        margin-right: 0.5rem;
                        border: 2px solid #c0c0c0;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #c0c0c0;
                        font-weight: 700;
                        font-size: 1.5rem;
                        animation: logo-pop 0.5s ease-out 0.2s both;
                    }
                    .logo-word {
                        font-size: 1.25rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        animation: logo-slide 0.5s ease-out 0.6s both;
                    }
                    @keyframes logo-pop {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                    @keyframes logo-slide {
                        from { transform: translateX(-20px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                "#}
            </style>
            <span class="logo-mark">{"K"}</span>
            <span class="logo-word text-gradient">{"KODASTRA"}</span>
        </a>
    }
}
