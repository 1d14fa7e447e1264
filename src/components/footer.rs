use chrono::Datelike;
use yew::prelude::*;

use crate::anchors::SectionId;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid #1a1a1a;
                        padding: 2.5rem 1.5rem;
                        text-align: center;
                        color: #808080;
                        font-size: 0.875rem;
                        background: #0a0a0a;
                    }
                    .site-footer nav {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .site-footer a {
                        color: #a0a0a0;
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        color: #fff;
                    }
                "#}
            </style>
            <nav>
                { for SectionId::ALL.into_iter().filter_map(|id| id.nav_label().map(|label| html! {
                    <a href={id.href()}>{ label }</a>
                })) }
            </nav>
            <p>{ format!("© {} Kodastra. All rights reserved.", year) }</p>
        </footer>
    }
}
