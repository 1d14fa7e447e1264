use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod anchors;
mod portfolio;
mod scroll {
    pub mod tracker;
    pub mod smooth;
}
mod animation {
    pub mod presets;
    pub mod reveal;
    pub mod count_up;
}
mod contact {
    pub mod form;
    pub mod submit;
}
mod components {
    pub mod animated_background;
    pub mod footer;
    pub mod logo;
    pub mod scroll_to_top;
    pub mod section_header;
}
mod sections {
    pub mod hero;
    pub mod services;
    pub mod work;
    pub mod about;
    pub mod technologies;
    pub mod contact;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use anchors::SectionId;
use components::logo::Logo;
use pages::{home::Home, not_found::NotFound};
use scroll::smooth::scroll_to_section;
use scroll::tracker::use_scroll_tracker;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_scroll_tracker(config::NAV_SCROLL_THRESHOLD, config::SECTION_REFERENCE_LINE);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Jumps to a section and folds the mobile menu back up.
    let go_to = {
        let menu_open = menu_open.clone();
        move |id: SectionId| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(id);
                menu_open.set(false);
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", scroll.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: background-color 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        color: #c0c0c0;
                        text-decoration: none;
                        font-size: 0.95rem;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-link.active {
                        color: #fff;
                    }
                    .nav-link.active::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -4px;
                        height: 2px;
                        background: linear-gradient(to right, #3a1c71, #4776e6);
                    }
                    .nav-cta {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #3a1c71, #4776e6);
                        color: #fff;
                        text-decoration: none;
                        transition: box-shadow 0.3s ease;
                    }
                    .nav-cta:hover {
                        box-shadow: 0 5px 15px rgba(71, 118, 230, 0.4);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 1.25rem;
                            padding: 1.5rem;
                            background: rgba(0, 0, 0, 0.95);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Logo />

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SectionId::ALL.iter().filter_map(|&id| id.nav_label().map(|label| (id, label))).map(|(id, label)| html! {
                        <a
                            key={id.anchor()}
                            href={id.href()}
                            class={classes!("nav-link", (scroll.active == Some(id)).then(|| "active"))}
                            onclick={go_to(id)}
                        >
                            { label }
                        </a>
                    }) }
                    <a href={SectionId::Contact.href()} class="nav-cta" onclick={go_to(SectionId::Contact)}>
                        {"Get Started"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
        }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::error!("error initializing log");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
