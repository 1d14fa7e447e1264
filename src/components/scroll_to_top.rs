use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;
use crate::scroll::smooth::scroll_to_top;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TO_TOP_THRESHOLD
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            class={classes!("scroll-to-top", should_show(scroll_y).then(|| "shown"))}
            aria-label="Scroll to top"
            onclick={onclick}
        >
            <style>
                {r#"
                    .scroll-to-top {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 40;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: 1px solid #505070;
                        background: linear-gradient(to right, #3a1c71, #4776e6);
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                        opacity: 0;
                        transform: translateY(20px);
                        pointer-events: none;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .scroll-to-top.shown {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }
                "#}
            </style>
            {"↑"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_past_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(500.0));
        assert!(should_show(501.0));
    }
}
