use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use super::presets::Motion;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// What happens when an element scrolls back above its start line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Stay visible forever after the first entrance.
    Once,
    /// Hide again, and replay the entrance on the next forward crossing.
    Reverse,
}

/// Two-state entrance trigger. The start line sits `start_offset` pixels
/// above the viewport bottom; the element's top crossing it is the forward
/// edge.
#[derive(Clone, Debug)]
pub struct RevealTrigger {
    start_offset: f64,
    policy: ReplayPolicy,
    state: RevealState,
}

impl RevealTrigger {
    pub fn new(start_offset: f64, policy: ReplayPolicy) -> Self {
        Self {
            start_offset,
            policy,
            state: RevealState::Hidden,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// `element_top` is relative to the viewport top. Returns whether the
    /// state flipped.
    pub fn observe(&mut self, element_top: f64, viewport_height: f64) -> bool {
        let past_start = element_top <= viewport_height - self.start_offset;
        let next = match (self.state, past_start, self.policy) {
            (RevealState::Hidden, true, _) => RevealState::Visible,
            (RevealState::Visible, false, ReplayPolicy::Reverse) => RevealState::Hidden,
            (current, _, _) => current,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

/// Tracks `node` against the viewport until the component unmounts.
#[hook]
pub fn use_reveal(node: NodeRef, start_offset: f64, policy: ReplayPolicy) -> RevealState {
    let state = use_state(|| RevealState::Hidden);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(node, start_offset, policy)| {
                let node = node.clone();
                let mut trigger = RevealTrigger::new(*start_offset, *policy);

                let listener = web_sys::window().map(|window| {
                    let sampler = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let Some(element) = node.cast::<web_sys::Element>() else {
                            return;
                        };
                        let viewport_height = sampler
                            .inner_height()
                            .ok()
                            .and_then(|height| height.as_f64())
                            .unwrap_or(0.0);
                        let top = element.get_bounding_client_rect().top();
                        if trigger.observe(top, viewport_height) {
                            state.set(trigger.state());
                        }
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        log::warn!("could not attach reveal scroll listener");
                    }
                    // Elements already on screen at mount reveal straight away
                    let _ = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&JsValue::NULL);

                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (node, start_offset, policy),
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(Motion::FadeInUp)]
    pub motion: Motion,
    #[prop_or(ReplayPolicy::Once)]
    pub policy: ReplayPolicy,
    #[prop_or(0.0)]
    pub start_offset: f64,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), props.start_offset, props.policy);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone())}
            style={props.motion.style(state, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn forward_crossing_reveals() {
        let mut trigger = RevealTrigger::new(100.0, ReplayPolicy::Reverse);
        assert!(!trigger.observe(750.0, VIEWPORT));
        assert_eq!(trigger.state(), RevealState::Hidden);
        assert!(trigger.observe(700.0, VIEWPORT));
        assert_eq!(trigger.state(), RevealState::Visible);
        assert!(!trigger.observe(200.0, VIEWPORT));
    }

    #[test]
    fn reversible_element_hides_when_scrolled_back_out() {
        let mut trigger = RevealTrigger::new(100.0, ReplayPolicy::Reverse);
        trigger.observe(300.0, VIEWPORT);
        assert!(trigger.observe(760.0, VIEWPORT));
        assert_eq!(trigger.state(), RevealState::Hidden);
        assert!(trigger.observe(300.0, VIEWPORT));
        assert_eq!(trigger.state(), RevealState::Visible);
    }

    #[test]
    fn play_once_element_never_hides_again() {
        let mut trigger = RevealTrigger::new(0.0, ReplayPolicy::Once);
        assert!(trigger.observe(400.0, VIEWPORT));
        assert!(!trigger.observe(2000.0, VIEWPORT));
        assert_eq!(trigger.state(), RevealState::Visible);
    }

    #[test]
    fn element_above_viewport_at_mount_counts_as_crossed() {
        let mut trigger = RevealTrigger::new(100.0, ReplayPolicy::Once);
        assert!(trigger.observe(-500.0, VIEWPORT));
    }
}
