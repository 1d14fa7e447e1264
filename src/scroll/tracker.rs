use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::anchors::SectionId;

/// Vertical extent of a section relative to the viewport top, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

impl From<web_sys::DomRect> for SectionBounds {
    fn from(rect: web_sys::DomRect) -> Self {
        Self::new(rect.top(), rect.bottom())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scrolled: bool,
    pub active: Option<SectionId>,
}

/// Recomputes the scroll-derived nav state from scratch on every sample.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    threshold: f64,
    reference_line: f64,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(threshold: f64, reference_line: f64) -> Self {
        Self {
            threshold,
            reference_line,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Feeds one scroll sample. `bounds` is asked for sections in page order
    /// and the first one straddling the reference line wins; sections it
    /// can't measure are skipped. When nothing matches the previous active
    /// section is kept. Returns whether the derived state changed.
    pub fn sample<F>(&mut self, offset: f64, mut bounds: F) -> bool
    where
        F: FnMut(SectionId) -> Option<SectionBounds>,
    {
        let previous = self.state.clone();
        self.state.scrolled = offset > self.threshold;

        let line = self.reference_line;
        if let Some(id) = SectionId::ALL
            .into_iter()
            .find(|id| bounds(*id).map_or(false, |b| b.straddles(line)))
        {
            self.state.active = Some(id);
        }

        if self.state.active != previous.active {
            log::debug!("active section: {:?} -> {:?}", previous.active, self.state.active);
        }
        self.state != previous
    }
}

fn measure(document: &web_sys::Document, id: SectionId) -> Option<SectionBounds> {
    document
        .get_element_by_id(id.anchor())
        .map(|element| SectionBounds::from(element.get_bounding_client_rect()))
}

/// Window scroll listener feeding a [`ScrollTracker`]. The listener lives as
/// long as the calling component and is removed when it unmounts.
#[hook]
pub fn use_scroll_tracker(threshold: f64, reference_line: f64) -> ScrollState {
    let state = use_state(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |&(threshold, reference_line)| {
                let listener = web_sys::window().map(|window| {
                    let sampler = window.clone();
                    let mut tracker = ScrollTracker::new(threshold, reference_line);

                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let Some(document) = sampler.document() else {
                            return;
                        };
                        let offset = sampler.scroll_y().unwrap_or(0.0);
                        if tracker.sample(offset, |id| measure(&document, id)) {
                            state.set(tracker.state().clone());
                        }
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        log::warn!("could not attach scroll listener");
                    }

                    // Initial check so a reload mid-page highlights the right link
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
            (threshold, reference_line),
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(work: SectionBounds) -> impl FnMut(SectionId) -> Option<SectionBounds> {
        move |id| match id {
            SectionId::Hero => Some(SectionBounds::new(-1400.0, -600.0)),
            SectionId::Services => Some(SectionBounds::new(-600.0, 60.0)),
            SectionId::Work => Some(work),
            SectionId::About => Some(SectionBounds::new(900.0, 1700.0)),
            _ => None,
        }
    }

    #[test]
    fn section_straddling_reference_line_becomes_active() {
        let mut tracker = ScrollTracker::new(50.0, 100.0);
        assert!(tracker.sample(1400.0, layout(SectionBounds::new(60.0, 900.0))));
        assert_eq!(tracker.state().active, Some(SectionId::Work));
        assert!(tracker.state().scrolled);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = ScrollTracker::new(50.0, 100.0);
        tracker.sample(1400.0, layout(SectionBounds::new(60.0, 900.0)));

        // Gap between sections, nothing covers the line
        let changed = tracker.sample(1400.0, |_| Some(SectionBounds::new(300.0, 400.0)));
        assert!(!changed);
        assert_eq!(tracker.state().active, Some(SectionId::Work));
    }

    #[test]
    fn first_section_in_page_order_wins_ties() {
        let mut tracker = ScrollTracker::new(50.0, 100.0);
        tracker.sample(800.0, |id| match id {
            SectionId::Services | SectionId::About => Some(SectionBounds::new(0.0, 200.0)),
            _ => None,
        });
        assert_eq!(tracker.state().active, Some(SectionId::Services));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut tracker = ScrollTracker::new(50.0, 100.0);
        tracker.sample(50.0, |_| None);
        assert!(!tracker.state().scrolled);
        assert!(tracker.sample(51.0, |_| None));
        assert!(tracker.state().scrolled);
        assert!(tracker.sample(0.0, |_| None));
        assert!(!tracker.state().scrolled);
    }

    #[test]
    fn edges_touching_the_line_count_as_straddling() {
        assert!(SectionBounds::new(100.0, 500.0).straddles(100.0));
        assert!(SectionBounds::new(-400.0, 100.0).straddles(100.0));
        assert!(!SectionBounds::new(100.5, 500.0).straddles(100.0));
    }
}
