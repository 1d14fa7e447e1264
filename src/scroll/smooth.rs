use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::anchors::SectionId;

// Height of the fixed nav bar, kept clear above a scrolled-to section.
const HEADER_OFFSET: f64 = 80.0;

fn smooth_scroll(window: &web_sys::Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll(&window, 0.0);
    }
}

/// Scrolls so the section's top lands just under the nav bar. Returns false
/// when the section isn't on the page, in which case nothing moves.
pub fn scroll_to_section(id: SectionId) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(id.anchor()))
    else {
        log::warn!("no element for section #{}", id);
        return false;
    };

    let page_y = window.scroll_y().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + page_y - HEADER_OFFSET;
    smooth_scroll(&window, top);
    true
}
