#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where the contact form posts to. `None` keeps the simulated transport.
pub fn contact_endpoint() -> Option<String> {
    option_env!("KODASTRA_CONTACT_ENDPOINT")
        .filter(|path| !path.is_empty())
        .map(|path| format!("{}{}", get_backend_url(), path))
}

// Nav bar switches to its solid treatment past this offset.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
// A section is "in view" when it straddles this line below the viewport top.
pub const SECTION_REFERENCE_LINE: f64 = 100.0;
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 500.0;

pub const HEADING_REVEAL_OFFSET: f64 = 100.0;
pub const SUBHEADING_REVEAL_OFFSET: f64 = 50.0;

pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const COUNT_UP_TICK_MS: u32 = 16;

pub const ACK_DISMISS_MS: u32 = 6000;
