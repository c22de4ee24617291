//! Scroll-derived state, recomputed from scratch on every scroll tick.
//!
//! All geometry comes in as plain numbers so the math can be tested without a
//! rendering surface; `ui::scroll_effects` feeds it live values.

/// Scroll offset past which the navbar gets its shadow.
pub const NAVBAR_SHADOW_OFFSET: f64 = 50.0;

/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_OFFSET: f64 = 500.0;

/// Fallback navbar height when the element is missing.
pub const DEFAULT_NAVBAR_HEIGHT: f64 = 70.0;

/// Read-scroll progress through the page, as a percentage.
///
/// Returns `None` when the page doesn't scroll (max scroll is not positive),
/// in which case the indicator is left untouched.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Option<f64> {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 {
        return None;
    }
    Some(scroll_y / max_scroll * 100.0)
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SHADOW_OFFSET
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// Geometry of one `section[id]` element, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub offset_height: f64,
}

/// Id of the section considered in view for nav highlighting.
///
/// A section is in view when `scroll_y` falls within its bounds after shifting
/// its top up by the navbar height. When sections overlap, the last one in
/// document order wins.
pub fn active_section<'a>(
    scroll_y: f64,
    navbar_height: f64,
    sections: &'a [SectionBounds],
) -> Option<&'a str> {
    let mut current = None;
    for section in sections {
        let top = section.offset_top - navbar_height;
        if scroll_y >= top && scroll_y < top + section.offset_height {
            current = Some(section.id.as_str());
        }
    }
    current
}
