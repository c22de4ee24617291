//! Scroll-driven effects: read progress bar, navbar state, back-to-top.
//!
//! Three independent handlers run on every scroll event, with no throttling,
//! and each runs once eagerly at wiring time so the initial state is correct
//! before the first scroll. The math lives in `app::scroll`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::app::scroll::{self, DEFAULT_NAVBAR_HEIGHT, SectionBounds};
use crate::app::state::AppState;
use crate::ui::dom;

fn scroll_y(state: &AppState) -> f64 {
    state.window.scroll_y().unwrap_or(0.0)
}

/// Width of the read-progress indicator. Skipped entirely when the page has
/// no scroll range, leaving the previous width in place.
pub fn update_progress(state: &AppState) {
    let Some(root) = state.document.document_element() else {
        return;
    };
    let viewport = state
        .window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let Some(percent) = scroll::progress_percent(scroll_y(state), root.scroll_height() as f64, viewport)
    else {
        return;
    };
    if let Some(bar) = &state.progress_bar {
        dom::set_style(bar, "width", &format!("{percent}%"));
    }
}

/// Geometry of every `section[id]`, in document order.
fn section_bounds(state: &AppState) -> Vec<SectionBounds> {
    dom::query_all(&state.document, "section[id]")
        .into_iter()
        .filter_map(|el| {
            let html = el.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id: html.id(),
                offset_top: html.offset_top() as f64,
                offset_height: html.offset_height() as f64,
            })
        })
        .collect()
}

/// Navbar shadow past the scroll threshold, and highlight of the nav link
/// whose fragment matches the active section. All links are cleared first.
pub fn update_navbar(state: &AppState) {
    let y = scroll_y(state);
    let navbar_height = state
        .navbar
        .as_ref()
        .map(|navbar| navbar.offset_height() as f64)
        .unwrap_or(DEFAULT_NAVBAR_HEIGHT);

    if let Some(navbar) = &state.navbar {
        dom::set_class(navbar, "scrolled", scroll::navbar_scrolled(y));
    }

    let sections = section_bounds(state);
    let current = scroll::active_section(y, navbar_height, &sections);

    for link in dom::query_all(&state.document, ".nav-link") {
        dom::remove_class(&link, "active");
        if let (Some(id), Some(href)) = (current, link.get_attribute("href"))
            && href == format!("#{id}")
        {
            dom::add_class(&link, "active");
        }
    }
}

pub fn update_back_to_top(state: &AppState) {
    if let Some(button) = &state.back_to_top {
        dom::set_class(button, "visible", scroll::back_to_top_visible(scroll_y(state)));
    }
}

fn on_scroll(state: &Rc<AppState>, handler: fn(&AppState)) {
    handler(state);
    let window = state.window.clone();
    let state = Rc::clone(state);
    dom::on(&window, "scroll", move |_| handler(&state));
}

pub fn wire(state: &Rc<AppState>) {
    on_scroll(state, update_progress);
    on_scroll(state, update_navbar);
    on_scroll(state, update_back_to_top);

    if let Some(button) = &state.back_to_top {
        let window = state.window.clone();
        dom::on(button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}
