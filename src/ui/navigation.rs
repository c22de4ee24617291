//! In-page navigation: smooth-scroll anchors and the mobile menu.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::app::state::AppState;
use crate::ui::dom;

const ACTIVE_CLASS: &str = "active";

/// Close the mobile menu and release the body scroll lock.
pub fn close_menu(state: &AppState) {
    if let Some(menu) = &state.nav_menu {
        dom::remove_class(menu, ACTIVE_CLASS);
    }
    if let Some(hamburger) = &state.hamburger {
        dom::remove_class(hamburger, ACTIVE_CLASS);
    }
    if let Some(body) = state.body() {
        dom::clear_style(&body, "overflow");
    }
}

pub fn menu_open(state: &AppState) -> bool {
    state
        .nav_menu
        .as_ref()
        .is_some_and(|menu| dom::has_class(menu, ACTIVE_CLASS))
}

/// Intercept every same-page anchor: prevent the jump, smooth-scroll to the
/// target, and close the mobile menu. A bare `#` href is left alone.
fn wire_anchor_links(state: &Rc<AppState>) {
    for anchor in dom::query_all(&state.document, "a[href^=\"#\"]") {
        let state = Rc::clone(state);
        let anchor_el = anchor.clone();
        dom::on(&anchor, "click", move |event| {
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            event.prevent_default();

            if let Some(target) = dom::query(&state.document, &href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
                close_menu(&state);
            }
        });
    }
}

/// Hamburger click toggles the menu and locks body scrolling while open.
fn wire_hamburger(state: &Rc<AppState>) {
    let Some(hamburger) = &state.hamburger else {
        return;
    };
    let state = Rc::clone(state);
    dom::on(hamburger, "click", move |_| {
        if let Some(hamburger) = &state.hamburger {
            dom::toggle_class(hamburger, ACTIVE_CLASS);
        }
        let open = state
            .nav_menu
            .as_ref()
            .map(|menu| dom::toggle_class(menu, ACTIVE_CLASS))
            .unwrap_or(false);
        if let Some(body) = state.body() {
            if open {
                dom::set_style(&body, "overflow", "hidden");
            } else {
                dom::clear_style(&body, "overflow");
            }
        }
    });
}

/// A click anywhere outside the open menu and the hamburger dismisses it.
fn wire_outside_click(state: &Rc<AppState>) {
    let state = Rc::clone(state);
    let document = state.document.clone();
    dom::on(&document, "click", move |event| {
        if !menu_open(&state) {
            return;
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let in_menu = state
            .nav_menu
            .as_ref()
            .is_some_and(|menu| menu.contains(Some(&target)));
        let in_hamburger = state
            .hamburger
            .as_ref()
            .is_some_and(|h| h.contains(Some(&target)));
        if !in_menu && !in_hamburger {
            close_menu(&state);
        }
    });
}

pub fn wire(state: &Rc<AppState>) {
    wire_anchor_links(state);
    wire_hamburger(state);
    wire_outside_click(state);
}
