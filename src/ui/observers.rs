//! Viewport-intersection watchers: scroll reveal and skill-bar fills.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit};

use crate::app::error::{AppError, Result};
use crate::ui::dom;

/// Fraction of a reveal element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Viewport shrunk by 50px at the bottom, so elements reveal slightly late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Fraction of a skill bar that must be visible before it animates.
pub const SKILL_THRESHOLD: f64 = 0.3;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn new_observer(
    callback: ObserverCallback,
    threshold: f64,
    root_margin: Option<&str>,
) -> Result<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(AppError::from_js)?;
    callback.forget();
    Ok(observer)
}

fn entries_of(array: js_sys::Array) -> impl Iterator<Item = IntersectionObserverEntry> {
    array
        .into_iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
}

/// Reveal elements get a persistent `active` class the first time 10% of them
/// is inside the (bottom-shrunk) viewport. They stay observed, so the class is
/// re-added if it is ever removed and the element re-enters.
pub fn wire_reveal(document: &Document) -> Result<()> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries_of(entries) {
                if entry.is_intersecting() {
                    dom::add_class(&entry.target(), "active");
                }
            }
        },
    ));
    let observer = new_observer(callback, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN))?;
    for element in dom::query_all(document, ".reveal") {
        observer.observe(&element);
    }
    Ok(())
}

/// Skill bars animate at most once: on first intersection the `data-progress`
/// percentage becomes the `--progress-width` style variable, the `animated`
/// class is added, and the element is unobserved.
pub fn wire_skill_bars(document: &Document) -> Result<()> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries_of(entries) {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(progress) = target.get_attribute("data-progress")
                    && let Some(html) = target.dyn_ref::<HtmlElement>()
                {
                    dom::set_style(html, "--progress-width", &format!("{progress}%"));
                }
                dom::add_class(&target, "animated");
                observer.unobserve(&target);
            }
        },
    ));
    let observer = new_observer(callback, SKILL_THRESHOLD, None)?;
    for element in dom::query_all(document, ".skill-progress") {
        observer.observe(&element);
    }
    Ok(())
}

pub fn wire(document: &Document) -> Result<()> {
    wire_reveal(document)?;
    wire_skill_bars(document)
}
