//! Thin wrappers over web-sys lookups and mutations.
//!
//! Everything here degrades to `None` or a no-op when an element is missing,
//! so components can be wired against partial markup. Core logic in `app::*`
//! never calls web-sys directly; this module is the only mutation channel.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, Storage, Window};

use crate::app::error::{AppError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| AppError::Dom("no window".to_string()))
}

pub fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| AppError::Dom("no document".to_string()))
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    by_id(document, id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            elements.push(el);
        }
    }
    elements
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Add or remove `class` according to `on`, like `classList.toggle(c, force)`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn toggle_class(element: &Element, class: &str) -> bool {
    element.class_list().toggle(class).unwrap_or(false)
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

/// Current value of a form control, for both inputs and textareas.
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn local_storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

/// Read a persisted value; storage unavailability reads as absent.
pub fn storage_get(window: &Window, key: &str) -> Option<String> {
    local_storage(window)?.get_item(key).ok().flatten()
}

/// Persist a value; silently dropped when storage is unavailable.
pub fn storage_set(window: &Window, key: &str, value: &str) {
    if let Some(storage) = local_storage(window) {
        let _ = storage.set_item(key, value);
    }
}

/// Attach a persistent event listener. The closure lives for the page's
/// lifetime, which is how every listener here behaves.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let attached = target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok();
    if attached {
        closure.forget();
    }
}
