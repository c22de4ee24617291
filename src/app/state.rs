//! One-time cache of the DOM elements the components work against.
//!
//! Built once at startup and shared behind an `Rc`; no module-level globals.
//! Every handle is optional so the page degrades gracefully when a piece of
//! markup is absent.

use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Window};

use super::error::Result;
use crate::ui::dom;

pub struct AppState {
    pub window: Window,
    pub document: Document,
    pub navbar: Option<HtmlElement>,
    pub nav_menu: Option<Element>,
    pub hamburger: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,
    pub back_to_top: Option<Element>,
    pub progress_bar: Option<HtmlElement>,
    pub contact_form: Option<HtmlFormElement>,
    pub typed_text: Option<Element>,
}

impl AppState {
    /// Resolve every element the components need. Only the window and
    /// document themselves are required.
    pub fn new() -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        Ok(Self::from_document(window, document))
    }

    pub fn from_document(window: Window, document: Document) -> Self {
        use wasm_bindgen::JsCast;

        let theme_toggle = dom::by_id(&document, "themeToggle");
        let theme_icon = theme_toggle
            .as_ref()
            .and_then(|toggle| toggle.query_selector(".theme-icon").ok().flatten());
        let contact_form = dom::by_id(&document, "contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());

        Self {
            navbar: dom::html_by_id(&document, "navbar"),
            nav_menu: dom::query(&document, ".nav-menu"),
            hamburger: dom::by_id(&document, "hamburger"),
            theme_toggle,
            theme_icon,
            back_to_top: dom::by_id(&document, "backToTop"),
            progress_bar: dom::html_by_id(&document, "progressBar"),
            contact_form,
            typed_text: dom::by_id(&document, "typedText"),
            window,
            document,
        }
    }

    /// The `<body>` element, when the document has one.
    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}
