//! Client-side behavior for a single-page portfolio website.
//!
//! Compiled to WebAssembly, the crate wires DOM elements to presentational
//! effects: a typewriter animation, scroll-driven reveal and progress
//! indicators, a theme toggle persisted to local storage, a mobile navigation
//! menu, contact-form validation with a simulated submit, and a CV download
//! trigger. Missing markup degrades to a no-op per component; nothing here is
//! fatal.

pub mod app;

#[cfg(target_arch = "wasm32")]
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod boot {
    use std::rc::Rc;

    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::app::error::Result;
    use crate::app::state::AppState;
    use crate::ui;

    /// Entry point, invoked by the wasm loader once the module is ready.
    #[wasm_bindgen(start)]
    pub fn start() {
        if let Err(err) = run() {
            web_sys::console::error_1(&format!("portfolio-web failed to start: {err}").into());
        }
    }

    fn run() -> Result<()> {
        let state = Rc::new(AppState::new()?);

        ui::theme::wire(&state);
        ui::navigation::wire(&state);
        ui::scroll_effects::wire(&state);
        ui::observers::wire(&state.document)?;
        ui::contact_form::wire(&state);
        ui::downloads::wire(&state.document);

        // The handle is dropped on purpose: the loop runs for the page's
        // lifetime, exactly like the rest of the listeners.
        let _typewriter = ui::typewriter::wire(&state);

        Ok(())
    }
}
