//! Dark/light mode: apply, persist, and wire the toggle button.

use std::rc::Rc;

use crate::app::state::AppState;
use crate::app::theme::{LIGHT_MODE_CLASS, STORAGE_KEY, Theme};
use crate::ui::dom;

/// Read the persisted preference, defaulting to dark. An unrecognized stored
/// value is warned about and treated as absent.
pub fn preferred_theme(state: &AppState) -> Theme {
    let stored = dom::storage_get(&state.window, STORAGE_KEY);
    if let Some(value) = stored.as_deref()
        && Theme::is_unrecognized(value)
    {
        web_sys::console::warn_1(
            &format!("ignoring unrecognized stored theme {value:?}, using dark").into(),
        );
    }
    Theme::from_stored(stored.as_deref())
}

/// Apply `theme` to the page and persist it.
pub fn apply_theme(state: &AppState, theme: Theme) {
    if let Some(body) = state.body() {
        dom::set_class(&body, LIGHT_MODE_CLASS, theme == Theme::Light);
    }
    dom::storage_set(&state.window, STORAGE_KEY, theme.as_str());

    if let Some(icon) = &state.theme_icon {
        dom::remove_class(icon, Theme::Dark.icon_class());
        dom::remove_class(icon, Theme::Light.icon_class());
        dom::add_class(icon, theme.icon_class());
    }
}

/// The theme currently applied to the document body.
pub fn current_theme(state: &AppState) -> Theme {
    match state.body() {
        Some(body) if dom::has_class(&body, LIGHT_MODE_CLASS) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Apply the persisted preference and wire the toggle button.
pub fn wire(state: &Rc<AppState>) {
    apply_theme(state, preferred_theme(state));

    if let Some(toggle) = &state.theme_toggle {
        let state = Rc::clone(state);
        dom::on(toggle, "click", move |_| {
            apply_theme(&state, current_theme(&state).toggled());
        });
    }
}
