//! Contact form: inline validation and the simulated submit sequence.
//!
//! Rules live in `app::validate`; this module owns the presentation (the
//! `.form-group` error class plus the matching `#<field>Error` text node) and
//! the two chained timers that fake a backend round trip. A real submission
//! endpoint would replace the timer chain here.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement};

use crate::app::state::AppState;
use crate::app::validate::{self, Field};
use crate::ui::{dom, schedule};

/// How long the button shows the sending state.
pub const SENDING_MS: u32 = 1500;
/// How long the success state lingers before the button is restored.
pub const SUCCESS_MS: u32 = 2000;

const SENDING_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
const SUCCESS_HTML: &str = r#"<i class="fas fa-check"></i>"#;
const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #27ae60, #2ecc71)";

fn field_input(state: &AppState, field: Field) -> Option<Element> {
    dom::by_id(&state.document, field.input_id())
}

fn field_value(state: &AppState, field: Field) -> String {
    field_input(state, field)
        .map(|el| dom::field_value(&el))
        .unwrap_or_default()
}

/// Mark the field's form group and fill its error container.
pub fn show_field_error(state: &AppState, field: Field, message: &str) {
    if let Some(input) = field_input(state, field)
        && let Ok(Some(group)) = input.closest(".form-group")
    {
        dom::add_class(&group, "error");
    }
    if let Some(container) = dom::by_id(&state.document, field.error_id()) {
        dom::set_text(&container, message);
    }
}

pub fn clear_field_error(state: &AppState, field: Field) {
    if let Some(input) = field_input(state, field)
        && let Ok(Some(group)) = input.closest(".form-group")
    {
        dom::remove_class(&group, "error");
    }
    if let Some(container) = dom::by_id(&state.document, field.error_id()) {
        dom::set_text(&container, "");
    }
}

/// Run every field's rules, updating the inline errors as it goes.
pub fn validate_form(state: &AppState) -> bool {
    let mut valid = true;
    for field in Field::ALL {
        match validate::validate(field, &field_value(state, field)) {
            Ok(()) => clear_field_error(state, field),
            Err(message) => {
                show_field_error(state, field, message);
                valid = false;
            }
        }
    }
    valid
}

fn wire_field_events(state: &Rc<AppState>) {
    for field in Field::ALL {
        let Some(input) = field_input(state, field) else {
            continue;
        };

        // Typing clears the error immediately, valid or not.
        let input_state = Rc::clone(state);
        dom::on(&input, "input", move |_| {
            clear_field_error(&input_state, field);
        });

        // Blur re-validates only the email format; other non-empty fields
        // just clear their error.
        let blur_state = Rc::clone(state);
        dom::on(&input, "blur", move |_| {
            let value = field_value(&blur_state, field);
            let value = value.trim();
            if value.is_empty() {
                return;
            }
            if field == Field::Email && !validate::is_valid_email(value) {
                show_field_error(&blur_state, field, "Please enter a valid email address");
            } else {
                clear_field_error(&blur_state, field);
            }
        });
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector(".btn-submit")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

/// Put the button back to its idle state and allow submissions again.
fn restore_button(button: &HtmlButtonElement, original_html: &str, pending: &Cell<bool>) {
    button.set_inner_html(original_html);
    dom::clear_style(button, "background");
    button.set_disabled(false);
    pending.set(false);
}

/// Drive the button through sending, success, and restore, then reset the
/// form and every field error. Timings are fixed; no network call is made.
fn run_submit_sequence(state: &Rc<AppState>, form: HtmlFormElement, pending: Rc<Cell<bool>>) {
    let Some(button) = submit_button(&form) else {
        return;
    };
    let original_html = button.inner_html();
    let fallback_html = original_html.clone();
    button.set_inner_html(SENDING_HTML);
    button.set_disabled(true);
    pending.set(true);

    let success_state = Rc::clone(state);
    let success_button = button.clone();
    let sequence_pending = Rc::clone(&pending);
    let scheduled = schedule::once(&state.window, SENDING_MS, move || {
        success_button.set_inner_html(SUCCESS_HTML);
        dom::set_style(&success_button, "background", SUCCESS_BACKGROUND);

        form.reset();
        for field in Field::ALL {
            clear_field_error(&success_state, field);
        }

        let restore_pending = Rc::clone(&sequence_pending);
        let restore_html = original_html.clone();
        let final_button = success_button.clone();
        let restore_scheduled = schedule::once(&success_state.window, SUCCESS_MS, move || {
            restore_button(&final_button, &restore_html, &restore_pending);
        });
        if restore_scheduled.is_err() {
            // Timer never started; restore right away rather than leaving the
            // button disabled and submissions blocked forever.
            restore_button(&success_button, &original_html, &sequence_pending);
        }
    });
    if scheduled.is_err() {
        // Same fallback at the first hop.
        restore_button(&button, &fallback_html, &pending);
    }
}

pub fn wire(state: &Rc<AppState>) {
    let Some(form) = state.contact_form.clone() else {
        return;
    };

    wire_field_events(state);

    let pending = Rc::new(Cell::new(false));
    let submit_state = Rc::clone(state);
    let listener_form = form.clone();
    dom::on(&form, "submit", move |event| {
        event.prevent_default();

        // One sequence at a time; the button is disabled but a form can
        // still be submitted from the keyboard.
        if pending.get() {
            return;
        }
        if !validate_form(&submit_state) {
            return;
        }
        run_submit_sequence(&submit_state, listener_form.clone(), Rc::clone(&pending));
    });
}
