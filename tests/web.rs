//! In-browser integration tests, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use portfolio_web::app::state::AppState;
use portfolio_web::app::theme::{LIGHT_MODE_CLASS, STORAGE_KEY, Theme};
use portfolio_web::app::validate::Field;
use portfolio_web::ui::{contact_form, dom, navigation, scroll_effects, theme, typewriter};

wasm_bindgen_test_configure!(run_in_browser);

/// Fresh app state over the given body markup, with theme storage cleared.
fn setup(body_html: &str) -> Rc<AppState> {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(body_html);
    body.class_list().remove_1(LIGHT_MODE_CLASS).ok();
    if let Ok(Some(storage)) = window.local_storage() {
        storage.remove_item(STORAGE_KEY).unwrap();
    }
    Rc::new(AppState::from_document(window, document))
}

fn stored_theme(state: &AppState) -> Option<String> {
    state
        .window
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(STORAGE_KEY)
        .unwrap()
}

#[wasm_bindgen_test]
fn theme_applies_and_persists() {
    let state = setup(
        r#"<button id="themeToggle"><i class="theme-icon fa-moon"></i></button>"#,
    );

    theme::apply_theme(&state, Theme::Light);
    let body = state.body().unwrap();
    assert!(body.class_list().contains(LIGHT_MODE_CLASS));
    assert_eq!(stored_theme(&state).as_deref(), Some("light"));
    let icon = state.theme_icon.as_ref().unwrap();
    assert!(icon.class_list().contains("fa-sun"));
    assert!(!icon.class_list().contains("fa-moon"));

    theme::apply_theme(&state, Theme::Dark);
    assert!(!body.class_list().contains(LIGHT_MODE_CLASS));
    assert_eq!(stored_theme(&state).as_deref(), Some("dark"));
    assert!(icon.class_list().contains("fa-moon"));
}

#[wasm_bindgen_test]
fn theme_apply_is_idempotent() {
    let state = setup(
        r#"<button id="themeToggle"><i class="theme-icon fa-moon"></i></button>"#,
    );

    theme::apply_theme(&state, Theme::Light);
    theme::apply_theme(&state, Theme::Light);

    let body = state.body().unwrap();
    assert!(body.class_list().contains(LIGHT_MODE_CLASS));
    assert_eq!(stored_theme(&state).as_deref(), Some("light"));
    assert_eq!(theme::current_theme(&state), Theme::Light);
}

#[wasm_bindgen_test]
fn preferred_theme_defaults_to_dark() {
    let state = setup("");
    assert_eq!(theme::preferred_theme(&state), Theme::Dark);

    dom::storage_set(&state.window, STORAGE_KEY, "light");
    assert_eq!(theme::preferred_theme(&state), Theme::Light);

    dom::storage_set(&state.window, STORAGE_KEY, "solarized");
    assert_eq!(theme::preferred_theme(&state), Theme::Dark);
}

const FORM_HTML: &str = r#"
<form id="contactForm">
    <div class="form-group">
        <input id="name" type="text">
        <span id="nameError"></span>
    </div>
    <div class="form-group">
        <input id="email" type="email">
        <span id="emailError"></span>
    </div>
    <div class="form-group">
        <textarea id="message"></textarea>
        <span id="messageError"></span>
    </div>
    <button class="btn-submit" type="submit">Send Message</button>
</form>
"#;

fn set_field(state: &AppState, id: &str, value: &str) {
    let element = state.document.get_element_by_id(id).unwrap();
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

fn error_text(state: &AppState, field: Field) -> String {
    state
        .document
        .get_element_by_id(field.error_id())
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn invalid_form_shows_inline_errors() {
    let state = setup(FORM_HTML);
    set_field(&state, "name", " ");
    set_field(&state, "email", "a@b");
    set_field(&state, "message", "too short");

    assert!(!contact_form::validate_form(&state));
    assert_eq!(error_text(&state, Field::Name), "Name is required");
    assert_eq!(
        error_text(&state, Field::Email),
        "Please enter a valid email address"
    );
    assert_eq!(
        error_text(&state, Field::Message),
        "Message must be at least 10 characters"
    );

    let group = state
        .document
        .get_element_by_id("name")
        .unwrap()
        .closest(".form-group")
        .unwrap()
        .unwrap();
    assert!(group.class_list().contains("error"));
}

#[wasm_bindgen_test]
fn valid_form_clears_all_errors() {
    let state = setup(FORM_HTML);
    set_field(&state, "name", "Al");
    set_field(&state, "email", "a@b.co");
    set_field(&state, "message", "1234567890");

    // Seed stale errors first; validation should clear them.
    for field in Field::ALL {
        contact_form::show_field_error(&state, field, "stale");
    }

    assert!(contact_form::validate_form(&state));
    for field in Field::ALL {
        assert_eq!(error_text(&state, field), "");
        let group = state
            .document
            .get_element_by_id(field.input_id())
            .unwrap()
            .closest(".form-group")
            .unwrap()
            .unwrap();
        assert!(!group.class_list().contains("error"));
    }
}

#[wasm_bindgen_test]
fn field_error_round_trip() {
    let state = setup(FORM_HTML);
    contact_form::show_field_error(&state, Field::Email, "nope");
    assert_eq!(error_text(&state, Field::Email), "nope");

    contact_form::clear_field_error(&state, Field::Email);
    assert_eq!(error_text(&state, Field::Email), "");
}

#[wasm_bindgen_test]
fn close_menu_clears_classes_and_scroll_lock() {
    let state = setup(
        r#"<div id="hamburger" class="active"></div><ul class="nav-menu active"></ul>"#,
    );
    let body = state.body().unwrap();
    body.style().set_property("overflow", "hidden").unwrap();
    assert!(navigation::menu_open(&state));

    navigation::close_menu(&state);
    assert!(!navigation::menu_open(&state));
    assert!(!state.hamburger.as_ref().unwrap().class_list().contains("active"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
}

#[wasm_bindgen_test]
fn back_to_top_hidden_at_page_top() {
    let state = setup(r#"<button id="backToTop" class="visible"></button>"#);
    // The test page is not scrolled, so the eager update hides the button.
    scroll_effects::update_back_to_top(&state);
    assert!(
        !state
            .back_to_top
            .as_ref()
            .unwrap()
            .class_list()
            .contains("visible")
    );
}

#[wasm_bindgen_test]
fn navbar_unscrolled_at_page_top() {
    let state = setup(
        r##"<nav id="navbar" class="scrolled"></nav>
           <section id="home"></section>
           <a class="nav-link" href="#home"></a>"##,
    );
    scroll_effects::update_navbar(&state);
    assert!(!state.navbar.as_ref().unwrap().class_list().contains("scrolled"));
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn fill_valid_form(state: &AppState) {
    set_field(state, "name", "Al");
    set_field(state, "email", "a@b.co");
    set_field(state, "message", "1234567890");
}

fn dispatch_submit(form: &web_sys::HtmlFormElement) {
    let event = web_sys::Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
}

fn submit_button(form: &web_sys::HtmlFormElement) -> web_sys::HtmlButtonElement {
    form.query_selector(".btn-submit")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
async fn valid_submit_runs_sending_success_restore() {
    let state = setup(FORM_HTML);
    contact_form::wire(&state);
    fill_valid_form(&state);

    let form = state.contact_form.clone().unwrap();
    let button = submit_button(&form);
    let original = button.inner_html();

    dispatch_submit(&form);
    assert!(button.inner_html().contains("Sending"));
    assert!(button.disabled());

    sleep(1700).await;
    assert!(button.inner_html().contains("fa-check"));
    assert!(button.disabled());
    assert!(
        !button
            .style()
            .get_property_value("background")
            .unwrap()
            .is_empty()
    );
    // The form was reset and every inline error cleared.
    let name = state.document.get_element_by_id("name").unwrap();
    assert_eq!(dom::field_value(&name), "");
    for field in Field::ALL {
        assert_eq!(error_text(&state, field), "");
    }

    sleep(2100).await;
    assert_eq!(button.inner_html(), original);
    assert!(!button.disabled());
    assert!(
        button
            .style()
            .get_property_value("background")
            .unwrap()
            .is_empty()
    );
}

#[wasm_bindgen_test]
async fn overlapping_submit_is_ignored_while_sequence_pending() {
    let state = setup(FORM_HTML);
    contact_form::wire(&state);
    fill_valid_form(&state);

    let form = state.contact_form.clone().unwrap();
    let button = submit_button(&form);
    let original = button.inner_html();

    dispatch_submit(&form);
    assert!(button.inner_html().contains("Sending"));

    // A second submit mid-sequence is ignored; had it started its own
    // sequence, the final restore would carry the sending markup it captured
    // as the button's original label.
    dispatch_submit(&form);
    assert!(button.inner_html().contains("Sending"));
    assert!(button.disabled());

    sleep(3800).await;
    assert_eq!(button.inner_html(), original);
    assert!(!button.disabled());

    // Once the sequence finished, a fresh submit is accepted again.
    fill_valid_form(&state);
    dispatch_submit(&form);
    assert!(button.inner_html().contains("Sending"));
}

#[wasm_bindgen_test]
fn typewriter_task_cancels() {
    let state = setup(r#"<span id="typedText"></span>"#);
    let task = typewriter::wire(&state).unwrap();
    assert!(!task.is_cancelled());
    task.cancel();
    assert!(task.is_cancelled());
}
