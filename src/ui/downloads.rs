//! CV download trigger: synthesizes an anchor click for the static asset.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement};

use crate::ui::dom;

/// Relative path of the served CV file. Existence is the server's problem.
pub const CV_PATH: &str = "./Haitham_CV.pdf";
/// Filename suggested to the browser's download dialog.
pub const CV_FILENAME: &str = "Haitham_CV.pdf";

const TRIGGER_IDS: [&str; 2] = ["cvDownload", "heroCvDownload"];

fn trigger_download(document: &Document) {
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(CV_PATH);
    anchor.set_download(CV_FILENAME);
    anchor.click();
}

/// Wire both download controls; either forces the same download.
pub fn wire(document: &Document) {
    for id in TRIGGER_IDS {
        let Some(button) = dom::by_id(document, id) else {
            continue;
        };
        let document = document.clone();
        dom::on(&button, "click", move |event| {
            event.prevent_default();
            trigger_download(&document);
        });
    }
}
