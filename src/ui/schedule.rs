//! One-shot timer scheduling over `setTimeout`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::app::error::{AppError, Result};

/// Run `f` once after `delay_ms`. The closure frees itself after firing.
///
/// There is deliberately no cancellation here: the simulated form submission
/// chains two of these and, like the page it drives, runs to completion once
/// started. The typewriter loop manages its own cancellable timer.
pub fn once<F>(window: &Window, delay_ms: u32, f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_inner = Rc::clone(&slot);
    let mut f = Some(f);

    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
        // Release the closure now that it has fired.
        slot_inner.borrow_mut().take();
    }) as Box<dyn FnMut()>);

    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .map_err(AppError::from_js)?;

    *slot.borrow_mut() = Some(closure);
    Ok(())
}
