//! Timer loop driving the hero typewriter animation.
//!
//! The loop reschedules itself with the delay each tick asks for and runs for
//! the page's lifetime. Unlike the scroll and click handlers it is modeled as
//! a task with an explicit `cancel`, so an embedder tearing the page down can
//! stop it deterministically.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Window};

use crate::app::state::AppState;
use crate::app::typing::{PHRASE, START_DELAY_MS, Typewriter};
use crate::ui::dom;

struct TaskInner {
    window: Window,
    target: Element,
    state: RefCell<Typewriter>,
    pending: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    // Holds the tick closure; forms an intentional Rc cycle that keeps the
    // loop alive after the start handle is dropped.
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Handle to a running typewriter loop.
pub struct TypewriterTask {
    inner: Rc<TaskInner>,
}

impl TypewriterTask {
    /// Start typing `phrase` into `target`, first tick after the start delay.
    pub fn start(window: Window, target: Element, phrase: &str) -> Self {
        let inner = Rc::new(TaskInner {
            window,
            target,
            state: RefCell::new(Typewriter::new(phrase)),
            pending: Cell::new(None),
            cancelled: Cell::new(false),
            tick: RefCell::new(None),
        });

        let tick_inner = Rc::clone(&inner);
        let closure = Closure::wrap(Box::new(move || {
            tick_inner.pending.set(None);
            if tick_inner.cancelled.get() {
                return;
            }
            let tick = tick_inner.state.borrow_mut().tick();
            dom::set_text(&tick_inner.target, &tick.text);
            schedule(&tick_inner, tick.delay_ms);
        }) as Box<dyn FnMut()>);
        *inner.tick.borrow_mut() = Some(closure);

        schedule(&inner, START_DELAY_MS);
        Self { inner }
    }

    /// Stop the loop: clears any pending timeout and prevents rescheduling.
    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
        if let Some(id) = self.inner.pending.take() {
            self.inner.window.clear_timeout_with_handle(id);
        }
        // Break the closure cycle so the task can actually be freed.
        self.inner.tick.borrow_mut().take();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }
}

fn schedule(inner: &Rc<TaskInner>, delay_ms: u32) {
    let tick = inner.tick.borrow();
    let Some(closure) = tick.as_ref() else {
        return;
    };
    if let Ok(id) = inner.window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    ) {
        inner.pending.set(Some(id));
    }
}

/// Start the hero animation when the typed-text node exists.
pub fn wire(state: &AppState) -> Option<TypewriterTask> {
    let target = state.typed_text.clone()?;
    Some(TypewriterTask::start(state.window.clone(), target, PHRASE))
}
