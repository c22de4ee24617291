//! Browser surface wiring. Every module here talks to the DOM through
//! `dom` and is only compiled for wasm targets; the logic it drives lives
//! in `crate::app` and is tested natively.

pub mod contact_form;
pub mod dom;
pub mod downloads;
pub mod navigation;
pub mod observers;
pub mod schedule;
pub mod scroll_effects;
pub mod theme;
pub mod typewriter;
