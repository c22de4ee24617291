//! Core logic, kept free of web-sys so it can be unit-tested natively.
//!
//! # Structure
//!
//! - `theme` - dark/light preference and its storage contract
//! - `typing` - typewriter state machine
//! - `scroll` - scroll-derived state math
//! - `validate` - contact-form field rules
//! - `state` - one-time DOM element cache (wasm only)
//! - `error` - crate-wide error type

pub mod error;
pub mod scroll;
pub mod theme;
pub mod typing;
pub mod validate;

#[cfg(target_arch = "wasm32")]
pub mod state;

pub use error::{AppError, Result};
pub use theme::Theme;
pub use typing::Typewriter;
pub use validate::Field;
