use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("JS error: {0}")]
    Js(String),
}

impl AppError {
    /// Wrap a raw JS exception, stringifying whatever the browser threw.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        AppError::Js(format!("{value:?}"))
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
