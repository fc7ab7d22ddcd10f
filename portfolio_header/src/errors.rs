use thiserror::Error;

/// Failures the header can run into. None of them are shown to the visitor;
/// they are logged and the click is otherwise ignored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("failed to navigate to {href}: {message}")]
    Navigation { href: String, message: String },
    #[error("failed to restore page scrolling: {0}")]
    Scroll(String),
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for HeaderError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

/// Renders a JavaScript exception as text for logging.
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
