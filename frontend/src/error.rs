use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from browser plumbing. None of these are shown to visitors;
/// callers log them and fall back to a static rendering.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window available")]
    NoWindow,
    #[error("node ref is not mounted")]
    Unmounted,
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
