use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Element not found: {0}")]
    MissingElement(String),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Failed to copy text: {0}")]
    Clipboard(String),
    #[error("Failed to create chart on #{canvas}: {reason}")]
    Chart { canvas: String, reason: String },
    #[error("Failed to serialize chart config: {0}")]
    Serialize(#[from] serde_wasm_bindgen::Error),
}

impl SiteError {
    pub fn missing(what: impl Into<String>) -> Self {
        SiteError::MissingElement(what.into())
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(describe_js(&value))
    }
}

pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
