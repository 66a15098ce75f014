//! Crate error type.
//!
//! Missing markup is not an error: widgets whose elements are absent stay
//! inert. `FxError` covers the cases where the browser itself refuses a call
//! or the page ships a broken config block.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type FxResult<T> = Result<T, FxError>;

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}
