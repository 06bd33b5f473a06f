use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to browser APIs.
#[derive(Debug, Clone, Error)]
pub enum BrowserError {
    #[error("no window")]
    NoWindow,

    #[error("no selection object")]
    NoSelection,

    #[error("clipboard event has no data transfer")]
    NoDataTransfer,

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl BrowserError {
    pub(crate) fn js(context: &'static str, err: JsValue) -> Self {
        BrowserError::Js {
            context,
            message: format!("{:?}", err),
        }
    }
}
