//! Clipboard plaintext export.
//!
//! Writes the block-aware plaintext projection of a subtree as `text/plain`
//! on a copy/cut event's DataTransfer.

use crate::dom::DomEngine;
use crate::error::BrowserError;

/// Write the plaintext of `root` into `data` as `text/plain`.
///
/// Returns the text that was written.
pub fn write_plain_text_to(
    engine: &DomEngine,
    data: &web_sys::DataTransfer,
    root: &web_sys::Node,
) -> Result<String, BrowserError> {
    let text = engine.extract_text(root);
    data.set_data("text/plain", &text)
        .map_err(|e| BrowserError::js("set_data", e))?;
    Ok(text)
}

/// Handle a copy/cut event by writing the plaintext of `root`.
///
/// Prevents the default action so the browser keeps our data instead of
/// serializing the selection itself.
pub fn write_plain_text(
    engine: &DomEngine,
    event: &web_sys::ClipboardEvent,
    root: &web_sys::Node,
) -> Result<String, BrowserError> {
    let data = event.clipboard_data().ok_or(BrowserError::NoDataTransfer)?;
    let text = write_plain_text_to(engine, &data, root).inspect_err(|e| {
        tracing::warn!("Clipboard plaintext write failed: {}", e);
    })?;
    event.prevent_default();
    Ok(text)
}
