//! Reading the live DOM selection.
//!
//! Raw selection points can sit on element boundaries, comments or
//! decorative elements. They are normalized into text leaves here, before any
//! caller does text-offset arithmetic on them.

use leafpoint_core::NormalizedSelection;

use crate::dom::{DomEngine, DomPoint};
use crate::error::BrowserError;

/// Anchor and focus of a selection, exactly as the browser reports them.
///
/// Returns `None` when the selection has no range.
pub fn raw_selection_points(selection: &web_sys::Selection) -> Option<(DomPoint, DomPoint)> {
    let anchor = selection.anchor_node()?;
    let focus = selection.focus_node()?;
    Some((
        DomPoint::new(anchor, selection.anchor_offset() as usize),
        DomPoint::new(focus, selection.focus_offset() as usize),
    ))
}

/// Read `window.getSelection()` and normalize both ends.
///
/// `Ok(None)` means there is currently no selection range.
pub fn current_selection(
    engine: &DomEngine,
) -> Result<Option<NormalizedSelection<web_sys::Node>>, BrowserError> {
    let window = engine.tree().window().ok_or(BrowserError::NoWindow)?;
    let selection = window
        .get_selection()
        .map_err(|e| BrowserError::js("get_selection", e))?
        .ok_or(BrowserError::NoSelection)?;

    let Some((anchor, focus)) = raw_selection_points(&selection) else {
        return Ok(None);
    };

    tracing::trace!(
        target: "leafpoint::selection",
        anchor_node_name = %anchor.node.node_name(),
        anchor_offset = anchor.offset,
        focus_node_name = %focus.node.node_name(),
        focus_offset = focus.offset,
        "browser selection state"
    );

    Ok(Some(engine.normalize_selection(anchor, focus)))
}
