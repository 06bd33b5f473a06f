//! Browser DOM host for leafpoint.
//!
//! This crate implements `ContentTree` over live `web_sys::Node`s and wires
//! the engine to the browser's Selection and clipboard APIs. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: `DomTree` host binding and raw node-kind predicates
//! - `selection`: reading and normalizing the live DOM selection
//! - `clipboard`: writing block-aware plaintext on copy/cut
//!
//! # Re-exports
//!
//! This crate re-exports `leafpoint-core` for convenience, so consumers
//! only need to depend on `leafpoint-browser`.

// Re-export core crate
pub use leafpoint_core;
pub use leafpoint_core::*;

pub mod clipboard;
pub mod dom;
pub mod error;
pub mod selection;

pub use clipboard::{write_plain_text, write_plain_text_to};
pub use dom::{
    DomEngine, DomPoint, DomTree, is_dom_comment, is_dom_element, is_dom_node, is_dom_text,
};
pub use error::BrowserError;
pub use selection::{current_selection, raw_selection_points};
