//! leafpoint-core: cursor-position arithmetic over a rendered content tree.
//!
//! This crate provides:
//! - `ContentTree` trait - read-only view of a host tree (DOM, arena, ...)
//! - Leaf location and point normalization, so raw selection points always
//!   land inside a text-bearing leaf
//! - Block-aware plaintext extraction (clipboard export)
//! - Void-child lookup against an injected `VoidTags` set
//!
//! Everything here is synchronous and allocation-light. Nothing is cached
//! between calls, so the host tree may change freely in between.

pub mod arena;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod locate;
pub mod normalize;
pub mod plain_text;
pub mod point;
pub mod tree;
pub mod void_tags;

pub use arena::{ArenaTree, NodeId};
pub use classify::{Display, is_hard_break_tag};
pub use config::EngineConfig;
pub use engine::PointEngine;
pub use error::PointError;
pub use locate::{Located, Probe, SearchState, is_editable_candidate, locate_editable_child};
pub use normalize::{Normalized, NormalizedSelection, normalize, normalize_selection};
pub use plain_text::extract_text;
pub use point::{Direction, Point};
pub use smol_str::SmolStr;
pub use tree::{ContentTree, NodeKind};
pub use void_tags::{HTML_VOID_ELEMENTS, VoidTags, find_void_child};
