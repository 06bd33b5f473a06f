//! Engine facade bundling a host tree handle with its configuration.

use crate::config::EngineConfig;
use crate::locate::{Located, is_editable_candidate, locate_editable_child};
use crate::normalize::{Normalized, NormalizedSelection, normalize, normalize_selection};
use crate::plain_text::extract_text;
use crate::point::{Direction, Point};
use crate::tree::ContentTree;
use crate::void_tags::find_void_child;

/// Point normalization and extraction over a host tree.
///
/// `T` is usually a zero-sized DOM handle or a borrowed arena (`&ArenaTree`).
/// The engine keeps no state between calls.
#[derive(Debug, Clone)]
pub struct PointEngine<T> {
    tree: T,
    config: EngineConfig,
}

impl<T: ContentTree> PointEngine<T> {
    /// Create an engine with the default configuration.
    pub fn new(tree: T) -> Self {
        Self::with_config(tree, EngineConfig::default())
    }

    pub fn with_config(tree: T, config: EngineConfig) -> Self {
        Self { tree, config }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether `node` may hold a cursor or be descended into.
    pub fn is_editable_candidate(&self, node: &T::Node) -> bool {
        is_editable_candidate(&self.tree, &self.config, node)
    }

    /// Nearest editable child of `parent` around `index`.
    pub fn locate(&self, parent: &T::Node, index: usize, direction: Direction) -> Located<T::Node> {
        locate_editable_child(&self.tree, &self.config, parent, index, direction)
    }

    /// Normalize a point, reporting whether a real leaf was reached.
    pub fn normalize(&self, point: Point<T::Node>) -> Normalized<T::Node> {
        normalize(&self.tree, &self.config, point)
    }

    /// Normalize a point, best effort.
    pub fn normalize_point(&self, point: Point<T::Node>) -> Point<T::Node> {
        self.normalize(point).into_point()
    }

    pub fn normalize_selection(
        &self,
        anchor: Point<T::Node>,
        focus: Point<T::Node>,
    ) -> NormalizedSelection<T::Node> {
        normalize_selection(&self.tree, &self.config, anchor, focus)
    }

    /// Block-aware plaintext of the subtree at `node`.
    pub fn extract_text(&self, node: &T::Node) -> String {
        extract_text(&self.tree, node)
    }

    /// First direct child whose tag is in the configured void set.
    pub fn find_void_child(&self, element: &T::Node) -> Option<T::Node> {
        find_void_child(&self.tree, &self.config.void_tags, element)
    }
}
