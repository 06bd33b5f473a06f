//! Point normalization.
//!
//! A raw point from a platform range may address an element by child index.
//! Before doing any text-offset arithmetic we push it down into a leaf: a
//! text node (or a childless node), with the offset at its start or end.

use crate::config::EngineConfig;
use crate::locate::{Located, locate_editable_child};
use crate::point::{Direction, Point};
use crate::tree::ContentTree;

/// Result of normalizing a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<N> {
    /// The point addresses a leaf (or was already a non-container point).
    Resolved(Point<N>),
    /// Some level had no editable child, so descent went on through the last
    /// node probed there. The leaf reached may itself be ineligible (a
    /// comment or an empty element). Only happens in pathological trees.
    BestEffort(Point<N>),
}

impl<N> Normalized<N> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Normalized::Resolved(_))
    }

    pub fn point(&self) -> &Point<N> {
        match self {
            Normalized::Resolved(point) | Normalized::BestEffort(point) => point,
        }
    }

    pub fn into_point(self) -> Point<N> {
        match self {
            Normalized::Resolved(point) | Normalized::BestEffort(point) => point,
        }
    }
}

/// Both ends of a native selection, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSelection<N> {
    pub anchor: Point<N>,
    pub focus: Point<N>,
}

impl<N: PartialEq> NormalizedSelection<N> {
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

/// Validate at the boundary: assert in debug builds, clamp in release.
fn checked<T: ContentTree>(tree: &T, point: Point<T::Node>) -> Point<T::Node> {
    let validity = point.validate(tree);
    debug_assert!(
        validity.is_ok(),
        "normalizing invalid point {point:?}: {validity:?}"
    );
    match validity {
        Ok(()) => point,
        Err(err) => {
            tracing::warn!(
                target: "leafpoint::normalize",
                node = ?point.node,
                %err,
                "clamping out-of-range point"
            );
            point.clamped(tree)
        }
    }
}

/// Normalize a point so it lands inside a leaf.
///
/// Points that are not on an element, or are on a childless element, are
/// returned unchanged. Otherwise we descend toward the edge implied by the
/// offset: a point after the last child searches backward and ends at the
/// leaf's text length, any other point searches forward and ends at offset 0.
///
/// When a level has no editable child, descent continues through the last
/// child probed there, so the result is still a node without children.
pub fn normalize<T: ContentTree>(
    tree: &T,
    config: &EngineConfig,
    point: Point<T::Node>,
) -> Normalized<T::Node> {
    let point = checked(tree, point);

    if !tree.kind(&point.node).is_element() || !tree.has_children(&point.node) {
        return Normalized::Resolved(point);
    }

    let child_count = tree.child_count(&point.node);
    let is_last = point.offset == child_count;
    let direction = if is_last {
        Direction::Backward
    } else {
        Direction::Forward
    };
    let start = if is_last { point.offset - 1 } else { point.offset };

    let mut container = point.node;
    let mut located = locate_editable_child(tree, config, &container, start, direction);
    let mut exhausted = false;
    let mut depth = 0usize;

    loop {
        let node = match located {
            Located::Editable(node) => node,
            Located::Exhausted {
                last_probed: Some(node),
            } => {
                tracing::trace!(
                    target: "leafpoint::normalize",
                    depth,
                    node = ?node,
                    "no editable child; continuing through last probed node"
                );
                exhausted = true;
                node
            }
            // Only reachable if the host dropped children mid-call.
            Located::Exhausted { last_probed: None } => {
                return Normalized::BestEffort(Point::start_of(container));
            }
        };

        let count = tree.child_count(&node);
        if tree.kind(&node).is_element() && count > 0 {
            let index = match direction {
                Direction::Forward => 0,
                Direction::Backward => count - 1,
            };
            depth += 1;
            tracing::trace!(
                target: "leafpoint::normalize",
                depth,
                index,
                ?direction,
                "descending into child"
            );
            located = locate_editable_child(tree, config, &node, index, direction);
            container = node;
            continue;
        }

        // Comment data is not caret-addressable text.
        let offset = if is_last && !tree.kind(&node).is_comment() {
            tree.text_len(&node).unwrap_or(0)
        } else {
            0
        };
        let point = Point::new(node, offset);
        return if exhausted {
            Normalized::BestEffort(point)
        } else {
            Normalized::Resolved(point)
        };
    }
}

/// Normalize the anchor and focus of a selection independently.
pub fn normalize_selection<T: ContentTree>(
    tree: &T,
    config: &EngineConfig,
    anchor: Point<T::Node>,
    focus: Point<T::Node>,
) -> NormalizedSelection<T::Node> {
    NormalizedSelection {
        anchor: normalize(tree, config, anchor).into_point(),
        focus: normalize(tree, config, focus).into_point(),
    }
}
