//! Points (node + offset addresses) and search direction.

use crate::error::PointError;
use crate::tree::{ContentTree, NodeKind};

/// Direction a search prefers when the starting child is not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Index delta for one step in this direction.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// An address into the content tree, analogous to a caret position.
///
/// For elements, `offset` is a child boundary in `0..=child_count`. For text
/// nodes it indexes the text in the tree's text units (UTF-16 for the DOM).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point<N> {
    pub node: N,
    pub offset: usize,
}

impl<N> Point<N> {
    pub fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }

    /// Collapsed point at the start of `node`.
    pub fn start_of(node: N) -> Self {
        Self { node, offset: 0 }
    }
}

impl<N: Clone + PartialEq + std::fmt::Debug> Point<N> {
    /// Largest offset that is valid for this point's node.
    fn max_offset<T: ContentTree<Node = N>>(&self, tree: &T) -> usize {
        match tree.kind(&self.node) {
            NodeKind::Element => tree.child_count(&self.node),
            // Data-bearing `Other` nodes (processing instructions, CDATA)
            // are addressed like text.
            NodeKind::Text | NodeKind::Other => tree.text_len(&self.node).unwrap_or(0),
            NodeKind::Comment => 0,
        }
    }

    /// Check the offset against the node it addresses.
    pub fn validate<T: ContentTree<Node = N>>(&self, tree: &T) -> Result<(), PointError> {
        let max = self.max_offset(tree);
        if self.offset <= max {
            return Ok(());
        }

        let offset = self.offset;
        Err(match tree.kind(&self.node) {
            NodeKind::Element => PointError::ChildOffsetOutOfRange {
                offset,
                child_count: max,
            },
            NodeKind::Text => PointError::TextOffsetOutOfRange { offset, len: max },
            NodeKind::Other if max > 0 => PointError::TextOffsetOutOfRange { offset, len: max },
            NodeKind::Comment | NodeKind::Other => PointError::NonZeroOffset { offset },
        })
    }

    /// Copy of this point with the offset clamped into the node's valid range.
    pub fn clamped<T: ContentTree<Node = N>>(&self, tree: &T) -> Self {
        Self {
            node: self.node.clone(),
            offset: self.offset.min(self.max_offset(tree)),
        }
    }
}
