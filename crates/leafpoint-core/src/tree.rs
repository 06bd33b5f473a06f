//! Read-only abstraction over the host content tree.
//!
//! The engine never owns nodes. A `ContentTree` hands out cheap node handles
//! (`web_sys::Node`, arena ids, ...) and answers the handful of questions the
//! locator, normalizer and extractor need.

use std::borrow::Cow;
use std::fmt;

use smol_str::SmolStr;

use crate::classify::{Display, is_hard_break_tag};

/// Closed classification of a host node.
///
/// Computed once per node by the host; all engine logic switches on this tag
/// instead of probing raw host type information again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Element,
    Comment,
    /// Documents, fragments, processing instructions, anything unrecognized.
    Other,
}

impl NodeKind {
    pub fn is_element(self) -> bool {
        self == NodeKind::Element
    }

    pub fn is_comment(self) -> bool {
        self == NodeKind::Comment
    }
}

/// Read access to a host content tree.
///
/// Implementations must degrade instead of failing: unknown or detached nodes
/// report `NodeKind::Other`, zero children and no text.
pub trait ContentTree {
    /// Node handle. Cloning must be cheap; equality is node identity.
    type Node: Clone + PartialEq + fmt::Debug;

    fn kind(&self, node: &Self::Node) -> NodeKind;

    /// Number of child nodes, including comments and whitespace text.
    fn child_count(&self, node: &Self::Node) -> usize;

    /// Child at `index`, or `None` when out of range.
    fn child_at(&self, node: &Self::Node, index: usize) -> Option<Self::Node>;

    /// Text content of the node. Text and comment nodes return their data;
    /// hosts may return `None` or an empty string for elements.
    fn text_value(&self, node: &Self::Node) -> Option<Cow<'_, str>>;

    /// Length of `text_value` in the units platform offsets are counted in.
    ///
    /// Defaults to UTF-16 code units, which is what DOM ranges use.
    fn text_len(&self, node: &Self::Node) -> Option<usize> {
        self.text_value(node).map(|text| text.encode_utf16().count())
    }

    /// Attribute lookup by name. Non-elements return `None`.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<SmolStr>;

    /// Tag name as reported by the host (case is not normalized).
    fn tag_name(&self, node: &Self::Node) -> Option<SmolStr>;

    /// Resolved display classification of an element.
    fn display(&self, node: &Self::Node) -> Display;

    /// Whether the element's content occupies its own line.
    fn is_block_level(&self, node: &Self::Node) -> bool {
        self.kind(node).is_element() && self.display(node).is_line_breaking()
    }

    /// Whether the element is a hard line break (`<br>`).
    fn is_hard_break(&self, node: &Self::Node) -> bool {
        self.kind(node).is_element()
            && self
                .tag_name(node)
                .is_some_and(|tag| is_hard_break_tag(&tag))
    }

    /// Whether the node has at least one child.
    fn has_children(&self, node: &Self::Node) -> bool {
        self.child_count(node) > 0
    }

    /// Iterate direct children in document order.
    fn children<'a>(&'a self, node: &'a Self::Node) -> Children<'a, Self>
    where
        Self: Sized,
    {
        Children {
            tree: self,
            parent: node,
            index: 0,
            len: self.child_count(node),
        }
    }
}

/// Iterator over the direct children of a node.
pub struct Children<'a, T: ContentTree> {
    tree: &'a T,
    parent: &'a T::Node,
    index: usize,
    len: usize,
}

impl<T: ContentTree> Iterator for Children<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.len {
            let child = self.tree.child_at(self.parent, self.index);
            self.index += 1;
            // A child can vanish if the host mutates underneath us; skip it.
            if child.is_some() {
                return child;
            }
        }
        None
    }
}

impl<T: ContentTree + ?Sized> ContentTree for &T {
    type Node = T::Node;

    fn kind(&self, node: &Self::Node) -> NodeKind {
        (**self).kind(node)
    }

    fn child_count(&self, node: &Self::Node) -> usize {
        (**self).child_count(node)
    }

    fn child_at(&self, node: &Self::Node, index: usize) -> Option<Self::Node> {
        (**self).child_at(node, index)
    }

    fn text_value(&self, node: &Self::Node) -> Option<Cow<'_, str>> {
        (**self).text_value(node)
    }

    fn text_len(&self, node: &Self::Node) -> Option<usize> {
        (**self).text_len(node)
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<SmolStr> {
        (**self).attribute(node, name)
    }

    fn tag_name(&self, node: &Self::Node) -> Option<SmolStr> {
        (**self).tag_name(node)
    }

    fn display(&self, node: &Self::Node) -> Display {
        (**self).display(node)
    }

    fn is_block_level(&self, node: &Self::Node) -> bool {
        (**self).is_block_level(node)
    }

    fn is_hard_break(&self, node: &Self::Node) -> bool {
        (**self).is_hard_break(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArenaTree;

    #[test]
    fn test_node_kind_predicates() {
        assert!(!NodeKind::Text.is_element());
        assert!(NodeKind::Element.is_element());
        assert!(NodeKind::Comment.is_comment());
        assert!(!NodeKind::Text.is_comment());
        assert!(!NodeKind::Other.is_element());
        assert!(!NodeKind::Other.is_comment());
    }

    #[test]
    fn test_children_iterates_in_order() {
        let mut tree = ArenaTree::new();
        let div = tree.create_element("div");
        let a = tree.create_text("a");
        let c = tree.create_comment("c");
        let span = tree.create_element("span");
        tree.append_child(div, a);
        tree.append_child(div, c);
        tree.append_child(div, span);

        let children: Vec<_> = tree.children(&div).collect();
        assert_eq!(children, vec![a, c, span]);
    }

    #[test]
    fn test_text_len_counts_utf16_units() {
        let mut tree = ArenaTree::new();
        let text = tree.create_text("a\u{1F600}b");
        // Astral-plane emoji is a surrogate pair in UTF-16.
        assert_eq!(tree.text_len(&text), Some(4));
    }

    #[test]
    fn test_hard_break_is_case_insensitive() {
        let mut tree = ArenaTree::new();
        let br = tree.create_element("BR");
        let span = tree.create_element("span");
        let text = tree.create_text("br");
        assert!(tree.is_hard_break(&br));
        assert!(!tree.is_hard_break(&span));
        assert!(!tree.is_hard_break(&text));
    }

    #[test]
    fn test_borrowed_tree_delegates() {
        let mut tree = ArenaTree::new();
        let p = tree.create_element("p");
        let text = tree.create_text("hi");
        tree.append_child(p, text);

        let borrowed = &tree;
        assert_eq!(borrowed.kind(&p), NodeKind::Element);
        assert_eq!(borrowed.child_count(&p), 1);
        assert!(borrowed.is_block_level(&p));
        assert_eq!(borrowed.text_len(&text), Some(2));
    }
}
