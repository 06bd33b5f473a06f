//! In-memory content tree.
//!
//! A small arena-backed tree for hosts without a DOM (server-side rendering,
//! headless editing, tests). Nodes are addressed by [`NodeId`] and never
//! freed; detached nodes simply stop being reachable from their old parent.

use std::borrow::Cow;

use smol_str::SmolStr;

use crate::classify::Display;
use crate::tree::{ContentTree, NodeKind};

/// Handle to a node in an [`ArenaTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Id handed out once the arena is full. It never names a node, so the
    /// tree treats it like any other unknown id.
    pub const DANGLING: NodeId = NodeId(u32::MAX);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Id for the node stored at arena slot `index`, if it fits.
    fn for_slot(index: usize) -> Option<NodeId> {
        match u32::try_from(index) {
            Ok(raw) if raw != u32::MAX => Some(NodeId(raw)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: SmolStr,
        attributes: Vec<(SmolStr, SmolStr)>,
        display: Display,
    },
    Text(String),
    Comment(String),
    Other,
}

#[derive(Debug, Clone)]
struct ArenaNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed content tree.
#[derive(Debug, Clone, Default)]
pub struct ArenaTree {
    nodes: Vec<ArenaNode>,
}

impl ArenaTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let Some(id) = NodeId::for_slot(self.nodes.len()) else {
            tracing::warn!(
                target: "leafpoint::arena",
                len = self.nodes.len(),
                "arena is full, node not created"
            );
            return NodeId::DANGLING;
        };
        self.nodes.push(ArenaNode {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> Option<&ArenaNode> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut ArenaNode> {
        self.nodes.get_mut(id.index())
    }

    /// Create a detached element. Its display starts at the tag's default.
    pub fn create_element(&mut self, tag: impl Into<SmolStr>) -> NodeId {
        let tag = tag.into();
        let display = Display::default_for_tag(&tag);
        self.push(NodeData::Element {
            tag,
            attributes: Vec::new(),
            display,
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text(text.into()))
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Comment(text.into()))
    }

    /// Create a node of no particular kind (document, fragment, ...).
    pub fn create_other(&mut self) -> NodeId {
        self.push(NodeData::Other)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    /// elsewhere. Requests that would create a cycle, or that name unknown
    /// nodes, are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            tracing::warn!(
                target: "leafpoint::arena",
                ?parent,
                ?child,
                "append_child: unknown node"
            );
            return;
        }
        if self.is_inclusive_ancestor(child, parent) {
            tracing::warn!(
                target: "leafpoint::arena",
                ?parent,
                ?child,
                "append_child: would create a cycle"
            );
            return;
        }

        self.detach(child);
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
    }

    /// Remove `id` from its parent's child list.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Set (or replace) an attribute on an element. No-op for other kinds.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
    ) {
        let Some(ArenaNode {
            data: NodeData::Element { attributes, .. },
            ..
        }) = self.node_mut(id)
        else {
            return;
        };

        let name = name.into();
        let value = value.into();
        match attributes
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, slot)) => *slot = value,
            None => attributes.push((name, value)),
        }
    }

    /// Override the resolved display of an element.
    pub fn set_display(&mut self, id: NodeId, value: Display) {
        if let Some(ArenaNode {
            data: NodeData::Element { display, .. },
            ..
        }) = self.node_mut(id)
        {
            *display = value;
        }
    }

    /// Replace the data of a text or comment node.
    pub fn set_text(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            match &mut node.data {
                NodeData::Text(text) | NodeData::Comment(text) => *text = value.into(),
                NodeData::Element { .. } | NodeData::Other => {}
            }
        }
    }
}

impl ContentTree for ArenaTree {
    type Node = NodeId;

    fn kind(&self, node: &NodeId) -> NodeKind {
        match self.node(*node).map(|n| &n.data) {
            Some(NodeData::Element { .. }) => NodeKind::Element,
            Some(NodeData::Text(_)) => NodeKind::Text,
            Some(NodeData::Comment(_)) => NodeKind::Comment,
            Some(NodeData::Other) | None => NodeKind::Other,
        }
    }

    fn child_count(&self, node: &NodeId) -> usize {
        self.node(*node).map_or(0, |n| n.children.len())
    }

    fn child_at(&self, node: &NodeId, index: usize) -> Option<NodeId> {
        self.node(*node)?.children.get(index).copied()
    }

    fn text_value(&self, node: &NodeId) -> Option<Cow<'_, str>> {
        match &self.node(*node)?.data {
            NodeData::Text(text) | NodeData::Comment(text) => Some(Cow::Borrowed(text.as_str())),
            NodeData::Element { .. } | NodeData::Other => None,
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<SmolStr> {
        match &self.node(*node)?.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }

    fn tag_name(&self, node: &NodeId) -> Option<SmolStr> {
        match &self.node(*node)?.data {
            NodeData::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    fn display(&self, node: &NodeId) -> Display {
        match self.node(*node).map(|n| &n.data) {
            Some(NodeData::Element { display, .. }) => *display,
            _ => Display::Inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ids_stop_before_dangling() {
        assert_eq!(NodeId::for_slot(0), Some(NodeId(0)));
        assert_eq!(
            NodeId::for_slot(u32::MAX as usize - 1),
            Some(NodeId(u32::MAX - 1))
        );
        assert_eq!(NodeId::for_slot(u32::MAX as usize), None);
        assert_eq!(NodeId::for_slot(usize::MAX), None);
    }

    #[test]
    fn test_dangling_id_is_inert() {
        let mut tree = ArenaTree::new();
        let div = tree.create_element("div");

        assert_eq!(tree.kind(&NodeId::DANGLING), NodeKind::Other);
        assert_eq!(tree.child_count(&NodeId::DANGLING), 0);
        tree.append_child(div, NodeId::DANGLING);
        tree.append_child(NodeId::DANGLING, div);
        assert_eq!(tree.child_count(&div), 0);
        assert_eq!(tree.parent(div), None);
    }

    #[test]
    fn test_create_and_classify() {
        let mut tree = ArenaTree::new();
        let div = tree.create_element("div");
        let text = tree.create_text("hi");
        let comment = tree.create_comment("c");
        let other = tree.create_other();

        assert_eq!(tree.kind(&div), NodeKind::Element);
        assert_eq!(tree.kind(&text), NodeKind::Text);
        assert_eq!(tree.kind(&comment), NodeKind::Comment);
        assert_eq!(tree.kind(&other), NodeKind::Other);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.tag_name(&div).as_deref(), Some("div"));
        assert_eq!(tree.text_value(&text).as_deref(), Some("hi"));
        assert_eq!(tree.text_value(&comment).as_deref(), Some("c"));
        assert_eq!(tree.text_value(&div), None);
    }

    #[test]
    fn test_unknown_node_degrades() {
        let tree = ArenaTree::new();
        let bogus = NodeId(42);
        assert_eq!(tree.kind(&bogus), NodeKind::Other);
        assert_eq!(tree.child_count(&bogus), 0);
        assert_eq!(tree.child_at(&bogus, 0), None);
        assert_eq!(tree.text_value(&bogus), None);
        assert_eq!(tree.attribute(&bogus, "id"), None);
    }

    #[test]
    fn test_append_moves_child() {
        let mut tree = ArenaTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let text = tree.create_text("x");

        tree.append_child(a, text);
        assert_eq!(tree.parent(text), Some(a));
        tree.append_child(b, text);
        assert_eq!(tree.parent(text), Some(b));
        assert_eq!(tree.child_count(&a), 0);
        assert_eq!(tree.child_at(&b, 0), Some(text));
    }

    #[test]
    fn test_append_rejects_cycles() {
        let mut tree = ArenaTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner);

        tree.append_child(inner, outer);
        tree.append_child(outer, outer);
        assert_eq!(tree.parent(outer), None);
        assert_eq!(tree.child_count(&inner), 0);
        assert_eq!(tree.child_count(&outer), 1);
    }

    #[test]
    fn test_detach() {
        let mut tree = ArenaTree::new();
        let div = tree.create_element("div");
        let a = tree.create_text("a");
        let b = tree.create_text("b");
        tree.append_child(div, a);
        tree.append_child(div, b);

        tree.detach(a);
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.child_count(&div), 1);
        assert_eq!(tree.child_at(&div, 0), Some(b));
    }

    #[test]
    fn test_attributes() {
        let mut tree = ArenaTree::new();
        let div = tree.create_element("div");
        let text = tree.create_text("x");

        tree.set_attribute(div, "contentEditable", "false");
        assert_eq!(
            tree.attribute(&div, "contenteditable").as_deref(),
            Some("false")
        );
        tree.set_attribute(div, "contenteditable", "true");
        assert_eq!(
            tree.attribute(&div, "CONTENTEDITABLE").as_deref(),
            Some("true")
        );
        assert_eq!(tree.attribute(&div, "spellcheck"), None);

        tree.set_attribute(text, "id", "nope");
        assert_eq!(tree.attribute(&text, "id"), None);
    }

    #[test]
    fn test_display_defaults_and_overrides() {
        let mut tree = ArenaTree::new();
        let p = tree.create_element("p");
        let span = tree.create_element("span");
        let text = tree.create_text("x");

        assert_eq!(tree.display(&p), Display::Block);
        assert_eq!(tree.display(&span), Display::Inline);
        tree.set_display(span, Display::ListItem);
        assert_eq!(tree.display(&span), Display::ListItem);
        assert!(tree.is_block_level(&span));
        assert!(!tree.is_block_level(&text));
    }

    #[test]
    fn test_set_text() {
        let mut tree = ArenaTree::new();
        let text = tree.create_text("before");
        tree.set_text(text, "after");
        assert_eq!(tree.text_value(&text).as_deref(), Some("after"));
        assert_eq!(tree.text_len(&text), Some(5));
    }
}
