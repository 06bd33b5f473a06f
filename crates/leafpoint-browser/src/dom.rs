//! `ContentTree` over the live browser DOM.

use std::borrow::Cow;

use leafpoint_core::{ContentTree, Display, NodeKind, Point, PointEngine, SmolStr};
use wasm_bindgen::{JsCast, JsValue};

/// A point into the live DOM.
pub type DomPoint = Point<web_sys::Node>;

/// Engine over the live DOM.
pub type DomEngine = PointEngine<DomTree>;

/// Check if a value is a DOM node.
pub fn is_dom_node(value: &JsValue) -> bool {
    value.is_instance_of::<web_sys::Node>()
}

/// Check if a value is a DOM element node.
pub fn is_dom_element(value: &JsValue) -> bool {
    node_type_of(value) == Some(web_sys::Node::ELEMENT_NODE)
}

/// Check if a value is a DOM text node.
pub fn is_dom_text(value: &JsValue) -> bool {
    node_type_of(value) == Some(web_sys::Node::TEXT_NODE)
}

/// Check if a value is a DOM comment node.
pub fn is_dom_comment(value: &JsValue) -> bool {
    node_type_of(value) == Some(web_sys::Node::COMMENT_NODE)
}

fn node_type_of(value: &JsValue) -> Option<u16> {
    value.dyn_ref::<web_sys::Node>().map(|node| node.node_type())
}

/// Read-only view of the browser DOM.
///
/// Holds the window used for computed style lookups. Display classification
/// needs elements to be attached; detached elements fall back to the tag's
/// default display.
#[derive(Debug, Clone)]
pub struct DomTree {
    window: Option<web_sys::Window>,
}

impl DomTree {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    /// Engine over this tree with the default configuration.
    pub fn engine() -> DomEngine {
        PointEngine::new(Self::new())
    }

    pub fn window(&self) -> Option<&web_sys::Window> {
        self.window.as_ref()
    }

    fn computed_display(&self, element: &web_sys::Element) -> Option<Display> {
        let style = self.window.as_ref()?.get_computed_style(element).ok()??;
        let value = style.get_property_value("display").ok()?;
        if value.is_empty() {
            return None;
        }
        Some(Display::parse(&value))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTree for DomTree {
    type Node = web_sys::Node;

    fn kind(&self, node: &web_sys::Node) -> NodeKind {
        match node.node_type() {
            web_sys::Node::ELEMENT_NODE => NodeKind::Element,
            web_sys::Node::TEXT_NODE => NodeKind::Text,
            web_sys::Node::COMMENT_NODE => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }

    fn child_count(&self, node: &web_sys::Node) -> usize {
        node.child_nodes().length() as usize
    }

    fn child_at(&self, node: &web_sys::Node, index: usize) -> Option<web_sys::Node> {
        let index = u32::try_from(index).ok()?;
        node.child_nodes().item(index)
    }

    fn text_value(&self, node: &web_sys::Node) -> Option<Cow<'_, str>> {
        match node.node_type() {
            web_sys::Node::TEXT_NODE
            | web_sys::Node::COMMENT_NODE
            | web_sys::Node::CDATA_SECTION_NODE
            | web_sys::Node::PROCESSING_INSTRUCTION_NODE => node.node_value().map(Cow::Owned),
            _ => None,
        }
    }

    fn attribute(&self, node: &web_sys::Node, name: &str) -> Option<SmolStr> {
        node.dyn_ref::<web_sys::Element>()?
            .get_attribute(name)
            .map(SmolStr::from)
    }

    fn tag_name(&self, node: &web_sys::Node) -> Option<SmolStr> {
        node.dyn_ref::<web_sys::Element>()
            .map(|element| SmolStr::from(element.tag_name()))
    }

    fn display(&self, node: &web_sys::Node) -> Display {
        let Some(element) = node.dyn_ref::<web_sys::Element>() else {
            return Display::Inline;
        };
        self.computed_display(element).unwrap_or_else(|| {
            tracing::trace!(
                target: "leafpoint::dom",
                tag = %element.tag_name(),
                "no computed display, using tag default"
            );
            Display::default_for_tag(&element.tag_name())
        })
    }
}
