//! Void ("never has children") tag sets and the void-child finder.
//!
//! The tag set is an injected, immutable value rather than a global list, so
//! embedders with custom embedded-content schemas can substitute their own.

use std::collections::BTreeSet;
use std::sync::Arc;

use smol_str::{SmolStr, StrExt};

use crate::tree::ContentTree;

/// The HTML void elements.
pub const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "command", "embed", "frame", "hr",
    "image", "img", "input", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Immutable set of lowercase tag names for elements that never have children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<SmolStr>", into = "Vec<SmolStr>")
)]
pub struct VoidTags {
    tags: Arc<BTreeSet<SmolStr>>,
}

impl VoidTags {
    /// Build a set from arbitrary tag names. Names are lowercased.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_ascii_lowercase_smolstr())
            .filter(|tag| !tag.is_empty())
            .collect();
        Self {
            tags: Arc::new(tags),
        }
    }

    /// The standard HTML void element set.
    pub fn html() -> Self {
        Self::new(HTML_VOID_ELEMENTS)
    }

    /// Empty set; nothing is void.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, tag: &str) -> bool {
        if tag.bytes().any(|b| b.is_ascii_uppercase()) {
            self.tags.contains(&tag.to_ascii_lowercase_smolstr())
        } else {
            self.tags.contains(tag)
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for VoidTags {
    fn default() -> Self {
        Self::html()
    }
}

impl From<Vec<SmolStr>> for VoidTags {
    fn from(tags: Vec<SmolStr>) -> Self {
        Self::new(tags)
    }
}

impl From<VoidTags> for Vec<SmolStr> {
    fn from(tags: VoidTags) -> Self {
        tags.tags.iter().cloned().collect()
    }
}

/// Find the first direct child element whose tag is in `tags`.
///
/// Not recursive. Used by editing code to special-case atomic embedded
/// content such as images.
pub fn find_void_child<T: ContentTree>(
    tree: &T,
    tags: &VoidTags,
    element: &T::Node,
) -> Option<T::Node> {
    tree.children(element).find(|child| {
        tree.kind(child).is_element()
            && tree
                .tag_name(child)
                .is_some_and(|tag| tags.contains(&tag))
    })
}
