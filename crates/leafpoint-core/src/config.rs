//! Engine configuration.

use smol_str::SmolStr;

use crate::void_tags::VoidTags;

/// Attribute that marks an element as non-editable when set to `"false"`.
pub const DEFAULT_EDITABLE_ATTRIBUTE: &str = "contenteditable";

/// Settings supplied to a [`PointEngine`](crate::PointEngine) at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Attribute consulted by the editability check.
    pub editable_attribute: SmolStr,
    /// Tags treated as void by the void-child finder.
    pub void_tags: VoidTags,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            editable_attribute: SmolStr::new_static(DEFAULT_EDITABLE_ATTRIBUTE),
            void_tags: VoidTags::html(),
        }
    }
}

impl EngineConfig {
    pub fn with_editable_attribute(mut self, name: impl Into<SmolStr>) -> Self {
        self.editable_attribute = name.into();
        self
    }

    pub fn with_void_tags(mut self, void_tags: VoidTags) -> Self {
        self.void_tags = void_tags;
        self
    }
}
