//! Display and tag classification.
//!
//! Decides which elements break lines in plaintext extraction. Hosts with a
//! style engine feed the resolved CSS `display` value through
//! [`Display::parse`]; hosts without one fall back to
//! [`Display::default_for_tag`].

/// Resolved CSS `display` classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Display {
    Block,
    #[default]
    Inline,
    InlineBlock,
    ListItem,
    None,
    /// Any value we don't distinguish (flex, grid, table-cell, contents, ...).
    Other,
}

impl Display {
    /// Parse a computed `display` value. Unknown values map to `Other`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("block") {
            Display::Block
        } else if value.eq_ignore_ascii_case("inline") {
            Display::Inline
        } else if value.eq_ignore_ascii_case("inline-block") {
            Display::InlineBlock
        } else if value.eq_ignore_ascii_case("list-item") || value.eq_ignore_ascii_case("list") {
            // `list` is not a CSS keyword, but older editor code tested for it.
            Display::ListItem
        } else if value.eq_ignore_ascii_case("none") {
            Display::None
        } else {
            Display::Other
        }
    }

    /// Whether content with this display occupies its own line.
    pub fn is_line_breaking(self) -> bool {
        matches!(self, Display::Block | Display::ListItem)
    }

    /// User-agent default display for a tag.
    pub fn default_for_tag(tag: &str) -> Self {
        const BLOCK: &[&str] = &[
            "address",
            "article",
            "aside",
            "blockquote",
            "body",
            "dd",
            "details",
            "div",
            "dl",
            "dt",
            "fieldset",
            "figcaption",
            "figure",
            "footer",
            "form",
            "h1",
            "h2",
            "h3",
            "h4",
            "h5",
            "h6",
            "header",
            "hr",
            "html",
            "main",
            "nav",
            "ol",
            "p",
            "pre",
            "section",
            "summary",
            "ul",
        ];
        const HIDDEN: &[&str] = &[
            "head", "link", "meta", "script", "style", "template", "title",
        ];

        if tag.eq_ignore_ascii_case("li") {
            return Display::ListItem;
        }
        if tag.eq_ignore_ascii_case("img")
            || tag.eq_ignore_ascii_case("input")
            || tag.eq_ignore_ascii_case("button")
            || tag.eq_ignore_ascii_case("select")
            || tag.eq_ignore_ascii_case("textarea")
        {
            return Display::InlineBlock;
        }
        if BLOCK.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
            return Display::Block;
        }
        if HIDDEN.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
            return Display::None;
        }
        Display::Inline
    }
}

/// Whether a tag denotes a hard line break.
pub fn is_hard_break_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("br")
}
