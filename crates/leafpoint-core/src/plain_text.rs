//! Block-aware plaintext extraction.
//!
//! Concatenates descendant text in document order and appends a newline
//! *after* every block-level, list-item or `<br>` element. Consecutive blocks
//! therefore produce exactly one separator each and never a blank line.

use crate::tree::{ContentTree, NodeKind};

enum Frame<N> {
    Enter(N),
    Exit(N),
}

/// Plaintext projection of the subtree rooted at `node`.
///
/// Traversal uses an explicit stack, so deeply nested trees cannot overflow
/// the call stack. Comments and other non-text, non-element nodes contribute
/// nothing.
pub fn extract_text<T: ContentTree>(tree: &T, node: &T::Node) -> String {
    let mut text = String::new();
    let mut stack = vec![Frame::Enter(node.clone())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(node) => match tree.kind(&node) {
                NodeKind::Text => {
                    if let Some(value) = tree.text_value(&node) {
                        text.push_str(&value);
                    }
                }
                NodeKind::Element => {
                    let count = tree.child_count(&node);
                    stack.push(Frame::Exit(node.clone()));
                    // Reverse so the first child is popped first.
                    for i in (0..count).rev() {
                        if let Some(child) = tree.child_at(&node, i) {
                            stack.push(Frame::Enter(child));
                        }
                    }
                }
                NodeKind::Comment | NodeKind::Other => {}
            },
            Frame::Exit(node) => {
                if tree.is_block_level(&node) || tree.is_hard_break(&node) {
                    text.push('\n');
                }
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArenaTree, Display, NodeId};

    fn element_with_text(tree: &mut ArenaTree, tag: &str, text: &str) -> NodeId {
        let el = tree.create_element(tag);
        let t = tree.create_text(text);
        tree.append_child(el, t);
        el
    }

    #[test]
    fn test_text_node_is_verbatim() {
        let mut tree = ArenaTree::new();
        let text = tree.create_text("  spaced\tout ");
        let empty = tree.create_text("");
        assert_eq!(extract_text(&tree, &text), "  spaced\tout ");
        assert_eq!(extract_text(&tree, &empty), "");
    }

    #[test]
    fn test_comment_and_other_are_empty() {
        let mut tree = ArenaTree::new();
        let comment = tree.create_comment("hidden");
        let other = tree.create_other();
        assert_eq!(extract_text(&tree, &comment), "");
        assert_eq!(extract_text(&tree, &other), "");
    }

    #[test]
    fn test_nested_block_inside_block() {
        // <div>A<div>B</div>C</div>
        let mut tree = ArenaTree::new();
        let outer = tree.create_element("div");
        let a = tree.create_text("A");
        let inner = element_with_text(&mut tree, "div", "B");
        let c = tree.create_text("C");
        tree.append_child(outer, a);
        tree.append_child(outer, inner);
        tree.append_child(outer, c);

        let children: String = tree
            .children(&outer)
            .map(|child| extract_text(&tree, &child))
            .collect();
        assert_eq!(children, "AB\nC");
        // The outer div contributes its own trailing newline.
        assert_eq!(extract_text(&tree, &outer), "AB\nC\n");
    }

    #[test]
    fn test_nested_block_inside_inline() {
        // <span>A<div>B</div>C</span>
        let mut tree = ArenaTree::new();
        let outer = tree.create_element("span");
        let a = tree.create_text("A");
        let inner = element_with_text(&mut tree, "div", "B");
        let c = tree.create_text("C");
        tree.append_child(outer, a);
        tree.append_child(outer, inner);
        tree.append_child(outer, c);

        assert_eq!(extract_text(&tree, &outer), "AB\nC");
    }

    #[test]
    fn test_paragraphs_lists_and_breaks() {
        let mut tree = ArenaTree::new();
        let root = tree.create_element("span");
        let p = tree.create_element("p");
        let line1 = tree.create_text("line one");
        let br = tree.create_element("br");
        let line2 = tree.create_text("line two");
        tree.append_child(p, line1);
        tree.append_child(p, br);
        tree.append_child(p, line2);
        let ul = tree.create_element("ul");
        let li1 = element_with_text(&mut tree, "li", "first");
        let li2 = element_with_text(&mut tree, "li", "second");
        tree.append_child(ul, li1);
        tree.append_child(ul, li2);
        let note = tree.create_comment("ignored");
        let tail = tree.create_text("end");
        for child in [p, note, ul, tail] {
            tree.append_child(root, child);
        }

        insta::assert_snapshot!(extract_text(&tree, &root), @r"
        line one
        line two
        first
        second

        end
        ");
    }

    #[test]
    fn test_resolved_display_overrides_tag_default() {
        let mut tree = ArenaTree::new();
        let root = tree.create_element("div");
        let a = element_with_text(&mut tree, "span", "a");
        let b = element_with_text(&mut tree, "div", "b");
        tree.set_display(a, Display::Block);
        tree.set_display(b, Display::Inline);
        tree.append_child(root, a);
        tree.append_child(root, b);

        assert_eq!(extract_text(&tree, &root), "a\nb\n");
    }

    #[test]
    fn test_extraction_is_additive() {
        let mut tree = ArenaTree::new();
        let root = tree.create_element("article");
        let h1 = element_with_text(&mut tree, "h1", "Title");
        let em = element_with_text(&mut tree, "em", "lead ");
        let p = element_with_text(&mut tree, "p", "body");
        for child in [h1, em, p] {
            tree.append_child(root, child);
        }

        let mut expected: String = tree
            .children(&root)
            .map(|child| extract_text(&tree, &child))
            .collect();
        expected.push('\n');
        assert_eq!(extract_text(&tree, &root), expected);
        assert_eq!(expected, "Title\nlead body\n\n");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut tree = ArenaTree::new();
        let root = tree.create_element("span");
        let mut parent = root;
        for _ in 0..100_000 {
            let child = tree.create_element("span");
            tree.append_child(parent, child);
            parent = child;
        }
        let leaf = tree.create_text("deep");
        tree.append_child(parent, leaf);

        assert_eq!(extract_text(&tree, &root), "deep");
    }
}
