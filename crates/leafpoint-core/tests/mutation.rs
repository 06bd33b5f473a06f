//! The host tree may change between calls; nothing is cached.

use leafpoint_core::{ArenaTree, Point, PointEngine};

#[test]
fn normalization_follows_tree_edits() {
    let mut tree = ArenaTree::new();
    let p = tree.create_element("p");
    let first = tree.create_text("first");
    let second = tree.create_text("second");
    tree.append_child(p, first);
    tree.append_child(p, second);

    assert_eq!(
        PointEngine::new(&tree).normalize_point(Point::new(p, 0)),
        Point::new(first, 0)
    );

    tree.detach(first);
    assert_eq!(
        PointEngine::new(&tree).normalize_point(Point::new(p, 0)),
        Point::new(second, 0)
    );

    let comment = tree.create_comment("placeholder");
    tree.append_child(p, comment);
    assert_eq!(
        PointEngine::new(&tree).normalize_point(Point::new(p, 2)),
        Point::new(second, 6)
    );

    tree.set_text(second, "2nd");
    assert_eq!(
        PointEngine::new(&tree).normalize_point(Point::new(p, 2)),
        Point::new(second, 3)
    );
}

#[test]
fn extraction_follows_tree_edits() {
    let mut tree = ArenaTree::new();
    let div = tree.create_element("div");
    let text = tree.create_text("one");
    tree.append_child(div, text);
    assert_eq!(PointEngine::new(&tree).extract_text(&div), "one\n");

    let br = tree.create_element("br");
    let more = tree.create_text("two");
    tree.append_child(div, br);
    tree.append_child(div, more);
    assert_eq!(PointEngine::new(&tree).extract_text(&div), "one\ntwo\n");
}
