//! Leaf location: find the nearest child that can hold a cursor.
//!
//! Selection ranges from the platform often point at whitespace comments or
//! zero-width decorative elements. Starting at a child index, we probe in the
//! preferred direction, then restart next to the start index in the opposite
//! direction, and give up once both directions have run off an edge.
//!
//! The probing order is driven by an explicit [`SearchState`] machine:
//!
//! | state               | edge hit, not yet flipped | edge hit, already flipped |
//! |---------------------|---------------------------|---------------------------|
//! | `SearchingForward`  | `SearchingBackward`       | `BothExhausted`           |
//! | `SearchingBackward` | `SearchingForward`        | `BothExhausted`           |
//! | `BothExhausted`     | `BothExhausted`           | `BothExhausted`           |

use crate::config::EngineConfig;
use crate::point::Direction;
use crate::tree::{ContentTree, NodeKind};

/// State of a bidirectional child search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    SearchingForward,
    SearchingBackward,
    BothExhausted,
}

impl SearchState {
    /// Initial state for a search preferring `direction`.
    pub fn initial(direction: Direction) -> Self {
        match direction {
            Direction::Forward => SearchState::SearchingForward,
            Direction::Backward => SearchState::SearchingBackward,
        }
    }

    /// Transition taken when probing runs off an edge of the child list.
    ///
    /// `flipped` is whether the search already switched direction once.
    pub fn on_edge(self, flipped: bool) -> Self {
        match self.direction() {
            Some(direction) if !flipped => SearchState::initial(direction.reverse()),
            _ => SearchState::BothExhausted,
        }
    }

    /// Direction currently being probed, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            SearchState::SearchingForward => Some(Direction::Forward),
            SearchState::SearchingBackward => Some(Direction::Backward),
            SearchState::BothExhausted => None,
        }
    }
}

/// Iterator over child indices in bidirectional search order.
///
/// Forward from `start`: `start, start+1, .., len-1, start-1, .., 0`.
/// Backward from `start`: `start, start-1, .., 0, start+1, .., len-1`.
///
/// A start index at or past `len` is an immediate edge hit when searching
/// forward, and is pulled back to the last child when searching backward.
#[derive(Debug, Clone)]
pub struct Probe {
    start: isize,
    len: isize,
    cursor: isize,
    state: SearchState,
    flipped: bool,
}

impl Probe {
    pub fn new(start: usize, len: usize, direction: Direction) -> Self {
        let start = isize::try_from(start).unwrap_or(isize::MAX);
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let cursor = match direction {
            Direction::Forward => start,
            Direction::Backward => start.min(len - 1),
        };
        Self {
            start,
            len,
            cursor,
            state: SearchState::initial(direction),
            flipped: false,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    fn in_range(&self) -> bool {
        (0..self.len).contains(&self.cursor)
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            let direction = self.state.direction()?;

            if self.in_range() {
                let index = self.cursor as usize;
                self.cursor += direction.step();
                return Some(index);
            }

            self.state = self.state.on_edge(self.flipped);
            self.flipped = true;
            self.cursor = match self.state {
                SearchState::SearchingForward => self.start.saturating_add(1),
                SearchState::SearchingBackward => self.start.saturating_sub(1).min(self.len - 1),
                SearchState::BothExhausted => self.cursor,
            };
        }
    }
}

/// Outcome of a leaf search among a parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located<N> {
    /// An eligible child was found.
    Editable(N),
    /// Both directions ran out. Carries the last child that was probed, which
    /// is always in range; `None` only when the parent has no children.
    Exhausted { last_probed: Option<N> },
}

impl<N> Located<N> {
    pub fn is_editable(&self) -> bool {
        matches!(self, Located::Editable(_))
    }

    /// The found node, or the last probed one on exhaustion.
    pub fn into_node(self) -> Option<N> {
        match self {
            Located::Editable(node) => Some(node),
            Located::Exhausted { last_probed } => last_probed,
        }
    }
}

/// Whether `node` is explicitly marked non-editable.
fn is_marked_non_editable<T: ContentTree>(
    tree: &T,
    config: &EngineConfig,
    node: &T::Node,
) -> bool {
    tree.attribute(node, &config.editable_attribute)
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("false"))
}

/// Whether a child may hold a cursor (or be descended into to find one).
///
/// Comments, childless elements and elements marked non-editable are skipped.
pub fn is_editable_candidate<T: ContentTree>(
    tree: &T,
    config: &EngineConfig,
    node: &T::Node,
) -> bool {
    match tree.kind(node) {
        NodeKind::Comment => false,
        NodeKind::Element => {
            tree.has_children(node) && !is_marked_non_editable(tree, config, node)
        }
        NodeKind::Text | NodeKind::Other => true,
    }
}

/// Find the nearest editable child of `parent` around `index`, preferring
/// `direction`.
pub fn locate_editable_child<T: ContentTree>(
    tree: &T,
    config: &EngineConfig,
    parent: &T::Node,
    index: usize,
    direction: Direction,
) -> Located<T::Node> {
    let len = tree.child_count(parent);
    let mut last_probed = None;

    for i in Probe::new(index, len, direction) {
        let Some(child) = tree.child_at(parent, i) else {
            continue;
        };
        if is_editable_candidate(tree, config, &child) {
            tracing::trace!(
                target: "leafpoint::locate",
                start = index,
                found = i,
                ?direction,
                "located editable child"
            );
            return Located::Editable(child);
        }
        last_probed = Some(child);
    }

    tracing::trace!(
        target: "leafpoint::locate",
        start = index,
        child_count = len,
        ?direction,
        "no editable child in either direction"
    );
    Located::Exhausted { last_probed }
}
