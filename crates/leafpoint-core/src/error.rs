use thiserror::Error;

/// Why a raw point is not a valid address into the host tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    #[error("child offset {offset} is past the last child boundary {child_count}")]
    ChildOffsetOutOfRange { offset: usize, child_count: usize },

    #[error("text offset {offset} is past the end of text of length {len}")]
    TextOffsetOutOfRange { offset: usize, len: usize },

    #[error("offset {offset} on a node that only admits offset 0")]
    NonZeroOffset { offset: usize },
}
