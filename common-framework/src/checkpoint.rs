use crate::Position;

/// Saved cursor state used to undo a rule that did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// Absolute byte offset into the stream.
    offset: usize,
    position: Position,
}

impl Checkpoint {
    pub fn new(offset: usize, position: Position) -> Self {
        Self { offset, position }
    }

    /// Returns the absolute byte offset stored in this checkpoint.
    ///
    /// Streaming contexts discard consumed input, so this is an offset from the
    /// start of the stream, not an index into any particular buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
