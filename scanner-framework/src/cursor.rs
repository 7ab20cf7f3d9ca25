use common_framework::{ByteSlice, Checkpoint, Position};
use std::sync::Arc;

/// A cursor for traversing an in-memory byte stream.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Arc<[u8]>,
    current: usize,
    position: Position,
}

impl Cursor {
    /// Creates a new cursor over a copy of the input.
    pub fn new<B: AsRef<[u8]>>(input: B) -> Self {
        Self::with_arc(Arc::from(input.as_ref()))
    }

    /// Creates a cursor from an existing shared buffer.
    pub fn with_arc(buffer: Arc<[u8]>) -> Self {
        Self {
            current: 0,
            position: Position::new(),
            buffer,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    pub fn is_eof(&self) -> bool {
        self.current >= self.buffer.len()
    }

    /// Returns the next byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.buffer.get(self.current).copied()
    }

    /// Advances the cursor by one byte.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position.step(byte);
        self.current += 1;
        Some(byte)
    }

    /// Consumes bytes while the predicate returns true.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> ByteSlice
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.current;
        while let Some(byte) = self.peek() {
            if !predicate(byte) {
                break;
            }
            self.advance();
        }
        ByteSlice::new(self.buffer.clone(), start, self.current)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.current, self.position)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.offset() <= self.buffer.len());
        self.current = checkpoint.offset();
        self.position = checkpoint.position();
    }
}
