use crate::cursor::Cursor;
use crate::error::ScanError;
use common_framework::{ByteSlice, Checkpoint, Position};

/// Source of bytes a scanner pulls from.
///
/// Rules only see the stream through this trait, so the same rule set runs
/// over an in-memory buffer in tests and over stdin in the CLI.
pub trait ScanContext {
    /// Returns the next byte without advancing, or `None` at end-of-stream.
    fn peek(&self) -> Option<u8>;

    /// Consumes and returns the next byte.
    fn advance(&mut self) -> Option<u8>;

    fn position(&self) -> Position;

    /// Absolute byte offset from the start of the stream.
    fn offset(&self) -> usize;

    fn is_eof(&self) -> bool {
        self.peek().is_none()
    }

    /// Consumes bytes while the predicate returns true.
    fn consume_while<F>(&mut self, mut predicate: F) -> ByteSlice
    where
        F: FnMut(u8) -> bool,
    {
        let mut taken = Vec::new();
        while let Some(byte) = self.peek() {
            if !predicate(byte) {
                break;
            }
            taken.push(byte);
            self.advance();
        }
        ByteSlice::copy_from(&taken)
    }

    fn checkpoint(&self) -> Checkpoint;

    /// Rewinds to a checkpoint taken since the last [`commit`](Self::commit).
    fn restore(&mut self, checkpoint: Checkpoint);

    /// Signals that everything before the current offset has been classified.
    /// Checkpoints taken before a commit may no longer be restored.
    ///
    /// A rule that is already certain to match may commit while it consumes,
    /// so a streaming context can drop the front of a very long unit.
    fn commit(&mut self) {}

    /// Takes the error that ended the stream early, if any.
    fn take_error(&mut self) -> Option<ScanError> {
        None
    }
}

/// In-memory scan context.
#[derive(Debug)]
pub struct DefaultContext {
    cursor: Cursor,
}

impl DefaultContext {
    pub fn new<B: AsRef<[u8]>>(input: B) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }
}

impl From<&str> for DefaultContext {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for DefaultContext {
    fn from(value: Vec<u8>) -> Self {
        Self {
            cursor: Cursor::with_arc(value.into()),
        }
    }
}

impl ScanContext for DefaultContext {
    fn peek(&self) -> Option<u8> {
        self.cursor.peek()
    }

    fn advance(&mut self) -> Option<u8> {
        self.cursor.advance()
    }

    fn position(&self) -> Position {
        self.cursor.position()
    }

    fn offset(&self) -> usize {
        self.cursor.offset()
    }

    fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    fn consume_while<F>(&mut self, predicate: F) -> ByteSlice
    where
        F: FnMut(u8) -> bool,
    {
        self.cursor.consume_while(predicate)
    }

    fn checkpoint(&self) -> Checkpoint {
        self.cursor.checkpoint()
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.restore(checkpoint);
    }
}
