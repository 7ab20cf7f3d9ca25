use crate::context::ScanContext;
use crate::error::ScanError;
use common_framework::{ByteSlice, Checkpoint, Position};
use std::io::{ErrorKind, Read};
use tracing::{trace, warn};

/// Bytes requested from the reader per read.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Scan context that pulls its input lazily from a reader.
///
/// At least one byte of look-ahead is kept buffered so `peek` never blocks.
/// Bytes before the last commit are discarded once a chunk's worth has
/// accumulated, so memory stays bounded by the longest unit being classified.
pub struct ReaderContext<R> {
    reader: R,
    buffer: Vec<u8>,
    /// Index of the next byte in `buffer`.
    current: usize,
    /// Stream offset of `buffer[0]`.
    base: usize,
    position: Position,
    finished: bool,
    error: Option<ScanError>,
}

impl<R: Read> ReaderContext<R> {
    pub fn new(reader: R) -> Self {
        let mut context = Self {
            reader,
            buffer: Vec::with_capacity(CHUNK_SIZE),
            current: 0,
            base: 0,
            position: Position::new(),
            finished: false,
            error: None,
        };
        context.fill();
        context
    }

    /// Bytes currently held in memory, including look-ahead and anything
    /// not yet compacted away.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Reads until a byte is available at `current` or the stream ends.
    fn fill(&mut self) {
        while !self.finished && self.current >= self.buffer.len() {
            let start = self.buffer.len();
            self.buffer.resize(start + CHUNK_SIZE, 0);
            match self.reader.read(&mut self.buffer[start..]) {
                Ok(0) => {
                    self.buffer.truncate(start);
                    self.finished = true;
                }
                Ok(n) => {
                    self.buffer.truncate(start + n);
                    trace!(bytes = n, offset = self.base + start, "read chunk");
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {
                    self.buffer.truncate(start);
                }
                Err(err) => {
                    self.buffer.truncate(start);
                    let offset = self.base + start;
                    warn!(offset, error = %err, "input read failed, ending stream");
                    self.error = Some(ScanError::Read {
                        offset,
                        source: err,
                    });
                    self.finished = true;
                }
            }
        }
    }
}

impl<R: Read> ScanContext for ReaderContext<R> {
    fn peek(&self) -> Option<u8> {
        self.buffer.get(self.current).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.current += 1;
        self.position.step(byte);
        self.fill();
        Some(byte)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn offset(&self) -> usize {
        self.base + self.current
    }

    fn is_eof(&self) -> bool {
        self.finished && self.current >= self.buffer.len()
    }

    fn consume_while<F>(&mut self, mut predicate: F) -> ByteSlice
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
        ByteSlice::copy_from(&self.buffer[start..self.current])
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.offset(), self.position)
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.offset() >= self.base, "checkpoint predates last commit");
        self.current = checkpoint.offset().saturating_sub(self.base);
        self.position = checkpoint.position();
    }

    fn commit(&mut self) {
        if self.current >= CHUNK_SIZE {
            self.buffer.drain(..self.current);
            self.base += self.current;
            self.current = 0;
        }
    }

    fn take_error(&mut self) -> Option<ScanError> {
        self.error.take()
    }
}
