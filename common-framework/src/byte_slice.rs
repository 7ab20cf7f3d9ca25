use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable slice referencing a shared byte buffer.
///
/// The slice keeps an `Arc<[u8]>` alive so that it can be cloned and handed to
/// an accumulator without tying it to the lifetime of the scan context. It
/// derefs to `[u8]`, so it can be used as a byte slice in most places.
#[derive(Clone, Debug)]
pub struct ByteSlice {
    buffer: Arc<[u8]>,
    start: usize,
    end: usize,
}

impl ByteSlice {
    /// Creates a new slice from the given shared buffer and byte range.
    pub fn new(buffer: Arc<[u8]>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= buffer.len());
        Self { buffer, start, end }
    }

    /// Creates a slice that covers the entire buffer.
    pub fn from_arc(buffer: Arc<[u8]>) -> Self {
        let end = buffer.len();
        Self {
            buffer,
            start: 0,
            end,
        }
    }

    /// Copies `bytes` into a fresh buffer and returns a slice over all of it.
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self::from_arc(Arc::from(bytes))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[self.start..self.end]
    }

    /// Decodes the slice as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl std::fmt::Display for ByteSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl Deref for ByteSlice {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteSlice {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl PartialEq<&[u8]> for ByteSlice {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<&str> for ByteSlice {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq for ByteSlice {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteSlice {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_slice() {
        let buffer: Arc<[u8]> = Arc::from(&b"hello world"[..]);
        let slice = ByteSlice::new(buffer, 6, 11);
        assert_eq!(slice, "world");
        assert_eq!(slice.len(), 5);
        assert_eq!(slice.start(), 6);
    }

    #[test]
    fn test_equality_ignores_backing_buffer() {
        let a = ByteSlice::copy_from(b"abc");
        let b = ByteSlice::new(Arc::from(&b"xabcx"[..]), 1, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lossy_display() {
        let slice = ByteSlice::copy_from(&[b'a', 0xff, b'b']);
        assert_eq!(slice.to_string(), "a\u{fffd}b");
    }

    #[test]
    fn test_empty() {
        let slice = ByteSlice::copy_from(b"");
        assert!(slice.is_empty());
    }
}
