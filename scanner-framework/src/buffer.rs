/// Fixed-capacity byte buffer that drops whatever does not fit.
///
/// Used for the line and word buffers of the exercises: contents are
/// overwritten in place and never grow past `capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    truncated: usize,
}

impl BoundedBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            capacity,
            truncated: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes dropped since the last `clear`.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.truncated = 0;
    }

    /// Appends one byte, returning false if it was dropped.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.bytes.len() < self.capacity {
            self.bytes.push(byte);
            true
        } else {
            self.truncated += 1;
            false
        }
    }

    /// Appends as much of `bytes` as fits and returns how many were stored.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> usize {
        let room = self.capacity - self.bytes.len();
        let stored = room.min(bytes.len());
        self.bytes.extend_from_slice(&bytes[..stored]);
        self.truncated += bytes.len() - stored;
        stored
    }

    /// Replaces the contents with `bytes`, truncated to capacity.
    pub fn overwrite(&mut self, bytes: &[u8]) -> usize {
        self.clear();
        self.extend_from_slice(bytes)
    }
}
