//! Bounded tail capture for subprocess output.

use std::collections::VecDeque;

use fabgen_core::domain::DIAGNOSTIC_TAIL_CHARS;

/// Ring buffer that retains only the last N bytes fed into it.
///
/// Used while *reading* subprocess output, so memory stays O(capacity)
/// no matter how much the process prints. Rendering trims to the last
/// [`DIAGNOSTIC_TAIL_CHARS`] characters on a char boundary.
#[derive(Debug)]
pub struct TailBuffer {
    buf: VecDeque<u8>,
    capacity: usize,
}

impl TailBuffer {
    /// Capacity sized for the diagnostic tail: worst-case 4 bytes per
    /// UTF-8 character.
    pub fn new() -> Self {
        Self::with_capacity(DIAGNOSTIC_TAIL_CHARS * 4)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity.min(8 * 1024)),
            capacity,
        }
    }

    /// Append a chunk, discarding the oldest bytes beyond capacity.
    pub fn push(&mut self, chunk: &[u8]) {
        if chunk.len() >= self.capacity {
            self.buf.clear();
            self.buf.extend(&chunk[chunk.len() - self.capacity..]);
            return;
        }
        let overflow = (self.buf.len() + chunk.len()).saturating_sub(self.capacity);
        if overflow > 0 {
            self.buf.drain(..overflow);
        }
        self.buf.extend(chunk);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Render as a string of at most [`DIAGNOSTIC_TAIL_CHARS`] characters.
    pub fn into_tail(self) -> String {
        let bytes: Vec<u8> = self.buf.into_iter().collect();
        let text = String::from_utf8_lossy(&bytes);
        tail_chars(&text, DIAGNOSTIC_TAIL_CHARS)
    }
}

impl Default for TailBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// The last `n` characters of `text` (not bytes; safe on multi-byte
/// boundaries).
pub fn tail_chars(text: &str, n: usize) -> String {
    let count = text.chars().count();
    if count <= n {
        return text.to_string();
    }
    text.chars().skip(count - n).collect()
}
