use alloc::{borrow::Cow, string::String, vec::Vec};
use core::fmt;

use bstr::{BStr, ByteSlice};

/// Owned output of one formatting call, bounded by a fixed capacity.
///
/// Every write past the capacity is dropped and the buffer is marked
/// truncated; the bytes already stored are never touched again.
#[derive(Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

impl OutputBuffer {
    /// An empty buffer that holds at most `capacity` bytes.
    ///
    /// Storage is allocated lazily, so a large capacity costs nothing until
    /// it is used.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            capacity,
            truncated: false,
        }
    }

    /// Appends as much of `bytes` as fits.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let room = self.remaining();
        if bytes.len() > room {
            if !self.truncated {
                log::debug!(
                    "output truncated at {} bytes, dropping {} of {}",
                    self.capacity,
                    bytes.len() - room,
                    bytes.len()
                );
            }
            self.truncated = true;
        }
        self.bytes.extend_from_slice(&bytes[..bytes.len().min(room)]);
    }

    /// Appends one byte if it fits.
    pub fn push_byte(&mut self, byte: u8) {
        self.push_bytes(&[byte]);
    }

    /// Whether any write was dropped.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Maximum number of bytes the buffer holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes that can still be written before truncation.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.bytes.len())
    }

    /// The bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The bytes written so far, as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.bytes.as_bstr()
    }

    /// The contents as text, with invalid UTF-8 (for example a character
    /// split by truncation) replaced by U+FFFD.
    #[must_use]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        self.bytes.to_str_lossy()
    }

    /// Consumes the buffer, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Owned variant of [`OutputBuffer::to_str_lossy`].
    #[must_use]
    pub fn into_string_lossy(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(text) => text,
            Err(err) => err.as_bytes().to_str_lossy().into_owned(),
        }
    }
}

impl AsRef<[u8]> for OutputBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputBuffer")
            .field("bytes", &self.as_bstr())
            .field("capacity", &self.capacity)
            .field("truncated", &self.truncated)
            .finish()
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn writes_past_capacity_are_dropped() {
        let mut out = OutputBuffer::with_capacity(5);
        out.push_bytes(b"abc");
        assert!(!out.is_truncated());
        out.push_bytes(b"defg");
        assert_eq!(out.as_bytes(), b"abcde");
        assert!(out.is_truncated());
        out.push_byte(b'h');
        assert_eq!(out.as_bytes(), b"abcde");
        assert_eq!(out.remaining(), 0);
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut out = OutputBuffer::with_capacity(0);
        out.push_bytes(b"");
        assert!(!out.is_truncated());
        out.push_byte(b'x');
        assert!(out.is_empty());
        assert!(out.is_truncated());
    }

    #[test]
    fn split_character_reads_lossy() {
        let mut out = OutputBuffer::with_capacity(2);
        out.push_bytes("é!".as_bytes());
        out.push_bytes("é".as_bytes());
        assert_eq!(out.len(), 2);
        assert_eq!(out.to_str_lossy(), "é");

        let mut out = OutputBuffer::with_capacity(3);
        out.push_bytes("aé".as_bytes());
        out.push_bytes("é".as_bytes());
        assert_eq!(out.into_string_lossy(), "aé");
        let mut out = OutputBuffer::with_capacity(2);
        out.push_bytes("aé".as_bytes());
        assert_eq!(out.into_string_lossy(), "a\u{fffd}");
    }

    #[test]
    fn debug_shows_text() {
        let mut out = OutputBuffer::with_capacity(8);
        out.push_bytes(b"hi\xff");
        assert_eq!(
            format!("{out:?}"),
            r#"OutputBuffer { bytes: "hi\xff", capacity: 8, truncated: false }"#
        );
    }
}
