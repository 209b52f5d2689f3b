use core::fmt;

use crate::spec::MAX_PRECISION;

/// Size of the per-call scratch region.
pub(crate) const SCRATCH_CAPACITY: usize = 512;

// Widest rendering: `-` + 309 integral digits of `f64::MAX` + `.` + the
// clamped precision. Binary with separators (128 + 31) and every integer or
// pointer form are far shorter.
const _: () = assert!(1 + 309 + 1 + MAX_PRECISION as usize <= SCRATCH_CAPACITY);

/// Fixed stack buffer one value is rendered into before it is copied to the
/// output.
///
/// Writes past the end are dropped. For every supported kind the worst case
/// fits, so the drop path exists only to keep the type total.
pub(crate) struct Scratch {
    buf: [u8; SCRATCH_CAPACITY],
    len: usize,
}

impl Scratch {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; SCRATCH_CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = byte;
            self.len += 1;
        }
    }

    pub(crate) fn push_slice(&mut self, bytes: &[u8]) {
        let n = bytes.len().min(SCRATCH_CAPACITY - self.len);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Write for Scratch {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_slice(s.as_bytes());
        Ok(())
    }
}
