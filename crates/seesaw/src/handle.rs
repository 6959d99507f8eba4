//! Allocation handles.
//!
//! A [`Span`] records where an allocation landed inside the arena's
//! backing buffer. It deliberately carries no reference to the arena, so
//! handles are `Copy`, cheap to store in side tables, and never extend a
//! borrow — the data is resolved later through [`crate::Arena::bytes`]
//! or [`crate::Arena::bytes_mut`].

use std::fmt;

/// Location of an allocation within an arena: a byte offset plus the
/// requested length.
///
/// The length is the size the caller asked for, not the rounded-up amount
/// the mark advanced by. A span stays valid until the direction it was
/// allocated from is reset; the arena does not detect stale spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl Span {
    pub(crate) fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset of the allocation within the arena's region.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Requested length of the allocation in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset one past the last byte of the allocation.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span(offset={}, len={})", self.offset, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_reports_offset_and_len() {
        let s = Span::new(32, 10);
        assert_eq!(s.offset(), 32);
        assert_eq!(s.len(), 10);
        assert_eq!(s.end(), 42);
        assert!(!s.is_empty());
    }

    #[test]
    fn empty_span() {
        let s = Span::new(64, 0);
        assert!(s.is_empty());
        assert_eq!(s.end(), 64);
    }
}
