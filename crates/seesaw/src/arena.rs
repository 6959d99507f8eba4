//! Bidirectional bump arena over a single fixed region.
//!
//! An [`Arena`] carves allocations out of one contiguous byte buffer from
//! both ends at once: the low mark climbs from offset zero, the high mark
//! descends from the capacity, and the gap between them is the shared
//! free pool. Allocation is a bounds check plus a cursor bump; the only
//! reclamation is resetting a mark back to its origin (or restoring a
//! saved mark via [`crate::Scope`]). Nothing is ever freed individually,
//! split, merged, or compacted.
//!
//! Every fallible operation is transactional: on failure the marks are
//! exactly as they were before the call.

use std::fmt;
use std::fmt::Write as _;

use crate::align::{is_aligned, round_up, ALIGN};
use crate::error::ArenaError;
use crate::handle::Span;
use crate::trace::{TraceEvent, TraceKind, TraceSink};

/// Which end of the region an operation acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Grow upward from the start of the region.
    Low,
    /// Grow downward from the end of the region.
    High,
}

impl Direction {
    /// The other growth direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Bidirectional linear allocator over an owned byte buffer.
///
/// The buffer is fixed for the arena's lifetime — it never grows. Two
/// cursors partition it: `[0, low)` holds low-growth allocations,
/// `[high, capacity)` holds high-growth allocations, and `[low, high)`
/// is free. Allocations hand out [`Span`] handles; the bytes behind a
/// span are resolved with [`Arena::bytes`] / [`Arena::bytes_mut`] and
/// are *not* cleared on allocation — after a reset, a fresh span may
/// contain stale bytes from earlier use. Callers must write before they
/// read.
///
/// There is no internal synchronization; share an arena across threads
/// only under external mutual exclusion, or give each thread its own.
///
/// # Example
///
/// ```
/// use seesaw::{Arena, Direction};
///
/// let mut arena = Arena::new(1024);
/// let span = arena.alloc_low(64)?;
/// arena.bytes_mut(span).fill(0xAB);
/// assert_eq!(arena.inuse_low(), 64);
///
/// arena.alloc_high(32)?;
/// assert_eq!(arena.avail(), 1024 - 64 - 32);
///
/// arena.reset_low();
/// assert_eq!(arena.inuse_low(), 0);
/// # Ok::<(), seesaw::ArenaError>(())
/// ```
pub struct Arena {
    /// Backing storage. Zeroed once at construction, never afterwards.
    data: Vec<u8>,
    /// Low mark: offset one past the last low-growth allocation.
    low: usize,
    /// High mark: offset of the lowest high-growth allocation.
    high: usize,
    /// Optional event sink. `None` means tracing is off.
    sink: Option<Box<dyn TraceSink>>,
}

impl Arena {
    /// Create an arena owning a fresh region of `capacity` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a multiple of 16. That is a caller
    /// bug, not a recoverable condition.
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(vec![0u8; capacity])
    }

    /// Bind an arena to caller-supplied storage.
    ///
    /// The arena allocates out of `buffer` as-is; the caller gets the
    /// buffer back with [`Arena::into_buffer`]. Spare `Vec` capacity
    /// beyond `buffer.len()` is never used.
    ///
    /// # Panics
    ///
    /// Panics if `buffer.len()` is not a multiple of 16.
    pub fn from_buffer(buffer: Vec<u8>) -> Self {
        assert!(
            is_aligned(buffer.len(), ALIGN),
            "arena capacity must be a multiple of {} (got {})",
            ALIGN,
            buffer.len(),
        );
        let high = buffer.len();
        Self {
            data: buffer,
            low: 0,
            high,
            sink: None,
        }
    }

    /// Release the backing storage, consuming the arena.
    ///
    /// All outstanding spans become meaningless; the buffer's contents
    /// are whatever the arena's users last wrote.
    pub fn into_buffer(self) -> Vec<u8> {
        self.data
    }

    /// Install or remove the trace sink.
    ///
    /// Tracing has no effect on allocation semantics; with `None` (the
    /// default) each operation pays a single branch.
    pub fn set_trace_sink(&mut self, sink: Option<Box<dyn TraceSink>>) {
        self.sink = sink;
    }

    /// Total capacity of the region in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes currently free between the two marks.
    pub fn avail(&self) -> usize {
        self.high - self.low
    }

    /// Bytes allocated from the low end.
    pub fn inuse_low(&self) -> usize {
        self.low
    }

    /// Bytes allocated from the high end.
    pub fn inuse_high(&self) -> usize {
        self.data.len() - self.high
    }

    /// Current low mark (offset of the next low-growth allocation).
    pub fn mark_low(&self) -> usize {
        self.low
    }

    /// Current high mark (offset of the lowest high-growth allocation).
    pub fn mark_high(&self) -> usize {
        self.high
    }

    /// Restore the low mark to a previously observed value.
    ///
    /// Everything allocated from the low end past `mark` is reclaimed at
    /// once. The arena cannot tell a saved mark from an arbitrary one;
    /// restoring anything other than a value obtained from
    /// [`Arena::mark_low`] on this arena is a caller contract violation.
    ///
    /// # Panics
    ///
    /// Panics if `mark` lies beyond the high mark.
    pub fn set_mark_low(&mut self, mark: usize) {
        assert!(
            mark <= self.high,
            "low mark {} would cross the high mark {}",
            mark,
            self.high,
        );
        self.low = mark;
    }

    /// Restore the high mark to a previously observed value.
    ///
    /// Counterpart of [`Arena::set_mark_low`] for the high direction.
    ///
    /// # Panics
    ///
    /// Panics if `mark` lies below the low mark or beyond the capacity.
    pub fn set_mark_high(&mut self, mark: usize) {
        assert!(
            mark >= self.low && mark <= self.data.len(),
            "high mark {} outside [{}, {}]",
            mark,
            self.low,
            self.data.len(),
        );
        self.high = mark;
    }

    /// Reclaim every low-growth allocation. O(1), always safe to call.
    pub fn reset_low(&mut self) {
        self.low = 0;
        self.trace(TraceKind::Reset, Direction::Low, 0, 0);
    }

    /// Reclaim every high-growth allocation. O(1), always safe to call.
    pub fn reset_high(&mut self) {
        self.high = self.data.len();
        self.trace(TraceKind::Reset, Direction::High, 0, 0);
    }

    /// Reclaim both directions at once.
    pub fn reset(&mut self) {
        self.reset_low();
        self.reset_high();
    }

    /// Allocate `size` bytes from the low end, rounded up to 16 bytes.
    pub fn alloc_low(&mut self, size: usize) -> Result<Span, ArenaError> {
        self.alloc_low_aligned(size, ALIGN)
    }

    /// Allocate `size` bytes from the high end, rounded up to 16 bytes.
    pub fn alloc_high(&mut self, size: usize) -> Result<Span, ArenaError> {
        self.alloc_high_aligned(size, ALIGN)
    }

    /// Allocate from either end, chosen by `direction`.
    pub fn alloc(&mut self, direction: Direction, size: usize) -> Result<Span, ArenaError> {
        match direction {
            Direction::Low => self.alloc_low(size),
            Direction::High => self.alloc_high(size),
        }
    }

    /// Allocate `size` bytes from the low end with an explicit alignment.
    ///
    /// The mark advances by `size` rounded up to a multiple of `align`,
    /// so a run of same-alignment requests keeps every span start
    /// `align`-aligned. On failure the marks are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    pub fn alloc_low_aligned(&mut self, size: usize, align: usize) -> Result<Span, ArenaError> {
        let rounded = self.admit(size, align)?;
        let offset = self.low;
        self.low += rounded;
        self.trace(TraceKind::Alloc, Direction::Low, offset, size);
        Ok(Span::new(offset, size))
    }

    /// Allocate `size` bytes from the high end with an explicit alignment.
    ///
    /// Counterpart of [`Arena::alloc_low_aligned`]; the span starts at
    /// the new (lowered) high mark. Because the high mark descends from
    /// `capacity`, span starts are `align`-aligned only when the
    /// capacity is itself a multiple of `align` (always true for the
    /// default 16) in addition to the requests sharing that alignment.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    pub fn alloc_high_aligned(&mut self, size: usize, align: usize) -> Result<Span, ArenaError> {
        let rounded = self.admit(size, align)?;
        self.high -= rounded;
        let offset = self.high;
        self.trace(TraceKind::Alloc, Direction::High, offset, size);
        Ok(Span::new(offset, size))
    }

    /// Shared admission check: round the request and verify it fits.
    fn admit(&self, size: usize, align: usize) -> Result<usize, ArenaError> {
        assert!(
            align.is_power_of_two(),
            "alignment must be a power of two (got {align})",
        );
        let avail = self.avail();
        // Rounding can only overflow when size is astronomically larger
        // than any region, so report the raw request in that case.
        let rounded = round_up(size, align).ok_or(ArenaError::OutOfSpace {
            requested: size,
            rounded: size,
            available: avail,
        })?;
        if rounded > avail {
            return Err(ArenaError::OutOfSpace {
                requested: size,
                rounded,
                available: avail,
            });
        }
        Ok(rounded)
    }

    /// Format a string directly into the free region at the low mark.
    ///
    /// Two-phase format-then-commit: the output is written speculatively
    /// into the free bytes between the marks, and the low mark advances
    /// only if the whole string fit with at least one byte to spare (the
    /// mark then moves past the string plus one padding byte, rounded up
    /// to 16). On truncation the marks are untouched and the scribbled
    /// bytes are plain free space again. The returned span's length is
    /// the exact formatted byte length; view it with [`Arena::str_at`].
    ///
    /// Callers normally go through the [`crate::format_low!`] macro
    /// rather than building [`fmt::Arguments`] by hand.
    pub fn format_low(&mut self, args: fmt::Arguments<'_>) -> Result<Span, ArenaError> {
        let (low, high) = (self.low, self.high);
        let avail = high - low;

        let mut writer = FreeRegionWriter {
            buf: &mut self.data[low..high],
            written: 0,
        };
        if writer.write_fmt(args).is_err() {
            return Err(ArenaError::FormatTruncated { available: avail });
        }
        let len = writer.written;

        // One byte after the string is reserved as terminator padding;
        // commit only when len + 1 still fits after rounding.
        let rounded = match round_up(len + 1, ALIGN) {
            Some(r) if r <= avail => r,
            _ => return Err(ArenaError::FormatTruncated { available: avail }),
        };

        self.low += rounded;
        self.trace(TraceKind::Format, Direction::Low, low, len);
        Ok(Span::new(low, len))
    }

    /// Borrow the bytes behind a span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie within the region. A span whose
    /// direction has been reset still resolves (to whatever bytes are
    /// there now) — staleness is not detected.
    pub fn bytes(&self, span: Span) -> &[u8] {
        &self.data[span.offset..span.end()]
    }

    /// Mutably borrow the bytes behind a span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie within the region.
    pub fn bytes_mut(&mut self, span: Span) -> &mut [u8] {
        &mut self.data[span.offset..span.end()]
    }

    /// View a formatted span as a string slice.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of range or its bytes are not valid
    /// UTF-8 (possible if the span was overwritten since formatting).
    pub fn str_at(&self, span: Span) -> &str {
        std::str::from_utf8(self.bytes(span)).expect("span does not hold valid UTF-8")
    }

    fn trace(&self, kind: TraceKind, direction: Direction, offset: usize, size: usize) {
        if let Some(sink) = &self.sink {
            sink.record(&TraceEvent {
                kind,
                direction,
                offset,
                size,
                inuse_low: self.low,
                inuse_high: self.data.len() - self.high,
                capacity: self.data.len(),
            });
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.data.len())
            .field("low", &self.low)
            .field("high", &self.high)
            .field("traced", &self.sink.is_some())
            .finish()
    }
}

/// `fmt::Write` adapter over the free region. Refuses to write past the
/// end of the buffer, which is the truncation signal `format_low` keys
/// its commit decision on.
struct FreeRegionWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl fmt::Write for FreeRegionWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.written.checked_add(bytes.len()).ok_or(fmt::Error)?;
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.written..end].copy_from_slice(bytes);
        self.written = end;
        Ok(())
    }
}

/// Format a string into an arena's low end, committing only if it fits.
///
/// Sugar over [`Arena::format_low`]:
///
/// ```
/// use seesaw::{format_low, Arena};
///
/// let mut arena = Arena::new(1024);
/// let span = format_low!(arena, "hello world #{}", 1)?;
/// assert_eq!(arena.str_at(span), "hello world #1");
/// assert_eq!(arena.inuse_low(), 16);
/// # Ok::<(), seesaw::ArenaError>(())
/// ```
#[macro_export]
macro_rules! format_low {
    ($arena:expr, $($arg:tt)*) => {
        $arena.format_low(::core::format_args!($($arg)*))
    };
}
