//! Opt-in allocation tracing.
//!
//! Tracing is an injected sink rather than a compile-time switch: an
//! arena with no sink installed pays one `Option` check per event, and a
//! sink never influences allocation semantics. [`StderrSink`] renders one
//! structured line per event; the line format is advisory and no consumer
//! should parse it.

use std::fmt;

use crate::arena::Direction;

/// What kind of arena event is being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceKind {
    /// A successful allocation advanced a mark.
    Alloc,
    /// A mark was returned to its origin.
    Reset,
    /// A formatted write was committed.
    Format,
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc => write!(f, "alloc"),
            Self::Reset => write!(f, "reset"),
            Self::Format => write!(f, "format"),
        }
    }
}

/// A single arena event, captured after the operation took effect.
///
/// Usage figures reflect the state the operation left behind. For
/// [`TraceKind::Reset`] events `offset` and `size` are zero.
#[derive(Clone, Copy, Debug)]
pub struct TraceEvent {
    /// The operation that occurred.
    pub kind: TraceKind,
    /// Which growth direction the operation acted on.
    pub direction: Direction,
    /// Byte offset the operation produced (zero for resets).
    pub offset: usize,
    /// Bytes requested (zero for resets).
    pub size: usize,
    /// Bytes in use from the low end after the operation.
    pub inuse_low: usize,
    /// Bytes in use from the high end after the operation.
    pub inuse_high: usize,
    /// Total capacity of the region.
    pub capacity: usize,
}

impl TraceEvent {
    /// Percentage of the region currently in use across both directions.
    pub fn percent_used(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.inuse_low + self.inuse_high) as f64 * 100.0 / self.capacity as f64
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seesaw: {} {}: offset={} size={} low={} high={} capacity={} used={:.1}%",
            self.kind,
            self.direction,
            self.offset,
            self.size,
            self.inuse_low,
            self.inuse_high,
            self.capacity,
            self.percent_used(),
        )
    }
}

/// Receiver for arena trace events.
///
/// Implementations must not touch the arena that produced the event (it
/// is mutably borrowed while the event is delivered).
pub trait TraceSink {
    /// Record one event.
    fn record(&self, event: &TraceEvent);
}

/// Sink that writes one line per event to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl TraceSink for StderrSink {
    fn record(&self, event: &TraceEvent) {
        eprintln!("{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_used_spans_both_directions() {
        let event = TraceEvent {
            kind: TraceKind::Alloc,
            direction: Direction::Low,
            offset: 0,
            size: 16,
            inuse_low: 256,
            inuse_high: 256,
            capacity: 1024,
        };
        assert_eq!(event.percent_used(), 50.0);
    }

    #[test]
    fn percent_used_handles_zero_capacity() {
        let event = TraceEvent {
            kind: TraceKind::Reset,
            direction: Direction::High,
            offset: 0,
            size: 0,
            inuse_low: 0,
            inuse_high: 0,
            capacity: 0,
        };
        assert_eq!(event.percent_used(), 0.0);
    }

    #[test]
    fn display_line_names_kind_and_direction() {
        let event = TraceEvent {
            kind: TraceKind::Alloc,
            direction: Direction::High,
            offset: 1008,
            size: 1,
            inuse_low: 0,
            inuse_high: 16,
            capacity: 1024,
        };
        let line = event.to_string();
        assert!(line.contains("alloc"));
        assert!(line.contains("high"));
        assert!(line.contains("offset=1008"));
    }
}
