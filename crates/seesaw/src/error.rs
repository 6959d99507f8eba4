//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Exhaustion is an ordinary, recoverable outcome: the arena's marks are
/// left exactly as they were before the failing call, so the caller may
/// reset a direction, switch to the other direction, or propagate the
/// error upward. Precondition violations (misaligned capacity, a
/// non-power-of-two alignment, a mark restored out of range) are caller
/// bugs and panic instead of returning a variant here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The free region between the two marks cannot hold the request.
    OutOfSpace {
        /// Number of bytes requested.
        requested: usize,
        /// Request size after rounding up to the allocation alignment.
        rounded: usize,
        /// Bytes currently free between the low and high marks.
        available: usize,
    },
    /// A formatted write did not fit in the free region and was discarded.
    FormatTruncated {
        /// Bytes that were free when formatting was attempted.
        available: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfSpace {
                requested,
                rounded,
                available,
            } => {
                write!(
                    f,
                    "arena out of space: requested {requested} bytes ({rounded} after rounding), {available} bytes free"
                )
            }
            Self::FormatTruncated { available } => {
                write!(
                    f,
                    "formatted write truncated: output exceeded the {available} bytes free"
                )
            }
        }
    }
}

impl Error for ArenaError {}
