//! Alignment arithmetic for bump allocation.
//!
//! Every allocation reserves a whole number of alignment units so that
//! successive marks stay aligned without per-allocation padding state.
//! The default unit is [`ALIGN`] (16 bytes); callers with stricter needs
//! use the `*_aligned` arena operations with any power-of-two alignment.

/// Default allocation alignment in bytes.
///
/// Sizes are rounded up to a multiple of this before the mark advances,
/// so consecutive default-aligned allocations always start on a 16-byte
/// boundary within the region.
pub const ALIGN: usize = 16;

/// Round `n` up to the next multiple of `align`.
///
/// `align` must be a power of two. Returns `None` when the rounded value
/// would overflow `usize` — callers treat that the same as an allocation
/// that cannot fit.
pub fn round_up(n: usize, align: usize) -> Option<usize> {
    debug_assert!(align.is_power_of_two());
    Some(n.checked_add(align - 1)? & !(align - 1))
}

/// Whether `n` is a multiple of `align` (power of two).
pub fn is_aligned(n: usize, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    n & (align - 1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_up_to_default_alignment() {
        assert_eq!(round_up(0, ALIGN), Some(0));
        assert_eq!(round_up(1, ALIGN), Some(16));
        assert_eq!(round_up(15, ALIGN), Some(16));
        assert_eq!(round_up(16, ALIGN), Some(16));
        assert_eq!(round_up(17, ALIGN), Some(32));
    }

    #[test]
    fn round_up_with_explicit_alignment() {
        assert_eq!(round_up(3, 4), Some(4));
        assert_eq!(round_up(4, 4), Some(4));
        assert_eq!(round_up(100, 64), Some(128));
        assert_eq!(round_up(5, 1), Some(5));
    }

    #[test]
    fn round_up_overflow_returns_none() {
        assert_eq!(round_up(usize::MAX, ALIGN), None);
        assert_eq!(round_up(usize::MAX - 7, 16), None);
    }

    #[test]
    fn is_aligned_checks_multiples() {
        assert!(is_aligned(0, 16));
        assert!(is_aligned(32, 16));
        assert!(!is_aligned(24, 16));
        assert!(is_aligned(24, 8));
    }
}
