//! Benchmark profiles for the seesaw bump allocator.
//!
//! Provides arena builders shared by the criterion benches so every
//! bench measures against the same region shapes.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seesaw::Arena;

/// Capacity used by the micro-benchmarks: 1 MiB.
pub const BENCH_CAPACITY: usize = 1 << 20;

/// Build the reference benchmark arena: 1 MiB, tracing off.
pub fn reference_arena() -> Arena {
    Arena::new(BENCH_CAPACITY)
}

/// Build a small arena that exhausts quickly, for measuring the
/// failure path.
pub fn tight_arena() -> Arena {
    Arena::new(256)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_arena_has_expected_capacity() {
        assert_eq!(reference_arena().capacity(), BENCH_CAPACITY);
    }
}
