//! Seesaw: a bidirectional linear (bump) allocator over one fixed region.
//!
//! The arena carves allocations from both ends of a single pre-allocated
//! buffer: the low mark climbs from the base, the high mark descends from
//! the end, and the gap between them is the shared free pool. Allocation
//! is O(1) and fragmentation-free; the only reclamation is resetting a
//! whole direction or popping a [`Scope`]. This fits short-lived,
//! phase-scoped data — per-frame or per-request scratch memory — where a
//! general-purpose allocator is overkill.
//!
//! # Architecture
//!
//! ```text
//! Arena (one owned byte buffer, two cursors)
//! ├── [0, low)          low-growth allocations
//! ├── [low, high)       free pool, shared by both directions
//! └── [high, capacity)  high-growth allocations
//! ```
//!
//! Three things compose with the arena:
//!
//! - **[`Span`]** — a `Copy` handle (offset + length) resolved through
//!   [`Arena::bytes`] / [`Arena::bytes_mut`].
//! - **[`Scope`]** — a saved mark restored on drop; [`Scope::push`]
//!   derives a child on the *opposite* direction, so nested temporary
//!   batches ping-pong between the two ends and stay out of each other's
//!   way.
//! - **[`format_low!`]** — format-then-commit: a string is formatted
//!   speculatively into the free pool and the low mark advances only if
//!   the whole output fit.
//!
//! # Quick start
//!
//! ```
//! use seesaw::{format_low, Arena, Direction};
//!
//! let mut arena = Arena::new(1024);
//!
//! // Persistent data grows from the high end...
//! let table = arena.alloc_high(256)?;
//! arena.bytes_mut(table).fill(0);
//!
//! // ...while per-phase temporaries come and go at the low end.
//! {
//!     let mut scratch = arena.scope(Direction::Low);
//!     scratch.alloc(128)?;
//! } // reclaimed here
//!
//! let label = format_low!(arena, "phase {} of {}", 1, 3)?;
//! assert_eq!(arena.str_at(label), "phase 1 of 3");
//! # Ok::<(), seesaw::ArenaError>(())
//! ```
//!
//! # What the arena will not do
//!
//! No per-object free, no splitting or compaction, no growth after
//! construction, and no internal locking — one arena per thread, or
//! external mutual exclusion, is the caller's job. Out-of-space is an
//! ordinary [`ArenaError`], never a panic; misuse of preconditions
//! (misaligned capacity, non-power-of-two alignment) panics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod align;
pub mod arena;
pub mod error;
pub mod handle;
pub mod scope;
pub mod trace;

pub use align::ALIGN;
pub use arena::{Arena, Direction};
pub use error::ArenaError;
pub use handle::Span;
pub use scope::Scope;
pub use trace::{StderrSink, TraceEvent, TraceKind, TraceSink};
