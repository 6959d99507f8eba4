//! Nested, direction-alternating temporary allocation.
//!
//! A [`Scope`] saves one mark on entry and restores it when dropped,
//! reclaiming everything allocated through it in one step. Deriving a
//! child with [`Scope::push`] flips to the opposite growth direction, so
//! each nesting level bumps from the side the other levels are not
//! consuming — both directions drain the same free pool, but from
//! opposite ends, which keeps deeply nested temporaries from starving
//! each other.
//!
//! The scope holds the arena's mutable borrow for its whole lifetime, so
//! the borrow checker enforces strict LIFO teardown: a parent cannot be
//! touched (or dropped) while a child it pushed is alive.

use std::fmt;

use crate::arena::{Arena, Direction};
use crate::error::ArenaError;
use crate::handle::Span;

/// A saved mark plus direction, bounding a batch of temporary
/// allocations.
///
/// Created with [`Arena::scope`] or [`Scope::push`]. Dropping the scope
/// (or calling [`Scope::pop`], which is the same thing spelled out)
/// restores the arena's mark for the scope's direction to the value it
/// had on entry.
///
/// # Example
///
/// ```
/// use seesaw::{Arena, Direction};
///
/// let mut arena = Arena::new(1024);
/// {
///     let mut low = arena.scope(Direction::Low);
///     low.alloc(100)?;
///     {
///         let mut high = low.push();
///         assert_eq!(high.direction(), Direction::High);
///         high.alloc(200)?;
///     } // high's allocations reclaimed here
///     low.alloc(50)?;
/// } // low's allocations reclaimed here
/// assert_eq!(arena.avail(), 1024);
/// # Ok::<(), seesaw::ArenaError>(())
/// ```
#[must_use]
pub struct Scope<'a> {
    arena: &'a mut Arena,
    direction: Direction,
    saved: usize,
}

impl Arena {
    /// Enter a scope on the chosen growth direction.
    pub fn scope(&mut self, direction: Direction) -> Scope<'_> {
        let saved = match direction {
            Direction::Low => self.mark_low(),
            Direction::High => self.mark_high(),
        };
        Scope {
            arena: self,
            direction,
            saved,
        }
    }
}

impl Scope<'_> {
    /// The growth direction this scope allocates from.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Derive a child scope on the opposite growth direction.
    ///
    /// The child reborrows the arena, so this scope is unusable until
    /// the child is dropped.
    pub fn push(&mut self) -> Scope<'_> {
        self.arena.scope(self.direction.opposite())
    }

    /// Allocate `size` bytes from the scope's direction.
    pub fn alloc(&mut self, size: usize) -> Result<Span, ArenaError> {
        self.arena.alloc(self.direction, size)
    }

    /// Allocate with an explicit power-of-two alignment.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    pub fn alloc_aligned(&mut self, size: usize, align: usize) -> Result<Span, ArenaError> {
        match self.direction {
            Direction::Low => self.arena.alloc_low_aligned(size, align),
            Direction::High => self.arena.alloc_high_aligned(size, align),
        }
    }

    /// Format a string into the arena while this scope holds the borrow.
    ///
    /// Formatted writes always commit at the low mark (see
    /// [`Arena::format_low`]), whatever this scope's direction: a
    /// low-direction scope reclaims the string on pop, while a string
    /// formatted through a high-direction scope outlives it. Build the
    /// arguments with [`format_args!`].
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> Result<Span, ArenaError> {
        self.arena.format_low(args)
    }

    /// Bytes currently free in the underlying arena.
    pub fn avail(&self) -> usize {
        self.arena.avail()
    }

    /// Borrow the bytes behind a span allocated through this scope.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie within the region.
    pub fn bytes(&self, span: Span) -> &[u8] {
        self.arena.bytes(span)
    }

    /// Mutably borrow the bytes behind a span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie within the region.
    pub fn bytes_mut(&mut self, span: Span) -> &mut [u8] {
        self.arena.bytes_mut(span)
    }

    /// View a formatted span as a string slice.
    ///
    /// Works for spans from [`Scope::format`] as well as spans formatted
    /// before this scope was entered.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of range or its bytes are not valid
    /// UTF-8.
    pub fn str_at(&self, span: Span) -> &str {
        self.arena.str_at(span)
    }

    /// Restore the saved mark, reclaiming every allocation made through
    /// this scope. Equivalent to dropping the scope.
    pub fn pop(self) {}
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        match self.direction {
            Direction::Low => self.arena.set_mark_low(self.saved),
            Direction::High => self.arena.set_mark_high(self.saved),
        }
    }
}
