//! End-to-end scenarios exercising both growth directions together.

use seesaw::{format_low, Arena, Direction, StderrSink};

/// 1024-byte region: high-end allocations, a reset, then a formatted
/// string committed at the low end.
#[test]
fn bidirectional_lifecycle() {
    let mut arena = Arena::new(1024);
    arena.set_trace_sink(Some(Box::new(StderrSink)));

    assert_eq!(arena.inuse_low(), 0);
    assert_eq!(arena.inuse_high(), 0);

    arena.alloc_high(1).unwrap();
    assert_eq!(arena.inuse_low(), 0);
    assert_eq!(arena.inuse_high(), 16);

    arena.reset_high();
    assert_eq!(arena.inuse_low(), 0);
    assert_eq!(arena.inuse_high(), 0);

    arena.alloc_high(256).unwrap();
    assert_eq!(arena.inuse_high(), 256);

    arena.alloc_high(256).unwrap();
    assert_eq!(arena.inuse_high(), 512);

    let span = format_low!(arena, "hello world #{}", 1).unwrap();
    assert_eq!(arena.str_at(span), "hello world #1");
    assert_eq!(arena.inuse_low(), 16);
}

/// 1024-byte region used single-direction: plain alloc, full reset,
/// then a short formatted string.
#[test]
fn single_direction_lifecycle() {
    let mut arena = Arena::new(1024);

    arena.alloc_low(1).unwrap();
    assert_eq!(arena.inuse_low(), 16);

    arena.reset();
    assert_eq!(arena.inuse_low(), 0);

    let span = format_low!(arena, "<{}>", "mark-x1").unwrap();
    assert_eq!(span.len(), 9);
    assert_eq!(arena.inuse_low(), 16);
}

/// Alternating scopes drain opposite ends; teardown restores everything.
#[test]
fn nested_scope_ping_pong() {
    let mut arena = Arena::new(4096);
    let baseline = arena.avail();

    let mut frame = arena.scope(Direction::Low);
    let verts = frame.alloc(1024).unwrap();
    frame.bytes_mut(verts).fill(1);

    {
        let mut pass = frame.push();
        assert_eq!(pass.direction(), Direction::High);
        let visible = pass.alloc(512).unwrap();
        pass.bytes_mut(visible).fill(2);

        {
            let mut sort = pass.push();
            assert_eq!(sort.direction(), Direction::Low);
            sort.alloc(256).unwrap();
        }

        // The sort batch is gone; the pass batch remains.
        assert_eq!(pass.avail(), 4096 - 1024 - 512);
    }

    // Frame data survives its children being reclaimed.
    assert!(frame.bytes(verts).iter().all(|&b| b == 1));
    frame.pop();

    assert_eq!(arena.avail(), baseline);
}

/// Out-of-space in one direction does not disturb the other; resetting
/// the exhausted direction recovers.
#[test]
fn exhaustion_and_recovery() {
    let mut arena = Arena::new(256);
    arena.alloc_high(128).unwrap();

    // Fill the rest from the low end.
    arena.alloc_low(128).unwrap();
    assert_eq!(arena.avail(), 0);
    assert!(arena.alloc_low(16).is_err());
    assert!(arena.alloc_high(16).is_err());

    arena.reset_low();
    assert_eq!(arena.avail(), 128);
    assert_eq!(arena.inuse_high(), 128);
    arena.alloc_low(64).unwrap();
}

/// Caller-supplied storage round-trips through the arena.
#[test]
fn borrowed_buffer_lifecycle() {
    let buffer = vec![0u8; 512];
    let mut arena = Arena::from_buffer(buffer);

    let span = arena.alloc_low(11).unwrap();
    arena.bytes_mut(span).copy_from_slice(b"hello arena");

    let buffer = arena.into_buffer();
    assert_eq!(&buffer[..11], b"hello arena");
}
