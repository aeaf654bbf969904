use pixelpad::canvas::{PixelBuffer, argb};
use pixelpad::history::HistoryStack;

fn buffer_filled(w: u32, h: u32, color: u32) -> PixelBuffer {
    let mut fb = PixelBuffer::new(w, h).unwrap();
    fb.clear(color);
    fb
}

/// A distinct, recognizable color per numbered state.
fn state_color(n: u8) -> u32 {
    argb(255, n, n.wrapping_mul(3), n.wrapping_mul(7))
}

#[test]
fn push_then_pop_restores_bit_identical_pixels() {
    let mut stack = HistoryStack::new(8);
    let mut fb = PixelBuffer::new(6, 4).unwrap();
    for (i, y) in (0..4).enumerate() {
        for x in 0..6 {
            fb.put(x, y, argb(255, (x * 40) as u8, (y * 60) as u8, i as u8));
        }
    }
    let original: Vec<u32> = fb.pixels().to_vec();

    stack.push(&fb).unwrap();
    fb.clear(0);
    assert!(stack.pop(&mut fb));
    assert_eq!(fb.pixels(), original.as_slice());
}

#[test]
fn pops_come_back_most_recent_first() {
    let mut stack = HistoryStack::new(8);
    let mut fb = PixelBuffer::new(3, 3).unwrap();
    for n in 1..=3 {
        fb.clear(state_color(n));
        stack.push(&fb).unwrap();
    }

    assert!(stack.pop(&mut fb));
    assert_eq!(fb.get(0, 0, 0), state_color(3));
    assert!(stack.pop(&mut fb));
    assert_eq!(fb.get(0, 0, 0), state_color(2));
    assert!(stack.pop(&mut fb));
    assert_eq!(fb.get(0, 0, 0), state_color(1));
    assert!(!stack.pop(&mut fb));
}

#[test]
fn capacity_evicts_the_oldest_snapshot() {
    let capacity = 3;
    let mut stack = HistoryStack::new(capacity);
    let mut fb = PixelBuffer::new(4, 4).unwrap();

    // capacity + 1 pushes
    for n in 1..=4 {
        fb.clear(state_color(n));
        stack.push(&fb).unwrap();
        assert!(stack.len() <= capacity);
    }
    assert_eq!(stack.len(), capacity);

    // Only the last `capacity` states are poppable, most-recent-first;
    // state 1 is gone for good.
    for expected in [4, 3, 2] {
        assert!(stack.pop(&mut fb));
        assert_eq!(fb.get(0, 0, 0), state_color(expected));
    }
    assert!(stack.is_empty());
    assert!(!stack.pop(&mut fb));
}

#[test]
fn pop_on_empty_stack_is_a_noop() {
    let mut stack = HistoryStack::new(4);
    let mut fb = buffer_filled(2, 2, state_color(9));
    assert!(!stack.pop(&mut fb));
    assert!(fb.pixels().iter().all(|&px| px == state_color(9)));
}

#[test]
fn peek_is_non_destructive() {
    let mut stack = HistoryStack::new(4);
    let fb = buffer_filled(2, 2, state_color(5));
    assert!(stack.peek().is_none());

    stack.push(&fb).unwrap();
    assert!(stack.peek().is_some());
    assert!(stack.peek().is_some());
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek().unwrap().pixels()[0], state_color(5));
}

#[test]
fn clear_discards_every_snapshot() {
    let mut stack = HistoryStack::new(4);
    let fb = buffer_filled(2, 2, state_color(1));
    stack.push(&fb).unwrap();
    stack.push(&fb).unwrap();
    stack.clear();
    assert!(stack.is_empty());
    let mut target = buffer_filled(2, 2, 0);
    assert!(!stack.pop(&mut target));
}

#[test]
fn snapshots_do_not_alias_the_source_buffer() {
    let mut stack = HistoryStack::new(4);
    let mut fb = buffer_filled(2, 2, state_color(1));
    stack.push(&fb).unwrap();

    // Mutating the live buffer must not touch the stored snapshot.
    fb.clear(state_color(2));
    assert!(stack.pop(&mut fb));
    assert!(fb.pixels().iter().all(|&px| px == state_color(1)));
}

#[test]
fn pop_refuses_a_dimension_mismatch() {
    let mut stack = HistoryStack::new(4);
    let small = buffer_filled(2, 2, state_color(1));
    stack.push(&small).unwrap();

    let mut big = buffer_filled(3, 3, state_color(8));
    assert!(!stack.pop(&mut big));
    // The snapshot stays put and the target is untouched.
    assert_eq!(stack.len(), 1);
    assert!(big.pixels().iter().all(|&px| px == state_color(8)));
}

#[test]
fn zero_capacity_is_promoted_to_one() {
    let stack = HistoryStack::new(0);
    assert_eq!(stack.capacity(), 1);
}
