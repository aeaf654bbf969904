//! Bounded snapshot stacks for undo/redo.
//!
//! A [`HistoryStack`] holds full, independently owned copies of the canvas
//! pixel array. Capacity is fixed: pushing onto a full stack evicts the
//! oldest snapshot first (FIFO under pressure, LIFO for normal pops). Two
//! instances exist per session — undo and redo — coordinated by the gesture
//! logic in [`crate::session`].

use std::collections::VecDeque;

use crate::canvas::{CanvasError, PixelBuffer};

// ============================================================================
// SNAPSHOT
// ============================================================================

/// One fully owned copy of a canvas state. Snapshots never alias the live
/// buffer or each other.
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Snapshot {
    /// Copy the source buffer's pixel array. Allocation failure surfaces as
    /// an error so the caller can skip the history entry instead of aborting.
    fn capture(source: &PixelBuffer) -> Result<Self, CanvasError> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(source.pixels().len())
            .map_err(|_| CanvasError::Alloc {
                width: source.width(),
                height: source.height(),
            })?;
        pixels.extend_from_slice(source.pixels());
        Ok(Self {
            width: source.width(),
            height: source.height(),
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Copy this snapshot back into `target`. Dimensions must match; a
    /// mismatch is refused rather than corrupting the target.
    fn restore_into(&self, target: &mut PixelBuffer) -> bool {
        if self.width != target.width() || self.height != target.height() {
            crate::log_warn!(
                "snapshot restore refused: {}×{} snapshot into {}×{} buffer",
                self.width,
                self.height,
                target.width(),
                target.height()
            );
            return false;
        }
        target.pixels_mut().copy_from_slice(&self.pixels);
        true
    }
}

// ============================================================================
// HISTORY STACK
// ============================================================================

/// Capacity-bounded stack of [`Snapshot`]s with oldest-eviction.
pub struct HistoryStack {
    capacity: usize,
    snapshots: VecDeque<Snapshot>,
}

impl HistoryStack {
    /// `capacity` is the maximum number of retained snapshots (at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            snapshots: VecDeque::new(),
        }
    }

    /// Push a copy of `source`. On a full stack the oldest snapshot is
    /// discarded to make room. The copy is allocated before anything is
    /// evicted, so a failed push leaves the stack unmodified.
    pub fn push(&mut self, source: &PixelBuffer) -> Result<(), CanvasError> {
        let snapshot = Snapshot::capture(source)?;
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
        Ok(())
    }

    /// Remove the most recent snapshot and copy it into `target`.
    /// Returns `false` on an empty stack (a "nothing to do" signal, not an
    /// error) or on a dimension mismatch, which keeps the snapshot in place.
    pub fn pop(&mut self, target: &mut PixelBuffer) -> bool {
        let Some(snapshot) = self.snapshots.pop_back() else {
            return false;
        };
        if !snapshot.restore_into(target) {
            self.snapshots.push_back(snapshot);
            return false;
        }
        true
    }

    /// Non-destructive look at the most recent snapshot. Used to decide
    /// whether an undo/redo target exists before mutating the opposite stack.
    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Discard every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
