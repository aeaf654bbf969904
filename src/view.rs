//! Screen ↔ canvas coordinate mapping under zoom and pan.

use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// Zoom factor clamp range.
pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 20.0;

/// Below this the screen→canvas division is numerically meaningless, so the
/// mapping refuses instead of dividing by near-zero.
pub const ZOOM_EPSILON: f32 = 1e-4;

/// Maps between screen coordinates and canvas coordinates.
///
/// `offset` is the screen-space position of the canvas origin; one canvas
/// cell covers `zoom × zoom` screen pixels. Screen coordinates here are
/// viewport-local (the presentation layer subtracts its own panel origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub zoom: f32,
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { zoom: 1.0, offset: Vec2::ZERO }
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a screen point to the canvas cell under it, truncating toward
    /// zero. Returns `None` when the zoom factor is at or below
    /// [`ZOOM_EPSILON`]; callers skip the dependent action for that event.
    pub fn screen_to_canvas(&self, screen: Pos2) -> Option<(i32, i32)> {
        if self.zoom <= ZOOM_EPSILON {
            return None;
        }
        let cx = (screen.x - self.offset.x) / self.zoom;
        let cy = (screen.y - self.offset.y) / self.zoom;
        Some((cx as i32, cy as i32))
    }

    /// The screen-space rectangle the whole canvas occupies.
    pub fn canvas_to_screen_rect(&self, canvas_w: u32, canvas_h: u32) -> Rect {
        Rect::from_min_size(
            pos2(self.offset.x, self.offset.y),
            vec2(canvas_w as f32 * self.zoom, canvas_h as f32 * self.zoom),
        )
    }

    /// Multiply the zoom factor by `factor`, clamped to
    /// `[MIN_ZOOM, MAX_ZOOM]`, keeping the canvas point under `anchor`
    /// visually fixed. Returns `false` without touching any state when the
    /// clamped factor equals the current one, so callers can skip dependent
    /// recomputation (texture invalidation and the like).
    pub fn zoom_at(&mut self, anchor: Pos2, factor: f32) -> bool {
        let old = self.zoom;
        let next = (old * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if next == old {
            return false;
        }

        // The canvas point under the anchor before the change must map back
        // to the same screen point after it.
        let ax = (anchor.x - self.offset.x) / old;
        let ay = (anchor.y - self.offset.y) / old;
        self.zoom = next;
        self.offset = vec2(anchor.x - ax * next, anchor.y - ay * next);
        true
    }

    /// Translate the canvas by a screen-space delta. Zoom is unchanged.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Back to identity: zoom 1, origin at the viewport corner.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
