//! The paint session: the live canvas, its history stacks, the view state,
//! and the gesture logic that ties them together.
//!
//! One [`PaintSession`] exists per canvas. It replaces the kind of
//! process-wide mutable app struct a quick prototype would use: every
//! operation takes the session by reference, and nothing here is global.

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasError, PixelBuffer, argb};
use crate::history::HistoryStack;
use crate::raster;
use crate::view::ViewTransform;

// ============================================================================
// TOOLS & PALETTE
// ============================================================================

/// The drawing tools. Brush is stateful (cumulative stamps along the drag
/// path); the shape tools re-render a live preview from a captured base copy
/// on every drag frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Line,
    Rect,
    Circle,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Line => "Line",
            Tool::Rect => "Rect",
            Tool::Circle => "Circle",
        }
    }

    pub fn all() -> &'static [Tool] {
        &[Tool::Brush, Tool::Line, Tool::Rect, Tool::Circle]
    }
}

pub const MIN_BRUSH_RADIUS: i32 = 1;
pub const MAX_BRUSH_RADIUS: i32 = 64;

/// The eight keyboard-selectable brush colors (number keys 1–8).
pub fn palette() -> [u32; 8] {
    [
        argb(255, 240, 240, 240), // white
        argb(255, 20, 20, 20),    // black
        argb(255, 255, 80, 80),   // red
        argb(255, 80, 255, 80),   // green
        argb(255, 80, 80, 255),   // blue
        argb(255, 255, 255, 80),  // yellow
        argb(255, 255, 80, 255),  // magenta
        argb(255, 80, 255, 255),  // cyan
    ]
}

// ============================================================================
// PAINT SESSION
// ============================================================================

/// All state for one canvas: the live buffer, the shape-preview base copy,
/// the undo/redo stacks, the viewport, and the in-flight gesture.
pub struct PaintSession {
    buffer: PixelBuffer,
    /// Pre-gesture copy used to repaint shape previews. Independently owned;
    /// never shares storage with the live buffer.
    base: PixelBuffer,
    undo: HistoryStack,
    redo: HistoryStack,
    pub view: ViewTransform,
    pub tool: Tool,
    pub fill: bool,
    pub brush_color: u32,
    brush_radius: i32,
    background: u32,

    drawing: bool,
    start: (i32, i32),
    last: (i32, i32),

    /// Bumped on every visible buffer mutation so the presentation layer can
    /// re-upload its texture only when pixels actually changed.
    revision: u64,
}

impl PaintSession {
    pub fn new(
        width: u32,
        height: u32,
        history_capacity: usize,
        background: u32,
    ) -> Result<Self, CanvasError> {
        let mut buffer = PixelBuffer::new(width, height)?;
        buffer.clear(background);
        let mut base = PixelBuffer::new(width, height)?;
        base.clear(background);

        Ok(Self {
            buffer,
            base,
            undo: HistoryStack::new(history_capacity),
            redo: HistoryStack::new(history_capacity),
            view: ViewTransform::new(),
            tool: Tool::Brush,
            fill: false,
            brush_color: palette()[0],
            brush_radius: 6,
            background,
            drawing: false,
            start: (0, 0),
            last: (0, 0),
            revision: 0,
        })
    }

    // ---- read-only views ----------------------------------------------------

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn can_undo(&self) -> bool {
        self.undo.peek().is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo.peek().is_some()
    }

    pub fn brush_radius(&self) -> i32 {
        self.brush_radius
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    // ---- tool state ---------------------------------------------------------

    pub fn set_brush_radius(&mut self, radius: i32) {
        self.brush_radius = radius.clamp(MIN_BRUSH_RADIUS, MAX_BRUSH_RADIUS);
    }

    pub fn nudge_brush_radius(&mut self, delta: i32) {
        self.set_brush_radius(self.brush_radius + delta);
    }

    /// Select one of the eight palette slots (0-based). Out-of-range slots
    /// are ignored.
    pub fn select_palette(&mut self, slot: usize) {
        if let Some(&color) = palette().get(slot) {
            self.brush_color = color;
        }
    }

    // ---- gesture entry points -----------------------------------------------
    //
    // Screen coordinates are viewport-local; the view transform maps them to
    // canvas cells. An event whose mapping refuses (zoom at the epsilon
    // floor) is skipped entirely — in particular a press never leaves a
    // phantom undo entry behind.

    pub fn pointer_pressed(&mut self, screen: Pos2) {
        let Some((cx, cy)) = self.view.screen_to_canvas(screen) else {
            return;
        };

        // A new edit invalidates the redo line. The undo snapshot is taken
        // before the first mutation; if its allocation fails the entry is
        // skipped and the edit proceeds on the live buffer.
        if let Err(e) = self.undo.push(&self.buffer) {
            crate::log_warn!("undo snapshot skipped: {}", e);
        }
        self.redo.clear();

        self.drawing = true;
        self.start = (cx, cy);
        self.last = (cx, cy);

        if self.tool == Tool::Brush {
            raster::stamp_disc(&mut self.buffer, cx, cy, self.brush_radius, self.brush_color);
        } else {
            self.base.copy_from(&self.buffer);
            self.draw_shape_preview(cx, cy);
        }
        self.revision += 1;
    }

    pub fn pointer_moved(&mut self, screen: Pos2) {
        if !self.drawing {
            return;
        }
        let Some((cx, cy)) = self.view.screen_to_canvas(screen) else {
            return;
        };

        match self.tool {
            // Cumulative: each drag segment is stamped once and never erased.
            Tool::Brush => raster::stroke_discs(
                &mut self.buffer,
                self.last.0,
                self.last.1,
                cx,
                cy,
                self.brush_radius,
                self.brush_color,
            ),
            // Stateless per frame: restore the base, then render a fresh
            // preview at the current event's position, so intermediate
            // previews never accumulate.
            _ => {
                self.buffer.copy_from(&self.base);
                self.draw_shape_preview(cx, cy);
            }
        }

        self.last = (cx, cy);
        self.revision += 1;
    }

    pub fn pointer_released(&mut self, screen: Pos2) {
        if !self.drawing {
            return;
        }
        if self.tool != Tool::Brush {
            if let Some((cx, cy)) = self.view.screen_to_canvas(screen) {
                self.buffer.copy_from(&self.base);
                self.draw_shape_preview(cx, cy);
                self.revision += 1;
            }
            // A refused mapping keeps the last preview as the committed shape.
        }
        self.drawing = false;
    }

    fn draw_shape_preview(&mut self, x: i32, y: i32) {
        let (sx, sy) = self.start;
        match self.tool {
            Tool::Brush => {}
            Tool::Line => {
                raster::draw_line(&mut self.buffer, sx, sy, x, y, self.brush_color);
            }
            Tool::Rect => {
                if self.fill {
                    raster::fill_rect(&mut self.buffer, sx, sy, x, y, self.brush_color);
                } else {
                    raster::stroke_rect(&mut self.buffer, sx, sy, x, y, self.brush_color);
                }
            }
            Tool::Circle => {
                let dx = (x - sx) as i64;
                let dy = (y - sy) as i64;
                let radius = raster::isqrt(dx * dx + dy * dy);
                if self.fill {
                    raster::fill_circle(&mut self.buffer, sx, sy, radius, self.brush_color);
                } else {
                    raster::stroke_circle(&mut self.buffer, sx, sy, radius, self.brush_color);
                }
            }
        }
    }

    // ---- view gestures ------------------------------------------------------

    /// Wheel zoom anchored at the cursor. Returns whether the zoom changed.
    pub fn wheel_zoom(&mut self, anchor: Pos2, factor: f32) -> bool {
        self.view.zoom_at(anchor, factor)
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.view.pan(delta);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    // ---- history actions ----------------------------------------------------

    /// Restore the most recent undo snapshot, first parking the current
    /// state on the redo stack. No-op when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.undo.peek().is_none() {
            return false;
        }
        if let Err(e) = self.redo.push(&self.buffer) {
            crate::log_warn!("redo snapshot skipped: {}", e);
        }
        if self.undo.pop(&mut self.buffer) {
            self.revision += 1;
            true
        } else {
            false
        }
    }

    /// Mirror of [`Self::undo`].
    pub fn redo(&mut self) -> bool {
        if self.redo.peek().is_none() {
            return false;
        }
        if let Err(e) = self.undo.push(&self.buffer) {
            crate::log_warn!("undo snapshot skipped: {}", e);
        }
        if self.redo.pop(&mut self.buffer) {
            self.revision += 1;
            true
        } else {
            false
        }
    }

    // ---- canvas actions -----------------------------------------------------

    /// Wipe the canvas to the background color. A wipe invalidates the whole
    /// history line, so both stacks are cleared.
    pub fn clear_canvas(&mut self) {
        self.buffer.clear(self.background);
        self.undo.clear();
        self.redo.clear();
        self.revision += 1;
    }

    /// Eyedropper: the color under a screen point, black for cells outside
    /// the canvas. `None` when the view refuses the mapping.
    pub fn pick_color(&self, screen: Pos2) -> Option<u32> {
        let (cx, cy) = self.view.screen_to_canvas(screen)?;
        Some(self.buffer.get(cx, cy, argb(255, 0, 0, 0)))
    }
}
