//! The eframe/egui shell around a [`PaintSession`].
//!
//! Everything here is presentation and input plumbing: the toolbar, the
//! palette, the status bar, texture upload, the pixel-grid overlay, and the
//! mapping from egui pointer/keyboard events onto the session's gesture
//! entry points. No rasterization or history logic lives in this module.

use std::path::PathBuf;

use eframe::egui;
use egui::{
    Color32, ColorImage, Key, PointerButton, Pos2, Rect, Sense, Stroke, TextureHandle,
    TextureOptions, pos2,
};

use crate::cli::CliArgs;
use crate::config::AppSettings;
use crate::io::{self, SaveFormat};
use crate::session::{MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS, PaintSession, Tool, palette};

/// Zoom level at which the pixel-grid overlay becomes visible.
const GRID_MIN_ZOOM: f32 = 6.0;
/// Wheel zoom step factors (one notch in / out).
const WHEEL_ZOOM_IN: f32 = 1.1;
const WHEEL_ZOOM_OUT: f32 = 0.9;

pub struct PixelPadApp {
    session: PaintSession,
    export_dir: PathBuf,
    export_format: SaveFormat,
    show_grid: bool,

    /// Uploaded copy of the canvas; refreshed only when the session's
    /// revision counter moves.
    texture: Option<TextureHandle>,
    uploaded_revision: u64,

    /// True while a middle-drag or space+drag pan is in flight, so the
    /// primary button can double as a pan grip without painting.
    panning: bool,

    /// Transient status message (last export result and the like).
    status: String,
}

impl PixelPadApp {
    pub fn new(mut session: PaintSession, args: &CliArgs, settings: AppSettings) -> Self {
        session.tool = settings.tool;
        session.set_brush_radius(settings.brush_radius);
        session.brush_color = settings.brush_color;
        session.fill = settings.fill;

        Self {
            session,
            export_dir: args.export_dir.clone(),
            export_format: args.save_format(),
            show_grid: settings.show_grid,
            texture: None,
            uploaded_revision: 0,
            panning: false,
            status: String::new(),
        }
    }

    fn settings(&self) -> AppSettings {
        AppSettings {
            tool: self.session.tool,
            brush_radius: self.session.brush_radius(),
            brush_color: self.session.brush_color,
            fill: self.session.fill,
            show_grid: self.show_grid,
        }
    }

    fn save_canvas(&mut self) {
        match io::export_canvas(self.session.buffer(), &self.export_dir, self.export_format) {
            Ok(path) => {
                crate::log_info!("saved {}", path.display());
                self.status = format!("Saved {}", path.display());
            }
            Err(e) => {
                crate::log_err!("export failed: {}", e);
                self.status = format!("Save failed: {}", e);
            }
        }
    }

    /// Re-upload the canvas texture if the session mutated pixels since the
    /// last frame.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() && self.uploaded_revision == self.session.revision() {
            return;
        }
        let fb = self.session.buffer();
        let size = [fb.width() as usize, fb.height() as usize];
        let image = ColorImage::from_rgba_unmultiplied(size, &fb.to_rgba_bytes());
        if let Some(tex) = &mut self.texture {
            tex.set(image, TextureOptions::NEAREST);
        } else {
            self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
        }
        self.uploaded_revision = self.session.revision();
    }

    // ---- keyboard -----------------------------------------------------------

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (ctrl, shift) = ctx.input(|i| (i.modifiers.ctrl, i.modifiers.shift));

        // Tool selection
        if ctx.input(|i| i.key_pressed(Key::F1)) {
            self.session.tool = Tool::Brush;
        }
        if ctx.input(|i| i.key_pressed(Key::F2)) {
            self.session.tool = Tool::Line;
        }
        if ctx.input(|i| i.key_pressed(Key::F3)) {
            self.session.tool = Tool::Rect;
        }
        if ctx.input(|i| i.key_pressed(Key::F4)) {
            self.session.tool = Tool::Circle;
        }

        // Brush size
        if ctx.input(|i| i.key_pressed(Key::OpenBracket)) {
            self.session.nudge_brush_radius(-1);
        }
        if ctx.input(|i| i.key_pressed(Key::CloseBracket)) {
            self.session.nudge_brush_radius(1);
        }

        // Palette (number keys 1–8)
        const PALETTE_KEYS: [Key; 8] = [
            Key::Num1,
            Key::Num2,
            Key::Num3,
            Key::Num4,
            Key::Num5,
            Key::Num6,
            Key::Num7,
            Key::Num8,
        ];
        for (slot, key) in PALETTE_KEYS.iter().enumerate() {
            if ctx.input(|i| i.key_pressed(*key)) {
                self.session.select_palette(slot);
            }
        }

        // Toggles and actions
        if !ctrl {
            if ctx.input(|i| i.key_pressed(Key::F)) {
                self.session.fill = !self.session.fill;
            }
            if ctx.input(|i| i.key_pressed(Key::G)) {
                self.show_grid = !self.show_grid;
            }
            if ctx.input(|i| i.key_pressed(Key::R)) {
                self.session.reset_view();
            }
            if ctx.input(|i| i.key_pressed(Key::C)) {
                self.session.clear_canvas();
            }
        }

        // History and export
        if ctrl && ctx.input(|i| i.key_pressed(Key::Z)) {
            if shift {
                self.session.redo();
            } else {
                self.session.undo();
            }
        }
        if ctrl && ctx.input(|i| i.key_pressed(Key::Y)) {
            self.session.redo();
        }
        if ctrl && ctx.input(|i| i.key_pressed(Key::S)) {
            self.save_canvas();
        }
    }

    // ---- canvas area --------------------------------------------------------

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        self.sync_texture(ui.ctx());

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let origin = response.rect.min;
        // Session screen space is viewport-local.
        let to_local = |p: Pos2| (p - origin).to_pos2();

        painter.rect_filled(response.rect, 0.0, Color32::from_gray(28));

        let fb = self.session.buffer();
        let image_rect = self
            .session
            .view
            .canvas_to_screen_rect(fb.width(), fb.height())
            .translate(origin.to_vec2());
        if let Some(tex) = &self.texture {
            painter.image(
                tex.id(),
                image_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        if self.show_grid {
            self.draw_grid(&painter, image_rect, response.rect);
        }

        let space_down = ui.input(|i| i.key_down(Key::Space));
        let alt_down = ui.input(|i| i.modifiers.alt);

        // Press: pan grip, eyedropper, or the start of a drawing gesture.
        if response.drag_started_by(PointerButton::Middle) {
            self.panning = true;
        }
        if response.drag_started_by(PointerButton::Primary) {
            if space_down {
                self.panning = true;
            } else if alt_down {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(color) = self.session.pick_color(to_local(pos)) {
                        self.session.brush_color = color;
                    }
                }
            } else if let Some(pos) = response.interact_pointer_pos() {
                self.session.pointer_pressed(to_local(pos));
            }
        }

        // Drag: pan moves the view, otherwise the gesture continues.
        if self.panning {
            if response.dragged_by(PointerButton::Middle)
                || response.dragged_by(PointerButton::Primary)
            {
                self.session.pan(response.drag_delta());
            }
        } else if response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.pointer_moved(to_local(pos));
            }
        }

        // Release
        if response.drag_stopped_by(PointerButton::Middle) {
            self.panning = false;
        }
        if response.drag_stopped_by(PointerButton::Primary) {
            if self.panning {
                self.panning = false;
            } else if let Some(pos) = response.interact_pointer_pos() {
                self.session.pointer_released(to_local(pos));
            }
        }

        // Wheel zoom, anchored at the cursor.
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                if let Some(pos) = response.hover_pos() {
                    let factor = if scroll > 0.0 { WHEEL_ZOOM_IN } else { WHEEL_ZOOM_OUT };
                    self.session.wheel_zoom(to_local(pos), factor);
                }
            }
        }
    }

    /// One thin line per canvas cell boundary, drawn only when cells are big
    /// enough on screen to tell apart.
    fn draw_grid(&self, painter: &egui::Painter, image_rect: Rect, viewport: Rect) {
        let step = self.session.view.zoom;
        if step < GRID_MIN_ZOOM {
            return;
        }
        let clip = image_rect.intersect(viewport);
        if clip.width() <= 0.0 || clip.height() <= 0.0 {
            return;
        }

        let stroke = Stroke::new(1.0, Color32::from_white_alpha(35));

        // First line at or after the clip edge, aligned to the canvas origin.
        let mut x = image_rect.min.x + ((clip.min.x - image_rect.min.x) / step).ceil() * step;
        while x <= clip.max.x {
            painter.line_segment([pos2(x, clip.min.y), pos2(x, clip.max.y)], stroke);
            x += step;
        }
        let mut y = image_rect.min.y + ((clip.min.y - image_rect.min.y) / step).ceil() * step;
        while y <= clip.max.y {
            painter.line_segment([pos2(clip.min.x, y), pos2(clip.max.x, y)], stroke);
            y += step;
        }
    }

    // ---- panels -------------------------------------------------------------

    fn toolbar_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tool in Tool::all() {
                ui.selectable_value(&mut self.session.tool, *tool, tool.label());
            }
            ui.separator();

            ui.checkbox(&mut self.session.fill, "Fill");
            ui.checkbox(&mut self.show_grid, "Grid");
            ui.separator();

            let mut radius = self.session.brush_radius();
            if ui
                .add(
                    egui::Slider::new(&mut radius, MIN_BRUSH_RADIUS..=MAX_BRUSH_RADIUS)
                        .text("Brush Size"),
                )
                .changed()
            {
                self.session.set_brush_radius(radius);
            }
            ui.separator();

            for (slot, &color) in palette().iter().enumerate() {
                let fill = argb_to_color32(color);
                let selected = self.session.brush_color == color;
                let stroke = if selected {
                    Stroke::new(2.0, Color32::WHITE)
                } else {
                    Stroke::new(1.0, Color32::BLACK)
                };
                let swatch = egui::Button::new(format!("{}", slot + 1))
                    .fill(fill)
                    .stroke(stroke);
                if ui.add(swatch).clicked() {
                    self.session.select_palette(slot);
                }
            }
            ui.separator();

            if ui
                .add_enabled(self.session.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.session.undo();
            }
            if ui
                .add_enabled(self.session.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.session.redo();
            }
            ui.separator();

            if ui.button("Save").clicked() {
                self.save_canvas();
            }
            if ui.button("Clear").clicked() {
                self.session.clear_canvas();
            }
        });
    }

    fn status_ui(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} | Size: {} | Fill: {} | Grid: {} | Zoom: {}%",
                self.session.tool.label(),
                self.session.brush_radius(),
                if self.session.fill { "ON" } else { "OFF" },
                if self.show_grid { "ON" } else { "OFF" },
                (self.session.view.zoom * 100.0) as i32
            ));
            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }
        });
    }
}

impl eframe::App for PixelPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar_ui(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.status_ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas_ui(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings().save();
    }
}

fn argb_to_color32(color: u32) -> Color32 {
    Color32::from_rgb((color >> 16) as u8, (color >> 8) as u8, color as u8)
}
