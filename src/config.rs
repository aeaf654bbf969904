//! Persisted user settings — tool defaults restored across sessions.
//!
//! Stored as JSON next to the session log in the platform data directory.
//! Missing or unreadable files fall back to defaults; view state and
//! undo/redo history are deliberately not persisted.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::canvas::argb;
use crate::session::Tool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub tool: Tool,
    #[serde(default = "default_brush_radius")]
    pub brush_radius: i32,
    #[serde(default = "default_brush_color")]
    pub brush_color: u32,
    #[serde(default)]
    pub fill: bool,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
}

fn default_brush_radius() -> i32 {
    6
}

fn default_brush_color() -> u32 {
    argb(255, 240, 240, 240)
}

fn default_show_grid() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            brush_radius: default_brush_radius(),
            brush_color: default_brush_color(),
            fill: false,
            show_grid: default_show_grid(),
        }
    }
}

impl AppSettings {
    pub fn path() -> PathBuf {
        crate::logger::app_data_dir().join("settings.json")
    }

    /// Load settings, falling back to defaults when the file is missing
    /// (first launch) or unreadable.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    crate::log_warn!(
                        "settings parse failed ({}), using defaults: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Best-effort save; failures are logged, never fatal.
    pub fn save(&self) {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(raw) => {
                if let Err(e) = fs::write(&path, raw) {
                    crate::log_warn!("settings save failed ({}): {}", path.display(), e);
                }
            }
            Err(e) => crate::log_warn!("settings encode failed: {}", e),
        }
    }
}
