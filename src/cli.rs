// ============================================================================
// pixelpad CLI — canvas and export configuration via command-line arguments
// ============================================================================
//
// Usage examples:
//   pixelpad                                  (800×600 canvas, PNG exports)
//   pixelpad --width 320 --height 240
//   pixelpad --history 64 --export-dir shots/ --format bmp

use std::path::PathBuf;

use clap::Parser;

use crate::io::SaveFormat;

/// Interactive raster paint surface.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pixelpad",
    about = "A zoomable ARGB paint surface with bounded undo/redo",
    long_about = "Open a fixed-size pixel canvas and draw on it with brush,\n\
                  line, rectangle and circle tools. Exports are written as\n\
                  timestamped PNG or BMP files under the export directory."
)]
pub struct CliArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800, value_name = "PX")]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600, value_name = "PX")]
    pub height: u32,

    /// Maximum number of undo (and redo) snapshots kept in memory.
    /// Older snapshots are evicted once the limit is reached.
    #[arg(long, default_value_t = 32, value_name = "N")]
    pub history: usize,

    /// Directory exported images are written into (created on first save).
    #[arg(long, default_value = "exports", value_name = "DIR")]
    pub export_dir: PathBuf,

    /// Export format: png or bmp.
    #[arg(long, default_value = "png", value_name = "FORMAT")]
    pub format: String,
}

impl CliArgs {
    /// Validate argument combinations clap can't express on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "canvas dimensions must be nonzero (got {}×{})",
                self.width, self.height
            ));
        }
        if self.history == 0 {
            return Err("history capacity must be at least 1".to_string());
        }
        if SaveFormat::from_name(&self.format).is_none() {
            return Err(format!(
                "unknown export format '{}' (expected png or bmp)",
                self.format
            ));
        }
        Ok(())
    }

    pub fn save_format(&self) -> SaveFormat {
        SaveFormat::from_name(&self.format).unwrap_or_default()
    }
}
