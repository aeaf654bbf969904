//! Canvas export — encodes the ARGB pixel buffer to timestamped image files.
//!
//! The core only supplies the buffer and the filename convention
//! (`pixel_YYYYMMDD_HHMMSS.<ext>` under a configurable export directory);
//! the actual file formats come from the `image` crate.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::canvas::PixelBuffer;

// ============================================================================
// SAVE FORMAT
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SaveFormat {
    #[default]
    Png,
    Bmp,
}

impl SaveFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Png => "png",
            SaveFormat::Bmp => "bmp",
        }
    }

    /// Parse a user-supplied format name (case-insensitive).
    pub fn from_name(name: &str) -> Option<SaveFormat> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Some(SaveFormat::Png),
            "bmp" => Some(SaveFormat::Bmp),
            _ => None,
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Export failures. Never fatal — surfaced to the status line and the log.
#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Encode(image::ImageError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Encode(e) => write!(f, "encoding error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Encode(e) => Some(e),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Encode(e)
    }
}

// ============================================================================
// EXPORT
// ============================================================================

/// Write the canvas into `dir` as `pixel_YYYYMMDD_HHMMSS.<ext>`, creating
/// the directory if needed, and return the path that was written.
pub fn export_canvas(
    fb: &PixelBuffer,
    dir: &Path,
    format: SaveFormat,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("pixel_{}.{}", stamp, format.extension()));
    write_image(fb, &path)?;
    Ok(path)
}

/// Encode the buffer to a specific path; the extension selects the format.
pub fn write_image(fb: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    let Some(img) = RgbaImage::from_raw(fb.width(), fb.height(), fb.to_rgba_bytes()) else {
        // to_rgba_bytes always yields width*height*4 bytes, so this only
        // trips if the buffer's own invariant is broken.
        return Err(ExportError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            "pixel buffer size mismatch",
        )));
    };
    img.save(path)?;
    Ok(())
}
