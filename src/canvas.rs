use std::fmt;

// ============================================================================
// COLOR — packed 32-bit ARGB (alpha in the most significant byte)
// ============================================================================

/// Pack ARGB components into a single `u32`, alpha in the high byte.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Default canvas background (near-black).
pub const BACKGROUND: u32 = argb(255, 18, 18, 18);

// ============================================================================
// ERRORS
// ============================================================================

/// Failures surfaced by buffer and snapshot allocation.
#[derive(Debug)]
pub enum CanvasError {
    /// The pixel array allocation failed.
    Alloc { width: u32, height: u32 },
    /// Zero-sized canvases are rejected up front.
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::Alloc { width, height } => {
                write!(f, "failed to allocate a {}×{} pixel buffer", width, height)
            }
            CanvasError::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {}×{}", width, height)
            }
        }
    }
}

impl std::error::Error for CanvasError {}

// ============================================================================
// PIXEL BUFFER
// ============================================================================

/// A fixed-size, row-major grid of packed ARGB pixels.
///
/// Coordinates are `i32` so callers can pass raw gesture positions without
/// pre-clamping: any out-of-range coordinate is a silent no-op on write and a
/// caller-supplied fallback on read. The buffer is allocated once and never
/// resized.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Allocate a `width × height` buffer with every cell zeroed.
    ///
    /// Allocation goes through `try_reserve_exact` so an out-of-memory
    /// condition surfaces as [`CanvasError::Alloc`] instead of aborting.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }
        let count = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| CanvasError::Alloc { width, height })?;
        pixels.resize(count, 0);
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the raw pixel array (row-major ARGB).
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Set every cell to `color`.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Read one pixel, returning `fallback` for out-of-bounds coordinates.
    #[inline]
    pub fn get(&self, x: i32, y: i32, fallback: u32) -> u32 {
        if x < 0 || y < 0 {
            return fallback;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return fallback;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Overwrite this buffer's pixels with `src`'s. Both buffers must have
    /// the same dimensions; a mismatch is refused rather than truncated.
    pub fn copy_from(&mut self, src: &PixelBuffer) {
        if self.width != src.width || self.height != src.height {
            crate::log_warn!(
                "copy_from refused: {}×{} source into {}×{} buffer",
                src.width,
                src.height,
                self.width,
                self.height
            );
            return;
        }
        self.pixels.copy_from_slice(&src.pixels);
    }

    /// Convert the ARGB pixel array to tightly packed RGBA bytes for texture
    /// upload and image encoding.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.push((px >> 16) as u8); // R
            bytes.push((px >> 8) as u8); // G
            bytes.push(*px as u8); // B
            bytes.push((px >> 24) as u8); // A
        }
        bytes
    }
}
