// filepath: src/surface.rs
//! CPU-side pixel buffers produced by text rasterization and image decoding.

use crate::color::ColorRgba;
use crate::error::BackendError;

/// Packed RGBA8 pixel buffer, rows top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    alpha_mod: u8,
}

impl Surface {
    /// Fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, ColorRgba::TRANSPARENT)
    }

    /// Surface with every pixel set to `color`
    pub fn filled(width: u32, height: u32, color: ColorRgba) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            pixels.extend_from_slice(&color.to_array());
        }

        Self {
            width,
            height,
            pixels,
            alpha_mod: u8::MAX,
        }
    }

    /// Wrap an existing RGBA8 buffer, which must hold exactly `width * height` pixels
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BackendError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(BackendError::new(format!(
                "surface buffer is {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
            alpha_mod: u8::MAX,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Global alpha multiplier applied on top of per-pixel alpha when copied
    pub fn alpha_mod(&self) -> u8 {
        self.alpha_mod
    }

    pub fn set_alpha_mod(&mut self, alpha: u8) {
        self.alpha_mod = alpha;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorRgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[idx..idx + 4];
        Some(ColorRgba::rgba(px[0], px[1], px[2], px[3]))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: ColorRgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Force full opacity: both the global alpha and every pixel's alpha become 255
    pub fn set_opaque(&mut self) {
        self.alpha_mod = u8::MAX;
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel[3] = u8::MAX;
        }
    }
}
