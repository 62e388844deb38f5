// filepath: src/draw.rs
//! Software rendering context
//!
//! `Canvas` draws into a borrowed RGBA8 buffer. Fills overwrite pixels,
//! texture copies alpha-blend over whatever is already there. Everything is
//! clipped to the canvas bounds.

use crate::backend::RenderContext;
use crate::color::ColorRgba;
use crate::error::BackendError;
use crate::layout::Rect;
use crate::surface::Surface;

/// Canvas abstraction over a raw pixel buffer
pub struct Canvas<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
    draw_color: ColorRgba,
}

/// Pixels uploaded from a surface, owned by whoever created it
#[derive(Debug, Clone)]
pub struct CanvasTexture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    alpha_mod: u8,
}

impl CanvasTexture {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<'a> Canvas<'a> {
    /// Create a new canvas from a raw buffer of `width * height` RGBA pixels
    pub fn new(buffer: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            buffer,
            width,
            height,
            draw_color: ColorRgba::BLACK,
        }
    }

    /// Get the width of the canvas
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the canvas
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn draw_color(&self) -> ColorRgba {
        self.draw_color
    }

    /// Fill the whole canvas with a solid color
    pub fn clear(&mut self, color: ColorRgba) {
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color.to_array());
        }
    }

    /// Read back one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorRgba> {
        let idx = self.index(x, y)?;
        let px = &self.buffer[idx..idx + 4];
        Some(ColorRgba::rgba(px[0], px[1], px[2], px[3]))
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        (idx + 3 < self.buffer.len()).then_some(idx)
    }
}

/// Source-over blend of one pixel, `alpha` already includes any global modulation
fn blend(dst: &mut [u8], src: &[u8], alpha: u32) {
    let inv = 255 - alpha;
    for c in 0..3 {
        dst[c] = ((u32::from(src[c]) * alpha + u32::from(dst[c]) * inv + 127) / 255) as u8;
    }
    dst[3] = (alpha + u32::from(dst[3]) * inv / 255) as u8;
}

impl RenderContext for Canvas<'_> {
    type Texture = CanvasTexture;

    fn create_texture_from_surface(
        &mut self,
        surface: &Surface,
    ) -> Result<CanvasTexture, BackendError> {
        if surface.width() == 0 || surface.height() == 0 {
            return Err(BackendError::new(format!(
                "cannot create a {}x{} texture",
                surface.width(),
                surface.height()
            )));
        }

        let expected = surface.width() as usize * surface.height() as usize * 4;
        if surface.pixels().len() != expected {
            return Err(BackendError::new("surface buffer does not match its size"));
        }

        Ok(CanvasTexture {
            width: surface.width(),
            height: surface.height(),
            pixels: surface.pixels().to_vec(),
            alpha_mod: surface.alpha_mod(),
        })
    }

    fn query_texture(&self, texture: &CanvasTexture) -> Result<(u32, u32), BackendError> {
        Ok((texture.width, texture.height))
    }

    fn set_draw_color(&mut self, color: ColorRgba) {
        self.draw_color = color;
    }

    /// Draw a filled rectangle in the current draw color
    fn fill_rect(&mut self, rect: Rect) -> Result<(), BackendError> {
        // Ensure the rectangle is within bounds
        let Some(area) = rect.intersection(&self.bounds()) else {
            return Ok(()); // Nothing to draw
        };

        let color = self.draw_color.to_array();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(idx) = self.index(x as u32, y as u32) {
                    self.buffer[idx..idx + 4].copy_from_slice(&color);
                }
            }
        }
        Ok(())
    }

    fn copy(&mut self, texture: &CanvasTexture, dst: Rect) -> Result<(), BackendError> {
        let Some(area) = dst.intersection(&self.bounds()) else {
            return Ok(());
        };

        let alpha_mod = u32::from(texture.alpha_mod);
        for y in area.y..area.bottom() {
            // Nearest-neighbour sample when the destination is a different size
            let dy = (i64::from(y) - i64::from(dst.y)) as u64;
            let sy = (dy * u64::from(texture.height) / u64::from(dst.height)) as usize;
            for x in area.x..area.right() {
                let dx = (i64::from(x) - i64::from(dst.x)) as u64;
                let sx = (dx * u64::from(texture.width) / u64::from(dst.width)) as usize;
                let src_idx = (sy * texture.width as usize + sx) * 4;
                let src = &texture.pixels[src_idx..src_idx + 4];
                let alpha = u32::from(src[3]) * alpha_mod / 255;
                if alpha == 0 {
                    continue;
                }
                if let Some(idx) = self.index(x as u32, y as u32) {
                    blend(&mut self.buffer[idx..idx + 4], src, alpha);
                }
            }
        }
        Ok(())
    }
}
