// filepath: src/backend/fonts.rs
//! Text rasterization with fontdue
//!
//! Fonts are read from disk on every `open_font` call; nothing is cached
//! between draws.

use std::fs;
use std::path::Path;

use fontdue::{Font, FontSettings};
use log::debug;

use crate::backend::interface::{FontBackend, RasterFont};
use crate::color::ColorRgba;
use crate::error::BackendError;
use crate::surface::Surface;

/// Loads TrueType/OpenType fonts through fontdue
#[derive(Debug, Clone, Copy, Default)]
pub struct FontdueBackend;

impl FontdueBackend {
    pub fn new() -> Self {
        Self
    }
}

impl FontBackend for FontdueBackend {
    type Font = FontdueFont;

    fn open_font(&self, path: &Path, size: u16) -> Result<FontdueFont, BackendError> {
        if size == 0 {
            return Err(BackendError::new("font size must be at least 1px"));
        }

        let bytes = fs::read(path)
            .map_err(|e| BackendError::new(format!("{}: {}", path.display(), e)))?;
        FontdueFont::from_bytes(&bytes, size)
    }
}

/// A parsed font bound to one pixel size
pub struct FontdueFont {
    font: Font,
    size: u16,
}

/// One rasterized glyph positioned relative to the text origin
struct PlacedGlyph {
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

impl FontdueFont {
    /// Parse raw font file bytes
    pub fn from_bytes(bytes: &[u8], size: u16) -> Result<Self, BackendError> {
        let settings = FontSettings {
            scale: f32::from(size),
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings)
            .map_err(|e| BackendError::new(format!("fontdue error: {}", e)))?;

        debug!("Loaded font at {}px", size);
        Ok(Self { font, size })
    }

    pub fn size(&self) -> u16 {
        self.size
    }
}

impl RasterFont for FontdueFont {
    fn render_blended(&self, text: &str, color: ColorRgba) -> Result<Surface, BackendError> {
        if text.is_empty() {
            return Err(BackendError::new("text has zero width"));
        }

        let px = f32::from(self.size);
        let line = self
            .font
            .horizontal_line_metrics(px)
            .ok_or_else(|| BackendError::new("font has no horizontal line metrics"))?;

        // Single line, every glyph hangs off the same baseline
        let baseline = line.ascent.ceil() as i32;
        let height = (line.ascent - line.descent).ceil().max(1.0) as i32;

        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen = 0.0f32;
        let mut previous = None;
        for ch in text.chars() {
            if let Some(prev) = previous {
                pen += self.font.horizontal_kern(prev, ch, px).unwrap_or(0.0);
            }
            let (metrics, coverage) = self.font.rasterize(ch, px);
            glyphs.push(PlacedGlyph {
                x: pen.round() as i32 + metrics.xmin,
                y: baseline - metrics.ymin - metrics.height as i32,
                width: metrics.width,
                height: metrics.height,
                coverage,
            });
            pen += metrics.advance_width;
            previous = Some(ch);
        }

        let left = glyphs.iter().map(|g| g.x).min().unwrap_or(0).min(0);
        let right = glyphs
            .iter()
            .map(|g| g.x + g.width as i32)
            .max()
            .unwrap_or(0)
            .max(pen.ceil() as i32);
        let width = right - left;
        if width <= 0 {
            return Err(BackendError::new("text has zero width"));
        }

        let (width, height) = (width as usize, height as usize);
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[color.r, color.g, color.b, 0]);
        }

        for glyph in &glyphs {
            for gy in 0..glyph.height {
                let y = glyph.y + gy as i32;
                if y < 0 || y >= height as i32 {
                    continue;
                }
                for gx in 0..glyph.width {
                    let x = glyph.x - left + gx as i32;
                    if x < 0 || x >= width as i32 {
                        continue;
                    }
                    let coverage = u32::from(glyph.coverage[gy * glyph.width + gx]);
                    let alpha = (coverage * u32::from(color.a) / 255) as u8;
                    let idx = (y as usize * width + x as usize) * 4 + 3;
                    // Overlapping glyph edges keep the stronger coverage
                    pixels[idx] = pixels[idx].max(alpha);
                }
            }
        }

        Surface::from_rgba(width as u32, height as u32, pixels)
    }
}
