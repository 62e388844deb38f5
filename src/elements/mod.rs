// filepath: src/elements/mod.rs
//! Immediate-mode drawing primitives
//!
//! Each primitive is a one-shot draw against a borrowed `RenderContext`.
//! Fonts, surfaces and textures live only for the duration of the call and
//! are released when they go out of scope, whichever branch returns.

mod button;
mod label;

pub use button::{icon_button, text_button, IconBackground, IconButtonOptions};
pub use label::text_label;

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::backend::{FontBackend, RasterFont, RenderContext};
use crate::color::ColorRgba;
use crate::error::RenderError;

/// Font file, pixel size and color used to rasterize text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_path: PathBuf,
    pub font_size: u16,
    #[serde(default = "default_text_color")]
    pub color: ColorRgba,
}

fn default_text_color() -> ColorRgba {
    ColorRgba::WHITE
}

impl TextStyle {
    pub fn new(font_path: impl Into<PathBuf>, font_size: u16, color: ColorRgba) -> Self {
        Self {
            font_path: font_path.into(),
            font_size,
            color,
        }
    }
}

/// Text uploaded to the context along with its pixel size
pub(crate) struct TextTexture<T> {
    pub texture: T,
    pub width: u32,
    pub height: u32,
}

/// Load the font, rasterize, upload and query: the part shared by buttons and labels
pub(crate) fn rasterize_text<R, F>(
    ctx: &mut R,
    fonts: &F,
    style: &TextStyle,
    text: &str,
) -> Result<TextTexture<R::Texture>, RenderError>
where
    R: RenderContext,
    F: FontBackend,
{
    let font = fonts
        .open_font(&style.font_path, style.font_size)
        .map_err(|source| {
            warn!("Font {:?} could not be loaded: {}", style.font_path, source);
            RenderError::FontLoad {
                path: style.font_path.clone(),
                source,
            }
        })?;

    let surface = font.render_blended(text, style.color).map_err(|e| {
        warn!("Text surface not created, check the text or color: {}", e);
        RenderError::SurfaceCreation(e)
    })?;
    drop(font);

    let texture = ctx.create_texture_from_surface(&surface).map_err(|e| {
        warn!("Text texture not created, check the rendering context: {}", e);
        RenderError::TextureCreation(e)
    })?;
    drop(surface);

    let (width, height) = ctx.query_texture(&texture).map_err(|e| {
        warn!("Could not query text texture size: {}", e);
        RenderError::TextureQuery(e)
    })?;

    Ok(TextTexture {
        texture,
        width,
        height,
    })
}
