// filepath: src/elements/button.rs
//! Text and icon buttons: a filled background with content drawn on top.

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::backend::{FontBackend, ImageBackend, RenderContext};
use crate::color::ColorRgba;
use crate::elements::{rasterize_text, TextStyle};
use crate::error::RenderError;
use crate::layout::Rect;

/// Draw a `bg_color` rectangle covering `rect` with `text` centered on it.
///
/// Nothing is drawn unless the font loads and the text rasterizes and
/// uploads. The text offset uses integer halves of both sizes.
pub fn text_button<R, F>(
    ctx: &mut R,
    fonts: &F,
    rect: Rect,
    text: &str,
    style: &TextStyle,
    bg_color: ColorRgba,
) -> Result<(), RenderError>
where
    R: RenderContext,
    F: FontBackend,
{
    let label = rasterize_text(ctx, fonts, style, text)?;
    let text_rect = rect.centered(label.width, label.height);

    ctx.set_draw_color(bg_color);
    ctx.fill_rect(rect).map_err(RenderError::Draw)?;
    ctx.copy(&label.texture, text_rect)
        .map_err(RenderError::Draw)?;

    debug!("Drew text button {:?} at {:?}", text, rect);
    Ok(())
}

/// How much of an icon button gets the background fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IconBackground {
    /// Fill the whole button rectangle
    #[default]
    MatchRect,
    /// Fill a fixed-size square at the button origin, ignoring the rect size
    Fixed { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconButtonOptions {
    #[serde(default)]
    pub background: IconBackground,
}

impl IconButtonOptions {
    /// Size of the background square older icon buttons always used
    pub const LEGACY_BACKGROUND_SIZE: u32 = 30;

    /// Reproduce the fixed 30x30 background of older icon buttons
    pub fn legacy() -> Self {
        Self {
            background: IconBackground::Fixed {
                width: Self::LEGACY_BACKGROUND_SIZE,
                height: Self::LEGACY_BACKGROUND_SIZE,
            },
        }
    }

    fn background_rect(&self, rect: Rect) -> Rect {
        match self.background {
            IconBackground::MatchRect => rect,
            IconBackground::Fixed { width, height } => rect.with_size(width, height),
        }
    }
}

/// Draw a background for `rect` and the image at `icon_path` on top of it.
///
/// The icon is forced fully opaque and drawn at its native size anchored at
/// `(rect.x, rect.y)`. It is never scaled to the rectangle.
pub fn icon_button<R, I>(
    ctx: &mut R,
    images: &I,
    rect: Rect,
    icon_path: impl AsRef<Path>,
    bg_color: ColorRgba,
    options: IconButtonOptions,
) -> Result<(), RenderError>
where
    R: RenderContext,
    I: ImageBackend,
{
    let icon_path = icon_path.as_ref();
    let mut surface = images.load_image(icon_path).map_err(|source| {
        warn!("Icon {:?} could not be loaded: {}", icon_path, source);
        RenderError::ImageLoad {
            path: icon_path.to_path_buf(),
            source,
        }
    })?;
    surface.set_opaque();

    let icon = ctx.create_texture_from_surface(&surface).map_err(|e| {
        warn!("Icon texture not created: {}", e);
        RenderError::TextureCreation(e)
    })?;

    let icon_rect = rect.with_size(surface.width(), surface.height());
    debug!("Icon {:?} is {}px wide", icon_path, surface.width());
    drop(surface);

    ctx.set_draw_color(bg_color);
    ctx.fill_rect(options.background_rect(rect))
        .map_err(RenderError::Draw)?;
    ctx.copy(&icon, icon_rect).map_err(RenderError::Draw)?;

    Ok(())
}
