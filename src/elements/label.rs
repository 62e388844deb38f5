// filepath: src/elements/label.rs
//! Plain text with no background.

use crate::backend::{FontBackend, RenderContext};
use crate::elements::{rasterize_text, TextStyle};
use crate::error::RenderError;
use crate::layout::Rect;

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn text_label<R, F>(
    ctx: &mut R,
    fonts: &F,
    style: &TextStyle,
    text: &str,
    x: i32,
    y: i32,
) -> Result<(), RenderError>
where
    R: RenderContext,
    F: FontBackend,
{
    let label = rasterize_text(ctx, fonts, style, text)?;
    ctx.copy(&label.texture, Rect::new(x, y, label.width, label.height))
        .map_err(RenderError::Draw)
}
