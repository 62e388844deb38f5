// filepath: src/backend/interface.rs
//! Backend interface definitions
//!
//! Every handle a backend hands out is an owned value, so dropping it
//! releases the underlying resource.

use std::path::Path;

use crate::color::ColorRgba;
use crate::error::BackendError;
use crate::layout::Rect;
use crate::surface::Surface;

/// Opens fonts at a given pixel size
pub trait FontBackend {
    type Font: RasterFont;

    /// Load the font file at `path` sized to `size` pixels
    fn open_font(&self, path: &Path, size: u16) -> Result<Self::Font, BackendError>;
}

/// A loaded font that can rasterize text
pub trait RasterFont {
    /// Rasterize `text` anti-aliased in `color` onto a fresh surface.
    ///
    /// The surface's alpha carries glyph coverage scaled by `color.a`.
    fn render_blended(&self, text: &str, color: ColorRgba) -> Result<Surface, BackendError>;
}

/// Decodes image files into surfaces
pub trait ImageBackend {
    fn load_image(&self, path: &Path) -> Result<Surface, BackendError>;
}

/// Target that draw commands are issued against
pub trait RenderContext {
    /// Drawable derived from a surface, released on drop
    type Texture;

    fn create_texture_from_surface(
        &mut self,
        surface: &Surface,
    ) -> Result<Self::Texture, BackendError>;

    /// Pixel width and height of `texture`
    fn query_texture(&self, texture: &Self::Texture) -> Result<(u32, u32), BackendError>;

    /// Color used by subsequent `fill_rect` calls
    fn set_draw_color(&mut self, color: ColorRgba);

    fn fill_rect(&mut self, rect: Rect) -> Result<(), BackendError>;

    /// Copy the whole texture into `dst`, scaling if sizes differ
    fn copy(&mut self, texture: &Self::Texture, dst: Rect) -> Result<(), BackendError>;
}
