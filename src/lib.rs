pub mod backend;
pub mod color;
pub mod config;
pub mod draw;
pub mod elements;
pub mod error;
pub mod layout;
pub mod scene;
pub mod surface;

// Re-export the drawing surface
pub use crate::backend::{
    FontBackend, FontdueBackend, ImageBackend, ImageDecoder, RasterFont, RenderContext,
};
pub use crate::color::ColorRgba;
pub use crate::draw::{Canvas, CanvasTexture};
pub use crate::elements::{
    icon_button, text_button, text_label, IconBackground, IconButtonOptions, TextStyle,
};
pub use crate::error::{status_code, BackendError, ColorError, RenderError, SUCCESS};
pub use crate::layout::Rect;
pub use crate::surface::Surface;
