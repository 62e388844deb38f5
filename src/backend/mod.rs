// filepath: src/backend/mod.rs
//! Font, image and rendering backends
//!
//! The drawing primitives are generic over these traits. Concrete
//! implementations: `fontdue` for text, the `image` crate for icons and the
//! software `Canvas` in `crate::draw` for rendering.

pub mod fonts;
pub mod images;
pub mod interface;

pub use self::fonts::{FontdueBackend, FontdueFont};
pub use self::images::ImageDecoder;
pub use self::interface::{FontBackend, ImageBackend, RasterFont, RenderContext};
