// filepath: src/backend/images.rs
//! Image decoding for icons, backed by the `image` crate.

use std::path::Path;

use crate::backend::interface::ImageBackend;
use crate::error::BackendError;
use crate::surface::Surface;

/// Decodes image files into RGBA8 surfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode an in-memory encoded image
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Surface, BackendError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| BackendError::new(format!("failed to decode image: {}", e)))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("Decoded image {}x{} from memory", width, height);
        Surface::from_rgba(width, height, rgba.into_raw())
    }
}

impl ImageBackend for ImageDecoder {
    fn load_image(&self, path: &Path) -> Result<Surface, BackendError> {
        log::debug!("Loading image from: {:?}", path);

        let img = image::open(path)
            .map_err(|e| BackendError::new(format!("{}: {}", path.display(), e)))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("Loaded image {}x{} from {:?}", width, height, path);
        Surface::from_rgba(width, height, rgba.into_raw())
    }
}
