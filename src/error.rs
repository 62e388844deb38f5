// filepath: src/error.rs
//! Error types for the drawing primitives and their backends.

use std::path::PathBuf;

/// Status code reported for a successful draw
pub const SUCCESS: i32 = 0;

/// Failure reported by a font, image or rendering backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a text button, icon button or text label was not drawn
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("failed to load font {path:?}: {source}")]
    FontLoad { path: PathBuf, source: BackendError },

    #[error("failed to rasterize text, check the text and color: {0}")]
    SurfaceCreation(BackendError),

    #[error("failed to create texture from surface: {0}")]
    TextureCreation(BackendError),

    #[error("failed to query texture size: {0}")]
    TextureQuery(BackendError),

    #[error("failed to load image {path:?}: {source}")]
    ImageLoad { path: PathBuf, source: BackendError },

    #[error("draw call failed: {0}")]
    Draw(BackendError),
}

impl RenderError {
    /// Numeric status code, negative for every failure
    pub fn code(&self) -> i32 {
        match self {
            Self::FontLoad { .. } => -1,
            Self::SurfaceCreation(_) => -2,
            Self::TextureCreation(_) => -3,
            Self::TextureQuery(_) => -4,
            Self::ImageLoad { .. } => -5,
            Self::Draw(_) => -6,
        }
    }
}

/// Collapse a draw result into its status code
pub fn status_code(result: &Result<(), RenderError>) -> i32 {
    match result {
        Ok(()) => SUCCESS,
        Err(e) => e.code(),
    }
}

/// Rejected conversion of a loose channel sequence into a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("expected 4 color channels (r, g, b, a), got {0}")]
    WrongLength(usize),

    #[error("color channel {index} is {value}, expected 0..=255")]
    ChannelOutOfRange { index: usize, value: i32 },
}
