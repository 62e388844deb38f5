// filepath: src/color.rs
//! RGBA color value shared by text, backgrounds and draw calls.

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Four 8-bit channels. Serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba {
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Same color with a different alpha channel
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse a loosely typed `[r, g, b, a]` integer sequence, checking every channel
    pub fn from_channels(channels: &[i32]) -> Result<Self, ColorError> {
        if channels.len() != 4 {
            return Err(ColorError::WrongLength(channels.len()));
        }

        let mut out = [0u8; 4];
        for (index, (&value, slot)) in channels.iter().zip(out.iter_mut()).enumerate() {
            *slot = u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { index, value })?;
        }
        Ok(out.into())
    }
}

impl From<[u8; 4]> for ColorRgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<ColorRgba> for [u8; 4] {
    fn from(color: ColorRgba) -> Self {
        color.to_array()
    }
}

impl TryFrom<&[i32]> for ColorRgba {
    type Error = ColorError;

    fn try_from(channels: &[i32]) -> Result<Self, Self::Error> {
        Self::from_channels(channels)
    }
}

impl TryFrom<[i32; 4]> for ColorRgba {
    type Error = ColorError;

    fn try_from(channels: [i32; 4]) -> Result<Self, Self::Error> {
        Self::from_channels(&channels)
    }
}
