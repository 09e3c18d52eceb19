// SPDX-License-Identifier: MPL-2.0
//! Image decoding from downloaded bytes (PNG, JPEG, GIF, WebP, BMP).

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decode encoded image bytes into an [`ImageData`].
///
/// Decoding happens eagerly so dimensions are known for layout and a broken
/// payload is reported as an error instead of a blank widget.
///
/// # Errors
///
/// Returns [`crate::error::Error::Decode`] when the bytes are not a
/// supported image format.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();

    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
