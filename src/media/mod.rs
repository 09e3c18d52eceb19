// SPDX-License-Identifier: MPL-2.0
//! Decoding of downloaded media into displayable form.

pub mod image;

pub use image::{decode_image, ImageData};
