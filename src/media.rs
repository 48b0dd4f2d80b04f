// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the gallery grid and the lightbox.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// File extensions recognized as images when scanning a folder.
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "bmp", "gif", "ico", "jpeg", "jpg", "png", "tif", "tiff", "webp",
];

/// A decoded image ready to be displayed in the lightbox.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: Handle,
    /// Pixel width of the decoded image.
    pub width: u32,
    /// Pixel height of the decoded image.
    pub height: u32,
}

/// Returns `true` if the path carries a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|candidate| *candidate == ext)
        })
        .unwrap_or(false)
}

/// Loads and decodes an image from disk.
///
/// Decoding validates the file and yields its pixel dimensions. The encoded
/// bytes are handed to Iced unchanged so the renderer works from the original
/// data rather than a re-encoded copy.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let bytes = fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes)
        .map_err(|err| Error::Image(format!("{}: {}", path.display(), err)))?;
    let (width, height) = decoded.dimensions();

    Ok(ImageData {
        handle: Handle::from_bytes(bytes),
        width,
        height,
    })
}
