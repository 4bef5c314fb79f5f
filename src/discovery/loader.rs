//! Image decoding.
//!
//! Decoding is delegated to the `image` crate; the decoded RGBA8 buffer is
//! turned into the row-major [`Image`] the analysis works on.

use std::path::Path;

use crate::error::{HueError, Result};
use crate::types::Image;

/// Decode an image file into a pixel grid.
///
/// Missing files, undecodable data and zero-sized images are all reported
/// as [`HueError::InvalidImage`].
pub fn load_image(path: &Path) -> Result<Image> {
    if !path.is_file() {
        return Err(HueError::InvalidImage {
            message: format!("File {} does not exist", path.display()),
            help: None,
        });
    }

    let decoded = image::open(path)
        .map_err(|e| HueError::InvalidImage {
            message: format!("Failed to decode {}: {}", path.display(), e),
            help: Some(
                "Supported formats are those of the `image` crate (PNG, JPEG, GIF, ...)"
                    .to_string(),
            ),
        })?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(HueError::invalid_image(format!(
            "{} has no pixels ({}x{})",
            path.display(),
            width,
            height
        )));
    }

    Image::from_rgba(width as usize, height as usize, decoded.as_raw())
}
