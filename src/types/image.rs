//! Row-major pixel grid.

use crate::error::{HueError, Result};

use super::Pixel;

/// Bytes per pixel in an RGBA buffer.
const RGBA: usize = 4;

/// A decoded image as a row-major grid of pixels.
///
/// The declared width and height always match the grid. Zero-sized images
/// are representable so that analysis stages can reject them explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    rows: Vec<Vec<Pixel>>,
    width: usize,
    height: usize,
}

impl Image {
    /// Build an image from a flat RGBA byte buffer (top-to-bottom, left-to-right).
    pub fn from_rgba(width: usize, height: usize, data: &[u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGBA))
            .ok_or_else(|| HueError::invalid_image(format!("{}x{} is too large", width, height)))?;

        if data.len() != expected {
            return Err(HueError::InvalidImage {
                message: format!(
                    "RGBA buffer holds {} bytes, expected {} for {}x{}",
                    data.len(),
                    expected,
                    width,
                    height
                ),
                help: Some("Buffers must contain 4 bytes (R, G, B, A) per pixel".to_string()),
            });
        }

        let rows = if width == 0 {
            vec![Vec::new(); height]
        } else {
            data.chunks_exact(width * RGBA)
                .map(|row| {
                    row.chunks_exact(RGBA)
                        .map(|px| Pixel::from_rgba8([px[0], px[1], px[2], px[3]]))
                        .collect()
                })
                .collect()
        };

        Ok(Self {
            rows,
            width,
            height,
        })
    }

    /// Build an image from rows of pixels. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(HueError::InvalidImage {
                message: format!("Row {} has {} pixels, expected {}", y, row.len(), width),
                help: Some("Every row of an image must have the same width".to_string()),
            });
        }

        Ok(Self {
            rows,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when the image has zero width or zero height.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at (x, y), if in bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Iterate all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.rows.iter().flatten()
    }
}
