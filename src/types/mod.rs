//! Core data types for hue analysis.

mod distribution;
mod hsv;
mod image;
mod pixel;

pub use distribution::{HueCount, HueFrequencyMap, SortKey, StatKind};
pub use hsv::Hsv;
pub use self::image::Image;
pub use pixel::{Pixel, Rgb};
