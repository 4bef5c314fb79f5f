//! hues - Image hue distribution analysis
//!
//! A library for counting the hues of an image, ordering them by hue or by
//! frequency, and summarizing them into percentile slices and fixed-width
//! hue groups for display.

pub mod analysis;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use analysis::{
    average_hue, average_value, build_distribution, build_distribution_with,
    group_by_hue_buckets, hsv_to_rgb, percent_range, percentile_slices, rgb_to_hsv,
    to_ordered_sequence, HueGroup, PercentileSlice, Quantization,
};
pub use discovery::{load_config, load_image, scan_images, Config};
pub use error::{HueError, Result};
pub use types::{Hsv, HueCount, HueFrequencyMap, Image, Pixel, Rgb, SortKey, StatKind};
