//! The hue distribution pipeline.
//!
//! Pixels are converted to HSV ([`colorspace`]), counted into a frequency map
//! ([`histogram`]), ordered by hue or count ([`sorter`]), and summarized into
//! percentile ranges and fixed-width hue groups ([`range`], [`groups`]).
//!
//! # Example
//!
//! ```ignore
//! use hues::analysis::{build_distribution, group_by_hue_buckets, to_ordered_sequence};
//! use hues::types::SortKey;
//!
//! let map = build_distribution(&image)?;
//! let by_hue = to_ordered_sequence(&map, SortKey::Hue, 0);
//! for group in group_by_hue_buckets(&by_hue, 30)? {
//!     println!("{}: {}", group.index, group.count);
//! }
//! ```

pub mod colorspace;
pub mod groups;
pub mod histogram;
pub mod range;
pub mod sorter;

pub use colorspace::{hsv_to_rgb, rgb_to_hsv, ACHROMATIC_EPSILON};
pub use groups::{group_by_hue_buckets, percentile_slices, HueGroup, PercentileSlice};
pub use histogram::{build_distribution, build_distribution_with, Quantization};
pub use range::{average_hue, average_value, percent_range, total_count};
pub use sorter::to_ordered_sequence;
