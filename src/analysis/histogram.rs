//! Hue frequency histogram construction.

use crate::error::{HueError, Result};
use crate::types::{Hsv, HueFrequencyMap, Image};

use super::colorspace::rgb_to_hsv;

/// Smallest hue step accepted, in degrees.
pub const MIN_HUE_STEP: f32 = 0.001;

/// How HSV keys are formed before counting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Quantization {
    /// Keys are the exact converted HSV floats.
    #[default]
    Exact,
    /// Hue is rounded to the nearest multiple of the step (degrees).
    /// Saturation and value stay exact.
    HueStep(f32),
}

impl Quantization {
    /// Quantization from an optional configured hue step.
    ///
    /// The step must lie in `[MIN_HUE_STEP, 360]` degrees.
    pub fn from_step(step: Option<f32>) -> Result<Self> {
        match step {
            None => Ok(Self::Exact),
            Some(s) if (MIN_HUE_STEP..=360.0).contains(&s) => Ok(Self::HueStep(s)),
            Some(s) => Err(HueError::InvalidRange {
                message: format!(
                    "Hue step must be between {} and 360 degrees, got {}",
                    MIN_HUE_STEP, s
                ),
                help: Some("Use e.g. --hue-step 1 for whole degrees".to_string()),
            }),
        }
    }

    fn apply(self, hsv: Hsv) -> Hsv {
        match self {
            Self::Exact => hsv,
            Self::HueStep(step) => {
                let hue = ((hsv.hue / step).round() * step).rem_euclid(360.0);
                // rem_euclid can land on 360.0 for values a hair below zero
                let hue = if hue >= 360.0 { 0.0 } else { hue };
                // A degenerate step keeps the exact hue rather than a NaN key
                let hue = if hue.is_finite() { hue } else { hsv.hue };
                Hsv::new(hue, hsv.saturation, hsv.value)
            }
        }
    }
}

/// Count every pixel of `image` by its exact HSV value.
///
/// The counts sum to `width * height`. Zero-sized images are rejected.
pub fn build_distribution(image: &Image) -> Result<HueFrequencyMap> {
    build_distribution_with(image, Quantization::Exact)
}

/// Count every pixel of `image` by its HSV value after `quantization`.
pub fn build_distribution_with(
    image: &Image,
    quantization: Quantization,
) -> Result<HueFrequencyMap> {
    if image.is_empty() {
        return Err(HueError::InvalidImage {
            message: format!(
                "Cannot build a hue distribution for a {}x{} image",
                image.width(),
                image.height()
            ),
            help: Some("The image must have at least one pixel".to_string()),
        });
    }

    let mut map = HueFrequencyMap::new();
    for pixel in image.pixels() {
        map.increment(quantization.apply(rgb_to_hsv(pixel.to_rgb())));
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{group_by_hue_buckets, to_ordered_sequence};
    use crate::types::{Pixel, SortKey};

    fn image(rows: Vec<Vec<[u8; 4]>>) -> Image {
        Image::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Pixel::from_rgba8).collect())
                .collect(),
        )
        .unwrap()
    }

    fn rgb_wheel() -> Image {
        image(vec![
            vec![[255, 0, 0, 255], [0, 255, 0, 255]],
            vec![[0, 0, 255, 255], [255, 255, 255, 255]],
        ])
    }

    #[test]
    fn test_four_distinct_colours() {
        let map = build_distribution(&rgb_wheel()).unwrap();

        assert_eq!(map.len(), 4);
        assert_eq!(map.total(), 4);
        assert!(map.iter().all(|e| e.count == 1));
        assert_eq!(map.get(&Hsv::new(0.0, 0.0, 1.0)), 1);
        assert_eq!(map.get(&Hsv::new(0.0, 1.0, 1.0)), 1);
    }

    #[test]
    fn test_counts_sum_to_pixel_count() {
        let rows = (0..7u8)
            .map(|y| (0..5u8).map(|x| [x * 40, y * 30, 90, 255]).collect())
            .collect();
        let img = image(rows);

        let map = build_distribution(&img).unwrap();
        assert_eq!(map.total(), 35);
    }

    #[test]
    fn test_identical_pixels_merge() {
        let img = image(vec![vec![[10, 200, 30, 255]; 3]; 2]);
        let map = build_distribution(&img).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.entries()[0].count, 6);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let img = image(vec![vec![[10, 200, 30, 255], [10, 200, 30, 0]]]);
        let map = build_distribution(&img).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let img = Image::from_rgba(0, 4, &[]).unwrap();
        let result = build_distribution(&img);
        assert!(matches!(result, Err(HueError::InvalidImage { .. })));
    }

    #[test]
    fn test_hue_step_merges_nearby_hues() {
        // Both reds have identical saturation and value, hues ~1.4° apart
        let img = image(vec![vec![[255, 0, 0, 255], [255, 6, 0, 255]]]);

        let exact = build_distribution(&img).unwrap();
        assert_eq!(exact.len(), 2);

        let stepped = build_distribution_with(&img, Quantization::HueStep(10.0)).unwrap();
        assert_eq!(stepped.len(), 1);
        assert_eq!(stepped.total(), 2);
        assert_eq!(stepped.entries()[0].hsv.hue, 0.0);
    }

    #[test]
    fn test_hue_step_wraps_to_zero() {
        let hsv = Quantization::HueStep(10.0).apply(Hsv::new(358.0, 1.0, 1.0));
        assert_eq!(hsv.hue, 0.0);
    }

    #[test]
    fn test_from_step() {
        assert_eq!(Quantization::from_step(None).unwrap(), Quantization::Exact);
        assert_eq!(
            Quantization::from_step(Some(1.0)).unwrap(),
            Quantization::HueStep(1.0)
        );
        assert!(Quantization::from_step(Some(0.0)).is_err());
        assert!(Quantization::from_step(Some(f32::NAN)).is_err());
        assert!(Quantization::from_step(Some(1e-38)).is_err());
        assert!(Quantization::from_step(Some(720.0)).is_err());
        assert!(Quantization::from_step(Some(360.0)).is_ok());
    }

    #[test]
    fn test_tiny_hue_step_keeps_every_pixel_groupable() {
        let img = image(vec![vec![[255, 0, 0, 255], [0, 0, 255, 255]]]);
        let map = build_distribution_with(&img, Quantization::HueStep(1e-38)).unwrap();
        assert!(map.iter().all(|e| e.hue().is_finite()));

        let by_hue = to_ordered_sequence(&map, SortKey::Hue, 0);
        let groups = group_by_hue_buckets(&by_hue, 30).unwrap();
        assert_eq!(groups.iter().map(|g| g.count).sum::<u64>(), 2);
    }
}
