//! RGB <-> HSV conversion.
//!
//! Hexagonal HSV model: hue in degrees `[0, 360)`, saturation and value in
//! `[0, 1]`. Integer RGB channels are in `[0, 255]`.

use crate::types::{Hsv, Rgb};

/// Channel spread below which a colour is treated as achromatic.
pub const ACHROMATIC_EPSILON: f32 = 0.00001;

/// Convert an integer RGB triple to HSV.
///
/// Achromatic colours (max and min channel within [`ACHROMATIC_EPSILON`])
/// and black get hue 0 and saturation 0. The returned hue is always in
/// `[0, 360)`.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f32 / 255.0;
    let g = rgb.g as f32 / 255.0;
    let b = rgb.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta < ACHROMATIC_EPSILON || max <= 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    let saturation = delta / max;

    let sector = if r >= max {
        (g - b) / delta
    } else if g >= max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    // A tiny negative sector can round up to exactly 360 after the shift.
    if hue >= 360.0 {
        hue -= 360.0;
    }

    Hsv::new(hue, saturation, max)
}

/// Convert HSV to an integer RGB triple.
///
/// Uses six 60° sectors with strict upper bounds, so a hue sitting exactly
/// on a boundary (60, 120, ...) belongs to the following sector. Hues outside
/// `[0, 360)` are wrapped first.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let hue = hsv.hue.rem_euclid(360.0);
    let chroma = hsv.saturation * hsv.value;
    let offset = hsv.value - chroma;

    let (r, g, b) = if hue < 60.0 {
        (1.0, hue / 60.0, 0.0)
    } else if hue < 120.0 {
        (1.0 - (hue - 60.0) / 60.0, 1.0, 0.0)
    } else if hue < 180.0 {
        (0.0, 1.0, (hue - 120.0) / 60.0)
    } else if hue < 240.0 {
        (0.0, 1.0 - (hue - 180.0) / 60.0, 1.0)
    } else if hue < 300.0 {
        ((hue - 240.0) / 60.0, 0.0, 1.0)
    } else {
        (1.0, 0.0, 1.0 - (hue - 300.0) / 60.0)
    };

    let scale = |ramp: f32| ((ramp * chroma + offset) * 255.0).round() as i32;

    Rgb::new(scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{IntoColor, Srgb};

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsv(Rgb::new(255, 0, 0));
        assert_eq!(red, Hsv::new(0.0, 1.0, 1.0));

        let green = rgb_to_hsv(Rgb::new(0, 255, 0));
        assert_close(green.hue, 120.0);
        assert_close(green.saturation, 1.0);

        let blue = rgb_to_hsv(Rgb::new(0, 0, 255));
        assert_close(blue.hue, 240.0);
    }

    #[test]
    fn test_magenta_wraps_positive() {
        // (g - b) / delta is negative for magenta-ish reds
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 128));
        assert!(hsv.hue > 300.0 && hsv.hue < 360.0, "hue {}", hsv.hue);
    }

    #[test]
    fn test_achromatic() {
        let white = rgb_to_hsv(Rgb::new(255, 255, 255));
        assert_eq!(white, Hsv::new(0.0, 0.0, 1.0));

        let grey = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!(grey.hue, 0.0);
        assert_eq!(grey.saturation, 0.0);
        assert_close(grey.value, 128.0 / 255.0);

        let black = rgb_to_hsv(Rgb::new(0, 0, 0));
        assert_eq!(black, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_out_of_range_channels_are_tolerated() {
        let hsv = rgb_to_hsv(Rgb::new(300, -20, 0));
        assert!(hsv.hue >= 0.0 && hsv.hue < 360.0);
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(120.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(240.0, 1.0, 1.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 1.0)), Rgb::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(200.0, 1.0, 0.0)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_hsv_to_rgb_sector_boundaries() {
        assert_eq!(hsv_to_rgb(Hsv::pure(60.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::pure(180.0)), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::pure(300.0)), Rgb::new(255, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::pure(30.0)), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_hsv_to_rgb_wraps_hue() {
        assert_eq!(hsv_to_rgb(Hsv::pure(360.0)), hsv_to_rgb(Hsv::pure(0.0)));
        assert_eq!(hsv_to_rgb(Hsv::pure(-120.0)), hsv_to_rgb(Hsv::pure(240.0)));
    }

    #[test]
    fn test_round_trip_within_one() {
        for r in 0..=255 {
            for g in 0..=255 {
                for b in 0..=255 {
                    let rgb = Rgb::new(r, g, b);
                    let hsv = rgb_to_hsv(rgb);
                    assert!(hsv.hue >= 0.0 && hsv.hue < 360.0, "{rgb} -> {hsv}");

                    let back = hsv_to_rgb(hsv);
                    let close = (back.r - r).abs() <= 1
                        && (back.g - g).abs() <= 1
                        && (back.b - b).abs() <= 1;
                    assert!(close, "{rgb} -> {hsv} -> {back}");
                }
            }
        }
    }

    #[test]
    fn test_hsv_round_trip_keeps_hue_in_domain() {
        let boundaries = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];
        let nudged = boundaries
            .iter()
            .flat_map(|&h: &f32| [h, h + 0.001, (h - 0.001).rem_euclid(360.0)]);
        let grid = (0..720).map(|i| i as f32 * 0.5);
        let hues: Vec<f32> = nudged
            .chain(grid)
            .chain([359.5, 359.9, 359.999, f32::from_bits(360.0f32.to_bits() - 1)])
            .collect();

        for hue in hues {
            for (saturation, value) in [(1.0, 1.0), (0.75, 1.0), (1.0, 0.75), (0.3, 0.4)] {
                let hsv = Hsv::new(hue, saturation, value);
                let back = rgb_to_hsv(hsv_to_rgb(hsv));
                assert!(back.hue >= 0.0 && back.hue < 360.0, "{hsv} -> {back}");

                if saturation >= 0.75 && value >= 0.75 {
                    let diff = (back.hue - hue).abs();
                    assert!(diff.min(360.0 - diff) <= 1.0, "{hsv} -> {back}");
                }
            }
        }
    }

    #[test]
    fn test_hue_matches_palette() {
        for (r, g, b) in [(200, 30, 90), (12, 180, 77), (90, 90, 250), (255, 200, 0)] {
            let ours = rgb_to_hsv(Rgb::new(r, g, b));
            let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
            let theirs: palette::Hsv = srgb.into_color();

            assert_close(ours.hue, theirs.hue.into_positive_degrees());
            assert_close(ours.saturation, theirs.saturation);
            assert_close(ours.value, theirs.value);
        }
    }
}
