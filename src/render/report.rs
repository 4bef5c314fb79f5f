//! Text report lines for terminal output.

use serde::Serialize;

use crate::analysis::{average_hue, hsv_to_rgb, HueGroup, PercentileSlice};
use crate::output::plural;
use crate::types::{Hsv, HueCount, HueFrequencyMap};

use super::bar::{colour_bar, ANSI_RESET};

/// Headline numbers for one analyzed image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Pixels counted into the distribution.
    pub pixels: u64,
    /// Distinct HSV keys in the distribution.
    pub distinct: usize,
    /// Threshold used for the count-sorted sequence.
    pub min_count: u64,
    /// Entries whose count is above `min_count`.
    pub above_min_count: usize,
    /// Count-weighted average hue of those entries, if any.
    pub average_hue: Option<f32>,
}

impl Summary {
    /// Summarize a distribution and its count-sorted, filtered sequence.
    pub fn new(map: &HueFrequencyMap, by_count: &[HueCount], min_count: u64) -> Self {
        Self {
            pixels: map.total(),
            distinct: map.len(),
            min_count,
            above_min_count: by_count.len(),
            average_hue: average_hue(by_count).ok().map(|(hsv, _)| hsv.hue),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let average = match self.average_hue {
            Some(hue) => format!("{:.2}°", hue),
            None => "n/a".to_string(),
        };

        vec![
            format!(
                "{} in {}",
                plural(self.distinct, "distinct colour", "distinct colours"),
                plural(self.pixels as usize, "pixel", "pixels")
            ),
            format!("Hue count: {} (count > {})", self.above_min_count, self.min_count),
            format!("Average hue normalized by the colours count: {}", average),
        ]
    }
}

/// Lines for a set of hue groups, bars scaled to at most `bar_width`.
pub fn group_lines(
    groups: &[HueGroup],
    group_size: i32,
    bar_width: usize,
    colour: bool,
) -> Vec<String> {
    let mut lines = vec![format!("Count of hues in groups of {}°", group_size)];

    for group in groups {
        let length = (bar_width as f32 * group.scale) as usize;
        let bar = colour_bar(group.average.hue, length, group.average_value, colour);
        lines.push(format!(
            "Group {:>3}  {:>6.1}°  count {:>8}  {}{}",
            group.index,
            group.average.hue,
            group.count,
            bar,
            reset(colour)
        ));
    }

    lines
}

/// Lines for percentile slices of a sequence sorted by `sorted_by`.
pub fn percentile_lines(
    slices: &[PercentileSlice],
    sorted_by: &str,
    bar_width: usize,
    colour: bool,
) -> Vec<String> {
    let increment = slices.first().map_or(0, |s| s.to_percent - s.from_percent);
    let mut lines = vec![format!(
        "Hue percentages in {}% increments sorted by {}",
        increment, sorted_by
    )];

    lines.extend(slices.iter().map(|slice| percentile_line(slice, bar_width, colour)));
    lines
}

fn percentile_line(slice: &PercentileSlice, bar_width: usize, colour: bool) -> String {
    let hue = slice.average_hue as f32;
    let rgb = hsv_to_rgb(Hsv::pure(hue));
    format!(
        "{:>3}% to {:>3}%  {:>6.1}°  count {:>8}  {}  {}{}",
        slice.from_percent,
        slice.to_percent,
        hue,
        slice.count,
        rgb,
        colour_bar(hue, bar_width, 1.0, colour),
        reset(colour)
    )
}

fn reset(colour: bool) -> &'static str {
    if colour {
        ANSI_RESET
    } else {
        ""
    }
}
