//! Fixed-width hue groups and percentile slices.

use serde::Serialize;

use crate::error::{HueError, Result};
use crate::types::{Hsv, HueCount, StatKind};

use super::range::{average_hue, average_value, percent_range};

/// Width of the hue domain in degrees.
pub const HUE_DOMAIN: i32 = 360;

/// Natural-log distance from the largest group at which a bar shrinks to zero.
const SCALE_LOG_RANGE: f32 = 5.0;

/// A non-empty run of entries whose hues fall in one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HueGroup {
    /// Position of the group among all groups, counting empty ones.
    pub index: usize,
    /// Lower hue bound in degrees.
    pub lower: i32,
    /// Upper hue bound in degrees (inclusive).
    pub upper: i32,
    /// Count-weighted average hue, as a pure colour.
    pub average: Hsv,
    /// Summed count of the group's entries.
    pub count: u64,
    /// Count-weighted average of the HSV value channel.
    pub average_value: f32,
    /// Display hint in `[0, 1]` for sizing a proportional bar. The largest
    /// group gets 1.0 and groups shrink with the log of their count ratio.
    pub scale: f32,
    #[serde(skip)]
    pub entries: Vec<HueCount>,
}

/// Partition a hue-ascending sequence into groups `group_size` degrees wide.
///
/// Scans once, assigning each entry to the first group whose inclusive upper
/// bound is at or above its hue. Only non-empty groups are returned, each with
/// its original `index`. `group_size` must be positive; values above 360 are
/// clamped to 360.
pub fn group_by_hue_buckets(seq: &[HueCount], group_size: i32) -> Result<Vec<HueGroup>> {
    if group_size <= 0 {
        return Err(HueError::InvalidRange {
            message: format!("Group size must be greater than 0, got {}", group_size),
            help: Some("Pass a group size between 1 and 360 degrees".to_string()),
        });
    }
    let group_size = group_size.min(HUE_DOMAIN);

    let mut buckets: Vec<(i32, Vec<HueCount>)> = Vec::new();
    let mut rest = seq;
    for lower in (0..HUE_DOMAIN).step_by(group_size as usize) {
        let upper = lower + group_size;
        let taken = rest
            .iter()
            .take_while(|e| e.hue() <= upper as f32)
            .count();
        let (group, remaining) = rest.split_at(taken);
        buckets.push((lower, group.to_vec()));
        rest = remaining;
    }

    let max_count = buckets
        .iter()
        .map(|(_, entries)| entries.iter().map(|e| e.count).sum::<u64>())
        .max()
        .unwrap_or(0);

    let mut groups = Vec::new();
    for (index, (lower, entries)) in buckets.into_iter().enumerate() {
        if entries.is_empty() {
            continue;
        }

        let (average, count) = average_hue(&entries)?;
        let average_value = average_value(&entries)?;

        groups.push(HueGroup {
            index,
            lower,
            upper: (lower + group_size).min(HUE_DOMAIN),
            average,
            count,
            average_value,
            scale: display_scale(max_count, count),
            entries,
        });
    }

    Ok(groups)
}

/// Bar scale for a group relative to the largest group.
fn display_scale(max_count: u64, count: u64) -> f32 {
    if count == 0 || max_count == 0 {
        return 0.0;
    }
    let distance = (max_count as f32 / count as f32).ln().abs();
    ((SCALE_LOG_RANGE - distance.min(SCALE_LOG_RANGE)) / SCALE_LOG_RANGE).clamp(0.0, 1.0)
}

/// Averages over one percentile slice of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileSlice {
    pub from_percent: u32,
    pub to_percent: u32,
    pub average_hue: f64,
    pub count: u64,
}

/// Summarize `seq` in consecutive slices `increment` percent wide.
///
/// Slice boundaries follow [`percent_range`], so neighbouring slices share
/// their boundary entry.
pub fn percentile_slices(seq: &[HueCount], increment: u32) -> Result<Vec<PercentileSlice>> {
    if increment == 0 || increment > 100 {
        return Err(HueError::InvalidRange {
            message: format!("Increment must be between 1 and 100 percent, got {}", increment),
            help: None,
        });
    }

    (0..100 / increment)
        .map(|i| {
            let from = i * increment;
            let to = from + increment;
            Ok(PercentileSlice {
                from_percent: from,
                to_percent: to,
                average_hue: percent_range(seq, from, to, StatKind::Hue)?,
                count: percent_range(seq, from, to, StatKind::Count)? as u64,
            })
        })
        .collect()
}
