//! Percentile ranges and count-weighted averages over ordered sequences.

use crate::error::{HueError, Result};
use crate::types::{Hsv, HueCount, StatKind};

/// Compute a statistic over the `[from_percent, to_percent]` slice of `seq`.
///
/// Index bounds are `len * from / 100` and `len * to / 100` (integer
/// division) and both are inclusive, so contiguous ranges such as 0..50 and
/// 50..100 share their boundary entry. The upper bound is clamped to the last
/// index.
///
/// Percentages outside `0 <= from <= to <= 100` return `Ok(0.0)`.
///
/// [`StatKind::Hue`] returns the count-weighted average hue of the slice and
/// fails with [`HueError::EmptyInput`] when there is nothing to average.
/// [`StatKind::Count`] returns the summed count, which is `0.0` for an empty
/// sequence.
pub fn percent_range(
    seq: &[HueCount],
    from_percent: u32,
    to_percent: u32,
    stat: StatKind,
) -> Result<f64> {
    if from_percent > to_percent || to_percent > 100 {
        return Ok(0.0);
    }

    let len = seq.len();
    let min = len * from_percent as usize / 100;
    let max = (len * to_percent as usize / 100).min(len.saturating_sub(1));
    let slice = seq.get(min..=max).unwrap_or(&[]);

    match stat {
        StatKind::Count => Ok(slice.iter().map(|e| e.count as f64).sum()),
        StatKind::Hue => weighted_mean(slice, |hsv| hsv.hue, "percent range average hue"),
    }
}

/// Count-weighted mean hue of the whole sequence.
///
/// Returns a synthetic fully saturated, full brightness colour at that hue,
/// paired with the total count.
pub fn average_hue(seq: &[HueCount]) -> Result<(Hsv, u64)> {
    let hue = weighted_mean(seq, |hsv| hsv.hue, "average hue")?;
    Ok((Hsv::pure(hue as f32), total_count(seq)))
}

/// Count-weighted mean of the HSV value channel.
pub fn average_value(seq: &[HueCount]) -> Result<f32> {
    weighted_mean(seq, |hsv| hsv.value, "average value").map(|v| v as f32)
}

/// Sum of all counts in the sequence.
pub fn total_count(seq: &[HueCount]) -> u64 {
    seq.iter().map(|e| e.count).sum()
}

fn weighted_mean(
    seq: &[HueCount],
    channel: impl Fn(&Hsv) -> f32,
    operation: &'static str,
) -> Result<f64> {
    let (sum, count) = seq.iter().fold((0.0f64, 0u64), |(sum, count), e| {
        (sum + channel(&e.hsv) as f64 * e.count as f64, count + e.count)
    });

    if count == 0 {
        return Err(HueError::EmptyInput { operation });
    }

    Ok(sum / count as f64)
}
