//! Ordering a hue frequency map into a sequence.
//!
//! Both orderings are linear-time distribution sorts: counts go through a
//! counting sort over the count range, hues through a bucket sort over whole
//! degrees. Both are stable, so ties keep the map's first-seen order.

use std::cmp::Ordering;

use crate::types::{HueCount, HueFrequencyMap, SortKey};

/// Number of one-degree buckets covering the hue domain.
const HUE_BUCKETS: usize = 360;

/// Count ranges wider than this multiple of the entry count use a
/// comparison sort instead of a counting array.
const MAX_COUNT_RANGE_FACTOR: u64 = 16;

/// Order the map's entries ascending by `key`.
///
/// With [`SortKey::Count`] only entries with `count > min_count` are kept.
/// With [`SortKey::Hue`] every entry is kept and `min_count` is ignored.
pub fn to_ordered_sequence(map: &HueFrequencyMap, key: SortKey, min_count: u64) -> Vec<HueCount> {
    match key {
        SortKey::Count => {
            let filtered: Vec<HueCount> = map
                .iter()
                .filter(|e| e.count > min_count)
                .copied()
                .collect();
            counting_sort_by_count(filtered)
        }
        SortKey::Hue => bucket_sort_by_hue(map.entries()),
    }
}

/// Stable counting sort keyed on the entry count.
fn counting_sort_by_count(mut entries: Vec<HueCount>) -> Vec<HueCount> {
    let (Some(min), Some(max)) = (
        entries.iter().map(|e| e.count).min(),
        entries.iter().map(|e| e.count).max(),
    ) else {
        return entries;
    };

    let range = max - min + 1;
    let limit = (entries.len() as u64).saturating_mul(MAX_COUNT_RANGE_FACTOR).max(1024);
    if range > limit {
        entries.sort_by_key(|e| e.count);
        return entries;
    }

    let mut positions = vec![0usize; range as usize];
    for entry in &entries {
        positions[(entry.count - min) as usize] += 1;
    }

    // Exclusive prefix sums: the first output slot of each count.
    let mut next = 0;
    for slot in positions.iter_mut() {
        let n = *slot;
        *slot = next;
        next += n;
    }

    let mut output = vec![HueCount::new(Default::default(), 0); entries.len()];
    for entry in entries {
        let slot = &mut positions[(entry.count - min) as usize];
        output[*slot] = entry;
        *slot += 1;
    }

    output
}

/// Stable bucket sort on the numeric hue value.
///
/// Hues are distributed into whole-degree buckets, each bucket is ordered by
/// its exact hue, then the buckets are concatenated. Hues outside `[0, 360)`
/// are clamped into the first or last bucket so they still sort numerically.
fn bucket_sort_by_hue(entries: &[HueCount]) -> Vec<HueCount> {
    let mut buckets: Vec<Vec<HueCount>> = vec![Vec::new(); HUE_BUCKETS];

    for entry in entries {
        let hue = entry.hue();
        let index = if hue.is_nan() || hue < 0.0 {
            0
        } else {
            (hue as usize).min(HUE_BUCKETS - 1)
        };
        buckets[index].push(*entry);
    }

    let mut output = Vec::with_capacity(entries.len());
    for mut bucket in buckets {
        if bucket.len() > 1 {
            bucket.sort_by(|a, b| a.hue().partial_cmp(&b.hue()).unwrap_or(Ordering::Equal));
        }
        output.extend(bucket);
    }

    output
}
