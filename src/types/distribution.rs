//! Hue frequency map and its ordered form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Hsv;

/// One histogram entry: an HSV key and how many pixels produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HueCount {
    pub hsv: Hsv,
    pub count: u64,
}

impl HueCount {
    pub const fn new(hsv: Hsv, count: u64) -> Self {
        Self { hsv, count }
    }

    pub fn hue(&self) -> f32 {
        self.hsv.hue
    }
}

/// The key an ordered sequence is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Hue,
    Count,
}

/// The statistic a percent range computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Count-weighted average hue.
    Hue,
    /// Summed count.
    Count,
}

/// Occurrence counts keyed by exact HSV value.
///
/// Entries keep the order in which their key was first inserted, so iteration
/// over a map built from an image is deterministic (row-major first sight).
#[derive(Debug, Clone, Default)]
pub struct HueFrequencyMap {
    index: HashMap<Hsv, usize>,
    entries: Vec<HueCount>,
}

impl HueFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `hsv`, creating the entry on first sight.
    pub fn increment(&mut self, hsv: Hsv) {
        match self.index.get(&hsv) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(hsv, self.entries.len());
                self.entries.push(HueCount::new(hsv, 1));
            }
        }
    }

    /// Occurrence count of an exact key (0 if absent).
    pub fn get(&self, hsv: &Hsv) -> u64 {
        self.index.get(hsv).map_or(0, |&i| self.entries[i].count)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[HueCount] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HueCount> {
        self.entries.iter()
    }
}
