//! HSV colour key.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A colour in HSV space.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `value` are in `[0, 1]`.
///
/// Equality and hashing compare the exact bit patterns of the three floats,
/// so an `Hsv` can key a frequency map. Two colours merge only when their
/// conversions produced bit-identical results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    /// Create a new HSV colour.
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// A fully saturated, full brightness colour at `hue`.
    pub const fn pure(hue: f32) -> Self {
        Self::new(hue, 1.0, 1.0)
    }

    fn bits(self) -> (u32, u32, u32) {
        (
            self.hue.to_bits(),
            self.saturation.to_bits(),
            self.value.to_bits(),
        )
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Hsv {}

impl Hash for Hsv {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({:.2}°, {:.3}, {:.3})",
            self.hue, self.saturation, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exact_equality() {
        assert_eq!(Hsv::new(120.0, 1.0, 0.5), Hsv::new(120.0, 1.0, 0.5));
        assert_ne!(Hsv::new(120.0, 1.0, 0.5), Hsv::new(120.00001, 1.0, 0.5));
    }

    #[test]
    fn test_hash_merges_identical_keys() {
        let mut set = HashSet::new();
        set.insert(Hsv::new(10.0, 0.5, 0.5));
        set.insert(Hsv::new(10.0, 0.5, 0.5));
        set.insert(Hsv::new(10.0, 0.5, 0.25));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_pure() {
        let hsv = Hsv::pure(200.0);
        assert_eq!(hsv.saturation, 1.0);
        assert_eq!(hsv.value, 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hsv::new(120.0, 1.0, 0.5).to_string(), "hsv(120.00°, 1.000, 0.500)");
    }
}
