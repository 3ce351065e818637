use serde::{Deserialize, Serialize};

/// A closed `[min, max]` range of floating point values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The same range with `min <= max`.
    pub fn ordered(self) -> Self {
        if self.min <= self.max {
            self
        } else {
            Self::new(self.max, self.min)
        }
    }

    /// Whether `value` lies inside the ordered range, bounds included.
    pub fn contains(&self, value: f32) -> bool {
        let r = self.ordered();
        value >= r.min && value <= r.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_swaps_reversed_bounds() {
        assert_eq!(ValueRange::new(5.0, 1.0).ordered(), ValueRange::new(1.0, 5.0));
        assert_eq!(ValueRange::new(1.0, 5.0).ordered(), ValueRange::new(1.0, 5.0));
    }

    #[test]
    fn test_contains_includes_bounds() {
        let r = ValueRange::new(0.4, 0.7);
        assert!(r.contains(0.4));
        assert!(r.contains(0.7));
        assert!(!r.contains(0.71));
        assert!(ValueRange::new(0.7, 0.4).contains(0.5));
    }
}
