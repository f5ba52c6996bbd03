//! Item polarity - whether a raw answer must be flipped before aggregation.

use serde::{Deserialize, Serialize};

/// How an item's raw scale relates to the construct being measured.
///
/// `Reversed` marks items whose wording puts the positive pole on the low
/// end of the raw scale (negatively phrased Likert statements, mirrored
/// bipolar word pairs). Normalization reflects such values around the scale
/// midpoint so that higher always means more positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Higher raw value means more positive; used as-is.
    Positive,
    /// Higher raw value means more negative; reflected before aggregation.
    Reversed,
}

impl Polarity {
    /// Returns true if values of this polarity must be flipped.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Polarity::Reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_reports_flipping() {
        assert!(Polarity::Reversed.is_reversed());
        assert!(!Polarity::Positive.is_reversed());
    }
}
