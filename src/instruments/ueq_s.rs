//! UEQ-S scorer - the eight-item short form of the User Experience
//! Questionnaire.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{AnswerRecord, Dimension, Item, ScaleRange};
use crate::stats::{compute_stats_summary, StatsSummary};

use super::respondent_mean;

/// Raw UEQ-S answers use the 1-7 scale, normalized to -3..+3. All eight
/// word pairs are presented negative-left, so every item is positively
/// poled.
const UEQ_S_SCALE: ScaleRange = ScaleRange::with_offset(1.0, 7.0, 4.0);

/// Pragmatic quality (items 1-4) and hedonic quality (items 5-8).
const UEQ_S_DIMENSIONS: [Dimension; 2] = [
    Dimension {
        key: "PRAG",
        items: &[
            Item::positive("Q1"),
            Item::positive("Q2"),
            Item::positive("Q3"),
            Item::positive("Q4"),
        ],
    },
    Dimension {
        key: "HED",
        items: &[
            Item::positive("Q5"),
            Item::positive("Q6"),
            Item::positive("Q7"),
            Item::positive("Q8"),
        ],
    },
];

/// All eight items, for the per-respondent GLOBAL mean.
const UEQ_S_ALL_ITEMS: [Item; 8] = [
    Item::positive("Q1"),
    Item::positive("Q2"),
    Item::positive("Q3"),
    Item::positive("Q4"),
    Item::positive("Q5"),
    Item::positive("Q6"),
    Item::positive("Q7"),
    Item::positive("Q8"),
];

/// UEQ-S statistics across respondents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct UeqSResult {
    #[serde(rename = "n")]
    pub n: usize,
    pub prag: StatsSummary,
    pub hed: StatsSummary,
    pub global: StatsSummary,
}

/// Pure scoring functions for UEQ-S responses.
pub struct UeqSScorer;

impl UeqSScorer {
    /// Computes UEQ-S statistics; `None` if no respondent answered any
    /// item validly. Same partial-answer and per-dimension sample-size
    /// semantics as the full UEQ.
    pub fn compute(responses: &[AnswerRecord]) -> Option<UeqSResult> {
        let mut dims: [Vec<f64>; 2] = Default::default();
        let mut global = Vec::new();

        for record in responses {
            for (bucket, dimension) in dims.iter_mut().zip(&UEQ_S_DIMENSIONS) {
                if let Some(mean) = respondent_mean(record, dimension.items, UEQ_S_SCALE) {
                    bucket.push(mean);
                }
            }
            if let Some(mean) = respondent_mean(record, &UEQ_S_ALL_ITEMS, UEQ_S_SCALE) {
                global.push(mean);
            }
        }

        debug!(
            total = responses.len(),
            valid = global.len(),
            "scored UEQ-S responses"
        );
        if global.is_empty() {
            return None;
        }

        let summarize = |means: &Vec<f64>| compute_stats_summary(means, means.len());
        Some(UeqSResult {
            n: global.len(),
            prag: summarize(&dims[0]),
            hed: summarize(&dims[1]),
            global: summarize(&global),
        })
    }
}
