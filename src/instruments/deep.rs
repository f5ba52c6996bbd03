//! DEEP scorer - Design-oriented Evaluation of Perceived Web Usability,
//! 19 items in six groups.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{AnswerRecord, Dimension, Item, ScaleRange};
use crate::stats::{compute_stats_summary, StatsSummary};

use super::respondent_mean;

/// Raw DEEP answers use the 1-5 agreement scale. Respondents may mark an
/// item "not applicable", recorded as 0, which lies outside the valid
/// range by construction and is excluded rather than treated as a low
/// score.
const DEEP_SCALE: ScaleRange = ScaleRange::new(1.0, 5.0);

/// The six DEEP groups. Q12 (fatigue) and Q15 (layout changes) are
/// negatively phrased and reverse-scored.
const DEEP_GROUPS: [Dimension; 6] = [
    Dimension {
        key: "G1",
        items: &[
            Item::positive("Q1"),
            Item::positive("Q2"),
            Item::positive("Q3"),
            Item::positive("Q4"),
        ],
    },
    Dimension {
        key: "G2",
        items: &[
            Item::positive("Q5"),
            Item::positive("Q6"),
            Item::positive("Q7"),
        ],
    },
    Dimension {
        key: "G3",
        items: &[
            Item::positive("Q8"),
            Item::positive("Q9"),
            Item::positive("Q10"),
        ],
    },
    Dimension {
        key: "G4",
        items: &[
            Item::positive("Q11"),
            Item::reversed("Q12"),
            Item::positive("Q13"),
        ],
    },
    Dimension {
        key: "G5",
        items: &[
            Item::positive("Q14"),
            Item::reversed("Q15"),
            Item::positive("Q16"),
        ],
    },
    Dimension {
        key: "G6",
        items: &[
            Item::positive("Q17"),
            Item::positive("Q18"),
            Item::positive("Q19"),
        ],
    },
];

/// DEEP statistics across respondents, one summary per group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct DeepResult {
    #[serde(rename = "n")]
    pub n: usize,
    pub g1: StatsSummary,
    pub g2: StatsSummary,
    pub g3: StatsSummary,
    pub g4: StatsSummary,
    pub g5: StatsSummary,
    pub g6: StatsSummary,
}

/// Pure scoring functions for DEEP responses.
pub struct DeepScorer;

impl DeepScorer {
    /// Computes DEEP statistics; `None` if no respondent contributed a
    /// valid value to any group.
    ///
    /// A respondent counts toward `n` once they contribute to at least one
    /// group; each group is summarized with its own respondent count.
    pub fn compute(responses: &[AnswerRecord]) -> Option<DeepResult> {
        let mut groups: [Vec<f64>; 6] = Default::default();
        let mut n = 0usize;

        for record in responses {
            let mut contributed = false;
            for (bucket, group) in groups.iter_mut().zip(&DEEP_GROUPS) {
                if let Some(mean) = respondent_mean(record, group.items, DEEP_SCALE) {
                    bucket.push(mean);
                    contributed = true;
                }
            }
            if contributed {
                n += 1;
            }
        }

        debug!(total = responses.len(), valid = n, "scored DEEP responses");
        if n == 0 {
            return None;
        }

        let summarize = |means: &Vec<f64>| compute_stats_summary(means, means.len());
        Some(DeepResult {
            n,
            g1: summarize(&groups[0]),
            g2: summarize(&groups[1]),
            g3: summarize(&groups[2]),
            g4: summarize(&groups[3]),
            g5: summarize(&groups[4]),
            g6: summarize(&groups[5]),
        })
    }
}
