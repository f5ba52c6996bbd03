//! Usability Metric for User Experience (UMUX) scorer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{AnswerRecord, Item, ScaleRange};
use crate::stats::{compute_stats_summary, StatsSummary};

/// The four UMUX statements; Q2 and Q4 are negatively phrased.
const UMUX_ITEMS: [Item; 4] = [
    Item::positive("Q1"),
    Item::reversed("Q2"),
    Item::positive("Q3"),
    Item::reversed("Q4"),
];

/// Raw UMUX answers use the 0-6 agreement scale.
const UMUX_SCALE: ScaleRange = ScaleRange::new(0.0, 6.0);

/// Maximum item-contribution sum (four items at 6 points each).
const UMUX_MAX_SUM: f64 = 24.0;

/// UMUX statistics across respondents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UmuxResult {
    pub n: usize,
    #[serde(flatten)]
    pub score: StatsSummary,
}

/// Pure scoring functions for UMUX responses.
pub struct UmuxScorer;

impl UmuxScorer {
    /// Scores one respondent on the 0-100 UMUX scale.
    ///
    /// All four items must be present and within the 0-6 scale.
    pub fn respondent_score(record: &AnswerRecord) -> Option<f64> {
        let mut sum = 0.0;
        for item in &UMUX_ITEMS {
            sum += UMUX_SCALE.normalize(item.polarity, record.answer(item.id)?)?;
        }
        Some(100.0 * sum / UMUX_MAX_SUM)
    }

    /// Computes UMUX statistics; `None` if no respondent answered all four
    /// items validly.
    pub fn compute(responses: &[AnswerRecord]) -> Option<UmuxResult> {
        let scores: Vec<f64> = responses.iter().filter_map(Self::respondent_score).collect();
        debug!(total = responses.len(), valid = scores.len(), "scored UMUX responses");
        if scores.is_empty() {
            return None;
        }

        Some(UmuxResult {
            n: scores.len(),
            score: compute_stats_summary(&scores, scores.len()),
        })
    }
}
