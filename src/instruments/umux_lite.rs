//! UMUX-Lite scorer - the two-item short form of UMUX.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{AnswerRecord, ScaleRange};
use crate::stats::{compute_stats_summary, StatsSummary};

/// UMUX-Lite keeps the two positively phrased items of the UMUX pool:
/// Q1 (capabilities meet requirements) and Q3 (ease of use).
const ITEM_USEFULNESS: &str = "Q1";
const ITEM_USABILITY: &str = "Q3";

/// Raw answers use the same 0-6 agreement scale as UMUX.
const UMUX_LITE_SCALE: ScaleRange = ScaleRange::new(0.0, 6.0);

/// UMUX-Lite statistics across respondents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UmuxLiteResult {
    pub n: usize,
    pub global: StatsSummary,
    pub usability: StatsSummary,
    pub usefulness: StatsSummary,
}

/// Pure scoring functions for UMUX-Lite responses.
pub struct UmuxLiteScorer;

impl UmuxLiteScorer {
    /// Scores one respondent's global UMUX-Lite value (0-100).
    ///
    /// Both items must be present and within the 0-6 scale.
    pub fn respondent_score(record: &AnswerRecord) -> Option<f64> {
        let (usefulness, usability) = Self::valid_pair(record)?;
        Some(100.0 * (usefulness + usability) / 12.0)
    }

    /// Computes UMUX-Lite statistics; `None` if no respondent answered
    /// both items validly.
    pub fn compute(responses: &[AnswerRecord]) -> Option<UmuxLiteResult> {
        let pairs: Vec<(f64, f64)> = responses.iter().filter_map(Self::valid_pair).collect();
        debug!(
            total = responses.len(),
            valid = pairs.len(),
            "scored UMUX-Lite responses"
        );
        if pairs.is_empty() {
            return None;
        }

        let n = pairs.len();
        let global: Vec<f64> = pairs
            .iter()
            .map(|(usefulness, usability)| 100.0 * (usefulness + usability) / 12.0)
            .collect();
        let usability: Vec<f64> = pairs
            .iter()
            .map(|(_, usability)| 100.0 * usability / 6.0)
            .collect();
        let usefulness: Vec<f64> = pairs
            .iter()
            .map(|(usefulness, _)| 100.0 * usefulness / 6.0)
            .collect();

        Some(UmuxLiteResult {
            n,
            global: compute_stats_summary(&global, n),
            usability: compute_stats_summary(&usability, n),
            usefulness: compute_stats_summary(&usefulness, n),
        })
    }

    /// Returns `(usefulness, usability)` raw values if both are valid.
    fn valid_pair(record: &AnswerRecord) -> Option<(f64, f64)> {
        let usefulness = record
            .answer(ITEM_USEFULNESS)
            .filter(|v| UMUX_LITE_SCALE.contains(*v))?;
        let usability = record
            .answer(ITEM_USABILITY)
            .filter(|v| UMUX_LITE_SCALE.contains(*v))?;
        Some((usefulness, usability))
    }
}
