//! AttrakDiff scorer - bipolar word pairs measuring pragmatic quality,
//! hedonic quality, and attractiveness, in full and abridged forms.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::foundation::{AnswerRecord, Dimension, Item, ScaleRange};
use crate::stats::{compute_stats_summary, mean, round2, StatsSummary};

use super::respondent_mean;

/// Raw AttrakDiff answers are recorded on the -3..+3 bipolar scale.
const ATTRAKDIFF_SCALE: ScaleRange = ScaleRange::new(-3.0, 3.0);

/// Full-form word pairs, seven per dimension. The French paper
/// administration alternates pair orientation within each dimension to
/// counter acquiescence bias: odd-numbered pairs are mirrored on the sheet
/// and must be sign-flipped back before aggregation.
const ATTRAKDIFF_FULL: [Dimension; 4] = [
    Dimension {
        key: "QP",
        items: &[
            Item::reversed("QP1"),
            Item::positive("QP2"),
            Item::reversed("QP3"),
            Item::positive("QP4"),
            Item::reversed("QP5"),
            Item::positive("QP6"),
            Item::reversed("QP7"),
        ],
    },
    Dimension {
        key: "QHS",
        items: &[
            Item::reversed("QHS1"),
            Item::positive("QHS2"),
            Item::reversed("QHS3"),
            Item::positive("QHS4"),
            Item::reversed("QHS5"),
            Item::positive("QHS6"),
            Item::reversed("QHS7"),
        ],
    },
    Dimension {
        key: "QHI",
        items: &[
            Item::reversed("QHI1"),
            Item::positive("QHI2"),
            Item::reversed("QHI3"),
            Item::positive("QHI4"),
            Item::reversed("QHI5"),
            Item::positive("QHI6"),
            Item::reversed("QHI7"),
        ],
    },
    Dimension {
        key: "ATT",
        items: &[
            Item::reversed("ATT1"),
            Item::positive("ATT2"),
            Item::reversed("ATT3"),
            Item::positive("ATT4"),
            Item::reversed("ATT5"),
            Item::positive("ATT6"),
            Item::reversed("ATT7"),
        ],
    },
];

/// Abridged-form word pairs (ten of the full set), same orientation rules.
const ATTRAKDIFF_ABRIDGED: [Dimension; 4] = [
    Dimension {
        key: "QP",
        items: &[
            Item::positive("QP2"),
            Item::reversed("QP3"),
            Item::reversed("QP5"),
            Item::positive("QP6"),
        ],
    },
    Dimension {
        key: "QHS",
        items: &[Item::positive("QHS2"), Item::reversed("QHS5")],
    },
    Dimension {
        key: "QHI",
        items: &[Item::reversed("QHI3"), Item::positive("QHI4")],
    },
    Dimension {
        key: "ATT",
        items: &[Item::positive("ATT2"), Item::reversed("ATT5")],
    },
];

/// Combined QHS + QHI item lists, for the per-respondent QH mean.
static FULL_HEDONIC_ITEMS: Lazy<Vec<Item>> = Lazy::new(|| hedonic_items(&ATTRAKDIFF_FULL));
static ABRIDGED_HEDONIC_ITEMS: Lazy<Vec<Item>> = Lazy::new(|| hedonic_items(&ATTRAKDIFF_ABRIDGED));

fn hedonic_items(dimensions: &[Dimension; 4]) -> Vec<Item> {
    dimensions
        .iter()
        .filter(|d| d.key == "QHS" || d.key == "QHI")
        .flat_map(|d| d.items.iter().copied())
        .collect()
}

/// Which administration of AttrakDiff was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrakDiffForm {
    Full,
    Abridged,
}

impl AttrakDiffForm {
    fn dimensions(&self) -> &'static [Dimension; 4] {
        match self {
            AttrakDiffForm::Full => &ATTRAKDIFF_FULL,
            AttrakDiffForm::Abridged => &ATTRAKDIFF_ABRIDGED,
        }
    }

    fn hedonic_items(&self) -> &'static [Item] {
        match self {
            AttrakDiffForm::Full => &FULL_HEDONIC_ITEMS,
            AttrakDiffForm::Abridged => &ABRIDGED_HEDONIC_ITEMS,
        }
    }
}

/// Mean raw value per word pair, keyed by item id.
pub type WordPairAverages = BTreeMap<String, f64>;

/// AttrakDiff statistics across respondents.
///
/// QH is derived per respondent from all valid QHS and QHI items combined,
/// not from the two dimension means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AttrakDiffResult {
    #[serde(rename = "n")]
    pub n: usize,
    pub qp: StatsSummary,
    pub qhs: StatsSummary,
    pub qhi: StatsSummary,
    pub att: StatsSummary,
    pub qh: StatsSummary,
}

/// Pure scoring functions for AttrakDiff responses.
pub struct AttrakDiffScorer;

impl AttrakDiffScorer {
    /// Computes AttrakDiff statistics for the given form; `None` if no
    /// respondent answered any item of any dimension validly.
    ///
    /// The instrument-level `n` is the maximum of the four dimension
    /// respondent counts: partial answers can make the counts diverge and
    /// the largest one is the achieved sample size.
    pub fn compute(responses: &[AnswerRecord], form: AttrakDiffForm) -> Option<AttrakDiffResult> {
        let dimensions = form.dimensions();
        let mut buckets: [Vec<f64>; 4] = Default::default();
        let mut hedonic = Vec::new();

        for record in responses {
            for (bucket, dimension) in buckets.iter_mut().zip(dimensions) {
                if let Some(mean) = respondent_mean(record, dimension.items, ATTRAKDIFF_SCALE) {
                    bucket.push(mean);
                }
            }
            if let Some(mean) = respondent_mean(record, form.hedonic_items(), ATTRAKDIFF_SCALE) {
                hedonic.push(mean);
            }
        }

        let n = buckets.iter().map(Vec::len).max().unwrap_or(0);
        debug!(
            total = responses.len(),
            valid = n,
            form = ?form,
            "scored AttrakDiff responses"
        );
        if n == 0 {
            return None;
        }

        let summarize = |means: &Vec<f64>| compute_stats_summary(means, means.len());
        Some(AttrakDiffResult {
            n,
            qp: summarize(&buckets[0]),
            qhs: summarize(&buckets[1]),
            qhi: summarize(&buckets[2]),
            att: summarize(&buckets[3]),
            qh: summarize(&hedonic),
        })
    }

    /// Mean raw (non-reversed) value of every word pair of the form.
    ///
    /// This feeds the word-pair profile chart, which shows literal pair
    /// positioning as answered - so the reversal table is intentionally
    /// not applied. Invalid answers are excluded per respondent; pairs
    /// nobody answered report 0.0. Every pair of the form is present in
    /// the output.
    pub fn word_pair_averages(
        responses: &[AnswerRecord],
        form: AttrakDiffForm,
    ) -> WordPairAverages {
        let mut averages = WordPairAverages::new();
        for dimension in form.dimensions() {
            for item in dimension.items {
                let values: Vec<f64> = responses
                    .iter()
                    .filter_map(|record| record.answer(item.id))
                    .filter(|v| ATTRAKDIFF_SCALE.contains(*v))
                    .collect();
                let average = if values.is_empty() {
                    0.0
                } else {
                    round2(mean(&values))
                };
                averages.insert(item.id.to_string(), average);
            }
        }
        averages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, f64)]) -> AnswerRecord {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn reversed_pairs_flip_for_scoring_but_not_for_word_pairs() {
        let responses = vec![record(&[("QP1", 2.0)])];
        let result = AttrakDiffScorer::compute(&responses, AttrakDiffForm::Full).unwrap();
        assert_eq!(result.qp.mean, -2.0);

        let pairs = AttrakDiffScorer::word_pair_averages(&responses, AttrakDiffForm::Full);
        assert_eq!(pairs["QP1"], 2.0);
    }

    #[test]
    fn qh_combines_hedonic_items_not_dimension_means() {
        // QHS mean +2 from one item, QHI mean -1 from two items:
        // QH is (2 - 1 - 1) / 3 = 0, not (2 + -1) / 2 = 0.5.
        let respondent = record(&[("QHS2", 2.0), ("QHI2", -1.0), ("QHI4", -1.0)]);
        let result = AttrakDiffScorer::compute(&[respondent], AttrakDiffForm::Full).unwrap();
        assert_eq!(result.qhs.mean, 2.0);
        assert_eq!(result.qhi.mean, -1.0);
        assert_eq!(result.qh.mean, 0.0);
    }

    #[test]
    fn instrument_n_is_the_max_dimension_count() {
        let a = record(&[("QP2", 1.0)]);
        let b = record(&[("QP3", 2.0), ("ATT2", 3.0)]);
        let result = AttrakDiffScorer::compute(&[a, b], AttrakDiffForm::Full).unwrap();
        // QP saw two respondents, ATT one, QHS/QHI none.
        assert_eq!(result.n, 2);
        assert_eq!(result.qhs, StatsSummary::ZERO);
        assert_eq!(result.qhi, StatsSummary::ZERO);
    }

    #[test]
    fn dimension_scores_average_per_respondent_first() {
        // QP2 positive +1 and QP3 reversed -(+3) = -3: per-respondent QP
        // mean is -1.
        let respondent = record(&[("QP2", 1.0), ("QP3", 3.0)]);
        let result = AttrakDiffScorer::compute(&[respondent], AttrakDiffForm::Full).unwrap();
        assert_eq!(result.qp.mean, -1.0);
    }

    #[test]
    fn abridged_form_ignores_full_only_pairs() {
        // QP1 exists only in the full form.
        let responses = vec![record(&[("QP1", 2.0)])];
        assert_eq!(
            AttrakDiffScorer::compute(&responses, AttrakDiffForm::Abridged),
            None
        );
        let result = AttrakDiffScorer::compute(&responses, AttrakDiffForm::Full).unwrap();
        assert_eq!(result.n, 1);
    }

    #[test]
    fn out_of_range_answers_are_skipped() {
        let responses = vec![record(&[("QP2", 5.0)])];
        assert_eq!(
            AttrakDiffScorer::compute(&responses, AttrakDiffForm::Full),
            None
        );
    }

    #[test]
    fn compute_returns_none_without_responses() {
        assert_eq!(AttrakDiffScorer::compute(&[], AttrakDiffForm::Full), None);
    }

    #[test]
    fn word_pair_averages_cover_every_pair_of_the_form() {
        let pairs = AttrakDiffScorer::word_pair_averages(&[], AttrakDiffForm::Full);
        assert_eq!(pairs.len(), 28);
        assert!(pairs.values().all(|v| *v == 0.0));

        let abridged = AttrakDiffScorer::word_pair_averages(&[], AttrakDiffForm::Abridged);
        assert_eq!(abridged.len(), 10);
        assert!(abridged.contains_key("QHS5"));
        assert!(!abridged.contains_key("QP1"));
    }

    #[test]
    fn word_pair_averages_exclude_missing_answers_from_the_mean() {
        let a = record(&[("QP2", 3.0)]);
        let b = record(&[("ATT2", 1.0)]);
        let pairs = AttrakDiffScorer::word_pair_averages(&[a, b], AttrakDiffForm::Full);
        // Only one respondent answered QP2, so its average is 3, not 1.5.
        assert_eq!(pairs["QP2"], 3.0);
        assert_eq!(pairs["ATT2"], 1.0);
        assert_eq!(pairs["QP4"], 0.0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let responses = vec![
            record(&[("QP1", -2.0), ("QHS2", 1.0), ("ATT5", 0.0)]),
            record(&[("QHI3", 2.0), ("ATT2", -3.0)]),
        ];
        assert_eq!(
            AttrakDiffScorer::compute(&responses, AttrakDiffForm::Full),
            AttrakDiffScorer::compute(&responses, AttrakDiffForm::Full)
        );
    }
}
