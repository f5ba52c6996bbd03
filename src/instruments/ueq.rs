//! User Experience Questionnaire (UEQ) scorer - 26 bipolar-phrased items
//! across six dimensions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{AnswerRecord, Dimension, Item, ScaleRange};
use crate::stats::{compute_stats_summary, StatsSummary};

use super::respondent_mean;

/// Raw UEQ answers use the 1-7 scale, normalized to -3..+3.
const UEQ_SCALE: ScaleRange = ScaleRange::with_offset(1.0, 7.0, 4.0);

/// The six UEQ dimensions. Which end of the raw scale carries the positive
/// pole varies per item, so each entry records its own polarity.
const UEQ_DIMENSIONS: [Dimension; 6] = [
    Dimension {
        key: "ATT",
        items: &[
            Item::positive("Q1"),
            Item::reversed("Q12"),
            Item::positive("Q14"),
            Item::positive("Q16"),
            Item::reversed("Q24"),
            Item::reversed("Q25"),
        ],
    },
    Dimension {
        key: "PERSP",
        items: &[
            Item::positive("Q2"),
            Item::reversed("Q4"),
            Item::positive("Q13"),
            Item::reversed("Q21"),
        ],
    },
    Dimension {
        key: "EFF",
        items: &[
            Item::reversed("Q9"),
            Item::positive("Q20"),
            Item::positive("Q22"),
            Item::reversed("Q23"),
        ],
    },
    Dimension {
        key: "DEP",
        items: &[
            Item::positive("Q8"),
            Item::positive("Q11"),
            Item::reversed("Q17"),
            Item::reversed("Q19"),
        ],
    },
    Dimension {
        key: "STIM",
        items: &[
            Item::reversed("Q5"),
            Item::positive("Q6"),
            Item::positive("Q7"),
            Item::reversed("Q18"),
        ],
    },
    Dimension {
        key: "NOV",
        items: &[
            Item::reversed("Q3"),
            Item::reversed("Q10"),
            Item::positive("Q15"),
            Item::positive("Q26"),
        ],
    },
];

/// All 26 items, for the per-respondent GLOBAL mean.
static UEQ_ALL_ITEMS: Lazy<Vec<Item>> = Lazy::new(|| {
    UEQ_DIMENSIONS
        .iter()
        .flat_map(|d| d.items.iter().copied())
        .collect()
});

/// UEQ statistics across respondents.
///
/// GLOBAL is the per-respondent mean over all answered items, not the mean
/// of the dimension means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct UeqResult {
    #[serde(rename = "n")]
    pub n: usize,
    pub att: StatsSummary,
    pub persp: StatsSummary,
    pub eff: StatsSummary,
    pub dep: StatsSummary,
    pub stim: StatsSummary,
    pub nov: StatsSummary,
    pub global: StatsSummary,
}

/// Pure scoring functions for UEQ responses.
pub struct UeqScorer;

impl UeqScorer {
    /// Computes UEQ statistics; `None` if no respondent answered any item
    /// validly.
    ///
    /// Partial answers are allowed: a respondent contributes to exactly
    /// the dimensions they answered, and each dimension is summarized with
    /// its own respondent count.
    pub fn compute(responses: &[AnswerRecord]) -> Option<UeqResult> {
        let mut dims: [Vec<f64>; 6] = Default::default();
        let mut global = Vec::new();

        for record in responses {
            for (bucket, dimension) in dims.iter_mut().zip(&UEQ_DIMENSIONS) {
                if let Some(mean) = respondent_mean(record, dimension.items, UEQ_SCALE) {
                    bucket.push(mean);
                }
            }
            if let Some(mean) = respondent_mean(record, &UEQ_ALL_ITEMS, UEQ_SCALE) {
                global.push(mean);
            }
        }

        debug!(
            total = responses.len(),
            valid = global.len(),
            "scored UEQ responses"
        );
        if global.is_empty() {
            return None;
        }

        let summarize = |means: &Vec<f64>| compute_stats_summary(means, means.len());
        Some(UeqResult {
            n: global.len(),
            att: summarize(&dims[0]),
            persp: summarize(&dims[1]),
            eff: summarize(&dims[2]),
            dep: summarize(&dims[3]),
            stim: summarize(&dims[4]),
            nov: summarize(&dims[5]),
            global: summarize(&global),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, f64)]) -> AnswerRecord {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn tables_cover_all_26_items_without_duplicates() {
        let mut ids: Vec<&str> = UEQ_ALL_ITEMS.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 26);
    }

    #[test]
    fn partial_answers_touch_only_their_dimension_and_global() {
        // Q1 belongs to ATT and is positively poled: 7 normalizes to +3.
        let result = UeqScorer::compute(&[record(&[("Q1", 7.0)])]).unwrap();
        assert_eq!(result.n, 1);
        assert_eq!(result.att.mean, 3.0);
        assert_eq!(result.att.ci95, (3.0, 3.0));
        assert_eq!(result.global.mean, 3.0);
        assert_eq!(result.persp, StatsSummary::ZERO);
        assert_eq!(result.eff, StatsSummary::ZERO);
        assert_eq!(result.dep, StatsSummary::ZERO);
        assert_eq!(result.stim, StatsSummary::ZERO);
        assert_eq!(result.nov, StatsSummary::ZERO);
    }

    #[test]
    fn reversed_items_flip_before_aggregation() {
        // Q3 (NOV) has its positive pole on the low end: 1 normalizes to +3.
        let result = UeqScorer::compute(&[record(&[("Q3", 1.0)])]).unwrap();
        assert_eq!(result.nov.mean, 3.0);
    }

    #[test]
    fn dimensions_average_per_respondent_before_across_respondents() {
        // Respondent A answers two ATT items (mean +3), respondent B one
        // ATT item (mean +1): the dimension sees {3, 1}, not {3, 3, 1}.
        let a = record(&[("Q1", 7.0), ("Q12", 1.0)]);
        let b = record(&[("Q1", 5.0)]);
        let result = UeqScorer::compute(&[a, b]).unwrap();
        assert_eq!(result.n, 2);
        assert_eq!(result.att.mean, 2.0);
        assert_eq!(result.att.sd, 1.41);
    }

    #[test]
    fn global_averages_items_not_dimension_means() {
        // ATT mean +3 and PERSP mean +1 from one ATT item and two PERSP
        // items: GLOBAL is (3 + 1 + 1) / 3, not (3 + 1) / 2.
        let respondent = record(&[("Q1", 7.0), ("Q2", 5.0), ("Q13", 5.0)]);
        let result = UeqScorer::compute(&[respondent]).unwrap();
        assert_eq!(result.att.mean, 3.0);
        assert_eq!(result.persp.mean, 1.0);
        assert_eq!(result.global.mean, 1.67);
    }

    #[test]
    fn out_of_range_values_are_skipped_per_item() {
        let respondent = record(&[("Q1", 7.0), ("Q12", 0.0)]);
        let result = UeqScorer::compute(&[respondent]).unwrap();
        // Q12's invalid 0 is dropped; ATT keeps Q1's +3.
        assert_eq!(result.att.mean, 3.0);
    }

    #[test]
    fn compute_returns_none_without_valid_answers() {
        assert_eq!(UeqScorer::compute(&[]), None);
        assert_eq!(UeqScorer::compute(&[record(&[("Q99", 4.0)])]), None);
        assert_eq!(UeqScorer::compute(&[record(&[("Q1", 9.0)])]), None);
    }

    #[test]
    fn result_serializes_with_uppercase_dimension_keys() {
        let result = UeqScorer::compute(&[record(&[("Q1", 7.0)])]).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["n"], 1);
        assert!(json["ATT"].is_object());
        assert!(json["GLOBAL"].is_object());
        assert!(json.get("att").is_none());
    }
}
