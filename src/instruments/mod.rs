//! Instruments module - One scorer per questionnaire instrument.
//!
//! # Components
//!
//! - `sus` - System Usability Scale (10 items, 0-100 score, letter grade)
//! - `umux` / `umux_lite` - Usability Metric for User Experience
//! - `ueq` / `ueq_s` - User Experience Questionnaire (full and short)
//! - `deep` - Design-oriented Evaluation of Perceived Web Usability
//! - `attrakdiff` - AttrakDiff bipolar word pairs (full and abridged)
//!
//! # Design Philosophy
//!
//! Every scorer is a pure, stateless leaf over the statistics module:
//! validate required items, skip (never fail on) anything invalid,
//! normalize via the instrument's item table, aggregate to per-respondent
//! dimension means, and summarize each dimension with its own effective
//! sample size. `None` is the explicit no-data signal when zero valid
//! respondents remain.

mod attrakdiff;
mod deep;
mod sus;
mod ueq;
mod ueq_s;
mod umux;
mod umux_lite;

pub use attrakdiff::{AttrakDiffForm, AttrakDiffResult, AttrakDiffScorer, WordPairAverages};
pub use deep::{DeepResult, DeepScorer};
pub use sus::{Grade, SusResult, SusScorer};
pub use ueq::{UeqResult, UeqScorer};
pub use ueq_s::{UeqSResult, UeqSScorer};
pub use umux::{UmuxResult, UmuxScorer};
pub use umux_lite::{UmuxLiteResult, UmuxLiteScorer};

use serde::{Deserialize, Serialize};

use crate::foundation::{AnswerRecord, Instrument, Item, ScaleRange};

/// The result of scoring one instrument, tagged with the instrument id so
/// the UI layer can store and re-read results generically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrument")]
pub enum InstrumentResult {
    #[serde(rename = "sus")]
    Sus(SusResult),
    #[serde(rename = "deep")]
    Deep(DeepResult),
    #[serde(rename = "umux")]
    Umux(UmuxResult),
    #[serde(rename = "umux_lite")]
    UmuxLite(UmuxLiteResult),
    #[serde(rename = "ueq")]
    Ueq(UeqResult),
    #[serde(rename = "ueq_s")]
    UeqS(UeqSResult),
    #[serde(rename = "attrakdiff")]
    AttrakDiff(AttrakDiffResult),
    #[serde(rename = "attrakdiff_abridged")]
    AttrakDiffAbridged(AttrakDiffResult),
}

/// Computes the statistics for any instrument from its raw answer records.
///
/// The single entry point the UI layer dispatches through from a persisted
/// questionnaire id. Returns `None` when zero valid respondents remain.
pub fn compute_instrument_stats(
    instrument: Instrument,
    responses: &[AnswerRecord],
) -> Option<InstrumentResult> {
    match instrument {
        Instrument::Sus => SusScorer::compute(responses).map(InstrumentResult::Sus),
        Instrument::Deep => DeepScorer::compute(responses).map(InstrumentResult::Deep),
        Instrument::Umux => UmuxScorer::compute(responses).map(InstrumentResult::Umux),
        Instrument::UmuxLite => {
            UmuxLiteScorer::compute(responses).map(InstrumentResult::UmuxLite)
        }
        Instrument::Ueq => UeqScorer::compute(responses).map(InstrumentResult::Ueq),
        Instrument::UeqS => UeqSScorer::compute(responses).map(InstrumentResult::UeqS),
        Instrument::AttrakDiff => AttrakDiffScorer::compute(responses, AttrakDiffForm::Full)
            .map(InstrumentResult::AttrakDiff),
        Instrument::AttrakDiffAbridged => {
            AttrakDiffScorer::compute(responses, AttrakDiffForm::Abridged)
                .map(InstrumentResult::AttrakDiffAbridged)
        }
    }
}

/// Per-respondent mean of the normalized values of `items`.
///
/// Returns `None` if the respondent answered none of them validly, so that
/// partial answers contribute to exactly the dimensions they touch.
fn respondent_mean(record: &AnswerRecord, items: &[Item], scale: ScaleRange) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for item in items {
        if let Some(raw) = record.answer(item.id) {
            if let Some(value) = scale.normalize(item.polarity, raw) {
                sum += value;
                count += 1;
            }
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Polarity;

    fn record(pairs: &[(&str, f64)]) -> AnswerRecord {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    const ITEMS: &[Item] = &[Item::positive("Q1"), Item::reversed("Q2")];
    const SCALE: ScaleRange = ScaleRange::new(0.0, 4.0);

    #[test]
    fn respondent_mean_averages_normalized_items() {
        // Q2 reversed: 4 - 1 = 3, mean of {2, 3} = 2.5
        let mean = respondent_mean(&record(&[("Q1", 2.0), ("Q2", 1.0)]), ITEMS, SCALE);
        assert_eq!(mean, Some(2.5));
    }

    #[test]
    fn respondent_mean_skips_invalid_items() {
        let mean = respondent_mean(&record(&[("Q1", 2.0), ("Q2", 9.0)]), ITEMS, SCALE);
        assert_eq!(mean, Some(2.0));
    }

    #[test]
    fn respondent_mean_is_none_without_valid_answers() {
        assert_eq!(respondent_mean(&record(&[]), ITEMS, SCALE), None);
        assert_eq!(respondent_mean(&record(&[("Q9", 2.0)]), ITEMS, SCALE), None);
    }

    #[test]
    fn item_tables_expose_polarity() {
        assert_eq!(ITEMS[1].polarity, Polarity::Reversed);
    }

    #[test]
    fn dispatch_routes_to_the_right_scorer() {
        let responses = vec![record(&[
            ("Q1", 2.0),
            ("Q2", 2.0),
            ("Q3", 2.0),
            ("Q4", 2.0),
            ("Q5", 2.0),
            ("Q6", 2.0),
            ("Q7", 2.0),
            ("Q8", 2.0),
            ("Q9", 2.0),
            ("Q10", 2.0),
        ])];
        match compute_instrument_stats(Instrument::Sus, &responses) {
            Some(InstrumentResult::Sus(result)) => assert_eq!(result.n, 1),
            other => panic!("expected a SUS result, got {:?}", other),
        }
    }

    #[test]
    fn dispatch_propagates_the_no_data_signal() {
        for instrument in Instrument::ALL {
            assert_eq!(compute_instrument_stats(*instrument, &[]), None);
        }
    }

    #[test]
    fn abridged_attrakdiff_keeps_its_own_tag() {
        let responses = vec![record(&[("QP2", 1.0)])];
        let result = compute_instrument_stats(Instrument::AttrakDiffAbridged, &responses);
        assert!(matches!(
            result,
            Some(InstrumentResult::AttrakDiffAbridged(_))
        ));
    }
}
