//! Answer record value object - one respondent's raw submission.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from item identifier (e.g. `"Q1"`, `"QHI3"`) to the raw numeric
/// answer. One record represents one respondent's submission for one
/// questionnaire administration.
///
/// Missing items are simply absent from the map; the scorers treat absence,
/// non-finite values, and out-of-range values identically (the answer is
/// skipped, never an error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord(HashMap<String, f64>);

impl AnswerRecord {
    /// Creates an empty answer record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw answer for an item, if present and finite.
    ///
    /// NaN and infinities count as "not answered" so that a single corrupt
    /// value degrades like a missing one.
    pub fn answer(&self, item_id: &str) -> Option<f64> {
        self.0.get(item_id).copied().filter(|v| v.is_finite())
    }

    /// Records an answer for an item.
    pub fn insert(&mut self, item_id: impl Into<String>, value: f64) {
        self.0.insert(item_id.into(), value);
    }

    /// Returns the number of answered items (including invalid values).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the respondent answered nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, f64>> for AnswerRecord {
    fn from(answers: HashMap<String, f64>) -> Self {
        Self(answers)
    }
}

impl FromIterator<(String, f64)> for AnswerRecord {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_returns_present_values() {
        let mut record = AnswerRecord::new();
        record.insert("Q1", 3.0);
        assert_eq!(record.answer("Q1"), Some(3.0));
    }

    #[test]
    fn answer_returns_none_for_missing_items() {
        let record = AnswerRecord::new();
        assert_eq!(record.answer("Q1"), None);
    }

    #[test]
    fn answer_filters_non_finite_values() {
        let mut record = AnswerRecord::new();
        record.insert("Q1", f64::NAN);
        record.insert("Q2", f64::INFINITY);
        assert_eq!(record.answer("Q1"), None);
        assert_eq!(record.answer("Q2"), None);
    }

    #[test]
    fn record_deserializes_from_plain_json_object() {
        let record: AnswerRecord = serde_json::from_str(r#"{"Q1": 4, "Q2": 0}"#).unwrap();
        assert_eq!(record.answer("Q1"), Some(4.0));
        assert_eq!(record.answer("Q2"), Some(0.0));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn empty_record_is_empty() {
        assert!(AnswerRecord::new().is_empty());
    }
}
