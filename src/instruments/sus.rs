//! System Usability Scale (SUS) scorer.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::foundation::{AnswerRecord, Item, ScaleRange};
use crate::stats::{compute_stats_summary, StatsSummary};

/// The ten SUS statements; even-numbered items are negatively phrased.
const SUS_ITEMS: [Item; 10] = [
    Item::positive("Q1"),
    Item::reversed("Q2"),
    Item::positive("Q3"),
    Item::reversed("Q4"),
    Item::positive("Q5"),
    Item::reversed("Q6"),
    Item::positive("Q7"),
    Item::reversed("Q8"),
    Item::positive("Q9"),
    Item::reversed("Q10"),
];

/// Raw SUS answers use the 0-4 agreement scale.
const SUS_SCALE: ScaleRange = ScaleRange::new(0.0, 4.0);

/// Multiplier taking the 0-40 item-contribution sum to the 0-100 scale.
const SUS_SCORE_FACTOR: f64 = 2.5;

/// SUS letter grade on the curved grading scale, derived from the mean
/// score across respondents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    D,
    F,
}

impl Grade {
    /// Looks up the grade for a mean SUS score (fixed thresholds).
    pub fn from_score(score: f64) -> Self {
        if score >= 84.1 {
            Grade::APlus
        } else if score >= 80.8 {
            Grade::A
        } else if score >= 78.9 {
            Grade::AMinus
        } else if score >= 77.2 {
            Grade::BPlus
        } else if score >= 74.1 {
            Grade::B
        } else if score >= 72.6 {
            Grade::BMinus
        } else if score >= 71.1 {
            Grade::CPlus
        } else if score >= 65.0 {
            Grade::C
        } else if score >= 62.7 {
            Grade::CMinus
        } else if score >= 51.7 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// SUS statistics across respondents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SusResult {
    pub n: usize,
    #[serde(flatten)]
    pub score: StatsSummary,
    pub grade: Grade,
}

/// Pure scoring functions for SUS responses.
pub struct SusScorer;

impl SusScorer {
    /// Scores one respondent on the 0-100 SUS scale.
    ///
    /// SUS is an all-items-required instrument: returns `None` unless all
    /// ten items are present and within the 0-4 scale.
    pub fn respondent_score(record: &AnswerRecord) -> Option<f64> {
        let mut sum = 0.0;
        for item in &SUS_ITEMS {
            sum += SUS_SCALE.normalize(item.polarity, record.answer(item.id)?)?;
        }
        Some(SUS_SCORE_FACTOR * sum)
    }

    /// Computes SUS statistics; `None` if no respondent answered all ten
    /// items validly.
    pub fn compute(responses: &[AnswerRecord]) -> Option<SusResult> {
        let scores: Vec<f64> = responses.iter().filter_map(Self::respondent_score).collect();
        debug!(total = responses.len(), valid = scores.len(), "scored SUS responses");
        if scores.is_empty() {
            return None;
        }

        let summary = compute_stats_summary(&scores, scores.len());
        Some(SusResult {
            n: scores.len(),
            score: summary,
            grade: Grade::from_score(summary.mean),
        })
    }
}
