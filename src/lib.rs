//! UXMetrics - Questionnaire Scoring and Statistics Engine
//!
//! Turns raw per-respondent answer sets into standardized scores,
//! per-dimension aggregates, and confidence intervals for the standardized
//! UX questionnaire instruments (SUS, UMUX, UMUX-Lite, UEQ, UEQ-S,
//! AttrakDiff, DEEP). Pure computation: no I/O, no shared state, and
//! deterministic output for identical input.

pub mod foundation;
pub mod instruments;
pub mod stats;
