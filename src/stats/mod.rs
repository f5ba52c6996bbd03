//! Statistics module - Pure statistical primitives and the generic
//! summary builder.
//!
//! # Components
//!
//! - `primitives` - mean, sample standard deviation, Student-t / normal
//!   quantile approximation, confidence-interval construction
//! - `summary` - `StatsSummary` and `compute_stats_summary`, the one
//!   aggregation every scorer funnels through
//!
//! All functions are pure and stateless; identical input produces
//! bit-identical output after the documented 2-decimal rounding.

mod primitives;
mod summary;

pub use primitives::{
    confidence_interval, mean, normal_quantile, round2, sample_std_dev, student_t_quantile,
};
pub use summary::{compute_stats_summary, StatsSummary};
