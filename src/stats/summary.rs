//! Statistics summary - the aggregate every dimension reports.

use serde::{Deserialize, Serialize};

use super::primitives::{
    confidence_interval, mean, normal_quantile, round2, sample_std_dev, student_t_quantile,
};

/// Confidence levels expressed as one-sided cumulative probabilities.
const P90: f64 = 1.0 - (1.0 - 0.90) / 2.0;
const P95: f64 = 1.0 - (1.0 - 0.95) / 2.0;
const P99: f64 = 1.0 - (1.0 - 0.99) / 2.0;

/// Above this effective sample size the normal approximation is adequate;
/// below it the heavier-tailed Student-t correction matters.
const LARGE_SAMPLE_THRESHOLD: usize = 60;

/// Mean, sample standard deviation, and 90/95/99% confidence intervals for
/// one dimension's already-normalized observations.
///
/// All fields are rounded to two decimals. For an effective sample size of
/// one, `sd` is 0 and every interval collapses to the mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub mean: f64,
    pub sd: f64,
    pub ci90: (f64, f64),
    pub ci95: (f64, f64),
    pub ci99: (f64, f64),
}

impl StatsSummary {
    /// The no-data summary.
    pub const ZERO: Self = Self {
        mean: 0.0,
        sd: 0.0,
        ci90: (0.0, 0.0),
        ci95: (0.0, 0.0),
        ci99: (0.0, 0.0),
    };

    /// A degenerate summary around a single observation: no interval can be
    /// constructed, so all three collapse to the mean.
    fn point(m: f64) -> Self {
        let m = round2(m);
        Self {
            mean: m,
            sd: 0.0,
            ci90: (m, m),
            ci95: (m, m),
            ci99: (m, m),
        }
    }
}

/// Builds a [`StatsSummary`] from a list of observations and the effective
/// sample size `n` (the number of respondents the observations came from).
///
/// `n` drives the interval construction: `n > 60` uses normal quantiles,
/// smaller samples use Student-t with `n - 1` degrees of freedom.
pub fn compute_stats_summary(values: &[f64], n: usize) -> StatsSummary {
    if values.is_empty() || n == 0 {
        return StatsSummary::ZERO;
    }

    let m = mean(values);
    if n <= 1 || values.len() <= 1 {
        return StatsSummary::point(m);
    }

    let s = sample_std_dev(values);
    let quantile = |p: f64| {
        if n > LARGE_SAMPLE_THRESHOLD {
            normal_quantile(p)
        } else {
            student_t_quantile(p, (n - 1) as f64)
        }
    };
    let rounded = |(low, high): (f64, f64)| (round2(low), round2(high));

    StatsSummary {
        mean: round2(m),
        sd: round2(s),
        ci90: rounded(confidence_interval(m, s, n, quantile(P90))),
        ci95: rounded(confidence_interval(m, s, n, quantile(P95))),
        ci99: rounded(confidence_interval(m, s, n, quantile(P99))),
    }
}
