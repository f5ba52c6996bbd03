//! Statistical primitives.

use std::f64::consts::PI;

/// Abramowitz & Stegun 26.2.23 rational approximation coefficients.
const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.189269;
const D3: f64 = 0.001308;

/// Degrees of freedom above which the t correction is skipped entirely.
const NORMAL_DF_CUTOFF: f64 = 1000.0;

/// Arithmetic mean.
///
/// Returns 0.0 for an empty slice. This is a sentinel, not an error;
/// callers must guard against empty input before treating it as meaningful.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction (n - 1 denominator).
///
/// Returns 0.0 when fewer than two observations are available.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Standard normal quantile via the Abramowitz & Stegun 26.2.23 rational
/// approximation. `p` must lie strictly between 0 and 1.
fn normal_quantile_approx(p: f64) -> f64 {
    let (a, sign) = if p < 0.5 { (p, -1.0) } else { (1.0 - p, 1.0) };
    let t2 = (1.0 / (a * a)).ln();
    let t = t2.sqrt();
    sign * (t - (C0 + C1 * t + C2 * t2) / (1.0 + D1 * t + D2 * t2 + D3 * t * t2))
}

/// Student-t quantile at cumulative probability `p` for `df` degrees of
/// freedom, such that the confidence-interval half-width equals
/// `quantile * standard_error`.
///
/// Uses the normal quantile approximation followed by the
/// Cornish-Fisher/Hill correction toward the heavier-tailed t distribution.
/// One and two degrees of freedom use their exact closed forms, as in
/// Hill's Algorithm 396: the series correction alone misses published
/// t-table values there. For `df >= 1000` the correction vanishes and the
/// normal quantile is returned directly.
pub fn student_t_quantile(p: f64, df: f64) -> f64 {
    if df >= NORMAL_DF_CUTOFF {
        return normal_quantile_approx(p);
    }
    if df <= 1.0 {
        // Cauchy distribution
        return (PI * (p - 0.5)).tan();
    }
    if df <= 2.0 {
        let u = 2.0 * p - 1.0;
        return u * (2.0 / (1.0 - u * u)).sqrt();
    }

    let z = normal_quantile_approx(p);
    let z3 = z * z * z;
    let z5 = z3 * z * z;
    let z7 = z5 * z * z;
    let z9 = z7 * z * z;

    let g1 = (z3 + z) / (4.0 * df);
    let g2 = (5.0 * z5 + 16.0 * z3 + 3.0 * z) / (96.0 * df * df);
    let g3 = (3.0 * z7 + 19.0 * z5 + 17.0 * z3 - 15.0 * z) / (384.0 * df * df * df);
    let g4 = (79.0 * z9 + 776.0 * z7 + 1482.0 * z5 - 1920.0 * z3 - 945.0 * z)
        / (92160.0 * df * df * df * df);

    z + g1 + g2 + g3 + g4
}

/// Standard normal quantile, reusing the t approximation with degrees of
/// freedom large enough that the correction term vanishes.
pub fn normal_quantile(p: f64) -> f64 {
    student_t_quantile(p, 10_000.0)
}

/// Standard-error-based confidence interval
/// `[mean - quantile * se, mean + quantile * se]` with `se = sd / sqrt(n)`.
///
/// The sampled population is treated as infinite, so no finite-population
/// correction is applied. Callers guard `n >= 1`.
pub fn confidence_interval(mean: f64, sd: f64, n: usize, quantile: f64) -> (f64, f64) {
    let se = sd / (n as f64).sqrt();
    let range = quantile * se;
    (mean - range, mean + range)
}

/// Rounds half away from zero at two decimal places.
///
/// Display-precision contract; applied only at the output boundary.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
