use statrs::distribution::{ContinuousCDF, Normal};

use crate::aggregate::Aggregate;

/// Two-sided normal-approximation interval around the expected winning score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceInterval {
    pub mean: f64,
    pub standard_error: f64,
    pub level: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Sample variance of winning scores over clear-winner trials.
pub fn sample_variance(agg: &Aggregate) -> Option<f64> {
    let n = agg.clear_winner_trials;
    if n < 2 {
        return None;
    }
    let n = n as f64;
    let mean = agg.total_winning_score as f64 / n;
    let sum_sq = agg.total_squared_score as f64;
    Some(((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0))
}

/// Standard error of the mean winning score.
pub fn standard_error(agg: &Aggregate) -> Option<f64> {
    sample_variance(agg).map(|var| (var / agg.clear_winner_trials as f64).sqrt())
}

/// Confidence interval at `level` (e.g. 0.95). Needs at least two clear-winner trials.
pub fn confidence_interval(agg: &Aggregate, level: f64) -> Option<ConfidenceInterval> {
    if !(level > 0.0 && level < 1.0) {
        return None;
    }
    let mean = agg.expected_winning_score()?;
    let se = standard_error(agg)?;

    let normal = Normal::new(0.0, 1.0).ok()?;
    let z = normal.inverse_cdf(0.5 + level / 2.0);

    Some(ConfidenceInterval {
        mean,
        standard_error: se,
        level,
        lower: mean - z * se,
        upper: mean + z * se,
    })
}
