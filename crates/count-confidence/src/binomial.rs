//! Confidence intervals for a Binomial proportion

use crate::{ConfidenceLevel, Error, Estimate, IntervalEstimate, NormalEstimate, Result};
use count_distr::{Beta, ContDistr};
use tracing::{debug, instrument};

/// Exact (Clopper-Pearson) confidence interval for a success probability
///
/// `n` is the number of trials and `k` the number of successes. With
/// `p = 1 − level` the general bounds are
///
/// ```text
/// lower = 1 − Q_Beta(n−k+1, k)(1 − p/2)
/// upper = 1 − Q_Beta(n−k, k+1)(p/2)
/// ```
///
/// which are evaluated through the mirrored distributions `Beta(k, n−k+1)`
/// and `Beta(k+1, n−k)` to avoid the subtraction from one. When `k = 0` the
/// lower bound is 0 and when `k = n` the upper bound is 1; the corresponding
/// Beta law would have a zero shape parameter.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] unless `n > 0` and `0 <= k <= n`.
///
/// # Examples
///
/// ```rust
/// use count_confidence::{binomial_ci, ConfidenceLevel};
///
/// let est = binomial_ci(ConfidenceLevel::CL95, 10, 0).unwrap();
/// assert_eq!(est.interval().0, 0.0);
/// assert!(est.upper_bound() < 0.5);
/// ```
#[instrument(level = "debug")]
pub fn binomial_ci(cl: ConfidenceLevel, n: i64, k: i64) -> Result<IntervalEstimate> {
    Error::check_trials(n, k)?;

    let trials = n as f64;
    let successes = k as f64;
    let tail = cl.tail_probability();

    let lower = if k == 0 {
        0.0
    } else {
        Beta::new(successes, trials - successes + 1.0)?.quantile(tail)?
    };
    let upper = if k == n {
        1.0
    } else {
        Beta::new(successes + 1.0, trials - successes)?.complement_quantile(tail)?
    };

    debug!(lower, upper, "Clopper-Pearson interval");
    Ok(Estimate::from_interval(successes / trials, (lower, upper), cl))
}

/// Normal-approximation (Wald) estimate of a success probability
///
/// Returns the proportion `k/n` with standard error
/// `sqrt(eff · (1 − eff) / n)`. No confidence level is attached; use
/// [`Estimate::to_interval`] to obtain a symmetric interval.
///
/// The approximation is poor when `n·eff < 5` or `n·(1 − eff) < 5`. This is
/// not checked; prefer [`binomial_ci`] for small counts.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] unless `n > 0` and `0 <= k <= n`.
#[instrument(level = "debug")]
pub fn naive_binomial_ci(n: i64, k: i64) -> Result<NormalEstimate> {
    Error::check_trials(n, k)?;

    let trials = n as f64;
    let eff = k as f64 / trials;
    let variance = eff * (1.0 - eff) / trials;

    if trials * eff < 5.0 || trials * (1.0 - eff) < 5.0 {
        debug!(eff, trials, "normal approximation is unreliable for these counts");
    }
    Ok(Estimate::from_std_error(eff, variance.sqrt()))
}
