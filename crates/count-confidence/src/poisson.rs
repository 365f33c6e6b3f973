//! Confidence intervals for a Poisson rate

use crate::{ConfidenceLevel, Error, Estimate, IntervalEstimate, NormalEstimate, Result};
use count_distr::{ChiSquared, ContDistr};
use tracing::{debug, instrument};

/// Exact confidence interval for the rate of a Poisson process
///
/// `n` is the number of events observed in one measurement period. The
/// bounds come from the duality between Poisson tail sums and chi-squared
/// quantiles:
///
/// ```text
/// lower = ½ · Q_χ²(2n)(p/2)
/// upper = ½ · Q_χ²(2n+2)(1 − p/2)
/// ```
///
/// where `p = 1 − level`. For `n = 0` the lower distribution has zero
/// degrees of freedom and the lower bound is exactly 0.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `n < 0`.
///
/// # Examples
///
/// ```rust
/// use count_confidence::{poisson_ci, ConfidenceLevel};
///
/// let est = poisson_ci(ConfidenceLevel::CL95, 0).unwrap();
/// assert_eq!(est.lower_bound(), 0.0);
/// assert!((est.upper_bound() - 3.6889).abs() < 1e-4);
/// ```
#[instrument(level = "debug")]
pub fn poisson_ci(cl: ConfidenceLevel, n: i64) -> Result<IntervalEstimate> {
    Error::check_events(n)?;

    let events = n as f64;
    let tail = cl.tail_probability();
    let lower = 0.5 * ChiSquared::new(2.0 * events)?.quantile(tail)?;
    let upper = 0.5 * ChiSquared::new(2.0 * events + 2.0)?.complement_quantile(tail)?;

    debug!(lower, upper, "exact Poisson interval");
    Ok(Estimate::from_interval(events, (lower, upper), cl))
}

/// Normal approximation to the Poisson rate: `n ± sqrt(n)`
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `n < 0`.
#[instrument(level = "debug")]
pub fn poisson_normal_ci(n: i64) -> Result<NormalEstimate> {
    Error::check_events(n)?;
    let events = n as f64;
    Ok(Estimate::from_std_error(events, events.sqrt()))
}
