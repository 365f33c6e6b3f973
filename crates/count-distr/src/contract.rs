//! Conformance checks for distribution implementations
//!
//! Each function verifies one law of the [`Distribution`], [`ContDistr`] or
//! [`DiscreteDistr`] contract at the given argument and reports the first
//! violation. They are meant to be driven from property tests over any
//! implementation, including ones defined outside this crate.

use crate::{ContDistr, DiscreteDistr, Distribution, Error};
use thiserror::Error;

/// Maximum `|cumulative(x) + complement_cumulative(x) - 1|`
pub const COMPLEMENT_TOLERANCE: f64 = 1e-14;

/// Maximum `|cumulative(quantile(p)) - p|`
///
/// Achievable while the cumulative function itself is accurate to this
/// level. Chi-squared laws with thousands of degrees of freedom only reach
/// about `1e-13`.
pub const QUANTILE_TOLERANCE: f64 = 1e-14;

/// Maximum difference between summed point masses and the cumulative increment
pub const PROBABILITY_SUM_TOLERANCE: f64 = 3e-10;

/// Distance from 0 or 1 at which a tail limit counts as reached
pub const LIMIT_TOLERANCE: f64 = 1e-14;

/// Number of points in the geometric sequence probed by [`check_limits`]
pub const LIMIT_STEPS: usize = 1000;

/// Growth factor of the geometric sequence probed by [`check_limits`]
pub const LIMIT_GROWTH: f64 = 1.4;

/// A broken distribution law
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractViolation {
    #[error("cumulative({x}) = {value} is outside [0, 1]")]
    CumulativeRange { x: f64, value: f64 },

    #[error("cumulative decreases: F({x1}) = {f1} > F({x2}) = {f2}")]
    NotMonotone { x1: f64, f1: f64, x2: f64, f2: f64 },

    #[error("cumulative does not reach {limit} within {steps} steps, last value {last}")]
    Limit { limit: f64, steps: usize, last: f64 },

    #[error("cumulative({x}) + complement_cumulative({x}) deviates from 1 by {error:e}")]
    Complement { x: f64, error: f64 },

    #[error("cumulative(quantile({p})) = cumulative({x}) deviates from {p} by {error:e}")]
    QuantileInverse { p: f64, x: f64, error: f64 },

    #[error("quantile({p}) failed inside [0, 1]: {source}")]
    QuantileFailed {
        p: f64,
        #[source]
        source: Error,
    },

    #[error("quantile({p}) returned {x} for a probability outside [0, 1]")]
    QuantileDomain { p: f64, x: f64 },

    #[error("density({x}) = {value} is negative")]
    NegativeDensity { x: f64, value: f64 },

    #[error("probability({k}) = {value} is outside [0, 1]")]
    ProbabilityRange { k: i64, value: f64 },

    #[error("point masses over [{a}, {b}] sum to {sum}, cumulative increment is {increment}")]
    ProbabilitySum { a: i64, b: i64, sum: f64, increment: f64 },
}

pub type ContractResult = std::result::Result<(), ContractViolation>;

/// `cumulative(x)` lies in `[0, 1]`
pub fn check_cumulative_range<D: Distribution + ?Sized>(d: &D, x: f64) -> ContractResult {
    let value = d.cumulative(x);
    if !(0.0..=1.0).contains(&value) {
        return Err(ContractViolation::CumulativeRange { x, value });
    }
    Ok(())
}

/// `cumulative` is non-decreasing between the two points
pub fn check_monotone<D: Distribution + ?Sized>(d: &D, x1: f64, x2: f64) -> ContractResult {
    let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    let f1 = d.cumulative(x1);
    let f2 = d.cumulative(x2);
    if f1 > f2 {
        return Err(ContractViolation::NotMonotone { x1, f1, x2, f2 });
    }
    Ok(())
}

/// `cumulative` tends to 1 at `+inf` and to 0 at `-inf`
///
/// Probes `x_i = ±1.4^i` for `i < 1000`; each limit must be reached to
/// within [`LIMIT_TOLERANCE`] somewhere along the sequence.
pub fn check_limits<D: Distribution + ?Sized>(d: &D) -> ContractResult {
    let points = || std::iter::successors(Some(1.0f64), |x| Some(x * LIMIT_GROWTH)).take(LIMIT_STEPS);

    let mut last = f64::NAN;
    let reached_one = points().any(|x| {
        last = d.cumulative(x);
        last >= 1.0 - LIMIT_TOLERANCE
    });
    if !reached_one {
        return Err(ContractViolation::Limit {
            limit: 1.0,
            steps: LIMIT_STEPS,
            last,
        });
    }

    let reached_zero = points().any(|x| {
        last = d.cumulative(-x);
        last <= LIMIT_TOLERANCE
    });
    if !reached_zero {
        return Err(ContractViolation::Limit {
            limit: 0.0,
            steps: LIMIT_STEPS,
            last,
        });
    }
    Ok(())
}

/// `cumulative(x) + complement_cumulative(x) = 1`
pub fn check_complement<D: Distribution + ?Sized>(d: &D, x: f64) -> ContractResult {
    let error = d.cumulative(x) + d.complement_cumulative(x) - 1.0;
    if !(error.abs() < COMPLEMENT_TOLERANCE) {
        return Err(ContractViolation::Complement { x, error });
    }
    Ok(())
}

/// `cumulative(quantile(p)) = p` for `p` strictly inside `(0, 1)`
///
/// Probabilities outside the open interval are accepted without checking.
pub fn check_quantile_inverse<D: ContDistr + ?Sized>(d: &D, p: f64) -> ContractResult {
    if !(p > 0.0 && p < 1.0) {
        return Ok(());
    }
    let x = d
        .quantile(p)
        .map_err(|source| ContractViolation::QuantileFailed { p, source })?;
    let error = d.cumulative(x) - p;
    if !(error.abs() < QUANTILE_TOLERANCE) {
        return Err(ContractViolation::QuantileInverse { p, x, error });
    }
    Ok(())
}

/// `quantile(p)` fails for `p` outside `[0, 1]`
///
/// Probabilities inside the closed interval are accepted without checking.
pub fn check_quantile_domain<D: ContDistr + ?Sized>(d: &D, p: f64) -> ContractResult {
    if (0.0..=1.0).contains(&p) {
        return Ok(());
    }
    match d.quantile(p) {
        Ok(x) => Err(ContractViolation::QuantileDomain { p, x }),
        Err(_) => Ok(()),
    }
}

/// `density(x) >= 0`
pub fn check_density<D: ContDistr + ?Sized>(d: &D, x: f64) -> ContractResult {
    let value = d.density(x);
    if !(value >= 0.0) {
        return Err(ContractViolation::NegativeDensity { x, value });
    }
    Ok(())
}

/// `probability(k)` lies in `[0, 1]`
pub fn check_probability_range<D: DiscreteDistr + ?Sized>(d: &D, k: i64) -> ContractResult {
    let value = d.probability(k);
    if !(0.0..=1.0).contains(&value) {
        return Err(ContractViolation::ProbabilityRange { k, value });
    }
    Ok(())
}

/// Point masses over `[a, b]` add up to the cumulative increment
///
/// Compares `Σ probability(k)` with `cumulative(b + 0.5) - cumulative(a - 0.5)`.
/// The cost is linear in `|b - a|`.
pub fn check_probability_sum<D: DiscreteDistr + ?Sized>(d: &D, a: i64, b: i64) -> ContractResult {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let sum: f64 = (a..=b).map(|k| d.probability(k)).sum();
    let increment = d.cumulative(b as f64 + 0.5) - d.cumulative(a as f64 - 0.5);
    if !((sum - increment).abs() < PROBABILITY_SUM_TOLERANCE) {
        return Err(ContractViolation::ProbabilitySum { a, b, sum, increment });
    }
    Ok(())
}
