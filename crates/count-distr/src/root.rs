//! Safeguarded Newton root finding
//!
//! Used to invert cumulative distribution functions that have no closed-form
//! inverse. The function must be non-decreasing on the bracket.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Newton-Raphson solver with a bisection fallback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootFinder {
    /// Upper bound on the number of function evaluations
    pub max_iterations: usize,
    /// Relative width at which the bracket is considered collapsed
    pub tolerance: f64,
}

impl Default for RootFinder {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tolerance: 4.0 * f64::EPSILON,
        }
    }
}

impl RootFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Find `x` in `[lo, hi]` with `f(x) = 0`
    ///
    /// `f` must be non-decreasing with `f(lo) <= 0 <= f(hi)` and `df` its
    /// derivative. Newton steps that leave the current bracket are replaced
    /// by bisection. The iterate with the smallest residual is returned.
    ///
    /// # Errors
    /// Returns [`Error::NotBracketed`] if the signs at the endpoints do not
    /// enclose a root.
    pub fn solve<F, D>(&self, f: F, df: D, guess: f64, mut lo: f64, mut hi: f64) -> Result<f64>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        if !(lo <= hi) || f(lo) > 0.0 || f(hi) < 0.0 {
            return Err(Error::NotBracketed { lo, hi });
        }

        let mut x = if guess > lo && guess < hi {
            guess
        } else {
            0.5 * (lo + hi)
        };
        let mut best = (x, f64::INFINITY);

        for iteration in 0..self.max_iterations {
            let fx = f(x);
            if fx.abs() < best.1 {
                best = (x, fx.abs());
            }
            if fx == 0.0 {
                trace!(iteration, x, "exact root");
                return Ok(x);
            }
            if fx < 0.0 {
                lo = x;
            } else {
                hi = x;
            }
            if hi - lo <= self.tolerance * lo.abs().max(hi.abs()) {
                trace!(iteration, x, residual = best.1, "bracket collapsed");
                return Ok(best.0);
            }

            let mid = 0.5 * (lo + hi);
            if mid <= lo || mid >= hi {
                return Ok(best.0);
            }
            let slope = df(x);
            let newton = x - fx / slope;
            let next = if slope.is_finite() && slope > 0.0 && newton > lo && newton < hi {
                newton
            } else {
                mid
            };
            if next == x {
                trace!(iteration, x, residual = best.1, "newton step below resolution");
                return Ok(best.0);
            }
            x = next;
        }

        warn!(
            max_iterations = self.max_iterations,
            x = best.0,
            residual = best.1,
            "root finder exhausted its iteration budget"
        );
        Ok(best.0)
    }
}
