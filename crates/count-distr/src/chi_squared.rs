//! Chi-squared distribution
//!
//! Backed by the regularized incomplete gamma function. Zero degrees of
//! freedom is accepted and yields the point mass at zero, which is what the
//! exact Poisson interval needs for a lower bound when no events were seen.

use crate::{ContDistr, Distribution, Error, Mean, Normal, Result, RootFinder, Variance};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::{gamma_lr, gamma_ur, ln_gamma};
use std::f64::consts::LN_2;

/// Chi-squared distribution with `k >= 0` degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChiSquared")]
pub struct ChiSquared {
    degrees_of_freedom: f64,
}

#[derive(Deserialize)]
struct RawChiSquared {
    degrees_of_freedom: f64,
}

impl TryFrom<RawChiSquared> for ChiSquared {
    type Error = Error;

    fn try_from(raw: RawChiSquared) -> Result<Self> {
        Self::new(raw.degrees_of_freedom)
    }
}

impl ChiSquared {
    /// Create a chi-squared distribution
    ///
    /// # Errors
    /// `degrees_of_freedom` must be finite and non-negative.
    pub fn new(degrees_of_freedom: f64) -> Result<Self> {
        if !(degrees_of_freedom >= 0.0 && degrees_of_freedom.is_finite()) {
            return Err(Error::invalid_parameter(
                "degrees_of_freedom",
                degrees_of_freedom,
                "finite and non-negative",
            ));
        }
        Ok(Self { degrees_of_freedom })
    }

    pub fn degrees_of_freedom(&self) -> f64 {
        self.degrees_of_freedom
    }

    fn is_degenerate(&self) -> bool {
        self.degrees_of_freedom == 0.0
    }

    fn shape(&self) -> f64 {
        0.5 * self.degrees_of_freedom
    }

    /// Both tails at `x > 0`, the smaller one computed directly
    fn tails(&self, x: f64) -> (f64, f64) {
        let a = self.shape();
        let y = 0.5 * x;
        if y < a {
            let lower = gamma_lr(a, y);
            (lower, 1.0 - lower)
        } else {
            let upper = gamma_ur(a, y);
            (1.0 - upper, upper)
        }
    }

    /// Wilson-Hilferty starting point for the quantile at lower tail mass `p`
    fn initial_guess(&self, p: f64) -> f64 {
        let k = self.degrees_of_freedom;
        let z = Normal::standard().quantile(p).unwrap_or(0.0);
        let c = 2.0 / (9.0 * k);
        let guess = k * (1.0 - c + z * c.sqrt()).powi(3);
        if guess.is_finite() && guess > 0.0 {
            guess
        } else {
            k
        }
    }

    /// Solve `f(x) = 0` for an increasing tail residual on `[0, hi]`
    fn invert<F>(&self, f: F, guess: f64) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        let mut hi = 2.0 * guess.max(1.0);
        while f(hi) < 0.0 {
            hi *= 2.0;
            if !hi.is_finite() {
                return Err(Error::Computation(format!(
                    "chi-squared quantile with {} degrees of freedom has no finite bracket",
                    self.degrees_of_freedom
                )));
            }
        }
        RootFinder::default().solve(f, |x| self.density(x), guess, 0.0, hi)
    }
}

impl Distribution for ChiSquared {
    fn cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if self.is_degenerate() {
            return if x >= 0.0 { 1.0 } else { 0.0 };
        }
        if x <= 0.0 {
            0.0
        } else if x == f64::INFINITY {
            1.0
        } else {
            self.tails(x).0
        }
    }

    fn complement_cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if self.is_degenerate() {
            return if x >= 0.0 { 0.0 } else { 1.0 };
        }
        if x <= 0.0 {
            1.0
        } else if x == f64::INFINITY {
            0.0
        } else {
            self.tails(x).1
        }
    }
}

impl ContDistr for ChiSquared {
    fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let a = self.shape();
        if x == 0.0 {
            return if a < 1.0 {
                f64::INFINITY
            } else if a == 1.0 {
                0.5
            } else {
                0.0
            };
        }
        if self.is_degenerate() {
            return 0.0;
        }
        self.log_density(x).exp()
    }

    fn log_density(&self, x: f64) -> f64 {
        if x <= 0.0 || self.is_degenerate() {
            return self.density(x).ln();
        }
        let a = self.shape();
        (a - 1.0) * x.ln() - 0.5 * x - a * LN_2 - ln_gamma(a)
    }

    /// Quantile by Newton iteration on the cumulative function
    ///
    /// The result is as accurate as `cumulative` itself: to about `1e-14`
    /// for moderate degrees of freedom, degrading to about `1e-13` near
    /// `10_000` degrees of freedom.
    fn quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if self.is_degenerate() || p == 0.0 {
            return Ok(0.0);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        self.invert(|x| self.cumulative(x) - p, self.initial_guess(p))
    }

    fn complement_quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if self.is_degenerate() || p == 1.0 {
            return Ok(0.0);
        }
        if p == 0.0 {
            return Ok(f64::INFINITY);
        }
        self.invert(|x| p - self.complement_cumulative(x), self.initial_guess(1.0 - p))
    }
}

impl Mean for ChiSquared {
    fn mean(&self) -> f64 {
        self.degrees_of_freedom
    }
}

impl Variance for ChiSquared {
    fn variance(&self) -> f64 {
        2.0 * self.degrees_of_freedom
    }
}
