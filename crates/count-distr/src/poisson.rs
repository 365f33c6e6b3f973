//! Poisson distribution

use crate::{DiscreteDistr, Distribution, Error, Mean, Result, Variance};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::{gamma_lr, gamma_ur, ln_gamma};

/// Poisson distribution with rate `lambda > 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoisson")]
pub struct Poisson {
    lambda: f64,
}

#[derive(Deserialize)]
struct RawPoisson {
    lambda: f64,
}

impl TryFrom<RawPoisson> for Poisson {
    type Error = Error;

    fn try_from(raw: RawPoisson) -> Result<Self> {
        Self::new(raw.lambda)
    }
}

impl Poisson {
    /// Create a Poisson distribution
    ///
    /// # Errors
    /// `lambda` must be finite and positive.
    pub fn new(lambda: f64) -> Result<Self> {
        if !(lambda > 0.0 && lambda.is_finite()) {
            return Err(Error::invalid_parameter("lambda", lambda, "finite and positive"));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// `(P(X <= k), P(X > k))` for `k = floor(x) >= 0`
    ///
    /// `P(X <= k) = Q(k + 1, lambda)`, the regularized upper incomplete gamma
    /// function.
    fn tails(&self, x: f64) -> (f64, f64) {
        let s = x.floor() + 1.0;
        if s <= self.lambda {
            let lower = gamma_ur(s, self.lambda);
            (lower, 1.0 - lower)
        } else {
            let upper = gamma_lr(s, self.lambda);
            (1.0 - upper, upper)
        }
    }
}

impl Distribution for Poisson {
    fn cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
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
        if x < 0.0 {
            1.0
        } else if x == f64::INFINITY {
            0.0
        } else {
            self.tails(x).1
        }
    }
}

impl DiscreteDistr for Poisson {
    fn probability(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        self.log_probability(k).exp()
    }

    fn log_probability(&self, k: i64) -> f64 {
        if k < 0 {
            return f64::NEG_INFINITY;
        }
        let k = k as f64;
        k * self.lambda.ln() - self.lambda - ln_gamma(k + 1.0)
    }
}

impl Mean for Poisson {
    fn mean(&self) -> f64 {
        self.lambda
    }
}

impl Variance for Poisson {
    fn variance(&self) -> f64 {
        self.lambda
    }
}
