//! Beta distribution on `[0, 1]`

use crate::{ContDistr, Distribution, Error, Mean, Result, RootFinder, Variance};
use serde::{Deserialize, Serialize};
use statrs::function::beta::{beta_reg, ln_beta};

/// Beta distribution with shape parameters `alpha > 0` and `beta > 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBeta")]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

#[derive(Deserialize)]
struct RawBeta {
    alpha: f64,
    beta: f64,
}

impl TryFrom<RawBeta> for Beta {
    type Error = Error;

    fn try_from(raw: RawBeta) -> Result<Self> {
        Self::new(raw.alpha, raw.beta)
    }
}

impl Beta {
    /// Create a beta distribution
    ///
    /// # Errors
    /// Both shape parameters must be finite and positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(Error::invalid_parameter("alpha", alpha, "finite and positive"));
        }
        if !(beta > 0.0 && beta.is_finite()) {
            return Err(Error::invalid_parameter("beta", beta, "finite and positive"));
        }
        Ok(Self { alpha, beta })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Both tails at `x` in `(0, 1)`
    ///
    /// Only the tail whose incomplete beta argument is exact is evaluated;
    /// `1 - x` is exact for `x >= 0.5`.
    fn tails(&self, x: f64) -> (f64, f64) {
        if x < 0.5 {
            let lower = beta_reg(self.alpha, self.beta, x);
            (lower, 1.0 - lower)
        } else {
            let upper = beta_reg(self.beta, self.alpha, 1.0 - x);
            (1.0 - upper, upper)
        }
    }

    fn invert<F>(&self, f: F) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        RootFinder::default().solve(f, |x| self.density(x), self.mean(), 0.0, 1.0)
    }
}

impl Distribution for Beta {
    fn cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            self.tails(x).0
        }
    }

    fn complement_cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            1.0
        } else if x >= 1.0 {
            0.0
        } else {
            self.tails(x).1
        }
    }
}

impl ContDistr for Beta {
    fn density(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        // Endpoints: the density diverges, is finite or vanishes depending
        // on whether the adjacent shape parameter is below, at or above one.
        let edge = |shape: f64, other: f64| {
            if shape < 1.0 {
                f64::INFINITY
            } else if shape == 1.0 {
                (-ln_beta(1.0, other)).exp()
            } else {
                0.0
            }
        };
        if x == 0.0 {
            return edge(self.alpha, self.beta);
        }
        if x == 1.0 {
            return edge(self.beta, self.alpha);
        }
        self.log_density(x).exp()
    }

    fn log_density(&self, x: f64) -> f64 {
        if x <= 0.0 || x >= 1.0 {
            return self.density(x).ln();
        }
        (self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (-x).ln_1p()
            - ln_beta(self.alpha, self.beta)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if p == 0.0 {
            return Ok(0.0);
        }
        if p == 1.0 {
            return Ok(1.0);
        }
        self.invert(|x| self.cumulative(x) - p)
    }

    fn complement_quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if p == 0.0 {
            return Ok(1.0);
        }
        if p == 1.0 {
            return Ok(0.0);
        }
        self.invert(|x| p - self.complement_cumulative(x))
    }
}

impl Mean for Beta {
    fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }
}

impl Variance for Beta {
    fn variance(&self) -> f64 {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }
}
