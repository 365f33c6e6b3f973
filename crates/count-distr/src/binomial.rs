//! Binomial distribution

use crate::{DiscreteDistr, Distribution, Error, Mean, Result, Variance};
use serde::{Deserialize, Serialize};
use statrs::function::beta::beta_reg;
use statrs::function::gamma::ln_gamma;

/// Number of successes in `trials` independent Bernoulli(`p`) trials
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBinomial")]
pub struct Binomial {
    trials: u64,
    p: f64,
}

#[derive(Deserialize)]
struct RawBinomial {
    trials: u64,
    p: f64,
}

impl TryFrom<RawBinomial> for Binomial {
    type Error = Error;

    fn try_from(raw: RawBinomial) -> Result<Self> {
        Self::new(raw.trials, raw.p)
    }
}

impl Binomial {
    /// Create a binomial distribution
    ///
    /// # Errors
    /// `p` must lie in `[0, 1]`.
    pub fn new(trials: u64, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_parameter("p", p, "in [0, 1]"));
        }
        Ok(Self { trials, p })
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// `(P(X <= k), P(X > k))` for `0 <= k < trials`
    ///
    /// Uses `P(X > k) = I_p(k + 1, n - k)`, evaluating whichever tail lies
    /// away from the mean.
    fn tails(&self, k: f64) -> (f64, f64) {
        let n = self.trials as f64;
        if self.p == 0.0 {
            return (1.0, 0.0);
        }
        if self.p == 1.0 {
            return (0.0, 1.0);
        }
        if k < n * self.p {
            let lower = beta_reg(n - k, k + 1.0, 1.0 - self.p);
            (lower, 1.0 - lower)
        } else {
            let upper = beta_reg(k + 1.0, n - k, self.p);
            (1.0 - upper, upper)
        }
    }
}

impl Distribution for Binomial {
    fn cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            0.0
        } else if x >= self.trials as f64 {
            1.0
        } else {
            self.tails(x.floor()).0
        }
    }

    fn complement_cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            1.0
        } else if x >= self.trials as f64 {
            0.0
        } else {
            self.tails(x.floor()).1
        }
    }
}

impl DiscreteDistr for Binomial {
    fn probability(&self, k: i64) -> f64 {
        if k < 0 || k as u64 > self.trials {
            return 0.0;
        }
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k as u64 == self.trials { 1.0 } else { 0.0 };
        }
        self.log_probability(k).exp()
    }

    fn log_probability(&self, k: i64) -> f64 {
        if k < 0 || k as u64 > self.trials || self.p == 0.0 || self.p == 1.0 {
            return self.probability(k).ln();
        }
        let n = self.trials as f64;
        let k = k as f64;
        let ln_choose = ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0);
        ln_choose + k * self.p.ln() + (n - k) * (-self.p).ln_1p()
    }
}

impl Mean for Binomial {
    fn mean(&self) -> f64 {
        self.trials as f64 * self.p
    }
}

impl Variance for Binomial {
    fn variance(&self) -> f64 {
        self.trials as f64 * self.p * (1.0 - self.p)
    }
}
