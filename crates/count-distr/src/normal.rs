//! Normal distribution

use crate::{ContDistr, Distribution, Error, Mean, Result, Variance};
use serde::{Deserialize, Serialize};
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::{PI, SQRT_2};

/// Normal (Gaussian) distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNormal")]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

#[derive(Deserialize)]
struct RawNormal {
    mean: f64,
    std_dev: f64,
}

impl TryFrom<RawNormal> for Normal {
    type Error = Error;

    fn try_from(raw: RawNormal) -> Result<Self> {
        Self::new(raw.mean, raw.std_dev)
    }
}

impl Normal {
    /// Create a normal distribution
    ///
    /// # Errors
    /// `mean` must be finite and `std_dev` finite and positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::invalid_parameter("mean", mean, "finite"));
        }
        if !(std_dev > 0.0 && std_dev.is_finite()) {
            return Err(Error::invalid_parameter("std_dev", std_dev, "finite and positive"));
        }
        Ok(Self { mean, std_dev })
    }

    /// Standard normal distribution N(0, 1)
    pub const fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution for Normal {
    fn cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        0.5 * erfc(-self.standardize(x) / SQRT_2)
    }

    fn complement_cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        0.5 * erfc(self.standardize(x) / SQRT_2)
    }
}

impl ContDistr for Normal {
    fn density(&self, x: f64) -> f64 {
        self.log_density(x).exp()
    }

    fn log_density(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        -0.5 * z * z - self.std_dev.ln() - 0.5 * (2.0 * PI).ln()
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Ok(if p == 0.0 {
            f64::NEG_INFINITY
        } else if p == 1.0 {
            f64::INFINITY
        } else {
            self.mean - self.std_dev * SQRT_2 * erfc_inv(2.0 * p)
        })
    }

    fn complement_quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Ok(if p == 0.0 {
            f64::INFINITY
        } else if p == 1.0 {
            f64::NEG_INFINITY
        } else {
            self.mean + self.std_dev * SQRT_2 * erfc_inv(2.0 * p)
        })
    }
}

impl Mean for Normal {
    fn mean(&self) -> f64 {
        self.mean
    }
}

impl Variance for Normal {
    fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction() {
        assert!(Normal::new(0.0, 1.0).is_ok());
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_table_values() {
        let n = Normal::standard();
        assert_relative_eq!(n.cumulative(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(n.cumulative(1.959963984540054), 0.975, epsilon = 1e-14);
        assert_relative_eq!(n.quantile(0.975).unwrap(), 1.959963984540054, epsilon = 1e-12);
        assert_relative_eq!(n.complement_quantile(0.025).unwrap(), 1.959963984540054, epsilon = 1e-12);
        assert_relative_eq!(n.density(0.0), 1.0 / (2.0 * PI).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_far_tail_complement() {
        let n = Normal::standard();
        // 1 - cumulative(10) underflows to zero; the complement does not.
        assert_eq!(1.0 - n.cumulative(10.0), 0.0);
        assert_relative_eq!(n.complement_cumulative(10.0), 7.619853024160527e-24, max_relative = 1e-12);
    }

    #[test]
    fn test_quantile_endpoints_and_domain() {
        let n = Normal::new(3.0, 2.0).unwrap();
        assert_eq!(n.quantile(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(n.quantile(1.0).unwrap(), f64::INFINITY);
        assert_relative_eq!(n.quantile(0.5).unwrap(), 3.0, epsilon = 1e-14);
        assert!(n.quantile(-0.01).is_err());
        assert!(n.quantile(1.01).is_err());
        assert!(n.complement_quantile(f64::NAN).is_err());
    }

    #[test]
    fn test_moments() {
        let n = Normal::new(-1.0, 3.0).unwrap();
        assert_eq!(n.mean(), -1.0);
        assert_eq!(n.variance(), 9.0);
        assert_eq!(n.std_dev(), 3.0);
    }
}
