//! Capability traits for probability distributions
//!
//! The abstraction has three tiers:
//!
//! - [`Distribution`]: cumulative distribution and its complement
//! - [`ContDistr`]: adds density and quantile for continuous laws
//! - [`DiscreteDistr`]: adds point masses for laws on the integers
//!
//! Implementations are immutable values; every method is a pure function of
//! the distribution's parameters and the argument.

use crate::Result;

/// A fully parameterized probability law on the real line
pub trait Distribution {
    /// Probability that the random variable is less than or equal to `x`
    fn cumulative(&self, x: f64) -> f64;

    /// Probability that the random variable is greater than `x`
    ///
    /// Implementations compute this directly rather than as
    /// `1 - cumulative(x)` so that the upper tail keeps its significant
    /// digits.
    fn complement_cumulative(&self, x: f64) -> f64 {
        1.0 - self.cumulative(x)
    }
}

/// Continuous distribution with a density and a quantile function
pub trait ContDistr: Distribution {
    /// Probability density at `x`
    fn density(&self, x: f64) -> f64;

    /// Natural logarithm of the density at `x`
    fn log_density(&self, x: f64) -> f64 {
        self.density(x).ln()
    }

    /// Generalized inverse of [`Distribution::cumulative`]
    ///
    /// Returns the smallest `x` with `cumulative(x) >= p`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidProbability`] if `p` is outside `[0, 1]`.
    fn quantile(&self, p: f64) -> Result<f64>;

    /// Inverse of [`Distribution::complement_cumulative`]
    ///
    /// Returns `x` with `complement_cumulative(x) = p`. Equivalent to
    /// `quantile(1 - p)`, but implementations may invert the upper tail
    /// directly.
    fn complement_quantile(&self, p: f64) -> Result<f64> {
        crate::Error::check_probability(p)?;
        self.quantile(1.0 - p)
    }
}

/// Distribution supported on the integers
pub trait DiscreteDistr: Distribution {
    /// Point mass at `k`
    fn probability(&self, k: i64) -> f64;

    /// Natural logarithm of the point mass at `k`
    fn log_probability(&self, k: i64) -> f64 {
        self.probability(k).ln()
    }
}

/// Distributions with a finite mean
pub trait Mean {
    fn mean(&self) -> f64;
}

/// Distributions with a finite variance
pub trait Variance {
    fn variance(&self) -> f64;

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// Total mass of the integers in `[a, b]`
///
/// Evaluated through the cumulative function at half-integer points. When
/// the range sits in the upper tail the complement pair is used instead,
/// which avoids subtracting two numbers close to one.
pub fn sum_probabilities<D: DiscreteDistr + ?Sized>(d: &D, a: i64, b: i64) -> f64 {
    if a > b {
        return 0.0;
    }
    let lo = a as f64 - 0.5;
    let hi = b as f64 + 0.5;
    let below = d.cumulative(lo);
    let mass = if below > 0.5 {
        d.complement_cumulative(lo) - d.complement_cumulative(hi)
    } else {
        d.cumulative(hi) - below
    };
    mass.max(0.0)
}
