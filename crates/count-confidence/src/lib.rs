//! Confidence intervals for counts
//!
//! This crate turns raw counts into interval estimates:
//!
//! - **Poisson rate**: exact interval from chi-squared quantiles
//!   ([`poisson_ci`]) and the `n ± sqrt(n)` approximation
//!   ([`poisson_normal_ci`])
//! - **Binomial proportion**: exact Clopper-Pearson interval from Beta
//!   quantiles ([`binomial_ci`]) and the normal (Wald) approximation
//!   ([`naive_binomial_ci`])
//!
//! Every estimator is a pure function. Arguments are validated before any
//! numerical work and violations are reported as [`Error::InvalidArgument`].
//!
//! # Examples
//!
//! ```rust
//! use count_confidence::{binomial_ci, naive_binomial_ci, poisson_ci, ConfidenceLevel};
//!
//! let cl = ConfidenceLevel::new(0.95).unwrap();
//!
//! let rate = poisson_ci(cl, 10).unwrap();
//! assert!(rate.contains(10.0));
//!
//! let proportion = binomial_ci(cl, 10, 3).unwrap();
//! let (lower, upper) = proportion.interval();
//! assert!(lower < 0.3 && 0.3 < upper);
//!
//! // The normal approximation carries a standard error instead of bounds
//! let wald = naive_binomial_ci(100, 50).unwrap();
//! assert!((wald.variance() - 0.0025).abs() < 1e-15);
//! let wald_interval = wald.to_interval(cl).unwrap();
//! assert!(wald_interval.width() > 0.0);
//! ```

mod binomial;
mod error;
mod poisson;
mod types;

pub use binomial::{binomial_ci, naive_binomial_ci};
pub use error::{Error, Result};
pub use poisson::{poisson_ci, poisson_normal_ci};
pub use types::{
    ConfInt, ConfidenceLevel, Estimate, IntervalEstimate, NormalErr, NormalEstimate, Scale,
};
