//! # Count Statistics
//!
//! Exact and approximate confidence intervals for counting experiments.
//!
//! ## Crate Organization
//!
//! - **count-distr**: distribution traits, the Chi-squared, Beta, Normal,
//!   Poisson and Binomial laws, and the law checks in `distr::contract`
//! - **count-confidence**: the [`ConfidenceLevel`] and [`Estimate`] data
//!   model and the Poisson and Binomial interval estimators
//!
//! ## Quick Start
//!
//! ```rust
//! use count_stats::{binomial_ci, poisson_ci, ConfidenceLevel};
//!
//! let cl = ConfidenceLevel::CL95;
//!
//! // 10 events observed in one period
//! let rate = poisson_ci(cl, 10).unwrap();
//! println!("rate: {rate}");
//!
//! // 3 successes out of 10 trials
//! let proportion = binomial_ci(cl, 10, 3).unwrap();
//! assert!(proportion.contains(0.3));
//! ```

// Re-export workspace crates
pub use count_confidence as confidence;
pub use count_distr as distr;

pub use count_confidence::{
    binomial_ci, naive_binomial_ci, poisson_ci, poisson_normal_ci, ConfInt, ConfidenceLevel,
    Estimate, IntervalEstimate, NormalErr, NormalEstimate, Scale,
};
pub use count_distr::{ContDistr, DiscreteDistr, Distribution, Mean, Variance};

/// Common imports for count statistics
pub mod prelude {
    pub use crate::confidence::{
        binomial_ci, naive_binomial_ci, poisson_ci, poisson_normal_ci, ConfidenceLevel,
        Estimate, IntervalEstimate, NormalEstimate, Scale,
    };
    pub use crate::distr::{ContDistr, DiscreteDistr, Distribution, Mean, Variance};
}
