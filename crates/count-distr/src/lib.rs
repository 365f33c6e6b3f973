//! Probability distributions behind count statistics
//!
//! This crate defines the capability traits shared by every distribution
//! ([`Distribution`], [`ContDistr`], [`DiscreteDistr`]) together with the
//! concrete laws needed to build exact confidence intervals for counts:
//!
//! - [`ChiSquared`] and [`Beta`], whose quantiles give the exact Poisson and
//!   Clopper-Pearson intervals
//! - [`Normal`], used for normal-approximation intervals
//! - [`Poisson`] and [`Binomial`], the sampling laws of the counts themselves
//!
//! Cumulative functions are evaluated with the regularized incomplete gamma
//! and beta functions from `statrs`; quantiles without a closed form are
//! found with a safeguarded Newton iteration ([`RootFinder`]).
//!
//! # Examples
//!
//! ```rust
//! use count_distr::{ChiSquared, ContDistr, Distribution};
//!
//! let chi2 = ChiSquared::new(2.0).unwrap();
//! let x = chi2.quantile(0.975).unwrap();
//! assert!((chi2.cumulative(x) - 0.975).abs() < 1e-14);
//!
//! // Probabilities outside [0, 1] are rejected, never clamped
//! assert!(chi2.quantile(1.5).is_err());
//! ```
//!
//! The [`contract`] module checks the laws every implementation must obey
//! and can be pointed at distributions defined elsewhere.

mod beta;
mod binomial;
mod chi_squared;
pub mod contract;
mod error;
mod normal;
mod poisson;
mod root;
mod traits;

pub use beta::Beta;
pub use binomial::Binomial;
pub use chi_squared::ChiSquared;
pub use error::{Error, Result};
pub use normal::Normal;
pub use poisson::Poisson;
pub use root::RootFinder;
pub use traits::{sum_probabilities, ContDistr, DiscreteDistr, Distribution, Mean, Variance};
