//! Error types for distribution construction and evaluation
//!
//! Every failure in this crate is a domain error: an invalid parameter or a
//! probability outside `[0, 1]`. Nothing here is retryable.

use thiserror::Error;

/// Core error type for distribution operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid distribution parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Probability argument outside `[0, 1]`
    #[error("Probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Root finder was given an interval that does not bracket a root
    #[error("Root is not bracketed by [{lo}, {hi}]")]
    NotBracketed { lo: f64, hi: f64 },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an invalid named parameter
    pub fn invalid_parameter(name: &str, value: f64, requirement: &str) -> Self {
        Self::InvalidParameter(format!("{name} = {value} must be {requirement}"))
    }

    /// Check that a probability lies in `[0, 1]`
    ///
    /// NaN is rejected as well.
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Self::InvalidProbability { p });
        }
        Ok(())
    }
}
