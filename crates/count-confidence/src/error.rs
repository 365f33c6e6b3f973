//! Error types for confidence interval estimation

use thiserror::Error;

/// Errors raised by the interval estimators
///
/// All of them are raised before any numerical work starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Counts violate the estimator's preconditions
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Confidence level outside the open interval (0, 1)
    #[error("Confidence level {level} must be in (0, 1)")]
    InvalidConfidenceLevel { level: f64 },

    /// Significance (excluded tail mass) outside the open interval (0, 1)
    #[error("Significance level {p} must be in (0, 1)")]
    InvalidSignificance { p: f64 },

    /// Failure reported by an underlying distribution
    #[error("Distribution error: {0}")]
    Distribution(#[from] count_distr::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that an observed event count is non-negative
    pub fn check_events(n: i64) -> Result<()> {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "number of events must be non-negative, got {n}"
            )));
        }
        Ok(())
    }

    /// Check `n > 0` trials and `0 <= k <= n` successes
    pub fn check_trials(n: i64, k: i64) -> Result<()> {
        if n <= 0 {
            return Err(Error::InvalidArgument(format!(
                "number of trials must be positive, got {n}"
            )));
        }
        if k < 0 {
            return Err(Error::InvalidArgument(format!(
                "number of successes must be non-negative, got {k}"
            )));
        }
        if k > n {
            return Err(Error::InvalidArgument(format!(
                "number of successes {k} exceeds number of trials {n}"
            )));
        }
        Ok(())
    }
}
