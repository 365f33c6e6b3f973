//! Value types for estimates and confidence levels

use crate::{Error, Result};
use count_distr::{ContDistr, Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Probability mass a two-sided interval should contain
///
/// Stored as the significance `p = 1 - level`, the mass excluded from the
/// interval, so that levels close to one keep their precision. The invariant
/// `0 < p < 1` holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfidenceLevel")]
pub struct ConfidenceLevel {
    significance: f64,
}

#[derive(Deserialize)]
struct RawConfidenceLevel {
    significance: f64,
}

impl TryFrom<RawConfidenceLevel> for ConfidenceLevel {
    type Error = Error;

    fn try_from(raw: RawConfidenceLevel) -> Result<Self> {
        Self::from_significance(raw.significance)
    }
}

impl ConfidenceLevel {
    /// 90% confidence
    pub const CL90: Self = Self { significance: 0.10 };
    /// 95% confidence
    pub const CL95: Self = Self { significance: 0.05 };
    /// 99% confidence
    pub const CL99: Self = Self { significance: 0.01 };

    /// Create a confidence level from the contained probability mass
    ///
    /// # Errors
    /// `level` must lie in the open interval (0, 1).
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::InvalidConfidenceLevel { level });
        }
        // Levels within half an ulp of zero round to a significance of one
        Self::from_significance(1.0 - level).map_err(|_| Error::InvalidConfidenceLevel { level })
    }

    /// Create a confidence level from the excluded probability mass
    ///
    /// # Errors
    /// `p` must lie in the open interval (0, 1).
    pub fn from_significance(p: f64) -> Result<Self> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::InvalidSignificance { p });
        }
        Ok(Self { significance: p })
    }

    /// Two-sided level covering `n` standard deviations of a normal law
    ///
    /// `from_n_sigma(1.0)` is about 68.3%, `from_n_sigma(2.0)` about 95.4%.
    pub fn from_n_sigma(n: f64) -> Result<Self> {
        Self::from_significance(2.0 * Normal::standard().complement_cumulative(n))
    }

    /// One-sided level below `n` standard deviations of a normal law
    pub fn from_n_sigma_one_sided(n: f64) -> Result<Self> {
        Self::from_significance(Normal::standard().complement_cumulative(n))
    }

    /// Contained probability mass, e.g. 0.95
    pub fn level(&self) -> f64 {
        1.0 - self.significance
    }

    /// Excluded probability mass `p = 1 - level`
    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Mass excluded from each tail of a symmetric two-sided interval, `p/2`
    pub fn tail_probability(&self) -> f64 {
        0.5 * self.significance
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

/// Higher confidence compares greater
impl PartialOrd for ConfidenceLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.significance.partial_cmp(&self.significance)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.level() * 100.0)
    }
}

/// Multiplication of an estimate by a constant
pub trait Scale {
    fn scale(&self, k: f64) -> Self;
}

/// Asymmetric confidence interval expressed as deviations from the point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfInt {
    /// Distance from the point estimate down to the lower bound
    pub lower_deviation: f64,
    /// Distance from the point estimate up to the upper bound
    pub upper_deviation: f64,
    /// Confidence level the bounds were computed for
    pub level: ConfidenceLevel,
}

impl Scale for ConfInt {
    fn scale(&self, k: f64) -> Self {
        let (lower, upper) = if k >= 0.0 {
            (self.lower_deviation, self.upper_deviation)
        } else {
            (self.upper_deviation, self.lower_deviation)
        };
        Self {
            lower_deviation: lower * k.abs(),
            upper_deviation: upper * k.abs(),
            level: self.level,
        }
    }
}

/// Standard error of an approximately normal estimate
///
/// No confidence level is attached; see [`Estimate::to_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalErr {
    pub std_error: f64,
}

impl Scale for NormalErr {
    fn scale(&self, k: f64) -> Self {
        Self {
            std_error: self.std_error * k.abs(),
        }
    }
}

/// Point estimate together with its uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate<E> {
    /// Point estimate
    pub point: f64,
    /// Uncertainty of the point estimate
    pub error: E,
}

/// Estimate carrying an explicit confidence interval
pub type IntervalEstimate = Estimate<ConfInt>;

/// Estimate carrying a normal standard error
pub type NormalEstimate = Estimate<NormalErr>;

impl<E: Scale> Scale for Estimate<E> {
    fn scale(&self, k: f64) -> Self {
        Self {
            point: self.point * k,
            error: self.error.scale(k),
        }
    }
}

impl Estimate<ConfInt> {
    /// Build an estimate from a point and its interval bounds
    pub fn from_interval(point: f64, (lower, upper): (f64, f64), level: ConfidenceLevel) -> Self {
        Self {
            point,
            error: ConfInt {
                lower_deviation: point - lower,
                upper_deviation: upper - point,
                level,
            },
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.point - self.error.lower_deviation
    }

    pub fn upper_bound(&self) -> f64 {
        self.point + self.error.upper_deviation
    }

    /// `(lower_bound, upper_bound)`
    pub fn interval(&self) -> (f64, f64) {
        (self.lower_bound(), self.upper_bound())
    }

    pub fn width(&self) -> f64 {
        self.error.lower_deviation + self.error.upper_deviation
    }

    /// Check if a value lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound() && value <= self.upper_bound()
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.error.level
    }
}

impl Estimate<NormalErr> {
    /// Build an estimate from a point and its standard error
    pub fn from_std_error(point: f64, std_error: f64) -> Self {
        Self {
            point,
            error: NormalErr { std_error },
        }
    }

    pub fn std_error(&self) -> f64 {
        self.error.std_error
    }

    /// Squared standard error
    pub fn variance(&self) -> f64 {
        self.error.std_error * self.error.std_error
    }

    /// Symmetric interval `point ± z * std_error`
    ///
    /// `z` is the standard normal quantile at `1 - p/2` for the requested
    /// level.
    pub fn to_interval(&self, level: ConfidenceLevel) -> Result<Estimate<ConfInt>> {
        let z = Normal::standard().complement_quantile(level.tail_probability())?;
        let margin = z * self.error.std_error;
        Ok(Estimate::from_interval(
            self.point,
            (self.point - margin, self.point + margin),
            level,
        ))
    }
}

impl fmt::Display for Estimate<ConfInt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} [{:.4}, {:.4}] at {}",
            self.point,
            self.lower_bound(),
            self.upper_bound(),
            self.error.level
        )
    }
}

impl fmt::Display for Estimate<NormalErr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ± {:.4}", self.point, self.error.std_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95).unwrap();
        assert_relative_eq!(level.level(), 0.95, epsilon = 1e-15);
        assert_relative_eq!(level.significance(), 0.05, epsilon = 1e-15);
        assert_relative_eq!(level.tail_probability(), 0.025, epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_confidence_level() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(ConfidenceLevel::new(bad).is_err(), "{bad}");
            assert!(ConfidenceLevel::from_significance(bad).is_err(), "{bad}");
        }
        assert_eq!(
            ConfidenceLevel::new(1.5),
            Err(Error::InvalidConfidenceLevel { level: 1.5 })
        );
        assert!(ConfidenceLevel::try_from(2.0).is_err());

        assert_eq!(
            ConfidenceLevel::new(1e-17),
            Err(Error::InvalidConfidenceLevel { level: 1e-17 })
        );
        let tiny = ConfidenceLevel::new(1e-15).unwrap();
        assert!(tiny.significance() > 0.0 && tiny.significance() < 1.0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(ConfidenceLevel::CL95.significance(), 0.05);
        assert_relative_eq!(ConfidenceLevel::CL90.level(), 0.90, epsilon = 1e-15);
        assert_relative_eq!(ConfidenceLevel::CL99.level(), 0.99, epsilon = 1e-15);
    }

    #[test]
    fn test_n_sigma() {
        let one = ConfidenceLevel::from_n_sigma(1.0).unwrap();
        assert_relative_eq!(one.level(), 0.6826894921370859, epsilon = 1e-14);

        let two = ConfidenceLevel::from_n_sigma(2.0).unwrap();
        assert_relative_eq!(two.level(), 0.9544997361036416, epsilon = 1e-14);

        let one_sided = ConfidenceLevel::from_n_sigma_one_sided(1.0).unwrap();
        assert_relative_eq!(one_sided.level(), 0.8413447460685429, epsilon = 1e-14);

        assert!(ConfidenceLevel::from_n_sigma(0.0).is_err());
        assert!(ConfidenceLevel::from_n_sigma(f64::NAN).is_err());
        // 40 sigma leaves no representable tail mass
        assert!(ConfidenceLevel::from_n_sigma(40.0).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(ConfidenceLevel::CL99 > ConfidenceLevel::CL95);
        assert!(ConfidenceLevel::CL90 < ConfidenceLevel::CL95);
        assert_eq!(
            ConfidenceLevel::CL95.partial_cmp(&ConfidenceLevel::CL95),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_confidence_level_display() {
        assert_eq!(ConfidenceLevel::CL95.to_string(), "95.0%");
        assert_eq!(ConfidenceLevel::new(0.99).unwrap().to_string(), "99.0%");
    }

    #[test]
    fn test_interval_estimate() {
        let est = Estimate::from_interval(5.0, (2.0, 8.5), ConfidenceLevel::CL95);
        assert_eq!(est.error.lower_deviation, 3.0);
        assert_eq!(est.error.upper_deviation, 3.5);
        assert_eq!(est.interval(), (2.0, 8.5));
        assert_eq!(est.width(), 6.5);
        assert!(est.contains(5.0));
        assert!(est.contains(2.0));
        assert!(!est.contains(1.9));
        assert!(!est.contains(9.0));
        assert_eq!(est.confidence_level(), ConfidenceLevel::CL95);
    }

    #[test]
    fn test_scale() {
        let est = Estimate::from_interval(5.0, (2.0, 8.5), ConfidenceLevel::CL95);
        let doubled = est.scale(2.0);
        assert_eq!(doubled.interval(), (4.0, 17.0));

        let negated = est.scale(-1.0);
        assert_eq!(negated.point, -5.0);
        assert_eq!(negated.interval(), (-8.5, -2.0));

        let normal = Estimate::from_std_error(3.0, 0.5).scale(-2.0);
        assert_eq!(normal.point, -6.0);
        assert_eq!(normal.std_error(), 1.0);
    }

    #[test]
    fn test_normal_estimate() {
        let est = Estimate::from_std_error(0.5, 0.05);
        assert_eq!(est.std_error(), 0.05);
        assert_relative_eq!(est.variance(), 0.0025, epsilon = 1e-15);

        let ci = est.to_interval(ConfidenceLevel::CL95).unwrap();
        assert_relative_eq!(ci.lower_bound(), 0.5 - 1.959963984540054 * 0.05, epsilon = 1e-12);
        assert_relative_eq!(ci.upper_bound(), 0.5 + 1.959963984540054 * 0.05, epsilon = 1e-12);
        assert_eq!(ci.confidence_level(), ConfidenceLevel::CL95);
    }

    #[test]
    fn test_estimate_display() {
        let est = Estimate::from_interval(5.0, (2.5, 7.5), ConfidenceLevel::CL95);
        assert_eq!(est.to_string(), "5.0000 [2.5000, 7.5000] at 95.0%");

        let est = Estimate::from_std_error(0.5, 0.05);
        assert_eq!(est.to_string(), "0.5000 ± 0.0500");
    }

    #[test]
    fn test_serde_round_trip() {
        let est = Estimate::from_interval(10.0, (4.8, 18.4), ConfidenceLevel::CL95);
        let json = serde_json::to_string(&est).unwrap();
        let back: IntervalEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(est, back);

        let invalid = r#"{"significance": 1.5}"#;
        assert!(serde_json::from_str::<ConfidenceLevel>(invalid).is_err());
    }
}
