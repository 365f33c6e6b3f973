//! Property-based tests of the distribution laws
//!
//! Every concrete distribution is run through the checks in
//! `count_distr::contract` over randomly drawn parameters and arguments.

use count_distr::contract::*;
use count_distr::{Beta, Binomial, ChiSquared, ContDistr, DiscreteDistr, Normal, Poisson};
use proptest::prelude::*;

fn chi_squared() -> impl Strategy<Value = ChiSquared> {
    (0.5f64..60.0).prop_map(|k| ChiSquared::new(k).unwrap())
}

/// Shapes below one put unbounded density next to `x = 1`, where the spacing
/// of doubles limits how closely any quantile can hit its target.
fn beta() -> impl Strategy<Value = Beta> {
    (1.0f64..25.0, 1.0f64..25.0).prop_map(|(a, b)| Beta::new(a, b).unwrap())
}

fn normal() -> impl Strategy<Value = Normal> {
    (-5.0f64..5.0, 0.5f64..10.0).prop_map(|(m, s)| Normal::new(m, s).unwrap())
}

fn poisson() -> impl Strategy<Value = Poisson> {
    (0.1f64..100.0).prop_map(|l| Poisson::new(l).unwrap())
}

fn binomial() -> impl Strategy<Value = Binomial> {
    (0u64..200, 0.0f64..=1.0).prop_map(|(n, p)| Binomial::new(n, p).unwrap())
}

fn assert_continuous_laws<D: ContDistr>(
    d: &D,
    x1: f64,
    x2: f64,
    p: f64,
    outside: f64,
) -> Result<(), TestCaseError> {
    for x in [x1, x2] {
        prop_assert!(check_cumulative_range(d, x).is_ok(), "{:?}", check_cumulative_range(d, x));
        prop_assert!(check_complement(d, x).is_ok(), "{:?}", check_complement(d, x));
        prop_assert!(check_density(d, x).is_ok(), "{:?}", check_density(d, x));
    }
    prop_assert!(check_monotone(d, x1, x2).is_ok(), "{:?}", check_monotone(d, x1, x2));
    prop_assert!(check_quantile_inverse(d, p).is_ok(), "{:?}", check_quantile_inverse(d, p));
    prop_assert!(check_quantile_domain(d, outside).is_ok(), "{:?}", check_quantile_domain(d, outside));
    Ok(())
}

fn assert_discrete_laws<D: DiscreteDistr>(
    d: &D,
    x1: f64,
    x2: f64,
    a: i64,
    span: i64,
) -> Result<(), TestCaseError> {
    for x in [x1, x2] {
        prop_assert!(check_cumulative_range(d, x).is_ok(), "{:?}", check_cumulative_range(d, x));
        prop_assert!(check_complement(d, x).is_ok(), "{:?}", check_complement(d, x));
    }
    prop_assert!(check_monotone(d, x1, x2).is_ok(), "{:?}", check_monotone(d, x1, x2));
    prop_assert!(check_probability_range(d, a).is_ok(), "{:?}", check_probability_range(d, a));
    prop_assert!(
        check_probability_sum(d, a, a + span).is_ok(),
        "{:?}",
        check_probability_sum(d, a, a + span)
    );
    Ok(())
}

/// Probabilities strictly outside `[0, 1]`
fn outside_unit() -> impl Strategy<Value = f64> {
    prop_oneof![-1e3f64..-1e-12, (1.0f64 + 1e-12)..1e3]
}

proptest! {
    #[test]
    fn prop_chi_squared_laws(
        d in chi_squared(),
        x1 in -5.0f64..200.0,
        x2 in -5.0f64..200.0,
        p in 0.0f64..1.0,
        outside in outside_unit(),
    ) {
        assert_continuous_laws(&d, x1, x2, p, outside)?;
    }

    #[test]
    fn prop_beta_laws(
        d in beta(),
        x1 in -0.5f64..1.5,
        x2 in -0.5f64..1.5,
        p in 0.0f64..1.0,
        outside in outside_unit(),
    ) {
        assert_continuous_laws(&d, x1, x2, p, outside)?;
    }

    #[test]
    fn prop_normal_laws(
        d in normal(),
        x1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0,
        p in 0.0f64..1.0,
        outside in outside_unit(),
    ) {
        assert_continuous_laws(&d, x1, x2, p, outside)?;
    }

    #[test]
    fn prop_poisson_laws(
        d in poisson(),
        x1 in -5.0f64..300.0,
        x2 in -5.0f64..300.0,
        a in -5i64..250,
        span in 0i64..100,
    ) {
        assert_discrete_laws(&d, x1, x2, a, span)?;
    }

    #[test]
    fn prop_binomial_laws(
        d in binomial(),
        x1 in -5.0f64..210.0,
        x2 in -5.0f64..210.0,
        a in -5i64..210,
        span in 0i64..100,
    ) {
        assert_discrete_laws(&d, x1, x2, a, span)?;
    }

    #[test]
    fn prop_complement_quantile_matches_upper_tail(
        d in beta(),
        p in 0.001f64..0.999,
    ) {
        let x = d.complement_quantile(p).unwrap();
        let error = count_distr::Distribution::complement_cumulative(&d, x) - p;
        prop_assert!(error.abs() < QUANTILE_TOLERANCE, "x = {}, error = {:e}", x, error);
    }
}

#[test]
fn test_limits_of_every_distribution() {
    let chi2 = [0.5, 1.0, 2.0, 10.0, 100.0].map(|k| ChiSquared::new(k).unwrap());
    for d in &chi2 {
        assert_eq!(check_limits(d), Ok(()), "chi-squared {:?}", d);
    }
    for (a, b) in [(0.5, 0.5), (1.0, 1.0), (2.0, 30.0), (30.0, 2.0)] {
        let d = Beta::new(a, b).unwrap();
        assert_eq!(check_limits(&d), Ok(()), "{:?}", d);
    }
    assert_eq!(check_limits(&Normal::new(50.0, 0.01).unwrap()), Ok(()));
    assert_eq!(check_limits(&Poisson::new(500.0).unwrap()), Ok(()));
    assert_eq!(check_limits(&Binomial::new(1000, 0.5).unwrap()), Ok(()));
}

#[test]
fn test_degenerate_chi_squared_obeys_distribution_laws() {
    // The point mass at zero has no continuous quantile inverse, but the
    // cumulative laws still hold.
    let d = ChiSquared::new(0.0).unwrap();
    assert_eq!(check_limits(&d), Ok(()));
    for x in [-1.0, -1e-300, 0.0, 1e-300, 3.0] {
        assert_eq!(check_cumulative_range(&d, x), Ok(()));
        assert_eq!(check_complement(&d, x), Ok(()));
        assert_eq!(check_density(&d, x), Ok(()));
    }
    assert_eq!(check_quantile_domain(&d, -0.1), Ok(()));
    assert_eq!(check_quantile_domain(&d, 1.1), Ok(()));
}

fn assert_nan_propagates<D: count_distr::Distribution + std::fmt::Debug>(d: &D) {
    assert!(d.cumulative(f64::NAN).is_nan(), "{:?}", d);
    assert!(d.complement_cumulative(f64::NAN).is_nan(), "{:?}", d);
}

#[test]
fn test_nan_argument_yields_nan_for_every_distribution() {
    assert_nan_propagates(&ChiSquared::new(0.0).unwrap());
    assert_nan_propagates(&ChiSquared::new(3.0).unwrap());
    assert_nan_propagates(&Beta::new(0.5, 2.0).unwrap());
    assert_nan_propagates(&Normal::standard());
    assert_nan_propagates(&Poisson::new(4.0).unwrap());
    assert_nan_propagates(&Binomial::new(10, 0.3).unwrap());
    assert_nan_propagates(&Binomial::new(10, 0.0).unwrap());
}

#[test]
fn test_deserialization_enforces_parameter_checks() {
    assert!(serde_json::from_str::<ChiSquared>(r#"{"degrees_of_freedom":-4.0}"#).is_err());
    assert!(serde_json::from_str::<Beta>(r#"{"alpha":-1.0,"beta":1.0}"#).is_err());
    assert!(serde_json::from_str::<Normal>(r#"{"mean":0.0,"std_dev":0.0}"#).is_err());
    assert!(serde_json::from_str::<Poisson>(r#"{"lambda":0.0}"#).is_err());
    assert!(serde_json::from_str::<Binomial>(r#"{"trials":10,"p":1.5}"#).is_err());

    let binomial = Binomial::new(10, 0.25).unwrap();
    let json = serde_json::to_string(&binomial).unwrap();
    assert_eq!(serde_json::from_str::<Binomial>(&json).unwrap(), binomial);

    let normal = Normal::new(-2.0, 3.0).unwrap();
    let json = serde_json::to_string(&normal).unwrap();
    assert_eq!(serde_json::from_str::<Normal>(&json).unwrap(), normal);

    let poisson: Poisson = serde_json::from_str(r#"{"lambda":2.5}"#).unwrap();
    assert_eq!(poisson, Poisson::new(2.5).unwrap());
}
