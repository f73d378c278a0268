use std::cell::Cell;

use approx::assert_relative_eq;
use dualdiff::{derivative, evaluate, AutoDiff, Dual64, Error, Pow};

// ── evaluate ──

#[test]
fn identity_is_seed() {
    assert_eq!(evaluate(|x| x, 1.75_f64), (1.75, 1.0));
}

#[test]
fn add_constant() {
    assert_eq!(evaluate(|x| x + 2.0, 1.0_f64), (3.0, 1.0));
}

#[test]
fn square_by_multiplication() {
    assert_eq!(evaluate(|x| x * x, 3.0_f64), (9.0, 6.0));
}

#[test]
fn square_by_power_matches_multiplication() {
    let by_pow = evaluate(|x| x.pow(2.0), 3.0_f64);
    assert_eq!(by_pow, (9.0, 6.0));
    assert_eq!(by_pow, evaluate(|x| x * x, 3.0_f64));
}

#[test]
fn square_by_integer_power() {
    assert_eq!(evaluate(|x| x.pow(2), 3.0_f64), (9.0, 6.0));
}

#[test]
fn reciprocal() {
    assert_eq!(evaluate(|x| 1.0 / x, 2.0_f64), (0.5, -0.25));
}

#[test]
fn constant_base_power() {
    let (value, deriv) = evaluate(|x| 2.0_f64.pow(x), 1.0_f64);
    assert_eq!(value, 2.0);
    assert_eq!(deriv, 2.0 * 2.0_f64.ln());
}

#[test]
fn difference_of_squares() {
    assert_eq!(evaluate(|x| (x + 1.0) * (x - 1.0), 5.0_f64), (24.0, 10.0));
}

#[test]
fn polynomial() {
    // f(x) = 3x^3 - 2x + 7, f'(x) = 9x^2 - 2
    let (value, deriv) = evaluate(|x| 3.0 * x.pow(3.0) - 2.0 * x + 7.0, 2.0_f64);
    assert_relative_eq!(value, 27.0, max_relative = 1e-12);
    assert_relative_eq!(deriv, 34.0, max_relative = 1e-12);
}

#[test]
fn f32_evaluation() {
    let (value, deriv) = evaluate(|x| x * x * 0.5_f32, 4.0_f32);
    assert_eq!(value, 8.0);
    assert_eq!(deriv, 4.0);
}

// ── derivative ──

#[test]
fn derivative_of_quotient() {
    // d/dx x/(1+x^2) = (1 - x^2)/(1 + x^2)^2
    let d = derivative(|x| x / (1.0 + x * x), 0.5_f64);
    assert_relative_eq!(d, 0.75 / (1.25 * 1.25), max_relative = 1e-12);
}

#[test]
fn derivative_of_elementary() {
    let d = derivative(|x: Dual64| x.sin() * x.exp(), 0.3_f64);
    let expected = 0.3_f64.exp() * (0.3_f64.sin() + 0.3_f64.cos());
    assert_relative_eq!(d, expected, max_relative = 1e-12);
}

// ── AutoDiff ──

#[test]
fn auto_diff_default_order() {
    let ad = AutoDiff::new();
    assert_eq!(ad.order(), 1);
    assert_eq!(ad, AutoDiff::default());
    let out = ad.auto_diff(|x| x + 2.0, 1.0).unwrap();
    assert_eq!(out, Dual64::raw(3.0, 1.0));
}

#[test]
fn auto_diff_explicit_first_order() {
    let out = AutoDiff::with_order(1)
        .auto_diff(|x| x * x, 3.0)
        .unwrap();
    assert_eq!(out.into_parts(), (9.0, 6.0));
}

#[test]
fn auto_diff_rejects_higher_order() {
    let ad = AutoDiff::with_order(2);
    let err = ad.auto_diff(|x| x * x, 3.0).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedOrder {
            requested: 2,
            supported: 1
        }
    );
}

#[test]
fn auto_diff_rejects_order_zero() {
    let err = AutoDiff::with_order(0)
        .auto_diff(|x| x, 1.0_f64)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedOrder { requested: 0, .. }));
}

#[test]
fn rejected_order_never_calls_function() {
    let calls = Cell::new(0);
    let ad = AutoDiff::with_order(3);
    for _ in 0..2 {
        let result = ad.auto_diff(
            |x: Dual64| {
                calls.set(calls.get() + 1);
                x
            },
            1.0,
        );
        assert!(result.is_err());
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn unsupported_order_message() {
    let err = AutoDiff::with_order(2)
        .auto_diff(|x| x, 0.0_f64)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported derivative order 2 (only order 1 is supported)"
    );
}
