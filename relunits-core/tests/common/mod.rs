//! Common assertion helpers for integration tests
//!
//! Floating-point comparisons come in two strengths:
//! - bit equality for values that must reproduce a formula exactly
//! - relative tolerance for values compared against printed approximations

#![allow(dead_code)]

use relunits_core::catalog::relative_difference;

/// Relative precision of six significant digits, with rounding slack.
pub const SIX_DIGITS: f64 = 2e-6;

/// Assert two values have the same bit pattern.
#[track_caller]
pub fn assert_bits_eq(name: &str, actual: f64, expected: f64) {
    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "{name}: {actual:e} is not bit-identical to {expected:e}"
    );
}

/// Assert `actual` is within relative tolerance `tol` of `expected`.
#[track_caller]
pub fn assert_rel_eq(name: &str, actual: f64, expected: f64, tol: f64) {
    let diff = relative_difference(actual, expected);
    assert!(
        diff <= tol,
        "{name}: {actual:e} differs from {expected:e} by {diff:e} (tolerance {tol:e})"
    );
}
