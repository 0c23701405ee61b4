//! Shared numeric helpers.
//!
//! Every division in the engine goes through [`safe_div`] so a zero or
//! non-finite denominator never leaks `NaN` or infinity into a result.

/// Divide `numerator` by `denominator`, returning `fallback` when the
/// denominator is zero or either operand or the quotient is not finite.
pub fn safe_div(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return fallback;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        fallback
    }
}

/// Return `value` if finite, otherwise `fallback`.
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Clamp into the unit interval. `NaN` maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Convert a percentage (0-100 scale) into a fraction (0-1 scale).
pub fn pct_to_fraction(pct: f64) -> f64 {
    pct / 100.0
}

/// Convert a fraction (0-1 scale) into a percentage (0-100 scale).
pub fn fraction_to_pct(fraction: f64) -> f64 {
    fraction * 100.0
}
