//! Break-even activation solve.
//!
//! Solves `cost_per_head = x × (weighted + manager_equivalent)` for `x`.
//! Manager time is folded in through its per-employee equivalent taken at
//! the current activation. Because the manager total is linear in
//! activation, that equivalent does not depend on `x` once anyone is
//! activated, so the closed form is exact for positive activation. At zero
//! activation the equivalent is 0 and the solve ignores manager time,
//! which overstates break-even.

use crate::core::numeric::fraction_to_pct;
use crate::core::BreakEven;

/// Break-even activation percentage, or undefined when there is no
/// positive per-employee value to recover cost with.
pub fn solve(
    cost_per_head: f64,
    weighted_per_employee: f64,
    manager_per_employee_equivalent: f64,
) -> BreakEven {
    let denom = weighted_per_employee + manager_per_employee_equivalent;
    if !denom.is_finite() || denom <= 0.0 {
        return BreakEven::UNDEFINED;
    }

    let pct = fraction_to_pct(cost_per_head / denom);
    if pct.is_finite() {
        BreakEven::defined(pct)
    } else {
        BreakEven::UNDEFINED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_model_break_even() {
        let be = solve(500.0 / 1.1, 990.0, 0.0);
        let pct = be.raw_pct.unwrap();
        assert!((pct - 45.913).abs() < 1e-3);
    }

    #[test]
    fn zero_denominator_is_undefined() {
        assert_eq!(solve(454.0, 0.0, 0.0), BreakEven::UNDEFINED);
    }

    #[test]
    fn negative_denominator_is_undefined() {
        assert_eq!(solve(454.0, -10.0, 2.0), BreakEven::UNDEFINED);
    }

    #[test]
    fn non_finite_denominator_is_undefined() {
        assert_eq!(solve(454.0, f64::NAN, 0.0), BreakEven::UNDEFINED);
        assert_eq!(solve(454.0, f64::INFINITY, 0.0), BreakEven::UNDEFINED);
    }

    #[test]
    fn unreachable_break_even_keeps_raw_value() {
        let be = solve(454.0, 200.0, 0.0);
        assert!((be.raw_pct.unwrap() - 227.0).abs() < 1e-9);
        assert_eq!(be.display_pct(), Some(100.0));
        assert!(!be.is_reachable());
    }

    #[test]
    fn free_program_breaks_even_immediately() {
        assert_eq!(solve(0.0, 990.0, 0.0), BreakEven::defined(0.0));
    }
}
