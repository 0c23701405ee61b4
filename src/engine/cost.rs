//! Program cost under the configured cost basis.

use crate::config::{CostBasis, PricingPolicy};
use crate::core::numeric::safe_div;

/// Heads the program is charged for.
pub fn billable_heads(basis: CostBasis, employee_count: f64, activation: f64) -> f64 {
    match basis {
        CostBasis::TotalHeadcount => employee_count,
        CostBasis::Adopters => employee_count * activation,
    }
}

/// `price_used × billable heads + fixed fee`
pub fn annual_cost(pricing: &PricingPolicy, employee_count: f64, activation: f64) -> f64 {
    let heads = billable_heads(pricing.cost_basis(), employee_count, activation);
    pricing.price_used() * heads + pricing.fixed_annual_fee()
}

/// Per-head cost the break-even solve has to recover: the per-head price
/// plus the fixed fee spread across headcount.
pub fn break_even_cost_per_head(pricing: &PricingPolicy, employee_count: f64) -> f64 {
    pricing.price_used() + safe_div(pricing.fixed_annual_fee(), employee_count, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;

    fn policy(basis: CostBasis, fee: f64) -> PricingPolicy {
        PricingPolicy::new(PricingConfig {
            price_per_employee: 500.0,
            price_includes_tax: false,
            tax_rate: 0.10,
            cost_basis: basis,
            fixed_annual_fee: fee,
        })
    }

    #[test]
    fn total_headcount_ignores_activation() {
        let p = policy(CostBasis::TotalHeadcount, 0.0);
        assert_eq!(annual_cost(&p, 200.0, 0.4), 100_000.0);
        assert_eq!(annual_cost(&p, 200.0, 0.0), 100_000.0);
    }

    #[test]
    fn adopters_scale_with_activation() {
        let p = policy(CostBasis::Adopters, 0.0);
        assert_eq!(annual_cost(&p, 200.0, 0.4), 40_000.0);
        assert_eq!(annual_cost(&p, 200.0, 0.0), 0.0);
    }

    #[test]
    fn fixed_fee_is_added_once() {
        let p = policy(CostBasis::TotalHeadcount, 2_500.0);
        assert_eq!(annual_cost(&p, 10.0, 0.4), 7_500.0);
        assert_eq!(break_even_cost_per_head(&p, 10.0), 750.0);
    }

    #[test]
    fn fixed_fee_without_employees_is_not_amortized() {
        let p = policy(CostBasis::TotalHeadcount, 2_500.0);
        assert_eq!(break_even_cost_per_head(&p, 0.0), 500.0);
    }
}
