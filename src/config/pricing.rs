//! Pricing policy: per-head price, tax treatment and cost basis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::numeric::safe_div;
use crate::errors::Error;

/// Who the program is charged for.
///
/// Both bases appear across the calculator's history and neither is
/// authoritative, so the choice is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostBasis {
    /// Cost = price × total headcount.
    #[default]
    TotalHeadcount,
    /// Cost = price × activated employees only.
    Adopters,
}

impl CostBasis {
    /// Parse a cost basis name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "total-headcount" | "total_headcount" | "headcount" | "total" => {
                Some(CostBasis::TotalHeadcount)
            }
            "adopters" | "adopters-only" => Some(CostBasis::Adopters),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CostBasis::TotalHeadcount => "total-headcount",
            CostBasis::Adopters => "adopters",
        }
    }
}

impl fmt::Display for CostBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CostBasis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostBasis::parse(s).ok_or_else(|| Error::UnknownCostBasis(s.to_string()))
    }
}

/// Pricing configuration as written in `.activation-roi.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Plan price per employee per year
    #[serde(default = "default_price_per_employee")]
    pub price_per_employee: f64,

    /// Whether `price_per_employee` already includes tax
    #[serde(default = "default_price_includes_tax")]
    pub price_includes_tax: bool,

    /// Sales tax rate removed from tax-inclusive prices (0.10 = 10%)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    #[serde(default)]
    pub cost_basis: CostBasis,

    /// Flat annual fee added on top of per-head cost
    #[serde(default)]
    pub fixed_annual_fee: f64,
}

pub fn default_price_per_employee() -> f64 {
    500.0
}

pub fn default_price_includes_tax() -> bool {
    true
}

pub fn default_tax_rate() -> f64 {
    0.10
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_employee: default_price_per_employee(),
            price_includes_tax: default_price_includes_tax(),
            tax_rate: default_tax_rate(),
            cost_basis: CostBasis::default(),
            fixed_annual_fee: 0.0,
        }
    }
}

impl PricingConfig {
    /// Per-head price with tax removed when the list price includes it.
    pub fn price_used(&self) -> f64 {
        if self.price_includes_tax {
            safe_div(
                self.price_per_employee,
                1.0 + self.tax_rate,
                self.price_per_employee,
            )
        } else {
            self.price_per_employee
        }
    }
}

/// Resolved pricing. `price_used` is derived once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    config: PricingConfig,
    price_used: f64,
}

impl PricingPolicy {
    pub fn new(config: PricingConfig) -> Self {
        let price_used = config.price_used();
        Self { config, price_used }
    }

    pub fn price_used(&self) -> f64 {
        self.price_used
    }

    pub fn cost_basis(&self) -> CostBasis {
        self.config.cost_basis
    }

    pub fn fixed_annual_fee(&self) -> f64 {
        self.config.fixed_annual_fee
    }

    pub fn includes_tax(&self) -> bool {
        self.config.price_includes_tax
    }

    pub fn tax_rate(&self) -> f64 {
        self.config.tax_rate
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_inclusive_price_is_divided_once() {
        let policy = PricingPolicy::default();
        assert!((policy.price_used() - 454.545_454_545).abs() < 1e-6);
    }

    #[test]
    fn tax_exclusive_price_is_used_as_is() {
        let policy = PricingPolicy::new(PricingConfig {
            price_includes_tax: false,
            ..Default::default()
        });
        assert_eq!(policy.price_used(), 500.0);
    }

    #[test]
    fn cost_basis_parses_and_displays() {
        assert_eq!(CostBasis::parse("adopters"), Some(CostBasis::Adopters));
        assert_eq!(
            CostBasis::parse("Total-Headcount"),
            Some(CostBasis::TotalHeadcount)
        );
        assert!("seats".parse::<CostBasis>().is_err());
        assert_eq!(CostBasis::default().to_string(), "total-headcount");
    }
}
