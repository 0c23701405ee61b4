//! Validation with error accumulation for configuration.
//!
//! Every check runs, and all failures are reported together in a single
//! [`Error::InvalidConfig`], so a user fixing their config file sees every
//! problem in one pass.

use super::activation::ActivationConfig;
use super::pricing::PricingConfig;
use super::EngineConfig;
use crate::errors::{Error, Result};

/// Validate entire config, accumulating ALL errors.
///
/// # Example
///
/// ```rust
/// use activation_roi::config::{validate_config, EngineConfig};
///
/// let config = EngineConfig::default();
/// assert!(validate_config(&config).is_ok());
/// ```
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    let issues: Vec<String> = pricing_issues(&config.pricing)
        .into_iter()
        .chain(activation_issues(&config.activation))
        .collect();

    into_result(issues)
}

/// Validate only the activation section.
pub fn validate_activation(activation: &ActivationConfig) -> Result<()> {
    into_result(activation_issues(activation))
}

fn into_result(issues: Vec<String>) -> Result<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidConfig { issues })
    }
}

// Pure function: a non-negative finite amount, or an issue describing why not
fn check_non_negative(value: f64, field: &str) -> Option<String> {
    if !value.is_finite() {
        Some(format!("{field} must be a finite number (got {value})"))
    } else if value < 0.0 {
        Some(format!("{field} must be >= 0 (got {value})"))
    } else {
        None
    }
}

fn pricing_issues(pricing: &PricingConfig) -> Vec<String> {
    [
        check_non_negative(pricing.price_per_employee, "pricing.price_per_employee"),
        check_non_negative(pricing.tax_rate, "pricing.tax_rate"),
        check_non_negative(pricing.fixed_annual_fee, "pricing.fixed_annual_fee"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn activation_issues(activation: &ActivationConfig) -> Vec<String> {
    let mut issues: Vec<String> = check_non_negative(
        activation.amplification_factor,
        "activation.amplification_factor",
    )
    .into_iter()
    .collect();

    if !ActivationConfig::is_valid_cap(activation.activation_cap) {
        issues.push(format!(
            "activation.activation_cap must be between 0.0 and 1.0 (got {})",
            activation.activation_cap
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn accumulates_all_issues() {
        let config = EngineConfig {
            pricing: PricingConfig {
                price_per_employee: -1.0,
                tax_rate: f64::NAN,
                ..Default::default()
            },
            activation: ActivationConfig {
                amplification_factor: -2.0,
                activation_cap: 1.5,
            },
        };

        match validate_config(&config) {
            Err(Error::InvalidConfig { issues }) => {
                assert_eq!(issues.len(), 4);
                assert!(issues[0].contains("price_per_employee"));
                assert!(issues[1].contains("tax_rate"));
                assert!(issues[2].contains("amplification_factor"));
                assert!(issues[3].contains("activation_cap"));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn cap_bounds_are_inclusive() {
        for cap in [0.0, 1.0] {
            let config = EngineConfig::default().with_activation(ActivationConfig {
                activation_cap: cap,
                ..Default::default()
            });
            assert!(validate_config(&config).is_ok(), "cap {cap} should be valid");
        }
    }

    #[test]
    fn activation_section_validates_alone() {
        assert!(validate_activation(&ActivationConfig::default()).is_ok());

        let negative_cap = ActivationConfig {
            activation_cap: -0.1,
            ..Default::default()
        };
        match validate_activation(&negative_cap) {
            Err(Error::InvalidConfig { issues }) => {
                assert_eq!(issues.len(), 1);
                assert!(issues[0].contains("activation_cap"));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn zero_price_is_allowed() {
        let config = EngineConfig::default().with_pricing(PricingConfig {
            price_per_employee: 0.0,
            ..Default::default()
        });
        assert!(validate_config(&config).is_ok());
    }
}
