//! Activation model.
//!
//! Self-reported adoption overstates genuine engagement. Under the "any use"
//! basis the entered rate is amplified (deeper usage earns more credit) but
//! capped, bounding how much optimism a business case can carry. Under
//! "logins only" the entered rate is taken at face value.

use crate::config::{validate_activation, ActivationConfig};
use crate::core::numeric::{clamp_unit, pct_to_fraction};
use crate::core::ActivationBasis;
use crate::errors::Result;

/// Maps an entered adoption percentage to an effective activation fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationModel {
    amplification_factor: f64,
    activation_cap: f64,
}

impl ActivationModel {
    /// Build a model from a policy, rejecting a cap outside `[0, 1]` or a
    /// negative amplification factor.
    pub fn new(config: ActivationConfig) -> Result<Self> {
        validate_activation(&config)?;
        Ok(Self {
            amplification_factor: config.amplification_factor,
            activation_cap: config.activation_cap,
        })
    }

    pub fn amplification_factor(&self) -> f64 {
        self.amplification_factor
    }

    pub fn activation_cap(&self) -> f64 {
        self.activation_cap
    }

    /// Effective activation in `[0, activation_cap]` for any-use, `[0, 1]`
    /// for logins-only.
    ///
    /// Never fails: out-of-range and non-finite entries are clamped first.
    ///
    /// ```
    /// use activation_roi::activation::ActivationModel;
    /// use activation_roi::core::ActivationBasis;
    ///
    /// let model = ActivationModel::default();
    /// assert!((model.effective(18.0, ActivationBasis::AnyUse) - 0.27).abs() < 1e-12);
    /// assert_eq!(model.effective(90.0, ActivationBasis::AnyUse), 0.45);
    /// assert_eq!(model.effective(90.0, ActivationBasis::LoginsOnly), 0.9);
    /// ```
    pub fn effective(&self, entered_adoption_pct: f64, basis: ActivationBasis) -> f64 {
        let entered = clamp_unit(pct_to_fraction(entered_adoption_pct));
        match basis {
            ActivationBasis::LoginsOnly => entered,
            ActivationBasis::AnyUse => {
                clamp_unit((entered * self.amplification_factor).min(self.activation_cap))
            }
        }
    }

    /// Whether the any-use cap is what limited the result.
    pub fn is_capped(&self, entered_adoption_pct: f64, basis: ActivationBasis) -> bool {
        match basis {
            ActivationBasis::LoginsOnly => false,
            ActivationBasis::AnyUse => {
                clamp_unit(pct_to_fraction(entered_adoption_pct)) * self.amplification_factor
                    >= self.activation_cap
            }
        }
    }
}

impl Default for ActivationModel {
    fn default() -> Self {
        let config = ActivationConfig::default();
        Self {
            amplification_factor: config.amplification_factor,
            activation_cap: config.activation_cap,
        }
    }
}
