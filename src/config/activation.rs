//! Activation policy: how generously the entered adoption rate is credited.

use serde::{Deserialize, Serialize};

/// Amplification and ceiling applied under the "any use" basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// Multiplier applied to the entered adoption fraction
    #[serde(default = "default_amplification_factor")]
    pub amplification_factor: f64,

    /// Ceiling on effective activation (0.0-1.0)
    #[serde(default = "default_activation_cap")]
    pub activation_cap: f64,
}

pub fn default_amplification_factor() -> f64 {
    1.5
}

pub fn default_activation_cap() -> f64 {
    0.45
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            amplification_factor: default_amplification_factor(),
            activation_cap: default_activation_cap(),
        }
    }
}

impl ActivationConfig {
    pub fn is_valid_cap(cap: f64) -> bool {
        (0.0..=1.0).contains(&cap)
    }
}
