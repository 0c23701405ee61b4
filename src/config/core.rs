use serde::{Deserialize, Serialize};

use super::activation::ActivationConfig;
use super::pricing::PricingConfig;

/// Root configuration structure for activation-roi
///
/// Supplied once at startup and read-only for the life of an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Pricing policy (price, tax treatment, cost basis)
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Activation policy (amplification and cap)
    #[serde(default)]
    pub activation: ActivationConfig,
}

impl EngineConfig {
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_activation(mut self, activation: ActivationConfig) -> Self {
        self.activation = activation;
        self
    }

    /// Render as TOML, e.g. to seed a `.activation-roi.toml`.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
