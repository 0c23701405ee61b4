//! Process-wide policy configuration.
//!
//! Pricing and activation policy are supplied once at startup and handed to
//! [`RoiEngine::new`](crate::engine::RoiEngine::new). Nothing here is
//! global: engines built from different configs coexist independently.

mod activation;
mod core;
mod loader;
mod pricing;
pub mod presets;
pub mod validation;

pub use activation::{default_activation_cap, default_amplification_factor, ActivationConfig};
pub use self::core::EngineConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use presets::ScenarioPreset;
pub use pricing::{
    default_price_includes_tax, default_price_per_employee, default_tax_rate, CostBasis,
    PricingConfig, PricingPolicy,
};
pub use validation::{validate_activation, validate_config};
