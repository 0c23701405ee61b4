//! Activation-aware ROI engine for workplace program business cases.
//!
//! Given headcount, pay levels and assumed behavioural improvements, the
//! engine projects annual savings across four channels (productivity,
//! turnover, absenteeism, manager time), program cost, net benefit, ROI and
//! the activation rate needed to break even.
//!
//! ```rust
//! use activation_roi::{RoiEngine, ScenarioPreset};
//!
//! let engine = RoiEngine::default();
//! let result = engine.calculate(&ScenarioPreset::Typical.input(100.0));
//!
//! assert!(result.net_benefit > 0.0);
//! assert_eq!(result.break_even.display_text(), "19.1%");
//! ```

// Export modules for library usage
pub mod activation;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod observability;
pub mod report;

// Re-export commonly used types
pub use crate::activation::ActivationModel;
pub use crate::config::{
    load_config, ActivationConfig, CostBasis, EngineConfig, PricingConfig, PricingPolicy,
    ScenarioPreset,
};
pub use crate::core::{
    ActivationBasis, BreakEven, Channel, ChannelResult, EngineInput, EngineResult,
};
pub use crate::engine::RoiEngine;
pub use crate::errors::{Error, Result};
pub use crate::report::NegativeRoiHint;
