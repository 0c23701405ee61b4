//! Explanatory text derived from an [`EngineResult`].
//!
//! These helpers never compute anything new and never format currency;
//! monetary display belongs to the host shell. They only turn facts already
//! present in the result into the sentences the calculator shows.

use serde::Serialize;

use crate::activation::ActivationModel;
use crate::config::{CostBasis, PricingPolicy};
use crate::core::numeric::fraction_to_pct;
use crate::core::{ActivationBasis, EngineInput, EngineResult};

/// Corrective hint shown when the program does not pay for itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NegativeRoiHint {
    /// Unclamped break-even activation percentage from the result.
    pub required_activation_pct: f64,
}

impl NegativeRoiHint {
    /// `Some` only when net benefit is negative and break-even is defined.
    pub fn from_result(result: &EngineResult) -> Option<Self> {
        if result.net_benefit >= 0.0 {
            return None;
        }
        result
            .break_even
            .raw_pct
            .map(|required_activation_pct| Self {
                required_activation_pct,
            })
    }

    pub fn message(&self) -> String {
        format!(
            "Hint: Increase activation to ~{:.1}% or raise \"Reduction with program\" to improve ROI.",
            self.required_activation_pct
        )
    }
}

/// Sentence describing how the effective activation was derived.
pub fn activation_line(
    basis: ActivationBasis,
    entered_pct: f64,
    effective_pct: f64,
    model: &ActivationModel,
) -> String {
    let effective = effective_pct.round();
    match basis {
        ActivationBasis::AnyUse => format!(
            "Activation basis: {} — effective {effective}% from entered {entered_pct}% (×{}, capped at {}%).",
            basis.label(),
            model.amplification_factor(),
            display_pct(fraction_to_pct(model.activation_cap())),
        ),
        ActivationBasis::LoginsOnly => format!(
            "Activation basis: {} — effective {effective}% (same as entered {entered_pct}%).",
            basis.label(),
        ),
    }
}

// Drops float noise like 45.00000000000001 without rounding real decimals away
fn display_pct(pct: f64) -> f64 {
    (pct * 1e6).round() / 1e6
}

/// [`activation_line`] for a calculated input/result pair.
pub fn activation_line_for(
    input: &EngineInput,
    result: &EngineResult,
    model: &ActivationModel,
) -> String {
    activation_line(
        input.activation_basis,
        input.entered_adoption_pct,
        result.effective_activation_pct(),
        model,
    )
}

/// Short note explaining how program cost was derived.
pub fn cost_note(pricing: &PricingPolicy) -> String {
    let price = if pricing.includes_tax() {
        format!("plan price ÷ {}", 1.0 + pricing.tax_rate())
    } else {
        "plan price".to_string()
    };
    let heads = match pricing.cost_basis() {
        CostBasis::TotalHeadcount => "total employees",
        CostBasis::Adopters => "activated employees",
    };
    let fee = if pricing.fixed_annual_fee() > 0.0 {
        " + fixed annual fee"
    } else {
        ""
    };
    format!("Ex-tax ({price} × {heads}{fee})")
}
