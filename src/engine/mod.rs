//! The ROI engine.
//!
//! Values each savings channel, aggregates them against program cost under
//! the configured pricing policy, and solves for break-even activation.

pub mod break_even;
pub mod channels;
pub mod cost;


use tracing::{debug, debug_span, warn};

use crate::activation::ActivationModel;
use crate::config::{validate_config, EngineConfig, PricingPolicy};
use crate::core::numeric::{finite_or, safe_div};
use crate::core::{Channel, ChannelResult, EngineInput, EngineResult};
use crate::errors::Result;

pub use channels::ManagerTime;

/// The ROI engine: a pure function of its policy and one input record.
///
/// Pricing and activation policy are fixed at construction; `calculate`
/// holds no state between calls, so identical inputs give bit-identical
/// results.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiEngine {
    pricing: PricingPolicy,
    activation: ActivationModel,
}

impl RoiEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self::from_policies(
            PricingPolicy::new(config.pricing),
            ActivationModel::new(config.activation)?,
        ))
    }

    /// Build an engine from already-validated policies.
    pub(crate) fn from_policies(pricing: PricingPolicy, activation: ActivationModel) -> Self {
        Self {
            pricing,
            activation,
        }
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn activation_model(&self) -> &ActivationModel {
        &self.activation
    }

    pub fn calculate(&self, input: &EngineInput) -> EngineResult {
        let _span = debug_span!("roi_calculate").entered();

        let (input, replaced) = input.sanitized();
        if replaced > 0 {
            warn!(replaced, "non-finite inputs replaced with 0");
        }

        let activation = self
            .activation
            .effective(input.entered_adoption_pct, input.activation_basis);
        let employees = input.employee_count;
        let salary = input.average_salary;

        let productivity = channels::productivity_per_employee(salary, &input.productivity);
        let turnover = channels::turnover_per_employee(salary, &input.turnover);
        let absenteeism = channels::absenteeism_per_employee(salary, &input.absenteeism);
        let manager = channels::manager_time(employees, &input.manager_time, activation);

        // Manager time is already a total, so it stays out of the per-employee sum
        let weighted_per_employee = productivity + turnover + absenteeism;
        let adopters = employees * activation;

        let mut channel_breakdown = [
            channel_result(Channel::Productivity, productivity, adopters),
            channel_result(Channel::Turnover, turnover, adopters),
            channel_result(Channel::Absenteeism, absenteeism, adopters),
            ChannelResult {
                channel: Channel::ManagerTime,
                per_employee_annual_value: defined(manager.per_employee_equivalent),
                annual_value: defined(manager.total),
            },
        ];

        // Savings are the breakdown sum; if that overflows both are dropped together
        let mut total_annual_savings: f64 =
            channel_breakdown.iter().map(|entry| entry.annual_value).sum();
        if !total_annual_savings.is_finite() {
            warn!("channel savings overflowed; reporting zero savings");
            for entry in &mut channel_breakdown {
                entry.annual_value = 0.0;
            }
            total_annual_savings = 0.0;
        }

        let total_annual_cost = defined(cost::annual_cost(&self.pricing, employees, activation));
        let net_benefit = defined(total_annual_savings - total_annual_cost);
        let roi_percent = if total_annual_cost > 0.0 {
            safe_div(net_benefit, total_annual_cost, 0.0) * 100.0
        } else {
            0.0
        };

        let break_even = break_even::solve(
            cost::break_even_cost_per_head(&self.pricing, employees),
            weighted_per_employee,
            manager.per_employee_equivalent,
        );

        debug!(
            activation,
            total_annual_savings,
            total_annual_cost,
            net_benefit,
            roi_percent,
            break_even_pct = ?break_even.raw_pct,
            "calculated ROI"
        );

        EngineResult {
            effective_activation: activation,
            total_annual_savings,
            total_annual_cost,
            net_benefit,
            roi_percent: defined(roi_percent),
            break_even,
            channel_breakdown,
            weighted_per_employee: defined(weighted_per_employee),
            manager_per_employee_equivalent: defined(manager.per_employee_equivalent),
            price_used: self.pricing.price_used(),
        }
    }
}

impl Default for RoiEngine {
    fn default() -> Self {
        Self::from_policies(PricingPolicy::default(), ActivationModel::default())
    }
}

// Overflowing inputs can still produce infinities; results never carry them
fn defined(value: f64) -> f64 {
    finite_or(value, 0.0)
}

fn channel_result(channel: Channel, per_employee: f64, adopters: f64) -> ChannelResult {
    ChannelResult {
        channel,
        per_employee_annual_value: defined(per_employee),
        annual_value: defined(adopters * per_employee),
    }
}
