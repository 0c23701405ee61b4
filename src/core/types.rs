//! Value types flowing in and out of the ROI engine.
//!
//! All rates on [`EngineInput`] channel records are fractions (0.30 means
//! 30%). The one exception is `entered_adoption_pct`, which stays on the
//! 0-100 scale the user typed it in, because the activation transform
//! owns the conversion and clamping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::numeric::fraction_to_pct;
use crate::errors::Error;

/// Working days used to derive a daily salary cost.
pub const WORKING_DAYS_PER_YEAR: f64 = 220.0;

/// Paid hours per year used to derive a manager's hourly rate.
pub const MANAGER_WORKING_HOURS_PER_YEAR: f64 = 1980.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Fallback staff per manager when the shell supplies none.
pub const DEFAULT_MANAGER_RATIO: f64 = 10.0;

/// Fallback manager hours saved per month.
pub const DEFAULT_MANAGER_HOURS_PER_MONTH: f64 = 1.0;

/// Fallback annual manager salary.
pub const DEFAULT_MANAGER_SALARY: f64 = 140_000.0;

/// Fallback replacement cost as a fraction of salary.
pub const DEFAULT_REPLACEMENT_COST: f64 = 0.50;

/// Which raw signal the activation transform is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivationBasis {
    /// Any use of the program counts; the entered rate is amplified and capped.
    #[default]
    #[serde(rename = "any", alias = "any-use")]
    AnyUse,
    /// Only logins count; the entered rate is used as-is.
    #[serde(rename = "logins", alias = "logins-only")]
    LoginsOnly,
}

impl ActivationBasis {
    /// Parse a basis name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" | "any-use" | "anyuse" => Some(Self::AnyUse),
            "logins" | "logins-only" | "loginsonly" => Some(Self::LoginsOnly),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnyUse => "any",
            Self::LoginsOnly => "logins",
        }
    }

    /// Human-readable label used in explanatory text.
    pub fn label(self) -> &'static str {
        match self {
            Self::AnyUse => "Any use",
            Self::LoginsOnly => "Logins only",
        }
    }
}

impl fmt::Display for ActivationBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivationBasis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownActivationBasis(s.to_string()))
    }
}

/// Productivity lost to stress and how much of it the program recovers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductivityParams {
    /// Fraction of salary-equivalent output lost to stress.
    pub stress_loss: f64,
    /// Fraction of that loss recovered with the program.
    pub reduction_with_program: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnoverParams {
    /// Annual voluntary turnover rate.
    pub turnover_rate: f64,
    /// Relative reduction in turnover with the program.
    pub turnover_reduction: f64,
    /// Cost of replacing one employee as a fraction of salary.
    pub replacement_cost: f64,
}

impl Default for TurnoverParams {
    fn default() -> Self {
        Self {
            turnover_rate: 0.0,
            turnover_reduction: 0.0,
            replacement_cost: DEFAULT_REPLACEMENT_COST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AbsenteeismParams {
    /// Absence days per employee per year.
    pub annual_absence_days: f64,
    /// Relative reduction in absence with the program.
    pub absence_reduction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManagerTimeParams {
    /// Staff per manager. Floored at 1 before use.
    pub manager_to_staff_ratio: f64,
    /// Hours of manager time saved per month.
    pub manager_hours_per_month: f64,
    pub manager_annual_salary: f64,
}

impl ManagerTimeParams {
    /// Ratio actually used in calculations, never below 1.
    pub fn effective_ratio(&self) -> f64 {
        if self.manager_to_staff_ratio.is_nan() {
            1.0
        } else {
            self.manager_to_staff_ratio.max(1.0)
        }
    }
}

impl Default for ManagerTimeParams {
    fn default() -> Self {
        Self {
            manager_to_staff_ratio: DEFAULT_MANAGER_RATIO,
            manager_hours_per_month: DEFAULT_MANAGER_HOURS_PER_MONTH,
            manager_annual_salary: DEFAULT_MANAGER_SALARY,
        }
    }
}

/// Business inputs for one calculation.
///
/// Constructed fresh by the shell on every interaction; the engine never
/// mutates it. `Default` matches what the shell produces from an empty
/// form (see [`EngineInput::from_fields`](crate::core::fields)).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineInput {
    /// Headcount.
    pub employee_count: f64,
    /// Annual base salary.
    pub average_salary: f64,
    /// Raw claimed usage rate, 0-100 scale, not pre-clamped.
    pub entered_adoption_pct: f64,
    pub activation_basis: ActivationBasis,
    pub productivity: ProductivityParams,
    pub turnover: TurnoverParams,
    pub absenteeism: AbsenteeismParams,
    pub manager_time: ManagerTimeParams,
}

impl EngineInput {
    /// Parse an input record posted by the shell as JSON.
    ///
    /// Missing fields take their [`Default`] values, like an empty form.
    pub fn from_json(json: &str) -> crate::errors::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn new(employee_count: f64, average_salary: f64) -> Self {
        Self {
            employee_count,
            average_salary,
            ..Default::default()
        }
    }

    pub fn with_adoption(mut self, entered_adoption_pct: f64, basis: ActivationBasis) -> Self {
        self.entered_adoption_pct = entered_adoption_pct;
        self.activation_basis = basis;
        self
    }

    pub fn with_productivity(mut self, stress_loss: f64, reduction_with_program: f64) -> Self {
        self.productivity = ProductivityParams {
            stress_loss,
            reduction_with_program,
        };
        self
    }

    pub fn with_turnover(
        mut self,
        turnover_rate: f64,
        turnover_reduction: f64,
        replacement_cost: f64,
    ) -> Self {
        self.turnover = TurnoverParams {
            turnover_rate,
            turnover_reduction,
            replacement_cost,
        };
        self
    }

    pub fn with_absenteeism(mut self, annual_absence_days: f64, absence_reduction: f64) -> Self {
        self.absenteeism = AbsenteeismParams {
            annual_absence_days,
            absence_reduction,
        };
        self
    }

    pub fn with_manager_time(
        mut self,
        manager_to_staff_ratio: f64,
        manager_hours_per_month: f64,
        manager_annual_salary: f64,
    ) -> Self {
        self.manager_time = ManagerTimeParams {
            manager_to_staff_ratio,
            manager_hours_per_month,
            manager_annual_salary,
        };
        self
    }

    /// Copy with non-finite numbers replaced by 0 and headcount floored at 0.
    ///
    /// Returns the cleaned input and the number of fields that were replaced.
    pub fn sanitized(&self) -> (Self, usize) {
        let mut replaced = 0usize;
        let mut clean = |value: f64| {
            if value.is_finite() {
                value
            } else {
                replaced += 1;
                0.0
            }
        };

        let input = Self {
            employee_count: clean(self.employee_count).max(0.0),
            average_salary: clean(self.average_salary),
            entered_adoption_pct: clean(self.entered_adoption_pct),
            activation_basis: self.activation_basis,
            productivity: ProductivityParams {
                stress_loss: clean(self.productivity.stress_loss),
                reduction_with_program: clean(self.productivity.reduction_with_program),
            },
            turnover: TurnoverParams {
                turnover_rate: clean(self.turnover.turnover_rate),
                turnover_reduction: clean(self.turnover.turnover_reduction),
                replacement_cost: clean(self.turnover.replacement_cost),
            },
            absenteeism: AbsenteeismParams {
                annual_absence_days: clean(self.absenteeism.annual_absence_days),
                absence_reduction: clean(self.absenteeism.absence_reduction),
            },
            manager_time: ManagerTimeParams {
                manager_to_staff_ratio: clean(self.manager_time.manager_to_staff_ratio),
                manager_hours_per_month: clean(self.manager_time.manager_hours_per_month),
                manager_annual_salary: clean(self.manager_time.manager_annual_salary),
            },
        };
        (input, replaced)
    }
}

/// An independent savings category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Productivity,
    Turnover,
    Absenteeism,
    ManagerTime,
}

impl Channel {
    /// Breakdown order.
    pub const ALL: [Channel; 4] = [
        Channel::Productivity,
        Channel::Turnover,
        Channel::Absenteeism,
        Channel::ManagerTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Productivity => "Productivity",
            Channel::Turnover => "Turnover",
            Channel::Absenteeism => "Absenteeism",
            Channel::ManagerTime => "Manager time",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Savings attributed to one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelResult {
    pub channel: Channel,
    /// Value per adopting employee. For manager time this is the
    /// per-employee equivalent of the manager total.
    pub per_employee_annual_value: f64,
    /// Aggregate annual value across the organization.
    pub annual_value: f64,
}

/// Activation rate at which savings equal cost.
///
/// `raw_pct` is the analytical solution and may exceed 100 (unreachable)
/// or be `None` when no positive per-employee value exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    pub raw_pct: Option<f64>,
}

impl BreakEven {
    pub const UNDEFINED: BreakEven = BreakEven { raw_pct: None };

    /// Placeholder shown when break-even is undefined.
    pub const NOT_APPLICABLE: &'static str = "—";

    pub fn defined(raw_pct: f64) -> Self {
        Self {
            raw_pct: Some(raw_pct),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.raw_pct.is_some()
    }

    /// Break-even clamped into `[0, 100]` for display.
    pub fn display_pct(&self) -> Option<f64> {
        self.raw_pct.map(|pct| pct.clamp(0.0, 100.0))
    }

    /// Whether break-even can be reached with full activation.
    pub fn is_reachable(&self) -> bool {
        matches!(self.raw_pct, Some(pct) if pct <= 100.0)
    }

    /// Clamped percentage with one decimal, or the not-applicable marker.
    pub fn display_text(&self) -> String {
        match self.display_pct() {
            Some(pct) => format!("{pct:.1}%"),
            None => Self::NOT_APPLICABLE.to_string(),
        }
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Output of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineResult {
    /// Effective activation fraction after the activation transform.
    pub effective_activation: f64,
    pub total_annual_savings: f64,
    pub total_annual_cost: f64,
    pub net_benefit: f64,
    /// Signed ROI percentage; 0 when cost is 0.
    pub roi_percent: f64,
    pub break_even: BreakEven,
    /// Productivity, Turnover, Absenteeism, Manager time, in that order.
    pub channel_breakdown: [ChannelResult; 4],
    /// Productivity + turnover + absenteeism value per adopting employee.
    pub weighted_per_employee: f64,
    pub manager_per_employee_equivalent: f64,
    /// Per-head price after tax treatment.
    pub price_used: f64,
}

impl EngineResult {
    /// Pretty JSON for the shell; an undefined break-even becomes `null`.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn effective_activation_pct(&self) -> f64 {
        fraction_to_pct(self.effective_activation)
    }

    /// Display-clamped break-even, `None` when undefined.
    pub fn break_even_activation_pct(&self) -> Option<f64> {
        self.break_even.display_pct()
    }

    /// ROI rounded to a whole percent.
    pub fn roi_rounded(&self) -> i64 {
        self.roi_percent.round() as i64
    }

    pub fn is_profitable(&self) -> bool {
        self.net_benefit >= 0.0
    }

    /// Ordered `(label, amount)` pairs for the savings breakdown.
    pub fn breakdown_pairs(&self) -> [(&'static str, f64); 4] {
        self.channel_breakdown
            .map(|entry| (entry.channel.label(), entry.annual_value))
    }

    pub fn channel(&self, channel: Channel) -> &ChannelResult {
        // channel_breakdown is always laid out in Channel::ALL order
        let index = Channel::ALL
            .iter()
            .position(|c| *c == channel)
            .unwrap_or_default();
        &self.channel_breakdown[index]
    }

    /// Sum of the breakdown; equals `total_annual_savings` within rounding.
    pub fn breakdown_total(&self) -> f64 {
        self.channel_breakdown.iter().map(|c| c.annual_value).sum()
    }
}
