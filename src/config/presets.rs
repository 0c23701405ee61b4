//! Scenario presets for quick what-if exploration.
//!
//! Three realistic channel profiles:
//! - **Low**: conservative impact and modest adoption
//! - **Typical**: the default starting point
//! - **High**: strong impact with deeper adoption
//!
//! Presets fill in every channel parameter but not headcount, which is
//! always the prospect's own number.
//!
//! # Example
//!
//! ```rust
//! use activation_roi::config::presets::ScenarioPreset;
//!
//! let input = ScenarioPreset::Typical.input(250.0);
//! assert_eq!(input.average_salary, 110_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{ActivationBasis, EngineInput};
use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioPreset {
    /// Low impact assumptions
    Low,
    /// Typical assumptions (recommended)
    #[default]
    Typical,
    /// High impact assumptions
    High,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 3] = [
        ScenarioPreset::Low,
        ScenarioPreset::Typical,
        ScenarioPreset::High,
    ];

    /// Build an engine input for `employee_count` using this preset's parameters.
    pub fn input(self, employee_count: f64) -> EngineInput {
        let base = EngineInput::new(employee_count, 0.0);
        match self {
            ScenarioPreset::Low => EngineInput {
                average_salary: 100_000.0,
                ..base
            }
            .with_productivity(0.03, 0.22)
            .with_adoption(18.0, ActivationBasis::AnyUse)
            .with_turnover(0.10, 0.08, 0.45)
            .with_absenteeism(3.0, 0.10)
            .with_manager_time(12.0, 0.6, 135_000.0),
            ScenarioPreset::Typical => EngineInput {
                average_salary: 110_000.0,
                ..base
            }
            .with_productivity(0.04, 0.30)
            .with_adoption(28.0, ActivationBasis::AnyUse)
            .with_turnover(0.13, 0.10, 0.50)
            .with_absenteeism(3.5, 0.15)
            .with_manager_time(10.0, 1.0, 140_000.0),
            ScenarioPreset::High => EngineInput {
                average_salary: 120_000.0,
                ..base
            }
            .with_productivity(0.05, 0.35)
            .with_adoption(38.0, ActivationBasis::AnyUse)
            .with_turnover(0.16, 0.15, 0.60)
            .with_absenteeism(4.0, 0.18)
            .with_manager_time(9.0, 1.2, 145_000.0),
        }
    }

    /// Next preset towards High, staying put at the end.
    pub fn next(self) -> Self {
        match self {
            ScenarioPreset::Low => ScenarioPreset::Typical,
            ScenarioPreset::Typical | ScenarioPreset::High => ScenarioPreset::High,
        }
    }

    /// Previous preset towards Low, staying put at the start.
    pub fn previous(self) -> Self {
        match self {
            ScenarioPreset::High => ScenarioPreset::Typical,
            ScenarioPreset::Typical | ScenarioPreset::Low => ScenarioPreset::Low,
        }
    }

    /// Parse preset from string name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "low-impact" => Some(ScenarioPreset::Low),
            "typical" => Some(ScenarioPreset::Typical),
            "high" | "high-impact" => Some(ScenarioPreset::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioPreset::Low => "low",
            ScenarioPreset::Typical => "typical",
            ScenarioPreset::High => "high",
        }
    }
}

impl std::fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScenarioPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioPreset::parse(s).ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_preset_values() {
        let input = ScenarioPreset::Typical.input(100.0);
        assert_eq!(input.employee_count, 100.0);
        assert_eq!(input.entered_adoption_pct, 28.0);
        assert_eq!(input.productivity.stress_loss, 0.04);
        assert_eq!(input.turnover.turnover_rate, 0.13);
        assert_eq!(input.absenteeism.annual_absence_days, 3.5);
        assert_eq!(input.manager_time.manager_to_staff_ratio, 10.0);
        assert_eq!(input.activation_basis, ActivationBasis::AnyUse);
    }

    #[test]
    fn presets_increase_in_salary_and_adoption() {
        let [low, typical, high] = ScenarioPreset::ALL.map(|p| p.input(50.0));
        assert!(low.average_salary < typical.average_salary);
        assert!(typical.average_salary < high.average_salary);
        assert!(low.entered_adoption_pct < typical.entered_adoption_pct);
        assert!(typical.entered_adoption_pct < high.entered_adoption_pct);
    }

    #[test]
    fn navigation_clamps_at_ends() {
        assert_eq!(ScenarioPreset::Low.previous(), ScenarioPreset::Low);
        assert_eq!(ScenarioPreset::Low.next(), ScenarioPreset::Typical);
        assert_eq!(ScenarioPreset::High.next(), ScenarioPreset::High);
        assert_eq!(ScenarioPreset::High.previous(), ScenarioPreset::Typical);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(ScenarioPreset::parse("HIGH"), Some(ScenarioPreset::High));
        assert_eq!(ScenarioPreset::default(), ScenarioPreset::Typical);
        assert_eq!(ScenarioPreset::Low.to_string(), "low");
        assert!(matches!(
            "medium".parse::<ScenarioPreset>(),
            Err(Error::UnknownPreset(_))
        ));
    }
}
