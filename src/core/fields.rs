//! Coercion of raw form fields into an [`EngineInput`].
//!
//! The host shell hands over whatever text the user typed. Parsing is
//! lenient: anything that is not a digit or a decimal point is dropped,
//! and a field that still fails to parse falls back to its documented
//! default. The engine therefore only ever sees plain numbers.

use std::collections::{BTreeMap, HashMap};

use super::numeric::{fraction_to_pct, pct_to_fraction};
use super::types::{
    AbsenteeismParams, ActivationBasis, EngineInput, ManagerTimeParams, ProductivityParams,
    TurnoverParams, DEFAULT_MANAGER_HOURS_PER_MONTH, DEFAULT_MANAGER_RATIO,
    DEFAULT_MANAGER_SALARY, DEFAULT_REPLACEMENT_COST,
};

/// Form field names understood by [`EngineInput::from_fields`].
pub mod names {
    pub const EMPLOYEES: &str = "employees";
    pub const SALARY: &str = "salary";
    pub const ADOPTION_PCT: &str = "adoptionPct";
    pub const ACTIVATION_BASIS: &str = "activationBasis";
    pub const LOSS_PCT: &str = "lossPct";
    pub const REDUCTION_PCT: &str = "reductionPct";
    pub const TURNOVER_RATE: &str = "turnoverRate";
    pub const TURNOVER_REDUCTION: &str = "turnoverReduction";
    pub const REPLACEMENT_PCT: &str = "replacementPct";
    pub const DAYS_ABSENCE: &str = "daysAbsence";
    pub const ABSENCE_REDUCTION: &str = "absenceReduction";
    pub const MANAGER_RATIO: &str = "managerRatio";
    pub const MANAGER_HOURS: &str = "mgrHours";
    pub const MANAGER_SALARY: &str = "mgrSalary";
}

/// Anything that can look up a raw field value by name.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for [(&str, &str)] {
    fn field(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<const N: usize> FieldSource for [(&str, &str); N] {
    fn field(&self, name: &str) -> Option<&str> {
        self.as_slice().field(name)
    }
}

/// Parse a user-typed number, returning `default` when nothing usable remains.
///
/// Every character other than an ASCII digit or `.` is discarded first, so
/// currency symbols, thousands separators and signs are ignored. The longest
/// leading decimal number of what remains is parsed (`"1.2.3"` yields 1.2).
///
/// ```
/// use activation_roi::core::fields::parse_number;
///
/// assert_eq!(parse_number("$110,000", 0.0), 110_000.0);
/// assert_eq!(parse_number("", 10.0), 10.0);
/// assert_eq!(parse_number("n/a", 50.0), 50.0);
/// ```
pub fn parse_number(raw: &str, default: f64) -> f64 {
    let mut numeric = String::with_capacity(raw.len());
    let mut seen_point = false;
    for ch in raw.chars().filter(|c| c.is_ascii_digit() || *c == '.') {
        if ch == '.' {
            if seen_point {
                break;
            }
            seen_point = true;
        }
        numeric.push(ch);
    }

    match numeric.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

fn number<S: FieldSource + ?Sized>(source: &S, name: &str, default: f64) -> f64 {
    source
        .field(name)
        .map_or(default, |raw| parse_number(raw, default))
}

/// A percentage field converted to a fraction; `default_pct` is on the 0-100 scale.
fn fraction<S: FieldSource + ?Sized>(source: &S, name: &str, default_pct: f64) -> f64 {
    pct_to_fraction(number(source, name, default_pct))
}

impl EngineInput {
    /// Build an input from raw form fields, applying the documented defaults.
    ///
    /// Missing or unparseable fields default to 0, except `replacementPct`
    /// (50), `managerRatio` (10), `mgrHours` (1.0), `mgrSalary` (140000)
    /// and `activationBasis` (any use). Percentage fields are converted to
    /// fractions; `adoptionPct` stays on the 0-100 scale.
    pub fn from_fields<S: FieldSource + ?Sized>(source: &S) -> Self {
        let activation_basis = match source.field(names::ACTIVATION_BASIS) {
            None => ActivationBasis::default(),
            Some(raw) => ActivationBasis::parse(raw).unwrap_or_else(|| {
                tracing::warn!(basis = raw, "unknown activation basis, using any use");
                ActivationBasis::default()
            }),
        };

        Self {
            employee_count: number(source, names::EMPLOYEES, 0.0),
            average_salary: number(source, names::SALARY, 0.0),
            entered_adoption_pct: number(source, names::ADOPTION_PCT, 0.0),
            activation_basis,
            productivity: ProductivityParams {
                stress_loss: fraction(source, names::LOSS_PCT, 0.0),
                reduction_with_program: fraction(source, names::REDUCTION_PCT, 0.0),
            },
            turnover: TurnoverParams {
                turnover_rate: fraction(source, names::TURNOVER_RATE, 0.0),
                turnover_reduction: fraction(source, names::TURNOVER_REDUCTION, 0.0),
                replacement_cost: fraction(
                    source,
                    names::REPLACEMENT_PCT,
                    fraction_to_pct(DEFAULT_REPLACEMENT_COST),
                ),
            },
            absenteeism: AbsenteeismParams {
                annual_absence_days: number(source, names::DAYS_ABSENCE, 0.0),
                absence_reduction: fraction(source, names::ABSENCE_REDUCTION, 0.0),
            },
            manager_time: ManagerTimeParams {
                manager_to_staff_ratio: number(source, names::MANAGER_RATIO, DEFAULT_MANAGER_RATIO)
                    .max(1.0),
                manager_hours_per_month: number(
                    source,
                    names::MANAGER_HOURS,
                    DEFAULT_MANAGER_HOURS_PER_MONTH,
                ),
                manager_annual_salary: number(
                    source,
                    names::MANAGER_SALARY,
                    DEFAULT_MANAGER_SALARY,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_number_strips_currency_and_separators() {
        assert_eq!(parse_number("$110,000", 0.0), 110_000.0);
        assert_eq!(parse_number(" 3.5 days", 0.0), 3.5);
        assert_eq!(parse_number("28%", 0.0), 28.0);
    }

    #[test]
    fn parse_number_drops_sign() {
        assert_eq!(parse_number("-5", 0.0), 5.0);
    }

    #[test]
    fn parse_number_stops_at_second_point() {
        assert_eq!(parse_number("1.2.3", 0.0), 1.2);
    }

    #[test]
    fn parse_number_falls_back_to_default() {
        assert_eq!(parse_number("", 7.0), 7.0);
        assert_eq!(parse_number(".", 7.0), 7.0);
        assert_eq!(parse_number("abc", 7.0), 7.0);
    }

    #[test]
    fn empty_form_matches_default_input() {
        let fields: HashMap<String, String> = HashMap::new();
        assert_eq!(EngineInput::from_fields(&fields), EngineInput::default());
    }

    #[test]
    fn percent_fields_become_fractions() {
        let fields = [
            (names::EMPLOYEES, "100"),
            (names::SALARY, "$110,000"),
            (names::ADOPTION_PCT, "28"),
            (names::LOSS_PCT, "4"),
            (names::REDUCTION_PCT, "30"),
            (names::TURNOVER_RATE, "13"),
            (names::TURNOVER_REDUCTION, "10"),
            (names::REPLACEMENT_PCT, "50"),
            (names::DAYS_ABSENCE, "3.5"),
            (names::ABSENCE_REDUCTION, "15"),
        ];
        let input = EngineInput::from_fields(&fields);

        assert_eq!(input.employee_count, 100.0);
        assert_eq!(input.average_salary, 110_000.0);
        assert_eq!(input.entered_adoption_pct, 28.0);
        assert_eq!(input.productivity.stress_loss, 0.04);
        assert_eq!(input.productivity.reduction_with_program, 0.30);
        assert_eq!(input.turnover.turnover_rate, 0.13);
        assert_eq!(input.turnover.replacement_cost, 0.50);
        assert_eq!(input.absenteeism.annual_absence_days, 3.5);
        assert_eq!(input.absenteeism.absence_reduction, 0.15);
    }

    #[test]
    fn manager_defaults_apply_when_missing_or_garbled() {
        let fields = [(names::MANAGER_RATIO, "n/a"), (names::MANAGER_SALARY, "")];
        let input = EngineInput::from_fields(&fields);

        assert_eq!(input.manager_time.manager_to_staff_ratio, 10.0);
        assert_eq!(input.manager_time.manager_hours_per_month, 1.0);
        assert_eq!(input.manager_time.manager_annual_salary, 140_000.0);
    }

    #[test]
    fn manager_ratio_floored_at_one() {
        let fields = [(names::MANAGER_RATIO, "0")];
        let input = EngineInput::from_fields(&fields);
        assert_eq!(input.manager_time.manager_to_staff_ratio, 1.0);
    }

    #[test]
    fn activation_basis_field() {
        let logins = [(names::ACTIVATION_BASIS, "logins")];
        assert_eq!(
            EngineInput::from_fields(&logins).activation_basis,
            ActivationBasis::LoginsOnly
        );

        let unknown = [(names::ACTIVATION_BASIS, "badge-swipes")];
        assert_eq!(
            EngineInput::from_fields(&unknown).activation_basis,
            ActivationBasis::AnyUse
        );
    }

    #[test]
    fn btree_source_is_supported() {
        let mut fields = BTreeMap::new();
        fields.insert(names::EMPLOYEES.to_string(), "42".to_string());
        assert_eq!(EngineInput::from_fields(&fields).employee_count, 42.0);
    }
}
