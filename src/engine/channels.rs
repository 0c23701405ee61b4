//! Per-channel savings formulas.
//!
//! Productivity, turnover and absenteeism are valued per adopting employee.
//! Manager time scales with manager headcount instead, so it is computed as
//! an organization-wide total and normalized back to a per-employee
//! equivalent for the break-even solve.

use crate::core::numeric::safe_div;
use crate::core::{
    AbsenteeismParams, ManagerTimeParams, ProductivityParams, TurnoverParams,
    MANAGER_WORKING_HOURS_PER_YEAR, MONTHS_PER_YEAR, WORKING_DAYS_PER_YEAR,
};

/// `salary × stress_loss × reduction_with_program`
pub fn productivity_per_employee(salary: f64, params: &ProductivityParams) -> f64 {
    salary * params.stress_loss * params.reduction_with_program
}

/// `turnover_rate × (replacement_cost × salary) × turnover_reduction`
pub fn turnover_per_employee(salary: f64, params: &TurnoverParams) -> f64 {
    params.turnover_rate * (params.replacement_cost * salary) * params.turnover_reduction
}

/// `absence_days × absence_reduction × daily_cost`
pub fn absenteeism_per_employee(salary: f64, params: &AbsenteeismParams) -> f64 {
    let daily_cost = safe_div(salary, WORKING_DAYS_PER_YEAR, 0.0);
    params.annual_absence_days * params.absence_reduction * daily_cost
}

/// Manager time saved across the organization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerTime {
    pub manager_count: f64,
    pub hourly_rate: f64,
    /// Annual value, already weighted by activation.
    pub total: f64,
    /// `total / (employees × activation)`, or 0 when nobody is activated.
    pub per_employee_equivalent: f64,
}

pub fn manager_time(employee_count: f64, params: &ManagerTimeParams, activation: f64) -> ManagerTime {
    let manager_count = safe_div(employee_count, params.effective_ratio(), 0.0);
    let hourly_rate = safe_div(
        params.manager_annual_salary,
        MANAGER_WORKING_HOURS_PER_YEAR,
        0.0,
    );
    let total =
        manager_count * params.manager_hours_per_month * MONTHS_PER_YEAR * hourly_rate * activation;
    let per_employee_equivalent = safe_div(total, employee_count * activation, 0.0);

    ManagerTime {
        manager_count,
        hourly_rate,
        total,
        per_employee_equivalent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn productivity_formula() {
        let params = ProductivityParams {
            stress_loss: 0.03,
            reduction_with_program: 0.30,
        };
        assert!((productivity_per_employee(110_000.0, &params) - 990.0).abs() < EPS);
    }

    #[test]
    fn turnover_formula() {
        let params = TurnoverParams {
            turnover_rate: 0.13,
            turnover_reduction: 0.10,
            replacement_cost: 0.50,
        };
        assert!((turnover_per_employee(110_000.0, &params) - 715.0).abs() < EPS);
    }

    #[test]
    fn absenteeism_formula_uses_220_working_days() {
        let params = AbsenteeismParams {
            annual_absence_days: 3.5,
            absence_reduction: 0.15,
        };
        assert!((absenteeism_per_employee(110_000.0, &params) - 262.5).abs() < EPS);
    }

    #[test]
    fn manager_time_scales_with_manager_headcount() {
        let params = ManagerTimeParams {
            manager_to_staff_ratio: 10.0,
            manager_hours_per_month: 1.0,
            manager_annual_salary: 140_000.0,
        };
        let mt = manager_time(100.0, &params, 0.42);

        assert_eq!(mt.manager_count, 10.0);
        assert!((mt.hourly_rate - 70.707_070_707).abs() < 1e-6);
        assert!((mt.total - 3_563.636_363_636).abs() < 1e-6);
        assert!((mt.per_employee_equivalent - 84.848_484_848).abs() < 1e-6);
    }

    #[test]
    fn manager_per_employee_is_zero_without_activation() {
        let mt = manager_time(100.0, &ManagerTimeParams::default(), 0.0);
        assert_eq!(mt.total, 0.0);
        assert_eq!(mt.per_employee_equivalent, 0.0);
    }

    #[test]
    fn manager_per_employee_is_zero_without_employees() {
        let mt = manager_time(0.0, &ManagerTimeParams::default(), 0.45);
        assert_eq!(mt.manager_count, 0.0);
        assert_eq!(mt.per_employee_equivalent, 0.0);
    }

    #[test]
    fn manager_ratio_below_one_is_floored() {
        let params = ManagerTimeParams {
            manager_to_staff_ratio: 0.0,
            ..Default::default()
        };
        let mt = manager_time(40.0, &params, 1.0);
        assert_eq!(mt.manager_count, 40.0);
    }
}
