//! Leave benefit top-up calculation.
//!
//! Computes the daily top-up payable while an employee is on paid maternity,
//! adoption, parental or illness leave: the difference between normal daily
//! income and leave daily income, limited to the capped daily benefit amount.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::LeaveBenefitResult;

use super::conversions::{ensure_non_negative, monthly_to_daily, round_currency, salary_cap};

/// Returns the replacement fraction applied to the capped daily income.
///
/// The daily benefit amount is 66% of the employee's gross daily income,
/// computed from the salary after applying the statutory ceiling.
pub fn benefit_percentage() -> Decimal {
    Decimal::new(66, 2)
}

/// Calculates the daily leave top-up for a normal and an on-leave salary.
///
/// The calculation steps, in order:
/// 1. Derive the normal daily income (Y1) from the uncapped monthly salary.
/// 2. Derive the leave daily income (Y2) from the uncapped leave salary.
/// 3. Daily benefit amount (DBA) = 66% of the daily income from the capped salary.
/// 4. Top-up = `min(max(Y1 - Y2, 0), DBA)` - a pay cut is topped up to the
///    shortfall, never above the statutory ceiling; a pay rise or equal pay
///    yields zero.
///
/// Full precision is carried through every step; rounding happens once, when
/// the result record is built.
///
/// # Arguments
///
/// * `monthly_salary` - Normal gross monthly salary before leave, non-negative
/// * `leave_salary` - Salary received while on leave, non-negative
///
/// # Returns
///
/// Returns a fully populated [`LeaveBenefitResult`], or an `InvalidAmount`
/// error if either salary is negative.
///
/// # Example
///
/// ```
/// use uif_engine::calculation::calculate_leave_benefit;
/// use rust_decimal::Decimal;
///
/// let result = calculate_leave_benefit(Decimal::from(10000), Decimal::from(4000)).unwrap();
/// assert_eq!(result.difference.to_string(), "197.26");
/// assert_eq!(result.top_up_daily.to_string(), "197.26");
/// ```
pub fn calculate_leave_benefit(
    monthly_salary: Decimal,
    leave_salary: Decimal,
) -> EngineResult<LeaveBenefitResult> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    ensure_non_negative("leave_salary", leave_salary)?;

    let daily_income = monthly_to_daily(monthly_salary)?;
    let daily_leave_income = monthly_to_daily(leave_salary)?;

    let capped_salary = monthly_salary.min(salary_cap());
    let daily_benefit_amount = monthly_to_daily(capped_salary)? * benefit_percentage();

    let difference = (daily_income - daily_leave_income).max(Decimal::ZERO);
    let top_up_daily = difference.min(daily_benefit_amount);

    debug!(
        %monthly_salary,
        %leave_salary,
        daily_benefit_amount = %round_currency(daily_benefit_amount),
        top_up_daily = %round_currency(top_up_daily),
        "calculated leave top-up"
    );

    Ok(LeaveBenefitResult {
        monthly_salary: round_currency(monthly_salary),
        leave_salary: round_currency(leave_salary),
        daily_income: round_currency(daily_income),
        daily_leave_income: round_currency(daily_leave_income),
        daily_benefit_amount: round_currency(daily_benefit_amount),
        difference: round_currency(difference),
        top_up_daily: round_currency(top_up_daily),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// LB-001: pay cut below the ceiling is topped up to the shortfall
    #[test]
    fn test_pay_cut_below_ceiling() {
        let result = calculate_leave_benefit(dec("10000"), dec("4000")).unwrap();

        assert_eq!(result.monthly_salary, dec("10000"));
        assert_eq!(result.leave_salary, dec("4000"));
        assert_eq!(result.daily_income, dec("328.77"));
        assert_eq!(result.daily_leave_income, dec("131.51"));
        assert_eq!(result.daily_benefit_amount, dec("216.99"));
        assert_eq!(result.difference, dec("197.26"));
        assert_eq!(result.top_up_daily, dec("197.26"));
    }

    /// LB-002: equal pay above the cap yields no top-up
    #[test]
    fn test_equal_pay_above_cap() {
        let result = calculate_leave_benefit(dec("25000"), dec("25000")).unwrap();

        assert_eq!(result.monthly_salary, dec("25000"));
        assert_eq!(result.daily_income, dec("821.92"));
        assert_eq!(result.daily_benefit_amount, dec("384.33"));
        assert_eq!(result.difference, Decimal::ZERO);
        assert_eq!(result.top_up_daily, Decimal::ZERO);
    }

    /// LB-003: a large shortfall is limited to the daily benefit amount
    #[test]
    fn test_top_up_limited_to_ceiling() {
        let result = calculate_leave_benefit(dec("20000"), Decimal::ZERO).unwrap();

        assert_eq!(result.daily_income, dec("657.53"));
        assert_eq!(result.daily_leave_income, Decimal::ZERO);
        assert_eq!(result.daily_benefit_amount, dec("384.33"));
        assert_eq!(result.difference, dec("657.53"));
        assert_eq!(result.top_up_daily, dec("384.33"));
    }

    /// LB-004: a pay rise while on leave yields no top-up
    #[test]
    fn test_pay_rise_on_leave() {
        let result = calculate_leave_benefit(dec("8000"), dec("9000")).unwrap();

        assert_eq!(result.difference, Decimal::ZERO);
        assert_eq!(result.top_up_daily, Decimal::ZERO);
    }

    /// LB-005: negative monthly salary is a validation error
    #[test]
    fn test_negative_monthly_salary_is_rejected() {
        let result = calculate_leave_benefit(dec("-100"), dec("4000"));
        match result.unwrap_err() {
            EngineError::InvalidAmount { field, .. } => assert_eq!(field, "monthly_salary"),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    /// LB-006: negative leave salary is a validation error
    #[test]
    fn test_negative_leave_salary_is_rejected() {
        let result = calculate_leave_benefit(dec("10000"), dec("-1"));
        match result.unwrap_err() {
            EngineError::InvalidAmount { field, .. } => assert_eq!(field, "leave_salary"),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    /// LB-007: zero salaries produce an all-zero record
    #[test]
    fn test_zero_salaries() {
        let result = calculate_leave_benefit(Decimal::ZERO, Decimal::ZERO).unwrap();

        assert_eq!(result.daily_income, Decimal::ZERO);
        assert_eq!(result.daily_benefit_amount, Decimal::ZERO);
        assert_eq!(result.top_up_daily, Decimal::ZERO);
    }

    /// LB-008: identical inputs give bit-identical results
    #[test]
    fn test_idempotence() {
        let a = calculate_leave_benefit(dec("13500.50"), dec("6750.25")).unwrap();
        let b = calculate_leave_benefit(dec("13500.50"), dec("6750.25")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_benefit_percentage_is_66_percent() {
        assert_eq!(benefit_percentage(), dec("0.66"));
    }

    #[test]
    fn test_salary_at_cap_uses_own_daily_income() {
        let result = calculate_leave_benefit(dec("17712.00"), Decimal::ZERO).unwrap();

        assert_eq!(result.daily_income, dec("582.31"));
        assert_eq!(result.daily_benefit_amount, dec("384.33"));
        assert_eq!(result.top_up_daily, dec("384.33"));
    }
}
