//! Unemployment benefit calculation.
//!
//! Computes the capped daily income, the income-replacement rate from the
//! statutory curve, the daily benefit, and the total payout over the accrued
//! credit days.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::UnemploymentBenefitResult;

use super::conversions::{ensure_non_negative, monthly_to_daily, round_currency, salary_cap};
use super::credit_days::calculate_credit_days;

/// Asymptotic floor of the replacement-rate curve, in percent.
fn irr_base() -> Decimal {
    Decimal::new(292, 1)
}

/// Numerator of the replacement-rate curve.
fn irr_numerator() -> Decimal {
    Decimal::new(717_392, 2)
}

/// Offset added to the daily income in the curve denominator.
fn irr_denominator_offset() -> Decimal {
    Decimal::new(23_292, 2)
}

/// Average days per month used to estimate the benefit duration.
fn average_days_per_month() -> Decimal {
    Decimal::new(3_044, 2)
}

/// Computes the income-replacement rate for a daily income, in percent.
///
/// The statutory curve is `29.2 + 7173.92 / (232.92 + daily_income)`. It
/// decreases monotonically with income: low earners approach a maximum near
/// 60% as income approaches zero, high earners approach the 29.2% floor. A
/// daily income of zero (or less) yields a rate of zero. No clamp is applied
/// beyond what the curve naturally produces.
///
/// # Example
///
/// ```
/// use uif_engine::calculation::income_replacement_rate;
/// use rust_decimal::Decimal;
///
/// let rate = income_replacement_rate(Decimal::from(100));
/// assert_eq!(rate.round_dp(2).to_string(), "50.75");
/// assert_eq!(income_replacement_rate(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn income_replacement_rate(daily_income: Decimal) -> Decimal {
    if daily_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    irr_base() + irr_numerator() / (irr_denominator_offset() + daily_income)
}

/// Calculates the unemployment benefit for an average salary and employment period.
///
/// The calculation steps, in order:
/// 1. Cap the average salary at the statutory ceiling.
/// 2. Derive the daily income (Y1) from the capped salary.
/// 3. Apply the income-replacement-rate curve to Y1.
/// 4. Daily benefit = Y1 x IRR%.
/// 5. Accrue credit days over the employment period.
/// 6. Total benefit = daily benefit x credit days.
///
/// Full precision is carried through every step; rounding happens once, when
/// the result record is built.
///
/// # Arguments
///
/// * `average_salary` - Average monthly salary, must be non-negative
/// * `start_date` - Employment start date as `YYYY-MM-DD` text
/// * `end_date` - Employment end date as `YYYY-MM-DD` text
///
/// # Returns
///
/// Returns a fully populated [`UnemploymentBenefitResult`], or an error if the
/// salary is negative (`InvalidAmount`), a date is malformed (`InvalidDate`),
/// or the period is inverted (`EndBeforeStart`).
///
/// # Example
///
/// ```
/// use uif_engine::calculation::calculate_unemployment_benefit;
/// use rust_decimal::Decimal;
///
/// let result = calculate_unemployment_benefit(
///     Decimal::from(20000),
///     "2023-01-01",
///     "2023-12-31",
/// ).unwrap();
/// assert_eq!(result.average_salary.to_string(), "17712.00");
/// assert_eq!(result.credit_days, 91);
/// ```
pub fn calculate_unemployment_benefit(
    average_salary: Decimal,
    start_date: &str,
    end_date: &str,
) -> EngineResult<UnemploymentBenefitResult> {
    ensure_non_negative("average_salary", average_salary)?;

    let capped_salary = average_salary.min(salary_cap());
    let daily_income = monthly_to_daily(capped_salary)?;
    let irr = income_replacement_rate(daily_income);
    let daily_benefit = daily_income * irr / Decimal::ONE_HUNDRED;

    let credits = calculate_credit_days(start_date, end_date)?;
    let total_benefit = daily_benefit * Decimal::from(credits.credit_days);

    let months_for_benefits = if credits.credit_days > 0 {
        Decimal::from(credits.credit_days) / average_days_per_month()
    } else {
        Decimal::ZERO
    };

    debug!(
        %capped_salary,
        daily_income = %round_currency(daily_income),
        irr = %round_currency(irr),
        credit_days = credits.credit_days,
        "calculated unemployment benefit"
    );

    Ok(UnemploymentBenefitResult {
        average_salary: round_currency(capped_salary),
        daily_income: round_currency(daily_income),
        irr: round_currency(irr),
        daily_benefit: round_currency(daily_benefit),
        credit_days: credits.credit_days,
        total_benefit: round_currency(total_benefit),
        days_worked: credits.days_worked,
        months_for_benefits: months_for_benefits.round_dp(1),
    })
}
