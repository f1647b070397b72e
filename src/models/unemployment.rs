//! Unemployment benefit result model.
//!
//! This module contains the [`UnemploymentBenefitResult`] type that captures all
//! outputs from an unemployment benefit calculation: the capped salary, the derived
//! daily figures, the income-replacement rate, and the credit-day totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of an unemployment benefit calculation.
///
/// All monetary fields and the replacement rate are rounded to 2 decimals for
/// display; `months_for_benefits` is rounded to 1 decimal. Rounding is applied
/// once, when the record is built, never inside the calculation itself.
///
/// # Example
///
/// ```
/// use uif_engine::models::UnemploymentBenefitResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = UnemploymentBenefitResult {
///     average_salary: Decimal::from_str("17712.00").unwrap(),
///     daily_income: Decimal::from_str("582.31").unwrap(),
///     irr: Decimal::from_str("38.00").unwrap(),
///     daily_benefit: Decimal::from_str("221.28").unwrap(),
///     credit_days: 91,
///     total_benefit: Decimal::from_str("20136.28").unwrap(),
///     days_worked: 365,
///     months_for_benefits: Decimal::from_str("3.0").unwrap(),
/// };
/// assert_eq!(result.average_monthly_benefit(), Decimal::from_str("6712.09").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentBenefitResult {
    /// The average monthly salary after applying the statutory ceiling.
    pub average_salary: Decimal,
    /// The daily income (Y1) derived from the capped salary.
    pub daily_income: Decimal,
    /// The income-replacement rate as a percentage (e.g. 38.00).
    pub irr: Decimal,
    /// The daily benefit payout amount.
    pub daily_benefit: Decimal,
    /// Credit days available to claim (1 per 4 days worked, capped at 365).
    pub credit_days: u32,
    /// The total payout over all credit days.
    pub total_benefit: Decimal,
    /// Total days employed in the claimed period, inclusive of both endpoints.
    pub days_worked: i64,
    /// Estimated duration of the benefit in months.
    pub months_for_benefits: Decimal,
}

impl UnemploymentBenefitResult {
    /// Estimated benefit amount received per month, rounded to 2 decimals.
    ///
    /// Derived from the displayed `total_benefit` and `months_for_benefits`
    /// fields, so any front end shows the same figure. Returns zero when the
    /// benefit duration is zero.
    pub fn average_monthly_benefit(&self) -> Decimal {
        if self.months_for_benefits > Decimal::ZERO {
            (self.total_benefit / self.months_for_benefits).round_dp(2)
        } else {
            Decimal::ZERO
        }
    }
}
