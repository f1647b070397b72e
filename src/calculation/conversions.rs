//! Shared monetary conversion and validation helpers.
//!
//! Both benefit calculators convert monthly salaries to daily amounts with the
//! same statutory factor and apply the same salary ceiling; those shared pieces
//! live here, together with the display-rounding and input-validation helpers.

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Number of days in the statutory year used for all daily conversions.
pub const DAYS_PER_YEAR: u32 = 365;

/// Number of months used to annualize a monthly salary.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Returns the statutory monthly salary ceiling of R17 712.00.
///
/// Salaries above the ceiling are treated as the ceiling when deriving a
/// capped daily income or the daily benefit amount.
pub fn salary_cap() -> Decimal {
    Decimal::new(1_771_200, 2)
}

/// Converts a monthly amount to a daily amount using the statutory factor.
///
/// The conversion is `amount * 12 / 365`. Full precision is kept; callers
/// round only when placing values into a result record.
///
/// # Arguments
///
/// * `monthly_amount` - The monthly amount to convert
///
/// # Returns
///
/// The daily amount, or a `CalculationError` if the annualization overflows
/// the decimal range.
///
/// # Example
///
/// ```
/// use uif_engine::calculation::monthly_to_daily;
/// use rust_decimal::Decimal;
///
/// let daily = monthly_to_daily(Decimal::from(10000)).unwrap();
/// assert_eq!(daily.round_dp(2).to_string(), "328.77");
/// ```
pub fn monthly_to_daily(monthly_amount: Decimal) -> EngineResult<Decimal> {
    monthly_amount
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .and_then(|annual| annual.checked_div(Decimal::from(DAYS_PER_YEAR)))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("monthly amount {monthly_amount} overflows the daily conversion"),
        })
}

/// Rejects a negative monetary input with a validation error naming the field.
pub(crate) fn ensure_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        warn!(field, %amount, "rejected negative monetary input");
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            message: "salary amounts must be non-negative numbers".to_string(),
        });
    }
    Ok(())
}

/// Rounds a monetary or percentage value to 2 decimals for display.
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}
