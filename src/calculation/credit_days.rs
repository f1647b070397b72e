//! Credit day accrual from an employment period.
//!
//! Credit days are the claimable days of unemployment benefit: one credit day
//! accrues for every four days worked, up to a ceiling of one year's worth.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// The maximum number of credit days that can accrue.
pub const MAX_CREDIT_DAYS: u32 = 365;

/// The result of a credit day calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditDaysResult {
    /// Credit days available to claim, capped at [`MAX_CREDIT_DAYS`].
    pub credit_days: u32,
    /// Total days employed, inclusive of both endpoints.
    pub days_worked: i64,
}

fn parse_iso_date(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        warn!(input, "rejected malformed date input");
        EngineError::InvalidDate {
            input: input.to_string(),
        }
    })
}

/// Calculates credit days accrued over an employment period.
///
/// Days worked are counted inclusively of both endpoints, so a period starting
/// and ending on the same day counts as one day worked. One credit day accrues
/// per four full days worked (integer floor division), capped at
/// [`MAX_CREDIT_DAYS`].
///
/// # Arguments
///
/// * `start_date` - Employment start date as `YYYY-MM-DD` text
/// * `end_date` - Employment end date as `YYYY-MM-DD` text
///
/// # Returns
///
/// Returns a [`CreditDaysResult`] with the accrued credit days and the total
/// days worked, or an error if:
/// - Either string is not a well-formed date (`InvalidDate`)
/// - The end date falls before the start date (`EndBeforeStart`)
///
/// # Example
///
/// ```
/// use uif_engine::calculation::calculate_credit_days;
///
/// let result = calculate_credit_days("2023-01-01", "2023-12-31").unwrap();
/// assert_eq!(result.days_worked, 365);
/// assert_eq!(result.credit_days, 91);
/// ```
pub fn calculate_credit_days(start_date: &str, end_date: &str) -> EngineResult<CreditDaysResult> {
    let start = parse_iso_date(start_date)?;
    let end = parse_iso_date(end_date)?;

    if end < start {
        warn!(%start, %end, "rejected inverted employment period");
        return Err(EngineError::EndBeforeStart { start, end });
    }

    // Both endpoints count as days worked.
    let days_worked = (end - start).num_days() + 1;

    // 1 credit day for every 4 days worked, capped at the statutory maximum.
    let credit_days = (days_worked / 4).min(i64::from(MAX_CREDIT_DAYS)) as u32;

    Ok(CreditDaysResult {
        credit_days,
        days_worked,
    })
}
