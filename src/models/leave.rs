//! Leave benefit top-up result model.
//!
//! This module contains the [`LeaveBenefitResult`] type that captures all values
//! produced by a leave top-up calculation: the echoed inputs, the derived daily
//! incomes, the capped daily benefit ceiling, and the top-up owed per day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a leave benefit top-up calculation.
///
/// The salary fields echo the (uncapped) inputs; the derived fields carry the
/// daily conversions and the statutory ceiling. All fields are rounded to
/// 2 decimals when the record is built.
///
/// # Example
///
/// ```
/// use uif_engine::models::LeaveBenefitResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = LeaveBenefitResult {
///     monthly_salary: Decimal::from_str("10000.00").unwrap(),
///     leave_salary: Decimal::from_str("4000.00").unwrap(),
///     daily_income: Decimal::from_str("328.77").unwrap(),
///     daily_leave_income: Decimal::from_str("131.51").unwrap(),
///     daily_benefit_amount: Decimal::from_str("216.99").unwrap(),
///     difference: Decimal::from_str("197.26").unwrap(),
///     top_up_daily: Decimal::from_str("197.26").unwrap(),
/// };
/// assert!(result.top_up_daily <= result.daily_benefit_amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBenefitResult {
    /// Normal gross monthly salary before going on leave (uncapped).
    pub monthly_salary: Decimal,
    /// Salary received while on leave (uncapped).
    pub leave_salary: Decimal,
    /// Daily income (Y1) derived from the monthly salary.
    pub daily_income: Decimal,
    /// Daily income while on leave (Y2) derived from the leave salary.
    pub daily_leave_income: Decimal,
    /// Daily benefit ceiling (DBA): 66% of the capped daily income.
    pub daily_benefit_amount: Decimal,
    /// Daily shortfall while on leave: `max(Y1 - Y2, 0)`.
    pub difference: Decimal,
    /// Daily top-up owed: the shortfall, limited to the ceiling.
    pub top_up_daily: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn pay_cut_result() -> LeaveBenefitResult {
        LeaveBenefitResult {
            monthly_salary: dec("10000.00"),
            leave_salary: dec("4000.00"),
            daily_income: dec("328.77"),
            daily_leave_income: dec("131.51"),
            daily_benefit_amount: dec("216.99"),
            difference: dec("197.26"),
            top_up_daily: dec("197.26"),
        }
    }

    #[test]
    fn test_serialize_leave_result() {
        let result = pay_cut_result();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"monthly_salary\":\"10000.00\""));
        assert!(json.contains("\"daily_benefit_amount\":\"216.99\""));
        assert!(json.contains("\"top_up_daily\":\"197.26\""));
    }

    #[test]
    fn test_deserialize_leave_result() {
        let json = r#"{
            "monthly_salary": "10000.00",
            "leave_salary": "4000.00",
            "daily_income": "328.77",
            "daily_leave_income": "131.51",
            "daily_benefit_amount": "216.99",
            "difference": "197.26",
            "top_up_daily": "197.26"
        }"#;
        let result: LeaveBenefitResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, pay_cut_result());
    }

    #[test]
    fn test_serde_round_trip_preserves_fields() {
        let result = pay_cut_result();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: LeaveBenefitResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
