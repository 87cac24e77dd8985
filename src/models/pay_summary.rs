//! Output record model for the payroll engine.
//!
//! This module contains the [`PaySummary`] type produced once per employee
//! after their punch sequence has been fully accrued, plus the fixed-point
//! rendering helper shared by all of its numeric fields.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Renders a decimal value as a string with exactly 4 fractional digits.
///
/// # Examples
///
/// ```
/// use punch_engine::models::fixed4;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed4(Decimal::from(130)), "130.0000");
/// assert_eq!(fixed4(Decimal::new(125, 2)), "1.2500");
/// ```
pub fn fixed4(value: Decimal) -> String {
    format!(
        "{:.4}",
        value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// The final payroll record for one employee.
///
/// All five numeric fields are rendered as strings with exactly 4 digits
/// after the decimal point, matching the output document format. Records are
/// emitted in the order employees appear in the input.
///
/// # Example
///
/// ```
/// use punch_engine::models::PaySummary;
///
/// let summary = PaySummary {
///     employee: "Mike Smith".to_string(),
///     regular: "8.0000".to_string(),
///     overtime: "0.0000".to_string(),
///     doubletime: "0.0000".to_string(),
///     wage_total: "130.0000".to_string(),
///     benefit_total: "10.0000".to_string(),
/// };
/// let json = serde_json::to_string(&summary).unwrap();
/// assert!(json.contains("\"wageTotal\":\"130.0000\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySummary {
    /// The employee's name.
    pub employee: String,
    /// Hours worked at the base rate (up to 40 cumulative hours).
    pub regular: String,
    /// Hours worked in the overtime band (cumulative hours 40 to 48).
    pub overtime: String,
    /// Hours worked past 48 cumulative hours.
    pub doubletime: String,
    /// Total wages across all three pay tiers.
    pub wage_total: String,
    /// Total benefit dollars accrued across all hours.
    pub benefit_total: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fixed4_pads_whole_numbers() {
        assert_eq!(fixed4(Decimal::from(40)), "40.0000");
        assert_eq!(fixed4(Decimal::ZERO), "0.0000");
    }

    #[test]
    fn test_fixed4_preserves_fractional_digits() {
        assert_eq!(fixed4(Decimal::from_str("16.25").unwrap()), "16.2500");
        assert_eq!(fixed4(Decimal::from_str("267.5625").unwrap()), "267.5625");
    }

    #[test]
    fn test_fixed4_rounds_past_four_digits() {
        assert_eq!(fixed4(Decimal::from_str("1.00005").unwrap()), "1.0001");
        assert_eq!(fixed4(Decimal::from_str("1.00004").unwrap()), "1.0000");
    }

    #[test]
    fn test_fixed4_negative_values() {
        assert_eq!(fixed4(Decimal::from(-8)), "-8.0000");
    }

    #[test]
    fn test_summary_serializes_with_wire_field_names() {
        let summary = PaySummary {
            employee: "Mike Smith".to_string(),
            regular: "40.0000".to_string(),
            overtime: "4.0000".to_string(),
            doubletime: "0.0000".to_string(),
            wage_total: "920.0000".to_string(),
            benefit_total: "22.0000".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["employee"], "Mike Smith");
        assert_eq!(json["wageTotal"], "920.0000");
        assert_eq!(json["benefitTotal"], "22.0000");
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = PaySummary {
            employee: "Allison Barker".to_string(),
            regular: "8.0000".to_string(),
            overtime: "0.0000".to_string(),
            doubletime: "0.0000".to_string(),
            wage_total: "130.0000".to_string(),
            benefit_total: "10.0000".to_string(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: PaySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
