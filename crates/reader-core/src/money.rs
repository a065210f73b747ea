//! # Money
//!
//! Checkout amounts in minor currency units, plus the parser that turns
//! loosely-typed request input into a `Money` value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Currency used for every reader checkout (ISO 4217)
pub const CHECKOUT_CURRENCY: &str = "EUR";

/// Decimal places of `CHECKOUT_CURRENCY`
pub const CHECKOUT_MINOR_UNIT: u32 = 2;

/// Amount in the smallest currency unit (cents for EUR)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// ISO 4217 code
    pub currency: String,
    /// Number of decimal places encoded in `value`
    pub minor_unit: u32,
    /// Amount in minor units
    pub value: i64,
}

impl Money {
    /// Create a EUR amount from minor units
    pub fn eur(value: i64) -> Self {
        Self {
            currency: CHECKOUT_CURRENCY.to_string(),
            minor_unit: CHECKOUT_MINOR_UNIT,
            value,
        }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.value as f64 / 10_f64.powi(self.minor_unit as i32)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.*} {}",
            self.minor_unit as usize,
            self.as_decimal(),
            self.currency
        )
    }
}

/// Interpret an arbitrary JSON value as a positive checkout amount.
///
/// Numbers are used as-is and strings are trimmed and parsed as decimals.
/// Returns `None` for anything else, and for amounts that are not finite,
/// not strictly positive, or too large to express in minor units.
pub fn parse_amount(input: &Value) -> Option<Money> {
    let amount = match input {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }

    let minor = (amount * 10_f64.powi(CHECKOUT_MINOR_UNIT as i32)).round();
    if minor >= i64::MAX as f64 {
        return None;
    }

    Some(Money::eur(minor as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number() {
        let money = parse_amount(&json!(12.5)).unwrap();
        assert_eq!(money.value, 1250);
        assert_eq!(money.currency, "EUR");
        assert_eq!(money.minor_unit, 2);

        assert_eq!(parse_amount(&json!(3)).unwrap().value, 300);
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(parse_amount(&json!("10.00")).unwrap().value, 1000);
        assert_eq!(parse_amount(&json!(" 12.5 ")).unwrap().value, 1250);
        assert_eq!(parse_amount(&json!("1e1")).unwrap().value, 1000);
    }

    #[test]
    fn test_rounding() {
        // 19.99 * 100 is 1998.9999999999998 in binary floating point
        assert_eq!(parse_amount(&json!(19.99)).unwrap().value, 1999);
        assert_eq!(parse_amount(&json!(0.5)).unwrap().value, 50);
        assert_eq!(parse_amount(&json!("1.234")).unwrap().value, 123);
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        // 0.125 * 100 is exactly 12.5, a tie
        assert_eq!(parse_amount(&json!(0.125)).unwrap().value, 13);
        assert_eq!(parse_amount(&json!("0.125")).unwrap().value, 13);
        assert_eq!(parse_amount(&json!("0.005")).unwrap().value, 1);
        assert_eq!(parse_amount(&json!(0.375)).unwrap().value, 38);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(parse_amount(&json!(0)).is_none());
        assert!(parse_amount(&json!(0.0)).is_none());
        assert!(parse_amount(&json!("0")).is_none());
        assert!(parse_amount(&json!(-5)).is_none());
        assert!(parse_amount(&json!("-0.01")).is_none());
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(parse_amount(&Value::Null).is_none());
        assert!(parse_amount(&json!("abc")).is_none());
        assert!(parse_amount(&json!("")).is_none());
        assert!(parse_amount(&json!("   ")).is_none());
        assert!(parse_amount(&json!("12,50")).is_none());
        assert!(parse_amount(&json!([10])).is_none());
        assert!(parse_amount(&json!({ "value": 10 })).is_none());
    }

    #[test]
    fn test_rejects_booleans() {
        // Booleans are never amounts, even though `true` could coerce to 1
        assert!(parse_amount(&json!(true)).is_none());
        assert!(parse_amount(&json!(false)).is_none());
    }

    #[test]
    fn test_rejects_non_finite_and_oversized() {
        assert!(parse_amount(&json!("inf")).is_none());
        assert!(parse_amount(&json!("NaN")).is_none());
        assert!(parse_amount(&json!("1e400")).is_none());
        assert!(parse_amount(&json!(1e300)).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let money = Money::eur(1250);
        assert_eq!(
            serde_json::to_value(&money).unwrap(),
            json!({ "currency": "EUR", "minor_unit": 2, "value": 1250 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::eur(1250).to_string(), "12.50 EUR");
        assert_eq!(Money::eur(5).to_string(), "0.05 EUR");
    }
}
