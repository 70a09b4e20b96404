//! Monetary values in the normalized schema.
//!
//! The platform reports amounts as integer minor units (cents). The
//! normalized schema carries a decimal `value` in major units, serialized as a
//! JSON number so front-ends can format it directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resolved price.
///
/// A negative `value` is the "unpriced" sentinel: the source record had no
/// price at all. See [`Money::unpriced`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    /// ISO 4217 currency code, passed through from the platform.
    pub currency_code: String,
}

impl Money {
    /// Build a price from an integer amount of minor units (hundredths).
    #[must_use]
    pub fn from_minor_units(cent_amount: i64, currency_code: impl Into<String>) -> Self {
        Self {
            value: Decimal::new(cent_amount, 2),
            currency_code: currency_code.into(),
        }
    }

    /// The `-1.00` sentinel paired with the given default currency.
    #[must_use]
    pub fn unpriced(currency_code: impl Into<String>) -> Self {
        Self {
            value: Decimal::new(-100, 2),
            currency_code: currency_code.into(),
        }
    }

    /// Whether this is the unpriced sentinel.
    #[must_use]
    pub const fn is_unpriced(&self) -> bool {
        self.value.is_sign_negative()
    }
}

/// Currency descriptor attached to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 currency code.
    pub code: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_units() {
        let money = Money::from_minor_units(1000, "USD");
        assert_eq!(money.value, Decimal::new(10, 0));
        assert_eq!(money.currency_code, "USD");
        assert!(!money.is_unpriced());
    }

    #[test]
    fn test_unpriced_sentinel() {
        let money = Money::unpriced("USD");
        assert_eq!(money.value, Decimal::NEGATIVE_ONE);
        assert!(money.is_unpriced());
    }

    #[test]
    fn test_serializes_value_as_number() {
        let json = serde_json::to_value(Money::from_minor_units(1999, "EUR")).unwrap();
        assert_eq!(json["value"], serde_json::json!(19.99));
        assert_eq!(json["currencyCode"], "EUR");
    }

    #[test]
    fn test_deserializes_number() {
        let money: Money =
            serde_json::from_str(r#"{"value": -1.0, "currencyCode": "USD"}"#).unwrap();
        assert!(money.is_unpriced());
    }
}
