//! Normalized cart records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Currency;
use super::product::ProductVariant;

/// A shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    /// False only when the platform has taxes disabled for the cart.
    pub taxes_included: bool,
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_items_subtotal_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub discounts: Vec<Discount>,
}

impl Cart {
    /// Total number of units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }
}

/// A cart entry referencing a variant and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub variant_id: String,
    pub product_id: String,
    pub name: String,
    pub path: String,
    pub quantity: u64,
    pub discounts: Vec<Discount>,
    pub variant: ProductVariant,
    /// Variant attributes flattened to name/value pairs.
    pub options: Vec<SelectedOption>,
}

/// A single attribute value chosen on a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// Discount applied to a cart or line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserializes_front_end_shape() {
        let cart: Cart = serde_json::from_value(serde_json::json!({
            "id": "cart-1",
            "createdAt": "2024-03-01T10:00:00Z",
            "currency": { "code": "USD" },
            "taxesIncluded": true,
            "lineItems": [],
            "lineItemsSubtotalPrice": 0,
            "subtotalPrice": 12.5,
            "totalPrice": 12.5,
            "discounts": []
        }))
        .unwrap();

        assert_eq!(cart.id, "cart-1");
        assert!(cart.customer_id.is_none());
        assert_eq!(cart.total_price, Decimal::new(125, 1));
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_cart_omits_missing_customer() {
        let cart = Cart {
            id: "cart-1".to_string(),
            customer_id: None,
            email: None,
            created_at: DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            currency: Currency {
                code: "USD".to_string(),
            },
            taxes_included: false,
            line_items: vec![],
            line_items_subtotal_price: Decimal::ZERO,
            subtotal_price: Decimal::ZERO,
            total_price: Decimal::ZERO,
            discounts: vec![],
        };

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.get("customerId").is_none());
        assert!(json.get("email").is_none());
        assert_eq!(json["taxesIncluded"], false);
    }
}
