//! Normalized product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A product as rendered by storefront pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// `/` followed by the slug.
    pub path: String,
    /// Empty when the platform has no description in the content locale.
    pub description: String,
    /// Price of the master variant.
    pub price: Money,
    /// Master-variant images first, then each other variant's images.
    pub images: Vec<ProductImage>,
    /// Master variant first, then the remaining variants in listed order.
    pub variants: Vec<ProductVariant>,
    /// Attributes of all variants grouped by name.
    pub options: Vec<ProductOption>,
}

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    /// Only present when the source image carries a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Platform variant number, stringified.
    pub id: String,
    /// Same as `id`; the platform has no variant titles.
    pub name: String,
    /// Empty when the variant has no SKU.
    pub sku: String,
    /// Resolved price value (the sentinel `-1` when unpriced).
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// One option per variant attribute.
    pub options: Vec<ProductOption>,
    /// Always `false` for this integration.
    pub requires_shipping: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub list_price: Decimal,
}

/// Selectable product option.
///
/// Serialized with a `__typename` discriminator, the shape front-end option
/// pickers switch on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename", rename_all_fields = "camelCase")]
pub enum ProductOption {
    /// Pick one value from a list.
    MultipleChoiceOption {
        /// Attribute name.
        id: String,
        /// Attribute name.
        display_name: String,
        /// De-duplicated candidate values.
        values: Vec<ProductOptionValue>,
    },
}

impl ProductOption {
    /// Option identifier (the attribute name).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::MultipleChoiceOption { id, .. } => id,
        }
    }

    /// Human-readable option name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::MultipleChoiceOption { display_name, .. } => display_name,
        }
    }

    /// Candidate values, in first-seen order.
    #[must_use]
    pub fn values(&self) -> &[ProductOptionValue] {
        match self {
            Self::MultipleChoiceOption { values, .. } => values,
        }
    }
}

/// A single candidate value of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionValue {
    pub label: String,
}

impl ProductOptionValue {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn color_option() -> ProductOption {
        ProductOption::MultipleChoiceOption {
            id: "color".to_string(),
            display_name: "color".to_string(),
            values: vec![ProductOptionValue::new("red"), ProductOptionValue::new("blue")],
        }
    }

    #[test]
    fn test_option_serializes_typename() {
        let json = serde_json::to_value(color_option()).unwrap();
        assert_eq!(json["__typename"], "MultipleChoiceOption");
        assert_eq!(json["displayName"], "color");
        assert_eq!(json["values"][1]["label"], "blue");
    }

    #[test]
    fn test_option_accessors() {
        let option = color_option();
        assert_eq!(option.id(), "color");
        assert_eq!(option.display_name(), "color");
        assert_eq!(option.values().len(), 2);
    }

    #[test]
    fn test_image_omits_missing_alt() {
        let image = ProductImage {
            url: "https://cdn.example.com/a.jpg".to_string(),
            alt: None,
            width: 100,
            height: 200,
        };
        let json = serde_json::to_value(&image).unwrap();
        assert!(json.get("alt").is_none());
        assert_eq!(json["width"], 100);
    }

    #[test]
    fn test_variant_round_trips_through_json() {
        let variant = ProductVariant {
            id: "1".to_string(),
            name: "1".to_string(),
            sku: "SKU-1".to_string(),
            price: Decimal::new(1000, 2),
            options: vec![color_option()],
            requires_shipping: false,
            list_price: Decimal::new(1000, 2),
        };
        let json = serde_json::to_string(&variant).unwrap();
        assert!(json.contains("\"requiresShipping\":false"));
        let back: ProductVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, variant);
    }
}
