//! Wire types for the commercetools HTTP API.
//!
//! These mirror the platform's JSON as-is: optional fields stay `Option`,
//! lists that may contain `null` entries are `Vec<Option<T>>`, and unknown
//! fields are ignored. Conversion into the storefront schema lives in
//! [`super::normalize`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Locale tag (e.g., `en`) to translated text.
pub type LocalizedString = BTreeMap<String, String>;

// =============================================================================
// Money Types
// =============================================================================

/// Monetary amount in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedMoney {
    /// Amount in the smallest currency unit (e.g., cents).
    pub cent_amount: i64,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Number of minor-unit digits; informational only.
    #[serde(default)]
    pub fraction_digits: Option<u32>,
}

/// A variant price entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    #[serde(default)]
    pub id: Option<String>,
    pub value: TypedMoney,
}

// =============================================================================
// Product Types
// =============================================================================

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub w: i64,
    pub h: i64,
}

/// Variant image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub dimensions: ImageDimensions,
    #[serde(default)]
    pub label: Option<String>,
}

/// Variant attribute. `value` can be any JSON (text, number, enum object, set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: serde_json::Value,
}

/// A product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant number, unique within its product.
    pub id: i64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub prices: Option<Vec<Price>>,
    #[serde(default)]
    pub images: Option<Vec<Option<Image>>>,
    #[serde(default)]
    pub attributes: Option<Vec<Option<Attribute>>>,
}

/// Reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub type_id: String,
    pub id: String,
}

/// Localized product content shared by projections and catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default)]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub categories: Vec<Reference>,
    pub master_variant: ProductVariant,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// A product projection (current or staged view of a product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProjection {
    pub id: String,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(flatten)]
    pub data: ProductData,
}

/// A product as returned by the `products` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub version: i64,
    pub master_data: ProductCatalogData,
}

/// Current and staged catalog data of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalogData {
    pub current: ProductData,
    #[serde(default)]
    pub published: bool,
}

// =============================================================================
// Category Types
// =============================================================================

/// A category in the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub version: Option<i64>,
    pub name: LocalizedString,
    pub slug: LocalizedString,
    #[serde(default)]
    pub parent: Option<Reference>,
    #[serde(default)]
    pub ancestors: Vec<Reference>,
}

// =============================================================================
// Cart Types
// =============================================================================

/// How taxes are calculated for a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxMode {
    #[default]
    Platform,
    External,
    ExternalAmount,
    Disabled,
    /// Any mode this adapter does not know about.
    #[serde(other)]
    Other,
}

/// A cart line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub product_id: String,
    pub name: LocalizedString,
    pub variant: ProductVariant,
    pub quantity: u64,
}

/// A cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub version: i64,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tax_mode: TaxMode,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub total_price: TypedMoney,
}

/// Body for creating a cart.
#[derive(Debug, Clone, Serialize)]
pub struct CartDraft {
    pub currency: String,
}

/// Update actions accepted by `carts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CartUpdateAction {
    AddLineItem {
        product_id: String,
        variant_id: i64,
        quantity: u64,
    },
    ChangeLineItemQuantity {
        line_item_id: String,
        quantity: u64,
    },
    RemoveLineItem {
        line_item_id: String,
    },
}

// =============================================================================
// Customer Types
// =============================================================================

/// A customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub version: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

// =============================================================================
// Shopping List Types
// =============================================================================

/// An entry of a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListLineItem {
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub variant_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<u64>,
}

/// A shopping list, used as the customer's wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub version: i64,
    #[serde(default)]
    pub name: LocalizedString,
    #[serde(default)]
    pub line_items: Option<Vec<ShoppingListLineItem>>,
}

/// Body for creating a shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingListDraft {
    pub name: LocalizedString,
}

/// Update actions accepted by `shopping-lists/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ShoppingListUpdateAction {
    AddLineItem {
        product_id: String,
        variant_id: i64,
        quantity: u64,
    },
    RemoveLineItem {
        line_item_id: String,
    },
}

// =============================================================================
// Envelope Types
// =============================================================================

/// Versioned update request body.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequest<A> {
    pub version: i64,
    pub actions: Vec<A>,
}

/// Paged query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedQueryResponse<T> {
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    pub count: u64,
    #[serde(default)]
    pub total: Option<u64>,
    pub results: Vec<T>,
}

/// Error body returned on non-success responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

/// Single error entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorObject {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
