//! Normalized wishlist record.
//!
//! Item fields keep their snake_case names on the wire.

use serde::{Deserialize, Serialize};

/// A customer's saved products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub items: Vec<WishlistItem>,
}

/// A saved product/variant pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub product_id: String,
    /// `None` when the platform stored the item without a variant.
    pub variant_id: Option<i64>,
}
