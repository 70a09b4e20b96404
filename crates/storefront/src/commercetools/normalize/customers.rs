//! Customer and wishlist normalization.

use cirrus_core::{Customer, Wishlist, WishlistItem};

use crate::commercetools::types as ct;

/// Reduce a customer account to name and email.
#[must_use]
pub fn normalize_customer(customer: &ct::Customer) -> Customer {
    Customer {
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.clone(),
    }
}

/// Map a shopping list to wishlist items.
#[must_use]
pub fn normalize_wishlist(list: &ct::ShoppingList) -> Wishlist {
    Wishlist {
        items: list
            .line_items
            .iter()
            .flatten()
            .map(|item| WishlistItem {
                id: item.id.clone(),
                product_id: item.product_id.clone(),
                variant_id: item.variant_id,
            })
            .collect(),
    }
}
