//! Cart normalization.

use cirrus_core::{Cart, Currency, LineItem, SelectedOption};
use rust_decimal::Decimal;

use super::common::{localized, stringify, without_nils};
use super::products::{money, normalize_product_variant};
use super::{NormalizeError, NormalizeOptions};
use crate::commercetools::types as ct;

/// Normalize a cart line item.
///
/// # Errors
///
/// Returns `MissingLocale` if the item name has no entry for the content locale.
pub fn normalize_line_item(
    line_item: &ct::LineItem,
    options: &NormalizeOptions,
) -> Result<LineItem, NormalizeError> {
    let variant = &line_item.variant;

    Ok(LineItem {
        id: line_item.id.clone(),
        variant_id: variant.id.to_string(),
        product_id: line_item.product_id.clone(),
        name: localized(&line_item.name, &options.locale, "lineItem.name")?,
        path: String::new(),
        quantity: line_item.quantity,
        discounts: Vec::new(),
        variant: normalize_product_variant(variant, options),
        options: without_nils(variant.attributes.iter().flatten().map(Option::as_ref))
            .map(|attribute| SelectedOption {
                id: attribute.name.clone(),
                name: attribute.name.clone(),
                value: stringify(&attribute.value),
            })
            .collect(),
    })
}

/// Normalize a cart.
///
/// # Errors
///
/// Returns `MissingLocale` if any line item name lacks the content locale.
pub fn normalize_cart(cart: &ct::Cart, options: &NormalizeOptions) -> Result<Cart, NormalizeError> {
    let total = money(Some(&cart.total_price), options).value;

    Ok(Cart {
        id: cart.id.clone(),
        customer_id: cart.customer_id.clone(),
        email: cart.customer_email.clone(),
        created_at: cart.created_at,
        currency: Currency {
            code: options.currency.clone(),
        },
        taxes_included: cart.tax_mode != ct::TaxMode::Disabled,
        line_items: cart
            .line_items
            .iter()
            .map(|item| normalize_line_item(item, options))
            .collect::<Result<_, _>>()?,
        line_items_subtotal_price: Decimal::ZERO,
        subtotal_price: total,
        total_price: total,
        discounts: Vec::new(),
    })
}
