//! Normalization of commercetools records into the `cirrus-core` schema.
//!
//! Every function here is pure: source records are borrowed, outputs are
//! freshly built. The target currency and the content locale are explicit
//! [`NormalizeOptions`] rather than globals.

pub mod cart;
pub mod categories;
pub mod common;
pub mod customers;
pub mod products;

pub use cart::{normalize_cart, normalize_line_item};
pub use categories::normalize_category;
pub use common::{dedup, stringify, without_nils};
pub use customers::{normalize_customer, normalize_wishlist};
pub use products::{
    ProductSource, money, normalize_product, normalize_product_images, normalize_product_option,
    normalize_product_variant, resolve_price,
};

use thiserror::Error;

/// Locale that localized fields are read from unless configured otherwise.
pub const DEFAULT_CONTENT_LOCALE: &str = "en";

/// Currency preferred during price resolution and used for the unpriced sentinel.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Parameters threaded through every normalization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Key of localized fields (name, slug, description).
    pub locale: String,
    /// Target currency for price resolution.
    pub currency: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_CONTENT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// A record could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A required localized field has no entry for the content locale.
    #[error("missing locale '{locale}' for field '{field}'")]
    MissingLocale {
        field: &'static str,
        locale: String,
    },
}
