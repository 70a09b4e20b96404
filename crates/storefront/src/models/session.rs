//! Session-stored commerce state.
//!
//! The session only holds platform ids. Carts, wishlists and customers are
//! always re-read from commercetools.

use tower_sessions::Session;

/// Session keys for commerce state.
pub mod keys {
    /// Key for storing the active cart id.
    pub const CART_ID: &str = "cart_id";

    /// Key for storing the active shopping list (wishlist) id.
    pub const WISHLIST_ID: &str = "wishlist_id";

    /// Key for storing the signed-in customer id.
    pub const CUSTOMER_ID: &str = "customer_id";
}

/// Read a stored id.
///
/// # Errors
///
/// Returns an error if the session store fails or the value is not a string.
pub async fn load_id(
    session: &Session,
    key: &str,
) -> Result<Option<String>, tower_sessions::session::Error> {
    session.get::<String>(key).await
}

/// Store an id, replacing any previous value.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn store_id(
    session: &Session,
    key: &str,
    id: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(key, id).await
}

/// Forget a stored id (e.g., after the platform reports it gone).
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear_id(session: &Session, key: &str) -> Result<(), tower_sessions::session::Error> {
    session.remove::<String>(key).await.map(|_| ())
}
