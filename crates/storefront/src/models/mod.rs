//! Storefront-side models.

pub mod session;

pub use session::keys;
