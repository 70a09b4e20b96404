//! Cirrus client data layer.
//!
//! Front-end side of the storefront API: a fetcher that speaks the
//! `{"data": ...}` envelope, a cache shared by every hook, and the cart hooks
//! built on top of them.
//!
//! # Example
//!
//! ```rust,ignore
//! use cirrus_client::{ClientCache, RemoveItemHook, RemoveItemInput, StorefrontFetcher};
//!
//! let fetcher = StorefrontFetcher::new("https://shop.example.com")?;
//! let cache = ClientCache::new();
//!
//! let remove_item = RemoveItemHook::new(fetcher, cache);
//! let cart = remove_item.remove_item(&RemoveItemInput::new("line-item-id")).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cache;
pub mod cart;
pub mod error;
pub mod fetcher;

pub use cache::{CacheKey, CacheValue, ClientCache};
pub use cart::{CartCache, RemoveItemHook, RemoveItemInput, use_cart};
pub use error::ClientError;
pub use fetcher::{FetchMethod, FetchOptions, StorefrontFetcher};
