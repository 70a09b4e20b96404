//! Cirrus Core - normalized commerce records.
//!
//! This crate holds the framework-neutral shapes that the storefront API
//! returns and that front-end clients consume:
//! - `storefront` - maps commercetools records into these types and serves them
//! - `client` - decodes them on the consuming side
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no platform
//! knowledge. Every record serializes to the camelCase JSON the front-end
//! expects, with monetary values rendered as JSON numbers.
//!
//! # Modules
//!
//! - [`types`] - Products, variants, options, images, money, carts, categories,
//!   customers and wishlists

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
