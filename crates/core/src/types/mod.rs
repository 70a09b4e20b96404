//! Normalized records.
//!
//! These are output shapes only. They are freshly built by the storefront's
//! normalization layer and never mutated afterwards.

pub mod cart;
pub mod customer;
pub mod money;
pub mod product;
pub mod site;
pub mod wishlist;

pub use cart::{Cart, Discount, LineItem, SelectedOption};
pub use customer::Customer;
pub use money::{Currency, Money};
pub use product::{Product, ProductImage, ProductOption, ProductOptionValue, ProductVariant};
pub use site::Category;
pub use wishlist::{Wishlist, WishlistItem};
