//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                        - Health check
//!
//! # Catalog
//! GET    /api/catalog/products          - Product search (?search, ?categoryId, ?sort)
//! GET    /api/catalog/products/{slug}   - Product by slug
//! GET    /api/catalog/products/id/{id}  - Product by id
//! GET    /api/catalog/categories        - Category listing
//!
//! # Cart (session-bound)
//! GET    /api/cart                      - Active cart or null
//! POST   /api/cart                      - Add item   {item: {productId, variantId, quantity?}}
//! PUT    /api/cart                      - Update qty {itemId, item: {quantity}}
//! DELETE /api/cart                      - Remove     {itemId}
//!
//! # Wishlist (session-bound)
//! GET    /api/wishlist                  - Active wishlist or null
//! POST   /api/wishlist                  - Add item   {item: {productId, variantId}}
//! DELETE /api/wishlist                  - Remove     {itemId}
//!
//! # Customer
//! GET    /api/customer                  - Signed-in customer or null
//! ```
//!
//! Every success body is `{"data": ...}`; errors are
//! `{"data": null, "errors": [{"message"}]}`.

pub mod cart;
pub mod categories;
pub mod customer;
pub mod products;
pub mod wishlist;

use axum::{
    Json, Router,
    body::Bytes,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A variant id sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VariantIdInput {
    Number(i64),
    Text(String),
}

impl VariantIdInput {
    /// Resolve to the platform's numeric variant id.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` when the text form is not an integer.
    pub fn resolve(&self) -> Result<i64> {
        match self {
            Self::Number(id) => Ok(*id),
            Self::Text(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AppError::BadRequest(format!("variantId '{raw}' is not a number"))),
        }
    }
}

/// Decode a JSON request body. An empty body decodes to `T::default()`, so
/// missing fields surface as field-level validation errors.
///
/// # Errors
///
/// Returns `BadRequest` when the body is not valid JSON for `T`.
pub fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// Unwrap a required input field.
///
/// # Errors
///
/// Returns `BadRequest` naming `field` when the value is absent.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}

/// Treat blank strings as absent. Non-blank values are returned as given.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{slug}", get(products::show))
        .route("/products/id/{id}", get(products::show_by_id))
        .route("/categories", get(categories::index))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/catalog", catalog_routes())
        .route(
            "/api/cart",
            get(cart::show)
                .post(cart::add)
                .put(cart::update)
                .delete(cart::remove),
        )
        .route(
            "/api/wishlist",
            get(wishlist::show)
                .post(wishlist::add)
                .delete(wishlist::remove),
        )
        .route("/api/customer", get(customer::show))
}
