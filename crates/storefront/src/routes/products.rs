//! Catalog product route handlers.

use axum::extract::{Path, Query, State};
use cirrus_core::Product;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::commercetools::normalize::{ProductSource, normalize_product};
use crate::commercetools::{QueryVariables, TextSearch, sort_variables};
use crate::error::{AppError, Result};
use crate::routes::{ApiResponse, non_empty};
use crate::state::AppState;

/// Expansion applied to every product search.
const PRODUCT_EXPAND: &str = "masterData.current";

/// Product search input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductsBody {
    /// Free-text query.
    pub search: Option<String>,
    /// Restrict to this category and its descendants.
    pub category_id: Option<String>,
    /// Sort key (`price-asc`, `price-desc`, `latest-desc`, `trending-desc`).
    pub sort: Option<String>,
}

/// Search result payload.
#[derive(Debug, Serialize)]
pub struct ProductsData {
    pub products: Vec<Product>,
    pub found: bool,
}

/// Single product payload.
#[derive(Debug, Serialize)]
pub struct ProductData {
    pub product: Product,
}

/// Escape `value` for use inside a double-quoted predicate literal.
fn quote_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Build the search variables for a product listing.
///
/// `locale` is the search-field locale (already mapped, e.g. `en`).
#[must_use]
pub fn product_search_variables(body: &SearchProductsBody, locale: &str) -> QueryVariables {
    QueryVariables {
        expand: vec![PRODUCT_EXPAND.to_string()],
        sort: sort_variables(body.sort.as_deref()),
        search: non_empty(body.search.as_deref()).map(|text| TextSearch {
            field: format!("text.{locale}"),
            text: text.to_string(),
        }),
        filters: non_empty(body.category_id.as_deref())
            .map(|id| format!("categories.id: subtree(\"{}\")", quote_literal(id))),
        ..QueryVariables::default()
    }
}

/// Build the slug predicate for a product lookup.
#[must_use]
pub fn product_slug_variables(slug: &str, locale: &str) -> QueryVariables {
    QueryVariables {
        where_clause: Some(format!("slug({locale}=\"{}\")", quote_literal(slug))),
        limit: Some(1),
        ..QueryVariables::default()
    }
}

/// Search products.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(body): Query<SearchProductsBody>,
) -> Result<ApiResponse<ProductsData>> {
    let variables = product_search_variables(&body, state.search_locale());
    let response = state
        .commercetools()
        .search_product_projections(variables)
        .await?;

    let options = state.normalize_options();
    let products = response
        .results
        .iter()
        .map(|projection| normalize_product(ProductSource::from(projection), options))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(count = response.count, "product search completed");

    Ok(ApiResponse::new(ProductsData {
        products,
        found: response.count > 0,
    }))
}

/// Product by slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ApiResponse<ProductData>> {
    let options = state.normalize_options();
    let variables = product_slug_variables(&slug, &options.locale);
    let response = state
        .commercetools()
        .query_product_projections(variables)
        .await?;

    let projection = response
        .results
        .first()
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    Ok(ApiResponse::new(ProductData {
        product: normalize_product(ProductSource::from(projection), options)?,
    }))
}

/// Product by id, read from its current catalog data.
#[instrument(skip(state))]
pub async fn show_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ProductData>> {
    let product = state.commercetools().get_product(&id).await?;

    Ok(ApiResponse::new(ProductData {
        product: normalize_product(ProductSource::from(&product), state.normalize_options())?,
    }))
}
