//! Category route handlers.

use axum::extract::State;
use cirrus_core::Category;
use serde::Serialize;
use tracing::instrument;

use crate::commercetools::normalize::normalize_category;
use crate::error::Result;
use crate::routes::ApiResponse;
use crate::state::AppState;

/// Category listing payload.
#[derive(Debug, Serialize)]
pub struct CategoriesData {
    pub categories: Vec<Category>,
}

/// List all categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<ApiResponse<CategoriesData>> {
    let response = state.commercetools().get_categories().await?;

    let options = state.normalize_options();
    let categories = response
        .results
        .iter()
        .map(|category| normalize_category(category, options))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ApiResponse::new(CategoriesData { categories }))
}
