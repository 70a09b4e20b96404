//! Customer route handlers.

use axum::extract::State;
use cirrus_core::Customer;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::commercetools::CommercetoolsError;
use crate::commercetools::normalize::normalize_customer;
use crate::error::Result;
use crate::models::session::{clear_id, keys, load_id};
use crate::routes::ApiResponse;
use crate::state::AppState;

/// Customer payload; `customer` is null for guests.
#[derive(Debug, Serialize)]
pub struct CustomerData {
    pub customer: Option<Customer>,
}

/// The customer bound to this session, if any.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<ApiResponse<CustomerData>> {
    let Some(customer_id) = load_id(&session, keys::CUSTOMER_ID).await? else {
        return Ok(ApiResponse::new(CustomerData { customer: None }));
    };

    let customer = match state.commercetools().get_customer(&customer_id).await {
        Ok(customer) => Some(normalize_customer(&customer)),
        Err(CommercetoolsError::NotFound(_)) => {
            tracing::warn!(customer_id = %customer_id, "session customer no longer exists");
            clear_id(&session, keys::CUSTOMER_ID).await?;
            None
        }
        Err(e) => return Err(e.into()),
    };

    Ok(ApiResponse::new(CustomerData { customer }))
}
