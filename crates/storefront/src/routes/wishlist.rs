//! Wishlist route handlers.
//!
//! A wishlist is a commercetools shopping list whose id is kept in the session.

use axum::{body::Bytes, extract::State};
use cirrus_core::Wishlist;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::commercetools::CommercetoolsError;
use crate::commercetools::normalize::normalize_wishlist;
use crate::commercetools::types::{self as ct, LocalizedString, ShoppingListUpdateAction};
use crate::error::{AppError, Result};
use crate::models::session::{clear_id, keys, load_id, store_id};
use crate::routes::{ApiResponse, VariantIdInput, parse_body, required};
use crate::state::AppState;

/// Name given to shopping lists created as wishlists.
const WISHLIST_NAME: &str = "Wishlist";

/// `POST /api/wishlist` body.
#[derive(Debug, Default, Deserialize)]
pub struct AddItemBody {
    pub item: Option<AddItemInput>,
}

/// Product variant to remember.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub product_id: Option<String>,
    pub variant_id: Option<VariantIdInput>,
}

/// `DELETE /api/wishlist` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemBody {
    pub item_id: Option<String>,
}

async fn active_list(state: &AppState, session: &Session) -> Result<Option<ct::ShoppingList>> {
    let Some(list_id) = load_id(session, keys::WISHLIST_ID).await? else {
        return Ok(None);
    };

    match state.commercetools().get_shopping_list(&list_id).await {
        Ok(list) => Ok(Some(list)),
        Err(CommercetoolsError::NotFound(_)) => {
            tracing::warn!(wishlist_id = %list_id, "session wishlist no longer exists");
            clear_id(session, keys::WISHLIST_ID).await?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn wishlist_draft(locale: &str) -> ct::ShoppingListDraft {
    let mut name = LocalizedString::new();
    name.insert(locale.to_string(), WISHLIST_NAME.to_string());
    ct::ShoppingListDraft { name }
}

/// Active wishlist, or null.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<ApiResponse<Option<Wishlist>>> {
    let list = active_list(&state, &session).await?;
    Ok(ApiResponse::new(list.as_ref().map(normalize_wishlist)))
}

/// Add a product variant, creating the wishlist on first use.
#[instrument(skip(state, session, body))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<ApiResponse<Option<Wishlist>>> {
    let body: AddItemBody = parse_body(&body)?;
    let item = required(body.item, "item")?;
    let product_id = required(item.product_id, "item.productId")?;
    let variant_id = required(item.variant_id, "item.variantId")?.resolve()?;

    let list = match active_list(&state, &session).await? {
        Some(list) => list,
        None => {
            let draft = wishlist_draft(&state.normalize_options().locale);
            let list = state.commercetools().create_shopping_list(draft).await?;
            store_id(&session, keys::WISHLIST_ID, &list.id).await?;
            tracing::info!(wishlist_id = %list.id, "wishlist created");
            list
        }
    };

    let list = state
        .commercetools()
        .update_shopping_list(
            &list.id,
            list.version,
            vec![ShoppingListUpdateAction::AddLineItem {
                product_id,
                variant_id,
                quantity: 1,
            }],
        )
        .await?;

    Ok(ApiResponse::new(Some(normalize_wishlist(&list))))
}

/// Remove an entry.
#[instrument(skip(state, session, body))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<ApiResponse<Option<Wishlist>>> {
    let body: RemoveItemBody = parse_body(&body)?;
    let line_item_id = required(body.item_id, "itemId")?;

    let list = active_list(&state, &session)
        .await?
        .ok_or_else(|| AppError::BadRequest("No active wishlist".to_string()))?;

    let list = state
        .commercetools()
        .update_shopping_list(
            &list.id,
            list.version,
            vec![ShoppingListUpdateAction::RemoveLineItem { line_item_id }],
        )
        .await?;

    Ok(ApiResponse::new(Some(normalize_wishlist(&list))))
}
