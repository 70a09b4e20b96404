//! Cart route handlers.
//!
//! The cart id lives in the session; the cart itself is always re-read from
//! commercetools, and every update is posted against the version just read.

use axum::{body::Bytes, extract::State};
use cirrus_core::Cart;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::commercetools::CommercetoolsError;
use crate::commercetools::normalize::normalize_cart;
use crate::commercetools::types::{self as ct, CartUpdateAction};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::session::{clear_id, keys, load_id, store_id};
use crate::routes::{ApiResponse, VariantIdInput, parse_body, required};
use crate::state::AppState;

/// Quantity used when an add-to-cart request does not name one.
const DEFAULT_QUANTITY: u64 = 1;

/// `POST /api/cart` body.
#[derive(Debug, Default, Deserialize)]
pub struct AddItemBody {
    pub item: Option<AddItemInput>,
}

/// Item to add.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub product_id: Option<String>,
    pub variant_id: Option<VariantIdInput>,
    pub quantity: Option<u64>,
}

/// `PUT /api/cart` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemBody {
    pub item_id: Option<String>,
    pub item: Option<UpdateItemInput>,
}

/// New quantity for a line item.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemInput {
    pub quantity: Option<u64>,
}

/// `DELETE /api/cart` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemBody {
    pub item_id: Option<String>,
}

/// Load the session's cart from commercetools.
///
/// A cart id the platform no longer knows is dropped from the session.
async fn active_cart(state: &AppState, session: &Session) -> Result<Option<ct::Cart>> {
    let Some(cart_id) = load_id(session, keys::CART_ID).await? else {
        return Ok(None);
    };

    match state.commercetools().get_cart(&cart_id).await {
        Ok(cart) => Ok(Some(cart)),
        Err(CommercetoolsError::NotFound(_)) => {
            tracing::warn!(cart_id = %cart_id, "session cart no longer exists");
            clear_id(session, keys::CART_ID).await?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Like [`active_cart`], but updates require a cart.
async fn require_cart(state: &AppState, session: &Session) -> Result<ct::Cart> {
    active_cart(state, session)
        .await?
        .ok_or_else(|| AppError::BadRequest("No active cart".to_string()))
}

fn respond(cart: &ct::Cart, state: &AppState) -> Result<ApiResponse<Option<Cart>>> {
    Ok(ApiResponse::new(Some(normalize_cart(
        cart,
        state.normalize_options(),
    )?)))
}

/// Active cart, or null.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<ApiResponse<Option<Cart>>> {
    match active_cart(&state, &session).await? {
        Some(cart) => respond(&cart, &state),
        None => Ok(ApiResponse::new(None)),
    }
}

/// Add an item, creating the cart on first use.
#[instrument(skip(state, session, body))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<ApiResponse<Option<Cart>>> {
    let body: AddItemBody = parse_body(&body)?;
    let item = required(body.item, "item")?;
    let product_id = required(item.product_id, "item.productId")?;
    let variant_id = required(item.variant_id, "item.variantId")?.resolve()?;
    let quantity = item.quantity.unwrap_or(DEFAULT_QUANTITY);

    let cart = match active_cart(&state, &session).await? {
        Some(cart) => cart,
        None => {
            let cart = state
                .commercetools()
                .create_cart(&state.config().commercetools.currency)
                .await?;
            store_id(&session, keys::CART_ID, &cart.id).await?;
            tracing::info!(cart_id = %cart.id, "cart created");
            cart
        }
    };

    add_breadcrumb(
        "cart",
        "Added item to cart",
        Some(&[("product_id", product_id.as_str())]),
    );

    let cart = state
        .commercetools()
        .update_cart(
            &cart.id,
            cart.version,
            vec![CartUpdateAction::AddLineItem {
                product_id,
                variant_id,
                quantity,
            }],
        )
        .await?;

    respond(&cart, &state)
}

/// Change the quantity of a line item.
#[instrument(skip(state, session, body))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<ApiResponse<Option<Cart>>> {
    let body: UpdateItemBody = parse_body(&body)?;
    let line_item_id = required(body.item_id, "itemId")?;
    let item = required(body.item, "item")?;
    let quantity = required(item.quantity, "item.quantity")?;

    let cart = require_cart(&state, &session).await?;
    let cart = state
        .commercetools()
        .update_cart(
            &cart.id,
            cart.version,
            vec![CartUpdateAction::ChangeLineItemQuantity {
                line_item_id,
                quantity,
            }],
        )
        .await?;

    respond(&cart, &state)
}

/// Remove a line item.
#[instrument(skip(state, session, body))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<ApiResponse<Option<Cart>>> {
    let body: RemoveItemBody = parse_body(&body)?;
    let line_item_id = required(body.item_id, "itemId")?;

    let cart = require_cart(&state, &session).await?;
    let cart = state
        .commercetools()
        .update_cart(
            &cart.id,
            cart.version,
            vec![CartUpdateAction::RemoveLineItem { line_item_id }],
        )
        .await?;

    respond(&cart, &state)
}
