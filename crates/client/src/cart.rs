//! Cart hooks.
//!
//! [`use_cart`] reads the shared cart entry and fetches `GET /api/cart` on a
//! miss. [`RemoveItemHook`] deletes a line item and writes the returned cart
//! straight into that entry without refetching.

use cirrus_core::{Cart, LineItem};
use serde::Serialize;

use crate::cache::{CacheKey, CacheValue, ClientCache};
use crate::error::ClientError;
use crate::fetcher::{FetchMethod, FetchOptions, StorefrontFetcher};

/// Target of the cart read.
pub const CART_FETCH_OPTIONS: FetchOptions = FetchOptions {
    url: "/api/cart",
    method: FetchMethod::Get,
};

/// Handle on the shared cart entry.
#[derive(Debug, Clone)]
pub struct CartCache {
    fetcher: StorefrontFetcher,
    cache: ClientCache,
}

/// Cart hook bound to `fetcher` and the shared `cache`.
#[must_use]
pub const fn use_cart(fetcher: StorefrontFetcher, cache: ClientCache) -> CartCache {
    CartCache { fetcher, cache }
}

impl CartCache {
    /// Cached cart, fetching it on a miss.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub async fn data(&self) -> Result<Option<Cart>, ClientError> {
        match self.cache.get(&CacheKey::Cart).await {
            Some(CacheValue::Cart(cart)) => Ok(cart.map(|cart| *cart)),
            None => self.revalidate().await,
        }
    }

    /// Refetch the cart and store it.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the cached entry is left untouched.
    pub async fn revalidate(&self) -> Result<Option<Cart>, ClientError> {
        let cart: Option<Cart> = self.fetcher.fetch(CART_FETCH_OPTIONS, None).await?;
        self.store(cart.clone()).await;
        Ok(cart)
    }

    /// Replace the cached cart with `data`, refetching afterwards when
    /// `revalidate` is set.
    ///
    /// # Errors
    ///
    /// Returns an error only if the revalidating fetch fails.
    pub async fn mutate(
        &self,
        data: Option<Cart>,
        revalidate: bool,
    ) -> Result<Option<Cart>, ClientError> {
        self.store(data.clone()).await;
        if revalidate {
            return self.revalidate().await;
        }
        Ok(data)
    }

    async fn store(&self, cart: Option<Cart>) {
        self.cache
            .insert(CacheKey::Cart, CacheValue::Cart(cart.map(Box::new)))
            .await;
    }
}

/// Line item to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveItemInput {
    /// Line item id.
    pub id: String,
}

impl RemoveItemInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&LineItem> for RemoveItemInput {
    fn from(item: &LineItem) -> Self {
        Self::new(item.id.clone())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveItemBody<'a> {
    item_id: &'a str,
}

/// "Remove item from cart" mutation.
#[derive(Debug, Clone)]
pub struct RemoveItemHook {
    fetcher: StorefrontFetcher,
    cart: CartCache,
}

impl RemoveItemHook {
    /// Request target: `DELETE /api/cart`.
    pub const FETCH_OPTIONS: FetchOptions = FetchOptions {
        url: "/api/cart",
        method: FetchMethod::Delete,
    };

    #[must_use]
    pub fn new(fetcher: StorefrontFetcher, cache: ClientCache) -> Self {
        Self {
            cart: use_cart(fetcher.clone(), cache),
            fetcher,
        }
    }

    /// Send `{itemId}` and return the updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the storefront rejects it.
    pub async fn fetcher(&self, item_id: &str) -> Result<Option<Cart>, ClientError> {
        let body = serde_json::to_value(RemoveItemBody { item_id })?;
        self.fetcher.fetch(Self::FETCH_OPTIONS, Some(&body)).await
    }

    /// Remove `input` from the cart and write the result into the shared
    /// cart entry without revalidating.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the cache is not touched then.
    pub async fn remove_item(&self, input: &RemoveItemInput) -> Result<Option<Cart>, ClientError> {
        let data = self.fetcher(&input.id).await?;
        self.cart.mutate(data.clone(), false).await?;
        Ok(data)
    }

    /// The cart hook this mutation writes through.
    #[must_use]
    pub const fn cart(&self) -> &CartCache {
        &self.cart
    }
}
