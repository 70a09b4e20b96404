//! Client cache shared by every hook.
//!
//! Each key holds the last data a hook fetched or was mutated with. Entries
//! only change through hooks; nothing expires on its own.

use cirrus_core::Cart;
use moka::future::Cache;

/// Upper bound on cached entries.
const MAX_ENTRIES: u64 = 64;

/// Cache key, one per hook resource.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Cart,
}

/// Cached value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheValue {
    /// Active cart; `None` when the session has no cart.
    Cart(Option<Box<Cart>>),
}

/// Shared client cache. Clones share storage.
#[derive(Clone)]
pub struct ClientCache {
    entries: Cache<CacheKey, CacheValue>,
}

impl ClientCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().max_capacity(MAX_ENTRIES).build(),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<CacheValue> {
        self.entries.get(key).await
    }

    pub async fn insert(&self, key: CacheKey, value: CacheValue) {
        self.entries.insert(key, value).await;
    }

    pub async fn invalidate(&self, key: &CacheKey) {
        self.entries.invalidate(key).await;
    }
}

impl Default for ClientCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClientCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
