//! Shared helpers for normalization.

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Value;

use super::NormalizeError;
use crate::commercetools::types::LocalizedString;

/// Render an attribute value as display text.
///
/// Strings pass through; every other JSON value is JSON-encoded.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Remove repeated items, keeping the first occurrence and the original order.
pub fn dedup<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Drop `None` entries.
pub fn without_nils<T>(items: impl IntoIterator<Item = Option<T>>) -> impl Iterator<Item = T> {
    items.into_iter().flatten()
}

/// Read a required localized field.
pub(crate) fn localized(
    value: &LocalizedString,
    locale: &str,
    field: &'static str,
) -> Result<String, NormalizeError> {
    value
        .get(locale)
        .cloned()
        .ok_or_else(|| NormalizeError::MissingLocale {
            field,
            locale: locale.to_string(),
        })
}
