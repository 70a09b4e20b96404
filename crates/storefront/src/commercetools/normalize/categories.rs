//! Category normalization.

use cirrus_core::Category;

use super::common::localized;
use super::{NormalizeError, NormalizeOptions};
use crate::commercetools::types as ct;

/// Normalize a category.
///
/// # Errors
///
/// Returns `MissingLocale` if the name or slug lacks the content locale.
pub fn normalize_category(
    category: &ct::Category,
    options: &NormalizeOptions,
) -> Result<Category, NormalizeError> {
    let slug = localized(&category.slug, &options.locale, "category.slug")?;

    Ok(Category {
        id: category.id.clone(),
        name: localized(&category.name, &options.locale, "category.name")?,
        path: format!("/{slug}"),
        slug,
    })
}
