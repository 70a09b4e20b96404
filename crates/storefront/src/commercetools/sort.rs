//! Sort-parameter translation for product search.

/// Translate a storefront sort key into platform sort clauses.
///
/// Unknown or absent keys yield no sort, leaving the platform's relevance order.
#[must_use]
pub fn sort_variables(sort: Option<&str>) -> Vec<String> {
    let clause = match sort {
        Some("price-asc") => "price asc",
        Some("price-desc") => "price desc",
        Some("latest-desc") => "createdAt desc",
        Some("trending-desc") => "lastModifiedAt desc",
        _ => return Vec::new(),
    };

    vec![clause.to_string()]
}
