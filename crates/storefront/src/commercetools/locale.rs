//! Request-locale mapping.
//!
//! Storefront locales are BCP 47 tags (`en-US`); commercetools projects in
//! this integration key localized search fields by a short code.

/// Map a storefront locale to the platform's localized-field key.
///
/// `en-US` → `en`, `pt-BR` → `br`; anything else passes through unchanged.
#[must_use]
pub fn map_locale(locale: &str) -> &str {
    match locale {
        "en-US" => "en",
        "pt-BR" => "br",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locales() {
        assert_eq!(map_locale("en-US"), "en");
        assert_eq!(map_locale("pt-BR"), "br");
    }

    #[test]
    fn test_unknown_locale_passes_through() {
        assert_eq!(map_locale("de-DE"), "de-DE");
        assert_eq!(map_locale("en"), "en");
        assert_eq!(map_locale(""), "");
    }
}
