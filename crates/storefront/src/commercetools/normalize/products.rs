//! Product normalization: prices, images, variants and grouped options.

use cirrus_core::{Money, Product, ProductImage, ProductOption, ProductOptionValue, ProductVariant};
use serde_json::Value;

use super::common::{dedup, localized, stringify, without_nils};
use super::{NormalizeError, NormalizeOptions};
use crate::commercetools::types as ct;

/// The two product shapes the platform hands out.
///
/// Projections carry their own id; catalog data (`masterData.current`) does
/// not, so the id travels alongside it.
#[derive(Debug, Clone, Copy)]
pub enum ProductSource<'a> {
    Projection(&'a ct::ProductProjection),
    Data {
        id: &'a str,
        data: &'a ct::ProductData,
    },
}

impl<'a> ProductSource<'a> {
    /// Product id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Projection(projection) => &projection.id,
            Self::Data { id, .. } => id,
        }
    }

    /// Localized content and variants.
    #[must_use]
    pub const fn data(&self) -> &'a ct::ProductData {
        match *self {
            Self::Projection(projection) => &projection.data,
            Self::Data { data, .. } => data,
        }
    }
}

impl<'a> From<&'a ct::ProductProjection> for ProductSource<'a> {
    fn from(projection: &'a ct::ProductProjection) -> Self {
        Self::Projection(projection)
    }
}

impl<'a> From<&'a ct::Product> for ProductSource<'a> {
    fn from(product: &'a ct::Product) -> Self {
        Self::Data {
            id: &product.id,
            data: &product.master_data.current,
        }
    }
}

// =============================================================================
// Prices
// =============================================================================

/// Convert platform money, or emit the unpriced sentinel when there is none.
#[must_use]
pub fn money(price: Option<&ct::TypedMoney>, options: &NormalizeOptions) -> Money {
    price.map_or_else(
        || Money::unpriced(options.currency.as_str()),
        |p| Money::from_minor_units(p.cent_amount, p.currency_code.as_str()),
    )
}

/// Pick the price in the target currency, else the first listed price.
#[must_use]
pub fn resolve_price(prices: Option<&[ct::Price]>, options: &NormalizeOptions) -> Money {
    let prices = prices.unwrap_or_default();
    let chosen = prices
        .iter()
        .find(|price| price.value.currency_code == options.currency)
        .or_else(|| prices.first());

    money(chosen.map(|price| &price.value), options)
}

// =============================================================================
// Options
// =============================================================================

/// Build a multiple-choice option from already-stringified values.
pub fn normalize_product_option(
    name: &str,
    values: impl IntoIterator<Item = String>,
) -> ProductOption {
    ProductOption::MultipleChoiceOption {
        id: name.to_string(),
        display_name: name.to_string(),
        values: dedup(values)
            .into_iter()
            .map(ProductOptionValue::new)
            .collect(),
    }
}

/// A single attribute as an option; set-typed values contribute one label per element.
fn attribute_option(attribute: &ct::Attribute) -> ProductOption {
    let labels = match &attribute.value {
        Value::Array(items) => items.iter().map(stringify).collect(),
        other => vec![stringify(other)],
    };
    normalize_product_option(&attribute.name, labels)
}

/// Group attributes by name in first-seen order.
fn group_attributes<'a>(
    attributes: impl IntoIterator<Item = &'a ct::Attribute>,
) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for attribute in attributes {
        let value = stringify(&attribute.value);
        match groups.iter_mut().find(|(name, _)| *name == attribute.name) {
            Some((_, values)) => values.push(value),
            None => groups.push((attribute.name.clone(), vec![value])),
        }
    }

    groups
}

// =============================================================================
// Images
// =============================================================================

/// Map platform images to display images.
pub fn normalize_product_images<'a>(
    images: impl IntoIterator<Item = &'a ct::Image>,
) -> Vec<ProductImage> {
    images
        .into_iter()
        .map(|image| ProductImage {
            url: image.url.clone(),
            alt: image.label.clone().filter(|label| !label.is_empty()),
            width: image.dimensions.w,
            height: image.dimensions.h,
        })
        .collect()
}

fn variant_images(variant: &ct::ProductVariant) -> impl Iterator<Item = &ct::Image> {
    without_nils(variant.images.iter().flatten().map(Option::as_ref))
}

fn variant_attributes(variant: &ct::ProductVariant) -> impl Iterator<Item = &ct::Attribute> {
    without_nils(variant.attributes.iter().flatten().map(Option::as_ref))
}

/// Master variant first, then the rest in listed order.
fn all_variants(data: &ct::ProductData) -> impl Iterator<Item = &ct::ProductVariant> {
    std::iter::once(&data.master_variant).chain(data.variants.iter())
}

// =============================================================================
// Variants and products
// =============================================================================

/// Normalize a single variant.
#[must_use]
pub fn normalize_product_variant(
    variant: &ct::ProductVariant,
    options: &NormalizeOptions,
) -> ProductVariant {
    let price = resolve_price(variant.prices.as_deref(), options).value;

    ProductVariant {
        id: variant.id.to_string(),
        name: variant.id.to_string(),
        sku: variant.sku.clone().unwrap_or_default(),
        price,
        options: variant_attributes(variant).map(attribute_option).collect(),
        requires_shipping: false,
        list_price: price,
    }
}

/// Normalize a product.
///
/// # Errors
///
/// Returns `MissingLocale` if the name or slug has no entry for the content locale.
pub fn normalize_product(
    source: ProductSource<'_>,
    options: &NormalizeOptions,
) -> Result<Product, NormalizeError> {
    let data = source.data();
    let locale = options.locale.as_str();

    let name = localized(&data.name, locale, "name")?;
    let slug = localized(&data.slug, locale, "slug")?;
    let description = data
        .description
        .as_ref()
        .and_then(|description| description.get(locale))
        .cloned()
        .unwrap_or_default();

    Ok(Product {
        id: source.id().to_string(),
        path: format!("/{slug}"),
        name,
        slug,
        description,
        price: resolve_price(data.master_variant.prices.as_deref(), options),
        images: normalize_product_images(all_variants(data).flat_map(variant_images)),
        variants: all_variants(data)
            .map(|variant| normalize_product_variant(variant, options))
            .collect(),
        options: group_attributes(all_variants(data).flat_map(variant_attributes))
            .into_iter()
            .map(|(name, values)| normalize_product_option(&name, values))
            .collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn options() -> NormalizeOptions {
        NormalizeOptions::default()
    }

    fn variant(value: serde_json::Value) -> ct::ProductVariant {
        serde_json::from_value(value).unwrap()
    }

    fn image(url: &str, label: Option<&str>) -> serde_json::Value {
        json!({ "url": url, "label": label, "dimensions": { "w": 640, "h": 480 } })
    }

    fn projection() -> ct::ProductProjection {
        serde_json::from_value(json!({
            "id": "prod-1",
            "name": { "en": "Trail Shoe", "de": "Laufschuh" },
            "slug": { "en": "trail-shoe" },
            "description": { "en": "Grippy." },
            "masterVariant": {
                "id": 1,
                "sku": "TS-1",
                "prices": [
                    { "value": { "centAmount": 500, "currencyCode": "EUR" } },
                    { "value": { "centAmount": 1000, "currencyCode": "USD" } }
                ],
                "images": [image("https://cdn.example.com/1.jpg", Some("Front")), null],
                "attributes": [{ "name": "color", "value": "red" }, null]
            },
            "variants": [
                {
                    "id": 2,
                    "prices": [{ "value": { "centAmount": 500, "currencyCode": "EUR" } }],
                    "images": [image("https://cdn.example.com/2.jpg", None)],
                    "attributes": [
                        { "name": "color", "value": "blue" },
                        { "name": "size", "value": 42 }
                    ]
                },
                { "id": 3 },
                {
                    "id": 4,
                    "images": [null, image("https://cdn.example.com/4.jpg", Some(""))],
                    "attributes": [{ "name": "color", "value": "red" }]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_exact_currency_match_wins() {
        let v = variant(json!({
            "id": 1,
            "prices": [
                { "value": { "centAmount": 500, "currencyCode": "EUR" } },
                { "value": { "centAmount": 1000, "currencyCode": "USD" } }
            ]
        }));
        let price = resolve_price(v.prices.as_deref(), &options());
        assert_eq!(price.value, Decimal::new(1000, 2));
        assert_eq!(price.currency_code, "USD");
    }

    #[test]
    fn test_falls_back_to_first_price() {
        let v = variant(json!({
            "id": 1,
            "prices": [{ "value": { "centAmount": 500, "currencyCode": "EUR" } }]
        }));
        let price = resolve_price(v.prices.as_deref(), &options());
        assert_eq!(price.value, Decimal::new(500, 2));
        assert_eq!(price.currency_code, "EUR");
    }

    #[test]
    fn test_missing_or_empty_prices_are_unpriced() {
        let missing = resolve_price(None, &options());
        assert_eq!(missing.value, Decimal::new(-100, 2));
        assert_eq!(missing.currency_code, "USD");

        let empty = resolve_price(Some(&[]), &options());
        assert!(empty.is_unpriced());
        assert_eq!(empty.currency_code, "USD");
    }

    #[test]
    fn test_target_currency_is_configurable() {
        let v = variant(json!({
            "id": 1,
            "prices": [
                { "value": { "centAmount": 1000, "currencyCode": "USD" } },
                { "value": { "centAmount": 900, "currencyCode": "EUR" } }
            ]
        }));
        let opts = NormalizeOptions {
            currency: "EUR".to_string(),
            ..NormalizeOptions::default()
        };
        let price = resolve_price(v.prices.as_deref(), &opts);
        assert_eq!(price.value, Decimal::new(900, 2));

        assert_eq!(resolve_price(None, &opts).currency_code, "EUR");
    }

    #[test]
    fn test_option_values_are_deduplicated() {
        let option = normalize_product_option(
            "color",
            vec!["red".to_string(), "blue".to_string(), "red".to_string()],
        );
        assert_eq!(option.id(), "color");
        assert_eq!(option.display_name(), "color");
        assert_eq!(
            option.values(),
            &[ProductOptionValue::new("red"), ProductOptionValue::new("blue")]
        );
    }

    #[test]
    fn test_variant_normalization() {
        let v = variant(json!({
            "id": 7,
            "prices": [{ "value": { "centAmount": 1299, "currencyCode": "USD" } }],
            "attributes": [
                { "name": "material", "value": "leather" },
                { "name": "sizes", "value": [40, 41, 40] },
                null
            ]
        }));
        let normalized = normalize_product_variant(&v, &options());

        assert_eq!(normalized.id, "7");
        assert_eq!(normalized.name, "7");
        assert_eq!(normalized.sku, "");
        assert_eq!(normalized.price, Decimal::new(1299, 2));
        assert_eq!(normalized.list_price, normalized.price);
        assert!(!normalized.requires_shipping);
        assert_eq!(normalized.options.len(), 2);
        assert_eq!(
            normalized.options[1].values(),
            &[ProductOptionValue::new("40"), ProductOptionValue::new("41")]
        );
    }

    #[test]
    fn test_unpriced_variant_uses_sentinel_value() {
        let normalized = normalize_product_variant(&variant(json!({ "id": 3 })), &options());
        assert_eq!(normalized.price, Decimal::NEGATIVE_ONE);
        assert!(normalized.options.is_empty());
    }

    #[test]
    fn test_product_fields() {
        let projection = projection();
        let product = normalize_product(ProductSource::from(&projection), &options()).unwrap();

        assert_eq!(product.id, "prod-1");
        assert_eq!(product.name, "Trail Shoe");
        assert_eq!(product.slug, "trail-shoe");
        assert_eq!(product.path, "/trail-shoe");
        assert_eq!(product.description, "Grippy.");
        assert_eq!(product.price, Money::from_minor_units(1000, "USD"));
        assert_eq!(
            product
                .variants
                .iter()
                .map(|v| v.id.as_str())
                .collect::<Vec<_>>(),
            vec!["1", "2", "3", "4"]
        );
    }

    #[test]
    fn test_images_drop_nulls_and_keep_master_first() {
        let projection = projection();
        let product = normalize_product(ProductSource::from(&projection), &options()).unwrap();

        let urls: Vec<_> = product.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://cdn.example.com/1.jpg",
                "https://cdn.example.com/2.jpg",
                "https://cdn.example.com/4.jpg",
            ]
        );
        assert_eq!(product.images[0].alt.as_deref(), Some("Front"));
        assert_eq!(product.images[1].alt, None);
        assert_eq!(product.images[2].alt, None);
        assert_eq!(product.images[0].width, 640);
        assert_eq!(product.images[0].height, 480);
    }

    #[test]
    fn test_attributes_grouped_across_variants() {
        let projection = projection();
        let product = normalize_product(ProductSource::from(&projection), &options()).unwrap();

        assert_eq!(product.options.len(), 2);
        let color = &product.options[0];
        assert_eq!(color.id(), "color");
        assert_eq!(
            color.values(),
            &[ProductOptionValue::new("red"), ProductOptionValue::new("blue")]
        );
        let size = &product.options[1];
        assert_eq!(size.id(), "size");
        assert_eq!(size.values(), &[ProductOptionValue::new("42")]);
    }

    #[test]
    fn test_grouped_set_values_are_json_encoded() {
        let projection: ct::ProductProjection = serde_json::from_value(json!({
            "id": "prod-2",
            "name": { "en": "Sock" },
            "slug": { "en": "sock" },
            "masterVariant": { "id": 1, "attributes": [{ "name": "tags", "value": ["a", "b"] }] }
        }))
        .unwrap();
        let product = normalize_product(ProductSource::from(&projection), &options()).unwrap();

        assert_eq!(
            product.options[0].values(),
            &[ProductOptionValue::new(r#"["a","b"]"#)]
        );
    }

    #[test]
    fn test_missing_description_is_empty() {
        let mut projection = projection();
        projection.data.description = None;
        let product = normalize_product(ProductSource::from(&projection), &options()).unwrap();
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_missing_locale_is_an_error() {
        let projection = projection();
        let opts = NormalizeOptions {
            locale: "de".to_string(),
            ..NormalizeOptions::default()
        };
        let err = normalize_product(ProductSource::from(&projection), &opts).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MissingLocale {
                field: "slug",
                locale: "de".to_string(),
            }
        );
    }

    #[test]
    fn test_product_data_source_uses_supplied_id() {
        let projection = projection();
        let source = ProductSource::Data {
            id: "catalog-9",
            data: &projection.data,
        };
        let product = normalize_product(source, &options()).unwrap();
        assert_eq!(product.id, "catalog-9");
        assert_eq!(product.name, "Trail Shoe");
    }

    #[test]
    fn test_product_without_master_images() {
        let projection: ct::ProductProjection = serde_json::from_value(json!({
            "id": "prod-3",
            "name": { "en": "Cap" },
            "slug": { "en": "cap" },
            "masterVariant": { "id": 1 },
            "variants": [{ "id": 2, "images": [image("https://cdn.example.com/cap.jpg", None)] }]
        }))
        .unwrap();
        let product = normalize_product(ProductSource::from(&projection), &options()).unwrap();

        assert_eq!(product.images.len(), 1);
        assert!(product.price.is_unpriced());
        assert!(product.options.is_empty());
    }
}
