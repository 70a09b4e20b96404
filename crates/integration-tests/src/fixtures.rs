//! commercetools wire fixtures.

use serde_json::{Value, json};

#[must_use]
pub fn price(cents: i64, currency: &str) -> Value {
    json!({ "value": { "centAmount": cents, "currencyCode": currency, "fractionDigits": 2 } })
}

/// Master variant: red, 10.00 USD, one image.
#[must_use]
pub fn master_variant() -> Value {
    json!({
        "id": 1,
        "sku": "TS-RED",
        "prices": [price(900, "EUR"), price(1000, "USD")],
        "images": [{ "url": "https://images.example.com/red.jpg", "dimensions": { "w": 800, "h": 600 }, "label": "Red" }],
        "attributes": [{ "name": "color", "value": "red" }]
    })
}

/// Second variant: blue, a null image entry, another image.
#[must_use]
pub fn blue_variant() -> Value {
    json!({
        "id": 2,
        "sku": "TS-BLUE",
        "prices": [price(1200, "USD")],
        "images": [null, { "url": "https://images.example.com/blue.jpg", "dimensions": { "w": 640, "h": 480 } }],
        "attributes": [{ "name": "color", "value": "blue" }, null]
    })
}

#[must_use]
pub fn product_data() -> Value {
    json!({
        "name": { "en": "Trail Shoe" },
        "slug": { "en": "trail-shoe" },
        "description": { "en": "Grippy soles." },
        "categories": [{ "typeId": "category", "id": "42" }],
        "masterVariant": master_variant(),
        "variants": [blue_variant()]
    })
}

/// Product projection `p-1` (`trail-shoe`).
#[must_use]
pub fn product_projection() -> Value {
    let mut projection = product_data();
    projection["id"] = json!("p-1");
    projection["version"] = json!(4);
    projection
}

/// Product `p-1` as served by `products/{id}`.
#[must_use]
pub fn product() -> Value {
    json!({
        "id": "p-1",
        "version": 4,
        "masterData": { "current": product_data(), "published": true }
    })
}

#[must_use]
pub fn paged(results: Vec<Value>) -> Value {
    let count = results.len();
    json!({ "limit": 20, "offset": 0, "count": count, "total": count, "results": results })
}

#[must_use]
pub fn category(id: &str, name: &str, slug: &str) -> Value {
    json!({ "id": id, "version": 1, "name": { "en": name }, "slug": { "en": slug }, "ancestors": [] })
}

#[must_use]
pub fn line_item(id: &str, quantity: u64) -> Value {
    json!({
        "id": id,
        "productId": "p-1",
        "name": { "en": "Trail Shoe" },
        "variant": master_variant(),
        "quantity": quantity
    })
}

/// Cart `id` at `version`; total is 10.00 USD per unit.
#[must_use]
pub fn cart(id: &str, version: i64, line_items: &[Value]) -> Value {
    let units: u64 = line_items
        .iter()
        .filter_map(|item| item["quantity"].as_u64())
        .sum();
    json!({
        "id": id,
        "version": version,
        "createdAt": "2024-03-01T10:00:00.000Z",
        "taxMode": "Platform",
        "lineItems": line_items,
        "totalPrice": { "centAmount": units * 1000, "currencyCode": "USD", "fractionDigits": 2 }
    })
}

#[must_use]
pub fn shopping_list(id: &str, version: i64, line_items: &[Value]) -> Value {
    json!({
        "id": id,
        "version": version,
        "name": { "en": "Wishlist" },
        "lineItems": line_items
    })
}

#[must_use]
pub fn shopping_list_item(id: &str, variant_id: i64) -> Value {
    json!({ "id": id, "productId": "p-1", "variantId": variant_id, "quantity": 1 })
}

#[must_use]
pub fn customer(id: &str) -> Value {
    json!({ "id": id, "version": 2, "email": "ada@example.com", "firstName": "Ada", "lastName": "Lovelace" })
}
