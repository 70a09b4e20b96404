//! Catalog endpoint tests: product search, product lookup, categories.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use cirrus_integration_tests::{TestContext, ct_path, fixtures, get};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn labels(option: &Value) -> Vec<&str> {
    option["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value["label"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Product search
// ============================================================================

#[tokio::test]
async fn test_search_translates_inputs_and_normalizes() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("product-projections/search")))
        .and(query_param("expand", "masterData.current"))
        .and(query_param("sort", "price asc"))
        .and(query_param("text.en", "shoe"))
        .and(query_param("filter", "categories.id: subtree(\"42\")"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::paged(vec![fixtures::product_projection()])),
        )
        .expect(1)
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx
        .send(get("/api/catalog/products?search=shoe&categoryId=42&sort=price-asc"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["found"], json!(true));

    let product = &body["data"]["products"][0];
    assert_eq!(product["id"], "p-1");
    assert_eq!(product["name"], "Trail Shoe");
    assert_eq!(product["path"], "/trail-shoe");
    assert_eq!(product["description"], "Grippy soles.");
    assert_eq!(product["price"]["currencyCode"], "USD");
    assert_eq!(product["price"]["value"].as_f64(), Some(10.0));

    let images = product["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["url"], "https://images.example.com/red.jpg");
    assert_eq!(images[0]["alt"], "Red");
    assert_eq!(images[1]["url"], "https://images.example.com/blue.jpg");
    assert!(images[1].get("alt").is_none());

    let options = product["options"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["__typename"], "MultipleChoiceOption");
    assert_eq!(options[0]["displayName"], "color");
    assert_eq!(labels(&options[0]), vec!["red", "blue"]);

    let variants = product["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[1]["id"], "2");
    assert_eq!(variants[1]["sku"], "TS-BLUE");
    assert_eq!(variants[1]["price"].as_f64(), Some(12.0));
    assert_eq!(variants[1]["requiresShipping"], json!(false));
}

#[tokio::test]
async fn test_search_without_results() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("product-projections/search")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::paged(Vec::new())))
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx.send(get("/api/catalog/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "products": [], "found": false } }));
}

#[tokio::test]
async fn test_search_platform_failure_is_bad_gateway() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("product-projections/search")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "statusCode": 500,
            "message": "Write operations are temporarily unavailable",
            "errors": [{ "code": "General", "message": "Write operations are temporarily unavailable" }]
        })))
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx.send(get("/api/catalog/products?search=shoe")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["message"], "External service error");
}

#[tokio::test]
async fn test_missing_content_locale_is_server_error() {
    let ctx = TestContext::new().await;

    let mut projection = fixtures::product_projection();
    projection["name"] = json!({ "de": "Wanderschuh" });

    Mock::given(method("GET"))
        .and(path(ct_path("product-projections/search")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::paged(vec![projection])))
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx.send(get("/api/catalog/products")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errors"][0]["message"], "Internal server error");
}

// ============================================================================
// Product lookup
// ============================================================================

#[tokio::test]
async fn test_product_by_slug() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("product-projections")))
        .and(query_param("where", "slug(en=\"trail-shoe\")"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::paged(vec![fixtures::product_projection()])),
        )
        .expect(1)
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx.send(get("/api/catalog/products/trail-shoe")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["product"]["slug"], "trail-shoe");
}

#[tokio::test]
async fn test_product_by_unknown_slug_is_not_found() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("product-projections")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::paged(Vec::new())))
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx.send(get("/api/catalog/products/no-such-shoe")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["message"], "Not found: product no-such-shoe");
}

#[tokio::test]
async fn test_product_by_id_reads_current_data() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("products/p-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::product()))
        .expect(1)
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx.send(get("/api/catalog/products/id/p-1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["product"]["id"], "p-1");
    assert_eq!(body["data"]["product"]["name"], "Trail Shoe");
}

#[tokio::test]
async fn test_product_by_unknown_id_is_not_found() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("products/p-404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "message": "The Resource with ID 'p-404' was not found.",
            "errors": [{ "code": "ResourceNotFound", "message": "The Resource with ID 'p-404' was not found." }]
        })))
        .mount(&ctx.commercetools)
        .await;

    let (status, _) = ctx.send(get("/api/catalog/products/id/p-404")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_categories() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(ct_path("categories")))
        .and(query_param("limit", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::paged(vec![
            fixtures::category("42", "Shoes", "shoes"),
            fixtures::category("43", "Trail", "trail"),
        ])))
        .mount(&ctx.commercetools)
        .await;

    let (status, body) = ctx.send(get("/api/catalog/categories")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["categories"],
        json!([
            { "id": "42", "name": "Shoes", "slug": "shoes", "path": "/shoes" },
            { "id": "43", "name": "Trail", "slug": "trail", "path": "/trail" }
        ])
    );
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;

    let response = tower::ServiceExt::oneshot(ctx.app(), get("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
