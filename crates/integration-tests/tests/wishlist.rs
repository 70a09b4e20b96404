//! Wishlist endpoint tests.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use cirrus_integration_tests::{
    TestContext, ct_path, fixtures, get, json_request, session_client,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_no_session_wishlist_is_null() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.send(get("/api/wishlist")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": null }));
}

#[tokio::test]
async fn test_add_requires_product_id() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .send(json_request(
            "POST",
            "/api/wishlist",
            &json!({ "item": { "variantId": 1 } }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["message"], "item.productId is required");
}

#[tokio::test]
async fn test_remove_without_wishlist_is_bad_request() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .send(json_request(
            "DELETE",
            "/api/wishlist",
            &json!({ "itemId": "sli-1" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["message"], "No active wishlist");
}

#[tokio::test]
async fn test_wishlist_session_flow() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path(ct_path("shopping-lists")))
        .and(body_json(json!({ "name": { "en": "Wishlist" } })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(fixtures::shopping_list("sl-1", 1, &[])),
        )
        .expect(1)
        .mount(&ctx.commercetools)
        .await;

    Mock::given(method("POST"))
        .and(path(ct_path("shopping-lists/sl-1")))
        .and(body_json(json!({
            "version": 1,
            "actions": [{ "action": "addLineItem", "productId": "p-1", "variantId": 2, "quantity": 1 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::shopping_list(
            "sl-1",
            2,
            &[fixtures::shopping_list_item("sli-1", 2)],
        )))
        .expect(1)
        .mount(&ctx.commercetools)
        .await;

    Mock::given(method("GET"))
        .and(path(ct_path("shopping-lists/sl-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::shopping_list(
            "sl-1",
            2,
            &[fixtures::shopping_list_item("sli-1", 2)],
        )))
        .mount(&ctx.commercetools)
        .await;

    Mock::given(method("POST"))
        .and(path(ct_path("shopping-lists/sl-1")))
        .and(body_json(json!({
            "version": 2,
            "actions": [{ "action": "removeLineItem", "lineItemId": "sli-1" }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::shopping_list("sl-1", 3, &[])),
        )
        .expect(1)
        .mount(&ctx.commercetools)
        .await;

    let base_url = ctx.spawn().await;
    let client = session_client();

    let added: Value = client
        .post(format!("{base_url}/api/wishlist"))
        .json(&json!({ "item": { "productId": "p-1", "variantId": 2 } }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        added,
        json!({ "data": { "items": [{ "id": "sli-1", "product_id": "p-1", "variant_id": 2 }] } })
    );

    let shown: Value = client
        .get(format!("{base_url}/api/wishlist"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(shown["data"]["items"][0]["id"], "sli-1");

    let removed: Value = client
        .delete(format!("{base_url}/api/wishlist"))
        .json(&json!({ "itemId": "sli-1" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(removed, json!({ "data": { "items": [] } }));
}
