//! HTTP-level tests for the reference data endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_master_types_and_account_groups(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/master-types/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let types = body_json(response).await;
    assert_eq!(types.as_array().unwrap().len(), 5);
    assert_eq!(types[1]["type_name"], "Partnership");

    let response = get(common::build_test_app(pool), "/account-groups").await;
    assert_eq!(response.status(), StatusCode::OK);
    let groups = body_json(response).await;
    assert_eq!(groups.as_array().unwrap().len(), 8);
    assert_eq!(groups[0]["main_group"], "Cash & Cash Equivalents");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_master_type_and_duplicate(pool: PgPool) {
    let body = json!({"type_name": "Trust", "description": "Charitable trust"});

    let response = post_json(common::build_test_app(pool.clone()), "/master-types", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["type_name"], "Trust");

    let response = post_json(common::build_test_app(pool), "/master-types", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Master type already exists");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_account_group_and_duplicate_pair(pool: PgPool) {
    let body = json!({
        "main_group": "Fixed Assets",
        "group_name": "Non-Current Assets",
        "from_account_no": "200100000",
        "to_account_no": "200199999"
    });

    let response = post_json(common::build_test_app(pool.clone()), "/account-groups/", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(common::build_test_app(pool), "/account-groups/", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_products_create_search_and_duplicate(pool: PgPool) {
    for (code, name) in [("SUG-1", "Sugar 1kg"), ("RIC-1", "Basmati Rice"), ("SUG-5", "Sugar 5kg")] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/products/",
            json!({"product_code": code, "product_name": name, "group_name": "Grocery"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/products",
        json!({"product_code": "SUG-1", "product_name": "Again", "group_name": "Grocery"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Product code already exists");

    let response = get(common::build_test_app(pool.clone()), "/products?search=sugar").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = get(common::build_test_app(pool.clone()), "/products/?search=ric-").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["product_name"], "Basmati Rice");

    let response = get(common::build_test_app(pool), "/products?skip=1&limit=1").await;
    let json = body_json(response).await;
    assert_eq!(json[0]["product_code"], "RIC-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_payment_terms_default_flag(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/payment-terms/",
        json!({"term_description": "Immediate", "payment_days": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["is_default"], false);
    assert!(json["cash_discount"].is_null());

    let response = get(common::build_test_app(pool), "/payment-terms").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_validation_rejects_long_code(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/products",
        json!({"product_code": "X".repeat(21), "product_name": "Long", "group_name": "Grocery"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cash_discount_beyond_column_returns_400(pool: PgPool) {
    for discount in [json!(1000), json!(2.555)] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/payment-terms/",
            json!({"term_description": "Net 15", "payment_days": 15, "cash_discount": discount}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{discount}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let response = get(common::build_test_app(pool), "/payment-terms").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
