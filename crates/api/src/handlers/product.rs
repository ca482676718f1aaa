//! Handlers for the `/products` catalogue.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::party::PRODUCT_CODE_EXISTS;
use netage_core::search::DEFAULT_PRODUCT_LIMIT;
use netage_db::constraints;
use netage_db::models::product::{CreateProduct, Product};
use netage_db::repositories::ProductRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    input.validate()?;

    let product = ProductRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::conflict_on(e, constraints::PRODUCT_CODE, PRODUCT_CODE_EXISTS))?;

    tracing::info!(
        product_id = product.product_id,
        product_code = %product.product_code,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products?skip=&limit=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let (limit, offset) = params.page(DEFAULT_PRODUCT_LIMIT);
    let pattern = params.pattern();
    let products = ProductRepo::list(&state.pool, pattern.as_deref(), limit, offset).await?;
    Ok(Json(products))
}
