//! Handlers for `/parties/{id}/products`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::party::{
    ENTITY_PARTY_PRODUCT, ENTITY_PRODUCT, PRODUCT_ALREADY_ASSIGNED, PRODUCT_REMOVED,
};
use netage_core::types::DbId;
use netage_db::constraints;
use netage_db::models::party_product::{CreatePartyProduct, PartyProductDetail};
use netage_db::repositories::{PartyProductRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_party_exists, MessageResponse};
use crate::state::AppState;

/// POST /parties/{id}/products
pub async fn attach(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    Json(input): Json<CreatePartyProduct>,
) -> AppResult<(StatusCode, Json<PartyProductDetail>)> {
    ensure_party_exists(&state.pool, party_id).await?;
    let product = ProductRepo::find_by_id(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::not_found(ENTITY_PRODUCT, input.product_id))?;

    let link = PartyProductRepo::create(&state.pool, party_id, &input)
        .await
        .map_err(|e| {
            AppError::conflict_on(e, constraints::PARTY_PRODUCT, PRODUCT_ALREADY_ASSIGNED)
        })?;

    tracing::info!(party_id, product_id = product.product_id, "Product assigned to party");
    Ok((StatusCode::CREATED, Json(PartyProductDetail { link, product })))
}

/// GET /parties/{id}/products
pub async fn list_by_party(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Json<Vec<PartyProductDetail>>> {
    ensure_party_exists(&state.pool, party_id).await?;
    let products = PartyProductRepo::list_by_party(&state.pool, party_id).await?;
    Ok(Json(products))
}

/// DELETE /parties/{id}/products/{product_id}
pub async fn detach(
    State(state): State<AppState>,
    Path((party_id, product_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    ensure_party_exists(&state.pool, party_id).await?;

    if PartyProductRepo::remove(&state.pool, party_id, product_id).await? {
        tracing::info!(party_id, product_id, "Product removed from party");
        Ok(Json(MessageResponse {
            message: PRODUCT_REMOVED,
        }))
    } else {
        Err(AppError::not_found(ENTITY_PARTY_PRODUCT, product_id))
    }
}
