//! Handlers for `/parties/{id}/account-details`. A party has at most one
//! account-detail block.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::party::{ACCOUNT_DETAILS_EXIST, ENTITY_ACCOUNT_DETAILS};
use netage_core::types::DbId;
use netage_db::constraints;
use netage_db::models::account_details::{CreatePartyAccountDetails, PartyAccountDetails};
use netage_db::repositories::PartyAccountDetailsRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_party_exists;
use crate::state::AppState;

/// POST /parties/{id}/account-details
pub async fn create(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    Json(input): Json<CreatePartyAccountDetails>,
) -> AppResult<(StatusCode, Json<PartyAccountDetails>)> {
    input.validate()?;
    ensure_party_exists(&state.pool, party_id).await?;

    let details = PartyAccountDetailsRepo::create(&state.pool, party_id, &input)
        .await
        .map_err(|e| {
            AppError::conflict_on(e, constraints::PARTY_ACCOUNT_DETAILS, ACCOUNT_DETAILS_EXIST)
        })?;

    tracing::info!(party_id, account_id = details.account_id, "Account details added");
    Ok((StatusCode::CREATED, Json(details)))
}

/// GET /parties/{id}/account-details
pub async fn get_by_party(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Json<PartyAccountDetails>> {
    ensure_party_exists(&state.pool, party_id).await?;
    let details = PartyAccountDetailsRepo::find_by_party(&state.pool, party_id)
        .await?
        .ok_or(AppError::not_found(ENTITY_ACCOUNT_DETAILS, party_id))?;
    Ok(Json(details))
}
