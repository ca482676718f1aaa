//! Handlers for `/parties/{id}/bank-details`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::types::DbId;
use netage_db::models::bank_details::{BankDetails, CreateBankDetails};
use netage_db::repositories::BankDetailsRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::ensure_party_exists;
use crate::state::AppState;

/// POST /parties/{id}/bank-details
///
/// Rejected with 400 before anything is written when the two account
/// number entries differ.
pub async fn create(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    Json(input): Json<CreateBankDetails>,
) -> AppResult<(StatusCode, Json<BankDetails>)> {
    input.validate()?;
    input.check_confirmation()?;
    ensure_party_exists(&state.pool, party_id).await?;

    let bank = BankDetailsRepo::create(&state.pool, party_id, &input).await?;
    tracing::info!(party_id, bank_id = bank.bank_id, "Bank details added");
    Ok((StatusCode::CREATED, Json(bank)))
}

/// GET /parties/{id}/bank-details
pub async fn list_by_party(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Json<Vec<BankDetails>>> {
    ensure_party_exists(&state.pool, party_id).await?;
    let banks = BankDetailsRepo::list_by_party(&state.pool, party_id).await?;
    Ok(Json(banks))
}
