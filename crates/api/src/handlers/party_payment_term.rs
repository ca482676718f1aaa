//! Handlers for `/parties/{id}/payment-terms`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::party::{ENTITY_PAYMENT_TERM, PAYMENT_TERM_ALREADY_ASSIGNED};
use netage_core::types::DbId;
use netage_db::constraints;
use netage_db::models::party_payment_term::{CreatePartyPaymentTerm, PartyPaymentTermDetail};
use netage_db::repositories::{PartyPaymentTermRepo, PaymentTermRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_party_exists;
use crate::state::AppState;

/// POST /parties/{id}/payment-terms
pub async fn attach(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    Json(input): Json<CreatePartyPaymentTerm>,
) -> AppResult<(StatusCode, Json<PartyPaymentTermDetail>)> {
    ensure_party_exists(&state.pool, party_id).await?;
    let payment_term = PaymentTermRepo::find_by_id(&state.pool, input.term_id)
        .await?
        .ok_or(AppError::not_found(ENTITY_PAYMENT_TERM, input.term_id))?;

    let link = PartyPaymentTermRepo::create(&state.pool, party_id, &input)
        .await
        .map_err(|e| {
            AppError::conflict_on(e, constraints::PARTY_PAYMENT_TERM, PAYMENT_TERM_ALREADY_ASSIGNED)
        })?;

    tracing::info!(party_id, term_id = payment_term.term_id, "Payment term assigned to party");
    Ok((
        StatusCode::CREATED,
        Json(PartyPaymentTermDetail { link, payment_term }),
    ))
}

/// GET /parties/{id}/payment-terms
pub async fn list_by_party(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Json<Vec<PartyPaymentTermDetail>>> {
    ensure_party_exists(&state.pool, party_id).await?;
    let terms = PartyPaymentTermRepo::list_by_party(&state.pool, party_id).await?;
    Ok(Json(terms))
}
