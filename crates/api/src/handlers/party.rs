//! Handlers for the `/parties` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::party::{ENTITY_PARTY, PARTY_CODE_EXISTS, PARTY_DELETED};
use netage_core::search::DEFAULT_PARTY_LIMIT;
use netage_core::types::DbId;
use netage_db::constraints;
use netage_db::models::party::{CreateParty, PartyDetail, PartySummary, UpdateParty};
use netage_db::repositories::PartyRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::query::ListParams;
use crate::state::AppState;

/// POST /parties
///
/// Creates the party and every nested dependent in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateParty>,
) -> AppResult<(StatusCode, Json<PartyDetail>)> {
    input.validate()?;
    if let Some(bank) = &input.bank_details {
        bank.check_confirmation()?;
    }

    let detail = PartyRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::conflict_on(e, constraints::PARTY_CODE, PARTY_CODE_EXISTS))?;

    tracing::info!(
        party_id = detail.party.party_id,
        party_code = %detail.party.party_code,
        addresses = detail.addresses.len(),
        contacts = detail.contact_persons.len(),
        "Party created"
    );
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /parties?skip=&limit=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<PartySummary>>> {
    let (limit, offset) = params.page(DEFAULT_PARTY_LIMIT);
    let pattern = params.pattern();
    let parties = PartyRepo::list_summaries(&state.pool, pattern.as_deref(), limit, offset).await?;
    Ok(Json(parties))
}

/// GET /parties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PartyDetail>> {
    let detail = PartyRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY_PARTY, id))?;
    Ok(Json(detail))
}

/// PUT /parties/{id}
///
/// Only the fields present in the body are changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateParty>,
) -> AppResult<Json<PartyDetail>> {
    input.validate()?;

    let detail = PartyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY_PARTY, id))?;

    tracing::info!(party_id = id, "Party updated");
    Ok(Json(detail))
}

/// DELETE /parties/{id}
///
/// Dependents go with the party through `ON DELETE CASCADE`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if PartyRepo::delete(&state.pool, id).await? {
        tracing::info!(party_id = id, "Party deleted");
        Ok(Json(MessageResponse {
            message: PARTY_DELETED,
        }))
    } else {
        Err(AppError::not_found(ENTITY_PARTY, id))
    }
}
