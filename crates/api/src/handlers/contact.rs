//! Handlers for `/parties/{id}/contacts`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::types::DbId;
use netage_db::models::contact::{ContactPerson, CreateContactPerson};
use netage_db::repositories::ContactPersonRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::ensure_party_exists;
use crate::state::AppState;

/// POST /parties/{id}/contacts
pub async fn create(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    Json(input): Json<CreateContactPerson>,
) -> AppResult<(StatusCode, Json<ContactPerson>)> {
    input.validate()?;
    ensure_party_exists(&state.pool, party_id).await?;

    let contact = ContactPersonRepo::create(&state.pool, party_id, &input).await?;
    tracing::info!(party_id, contact_id = contact.contact_id, "Contact person added");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /parties/{id}/contacts
pub async fn list_by_party(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Json<Vec<ContactPerson>>> {
    ensure_party_exists(&state.pool, party_id).await?;
    let contacts = ContactPersonRepo::list_by_party(&state.pool, party_id).await?;
    Ok(Json(contacts))
}
