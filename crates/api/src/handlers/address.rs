//! Handlers for `/parties/{id}/addresses`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use netage_core::types::DbId;
use netage_db::models::address::{CreatePartyAddress, PartyAddress};
use netage_db::repositories::PartyAddressRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::ensure_party_exists;
use crate::state::AppState;

/// POST /parties/{id}/addresses
pub async fn create(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    Json(input): Json<CreatePartyAddress>,
) -> AppResult<(StatusCode, Json<PartyAddress>)> {
    input.validate()?;
    ensure_party_exists(&state.pool, party_id).await?;

    let address = PartyAddressRepo::create(&state.pool, party_id, &input).await?;
    tracing::info!(party_id, address_id = address.address_id, "Address added");
    Ok((StatusCode::CREATED, Json(address)))
}

/// GET /parties/{id}/addresses
pub async fn list_by_party(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Json<Vec<PartyAddress>>> {
    ensure_party_exists(&state.pool, party_id).await?;
    let addresses = PartyAddressRepo::list_by_party(&state.pool, party_id).await?;
    Ok(Json(addresses))
}
