pub mod account_details;
pub mod account_group;
pub mod address;
pub mod bank_details;
pub mod contact;
pub mod master_type;
pub mod party;
pub mod party_payment_term;
pub mod party_product;
pub mod payment_term;
pub mod product;

use netage_core::party::ENTITY_PARTY;
use netage_core::types::DbId;
use netage_db::repositories::PartyRepo;
use netage_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Fail with `NotFound` unless the party exists.
///
/// Dependent inserts also carry a foreign key to the party, so a party
/// removed after this check still surfaces as a 404.
pub(crate) async fn ensure_party_exists(pool: &DbPool, party_id: DbId) -> AppResult<()> {
    if PartyRepo::exists(pool, party_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found(ENTITY_PARTY, party_id))
    }
}
