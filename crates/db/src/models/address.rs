//! Party address model and DTOs.

use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `party_address` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartyAddress {
    pub address_id: DbId,
    pub party_id: DbId,
    pub shipping_address: String,
    pub country: String,
    pub state: String,
    pub district: Option<String>,
    pub city: Option<String>,
    pub zip_code: String,
    pub is_primary: bool,
    pub created_at: Timestamp,
}

/// DTO for adding an address to a party. The owning party comes from the
/// URL path or the enclosing party payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartyAddress {
    #[validate(custom(function = "netage_core::party::not_blank"))]
    pub shipping_address: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub country: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub state: String,
    #[validate(length(max = 50))]
    pub district: Option<String>,
    #[validate(length(max = 50))]
    pub city: Option<String>,
    #[validate(length(max = 20), custom(function = "netage_core::party::not_blank"))]
    pub zip_code: String,
    /// Defaults to `true` if omitted.
    pub is_primary: Option<bool>,
}
