//! Party account details model and DTOs. At most one row per party.

use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `party_account_details` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartyAccountDetails {
    pub account_id: DbId,
    pub party_id: DbId,
    pub account_name: String,
    pub account_type: String,
    pub main_group: String,
    pub group_name: String,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartyAccountDetails {
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub account_name: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub account_type: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub main_group: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub group_name: String,
    pub remarks: Option<String>,
}
