//! Firm type lookup rows.

use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `master_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MasterType {
    pub type_id: DbId,
    pub type_name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMasterType {
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub type_name: String,
    pub description: Option<String>,
}
