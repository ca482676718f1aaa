//! Chart-of-accounts group lookup rows.

use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `account_groups` table. `(main_group, group_name)` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountGroup {
    pub group_id: DbId,
    pub main_group: String,
    pub group_name: String,
    pub from_account_no: Option<String>,
    pub to_account_no: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAccountGroup {
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub main_group: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub group_name: String,
    #[validate(length(max = 20))]
    pub from_account_no: Option<String>,
    #[validate(length(max = 20))]
    pub to_account_no: Option<String>,
}
