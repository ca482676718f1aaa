//! Contact person model and DTOs.

use chrono::NaiveDate;
use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_person` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactPerson {
    pub contact_id: DbId,
    pub party_id: DbId,
    pub name: String,
    pub mobile_number: String,
    pub email_id: Option<String>,
    pub designation: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub pan_number: Option<String>,
    pub is_primary: bool,
    pub created_at: Timestamp,
}

/// DTO for adding a contact person to a party.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactPerson {
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub name: String,
    #[validate(length(max = 15), custom(function = "netage_core::party::not_blank"))]
    pub mobile_number: String,
    #[validate(length(max = 100))]
    pub email_id: Option<String>,
    #[validate(length(max = 50))]
    pub designation: Option<String>,
    #[validate(length(max = 10))]
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    #[validate(length(max = 20))]
    pub aadhar_number: Option<String>,
    #[validate(length(max = 20))]
    pub pan_number: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_primary: Option<bool>,
}
