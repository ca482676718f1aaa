//! Bank details model and DTOs.

use netage_core::error::CoreError;
use netage_core::party::ensure_account_numbers_match;
use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `bank_details` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BankDetails {
    pub bank_id: DbId,
    pub party_id: DbId,
    pub bank_name: String,
    pub branch_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub confirm_account_number: String,
    pub account_type: Option<String>,
    pub ifsc_code: String,
    pub bank_address: Option<String>,
    /// Base64 payload or file path of the scanned cheque.
    pub cancelled_cheque_image: Option<String>,
    pub is_primary: bool,
    pub created_at: Timestamp,
}

/// DTO for adding bank details to a party.
///
/// Field validation covers lengths; the account confirmation rule is
/// checked separately by [`CreateBankDetails::check_confirmation`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBankDetails {
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub bank_name: String,
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub branch_name: String,
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub account_holder_name: String,
    #[validate(length(max = 30), custom(function = "netage_core::party::not_blank"))]
    pub account_number: String,
    #[validate(length(max = 30), custom(function = "netage_core::party::not_blank"))]
    pub confirm_account_number: String,
    #[validate(length(max = 30))]
    pub account_type: Option<String>,
    #[validate(length(max = 20), custom(function = "netage_core::party::not_blank"))]
    pub ifsc_code: String,
    pub bank_address: Option<String>,
    pub cancelled_cheque_image: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_primary: Option<bool>,
}

impl CreateBankDetails {
    /// Reject the payload unless both account number entries agree.
    pub fn check_confirmation(&self) -> Result<(), CoreError> {
        ensure_account_numbers_match(&self.account_number, &self.confirm_account_number)
    }
}
