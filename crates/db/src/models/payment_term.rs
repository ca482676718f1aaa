//! Payment term model and DTOs.

use netage_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `payment_terms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaymentTerm {
    pub term_id: DbId,
    pub term_description: String,
    pub payment_days: i32,
    /// Percentage, two decimal places.
    pub cash_discount: Option<Decimal>,
    pub variable_days: Option<i32>,
    pub sms_days: Option<i32>,
    pub is_default: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaymentTerm {
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub term_description: String,
    pub payment_days: i32,
    #[validate(custom(function = "netage_core::party::cash_discount_fits"))]
    pub cash_discount: Option<Decimal>,
    pub variable_days: Option<i32>,
    pub sms_days: Option<i32>,
    /// Defaults to `false` if omitted.
    pub is_default: Option<bool>,
}
