//! Party-payment-term link model and DTOs.

use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::payment_term::PaymentTerm;

/// A row from the `party_payment_terms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartyPaymentTerm {
    pub party_term_id: DbId,
    pub party_id: DbId,
    pub term_id: DbId,
    pub is_default: bool,
    pub created_at: Timestamp,
}

/// DTO for attaching a payment term to a party.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartyPaymentTerm {
    pub term_id: DbId,
    /// Defaults to `false` if omitted.
    pub is_default: Option<bool>,
}

/// A party-payment-term link with the referenced term embedded.
#[derive(Debug, Clone, Serialize)]
pub struct PartyPaymentTermDetail {
    #[serde(flatten)]
    pub link: PartyPaymentTerm,
    pub payment_term: PaymentTerm,
}
