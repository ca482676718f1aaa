//! Party-product link model and DTOs.

use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::product::Product;

/// A row from the `party_products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartyProduct {
    pub party_product_id: DbId,
    pub party_id: DbId,
    pub product_id: DbId,
    pub quantity: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for attaching a product to a party.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartyProduct {
    pub product_id: DbId,
    pub quantity: Option<i32>,
}

/// A party-product link with the referenced product embedded.
#[derive(Debug, Clone, Serialize)]
pub struct PartyProductDetail {
    #[serde(flatten)]
    pub link: PartyProduct,
    pub product: Product,
}
