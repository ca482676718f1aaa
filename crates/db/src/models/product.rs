//! Product catalogue model and DTOs.

use netage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub product_id: DbId,
    pub product_code: String,
    pub product_name: String,
    pub group_name: String,
    pub sub_group: Option<String>,
    pub item: Option<String>,
    pub stock_keeping_unit: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a product. `product_code` must be unique.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(max = 20), custom(function = "netage_core::party::not_blank"))]
    pub product_code: String,
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub product_name: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub group_name: String,
    #[validate(length(max = 50))]
    pub sub_group: Option<String>,
    #[validate(length(max = 50))]
    pub item: Option<String>,
    #[validate(length(max = 50))]
    pub stock_keeping_unit: Option<String>,
}
