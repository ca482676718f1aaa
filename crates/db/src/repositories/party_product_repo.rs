//! Repository for the `party_products` link table.

use std::collections::HashMap;

use netage_core::types::DbId;
use sqlx::PgPool;

use crate::models::party_product::{CreatePartyProduct, PartyProduct, PartyProductDetail};
use crate::repositories::ProductRepo;

const COLUMNS: &str = "party_product_id, party_id, product_id, quantity, created_at";

pub struct PartyProductRepo;

impl PartyProductRepo {
    /// Attach a product to a party.
    ///
    /// Attaching the same product twice violates
    /// `uq_party_products_party_product`.
    pub async fn create(
        pool: &PgPool,
        party_id: DbId,
        input: &CreatePartyProduct,
    ) -> Result<PartyProduct, sqlx::Error> {
        let query = format!(
            "INSERT INTO party_products (party_id, product_id, quantity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartyProduct>(&query)
            .bind(party_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// List a party's product links with each product embedded.
    pub async fn list_by_party(
        pool: &PgPool,
        party_id: DbId,
    ) -> Result<Vec<PartyProductDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM party_products WHERE party_id = $1 ORDER BY party_product_id"
        );
        let links = sqlx::query_as::<_, PartyProduct>(&query)
            .bind(party_id)
            .fetch_all(pool)
            .await?;
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = links.iter().map(|l| l.product_id).collect();
        let mut products: HashMap<DbId, _> = ProductRepo::find_by_ids(pool, &ids)
            .await?
            .into_iter()
            .map(|p| (p.product_id, p))
            .collect();

        // Each product appears at most once per party.
        Ok(links
            .into_iter()
            .filter_map(|link| {
                let product = products.remove(&link.product_id)?;
                Some(PartyProductDetail { link, product })
            })
            .collect())
    }

    /// Detach a product from a party. Returns `true` if a link was removed.
    pub async fn remove(
        pool: &PgPool,
        party_id: DbId,
        product_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM party_products WHERE party_id = $1 AND product_id = $2")
                .bind(party_id)
                .bind(product_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
