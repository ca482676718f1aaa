//! Repository for the `party_address` table.

use netage_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::address::{CreatePartyAddress, PartyAddress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "address_id, party_id, shipping_address, country, state, \
    district, city, zip_code, is_primary, created_at";

/// Provides insert and listing for party addresses.
pub struct PartyAddressRepo;

impl PartyAddressRepo {
    /// Insert an address bound to `party_id`, returning the created row.
    ///
    /// If `is_primary` is `None` in the input, defaults to `true`.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        party_id: DbId,
        input: &CreatePartyAddress,
    ) -> Result<PartyAddress, sqlx::Error> {
        let query = format!(
            "INSERT INTO party_address
                (party_id, shipping_address, country, state, district, city, zip_code, is_primary)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartyAddress>(&query)
            .bind(party_id)
            .bind(&input.shipping_address)
            .bind(&input.country)
            .bind(&input.state)
            .bind(&input.district)
            .bind(&input.city)
            .bind(&input.zip_code)
            .bind(input.is_primary)
            .fetch_one(executor)
            .await
    }

    /// List a party's addresses in insertion order.
    pub async fn list_by_party(
        pool: &PgPool,
        party_id: DbId,
    ) -> Result<Vec<PartyAddress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM party_address WHERE party_id = $1 ORDER BY address_id"
        );
        sqlx::query_as::<_, PartyAddress>(&query)
            .bind(party_id)
            .fetch_all(pool)
            .await
    }
}
