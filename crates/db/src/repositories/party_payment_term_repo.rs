//! Repository for the `party_payment_terms` link table.

use std::collections::HashMap;

use netage_core::types::DbId;
use sqlx::PgPool;

use crate::models::party_payment_term::{
    CreatePartyPaymentTerm, PartyPaymentTerm, PartyPaymentTermDetail,
};
use crate::repositories::PaymentTermRepo;

const COLUMNS: &str = "party_term_id, party_id, term_id, is_default, created_at";

pub struct PartyPaymentTermRepo;

impl PartyPaymentTermRepo {
    /// Attach a payment term to a party. `is_default` defaults to `false`.
    pub async fn create(
        pool: &PgPool,
        party_id: DbId,
        input: &CreatePartyPaymentTerm,
    ) -> Result<PartyPaymentTerm, sqlx::Error> {
        let query = format!(
            "INSERT INTO party_payment_terms (party_id, term_id, is_default)
             VALUES ($1, $2, COALESCE($3, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartyPaymentTerm>(&query)
            .bind(party_id)
            .bind(input.term_id)
            .bind(input.is_default)
            .fetch_one(pool)
            .await
    }

    /// List a party's payment-term links with each term embedded.
    pub async fn list_by_party(
        pool: &PgPool,
        party_id: DbId,
    ) -> Result<Vec<PartyPaymentTermDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM party_payment_terms WHERE party_id = $1 ORDER BY party_term_id"
        );
        let links = sqlx::query_as::<_, PartyPaymentTerm>(&query)
            .bind(party_id)
            .fetch_all(pool)
            .await?;
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = links.iter().map(|l| l.term_id).collect();
        let mut terms: HashMap<DbId, _> = PaymentTermRepo::find_by_ids(pool, &ids)
            .await?
            .into_iter()
            .map(|t| (t.term_id, t))
            .collect();

        Ok(links
            .into_iter()
            .filter_map(|link| {
                let payment_term = terms.remove(&link.term_id)?;
                Some(PartyPaymentTermDetail { link, payment_term })
            })
            .collect())
    }
}
