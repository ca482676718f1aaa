//! Repository for the `party_account_details` table.

use netage_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::account_details::{CreatePartyAccountDetails, PartyAccountDetails};

const COLUMNS: &str =
    "account_id, party_id, account_name, account_type, main_group, group_name, remarks, created_at";

pub struct PartyAccountDetailsRepo;

impl PartyAccountDetailsRepo {
    /// Insert the account-detail block for `party_id`.
    ///
    /// A second block for the same party violates
    /// `uq_party_account_details_party`.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        party_id: DbId,
        input: &CreatePartyAccountDetails,
    ) -> Result<PartyAccountDetails, sqlx::Error> {
        let query = format!(
            "INSERT INTO party_account_details
                (party_id, account_name, account_type, main_group, group_name, remarks)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartyAccountDetails>(&query)
            .bind(party_id)
            .bind(&input.account_name)
            .bind(&input.account_type)
            .bind(&input.main_group)
            .bind(&input.group_name)
            .bind(&input.remarks)
            .fetch_one(executor)
            .await
    }

    /// Find the account-detail block owned by a party.
    pub async fn find_by_party(
        pool: &PgPool,
        party_id: DbId,
    ) -> Result<Option<PartyAccountDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM party_account_details WHERE party_id = $1");
        sqlx::query_as::<_, PartyAccountDetails>(&query)
            .bind(party_id)
            .fetch_optional(pool)
            .await
    }
}
