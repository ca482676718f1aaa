//! Repository for the `bank_details` table.

use netage_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::bank_details::{BankDetails, CreateBankDetails};

const COLUMNS: &str = "bank_id, party_id, bank_name, branch_name, account_holder_name, \
    account_number, confirm_account_number, account_type, ifsc_code, bank_address, \
    cancelled_cheque_image, is_primary, created_at";

pub struct BankDetailsRepo;

impl BankDetailsRepo {
    /// Insert bank details bound to `party_id`. `is_primary` defaults to `true`.
    ///
    /// The account confirmation rule is the caller's responsibility
    /// (see `CreateBankDetails::check_confirmation`).
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        party_id: DbId,
        input: &CreateBankDetails,
    ) -> Result<BankDetails, sqlx::Error> {
        let query = format!(
            "INSERT INTO bank_details
                (party_id, bank_name, branch_name, account_holder_name, account_number,
                 confirm_account_number, account_type, ifsc_code, bank_address,
                 cancelled_cheque_image, is_primary)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BankDetails>(&query)
            .bind(party_id)
            .bind(&input.bank_name)
            .bind(&input.branch_name)
            .bind(&input.account_holder_name)
            .bind(&input.account_number)
            .bind(&input.confirm_account_number)
            .bind(&input.account_type)
            .bind(&input.ifsc_code)
            .bind(&input.bank_address)
            .bind(&input.cancelled_cheque_image)
            .bind(input.is_primary)
            .fetch_one(executor)
            .await
    }

    pub async fn list_by_party(
        pool: &PgPool,
        party_id: DbId,
    ) -> Result<Vec<BankDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bank_details WHERE party_id = $1 ORDER BY bank_id");
        sqlx::query_as::<_, BankDetails>(&query)
            .bind(party_id)
            .fetch_all(pool)
            .await
    }
}
