//! Repository for the `account_groups` lookup table.

use sqlx::PgPool;

use crate::models::account_group::{AccountGroup, CreateAccountGroup};

const COLUMNS: &str =
    "group_id, main_group, group_name, from_account_no, to_account_no, created_at";

pub struct AccountGroupRepo;

impl AccountGroupRepo {
    /// Insert an account group. A duplicate `(main_group, group_name)` pair
    /// violates `uq_account_groups_main_group_group_name`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAccountGroup,
    ) -> Result<AccountGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO account_groups (main_group, group_name, from_account_no, to_account_no)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccountGroup>(&query)
            .bind(&input.main_group)
            .bind(&input.group_name)
            .bind(&input.from_account_no)
            .bind(&input.to_account_no)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AccountGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM account_groups ORDER BY group_id");
        sqlx::query_as::<_, AccountGroup>(&query).fetch_all(pool).await
    }
}
