//! Repository for the `payment_terms` table.

use netage_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment_term::{CreatePaymentTerm, PaymentTerm};

const COLUMNS: &str = "term_id, term_description, payment_days, cash_discount, \
    variable_days, sms_days, is_default, created_at";

pub struct PaymentTermRepo;

impl PaymentTermRepo {
    /// Insert a payment term. `is_default` defaults to `false`.
    pub async fn create(pool: &PgPool, input: &CreatePaymentTerm) -> Result<PaymentTerm, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment_terms
                (term_description, payment_days, cash_discount, variable_days, sms_days, is_default)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentTerm>(&query)
            .bind(&input.term_description)
            .bind(input.payment_days)
            .bind(input.cash_discount)
            .bind(input.variable_days)
            .bind(input.sms_days)
            .bind(input.is_default)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PaymentTerm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_terms WHERE term_id = $1");
        sqlx::query_as::<_, PaymentTerm>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<PaymentTerm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_terms WHERE term_id = ANY($1)");
        sqlx::query_as::<_, PaymentTerm>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PaymentTerm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_terms ORDER BY term_id");
        sqlx::query_as::<_, PaymentTerm>(&query).fetch_all(pool).await
    }
}
