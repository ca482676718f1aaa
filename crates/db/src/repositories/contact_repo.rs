//! Repository for the `contact_person` table.

use netage_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::contact::{ContactPerson, CreateContactPerson};

const COLUMNS: &str = "contact_id, party_id, name, mobile_number, email_id, designation, \
    gender, birth_date, address, aadhar_number, pan_number, is_primary, created_at";

pub struct ContactPersonRepo;

impl ContactPersonRepo {
    /// Insert a contact bound to `party_id`. `is_primary` defaults to `true`.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        party_id: DbId,
        input: &CreateContactPerson,
    ) -> Result<ContactPerson, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_person
                (party_id, name, mobile_number, email_id, designation, gender,
                 birth_date, address, aadhar_number, pan_number, is_primary)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactPerson>(&query)
            .bind(party_id)
            .bind(&input.name)
            .bind(&input.mobile_number)
            .bind(&input.email_id)
            .bind(&input.designation)
            .bind(&input.gender)
            .bind(input.birth_date)
            .bind(&input.address)
            .bind(&input.aadhar_number)
            .bind(&input.pan_number)
            .bind(input.is_primary)
            .fetch_one(executor)
            .await
    }

    pub async fn list_by_party(
        pool: &PgPool,
        party_id: DbId,
    ) -> Result<Vec<ContactPerson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_person WHERE party_id = $1 ORDER BY contact_id"
        );
        sqlx::query_as::<_, ContactPerson>(&query)
            .bind(party_id)
            .fetch_all(pool)
            .await
    }
}
