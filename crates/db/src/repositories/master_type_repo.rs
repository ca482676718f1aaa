//! Repository for the `master_types` lookup table.

use sqlx::PgPool;

use crate::models::master_type::{CreateMasterType, MasterType};

const COLUMNS: &str = "type_id, type_name, description, created_at";

pub struct MasterTypeRepo;

impl MasterTypeRepo {
    /// Insert a firm type. A duplicate name violates `uq_master_types_type_name`.
    pub async fn create(pool: &PgPool, input: &CreateMasterType) -> Result<MasterType, sqlx::Error> {
        let query = format!(
            "INSERT INTO master_types (type_name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MasterType>(&query)
            .bind(&input.type_name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<MasterType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM master_types ORDER BY type_id");
        sqlx::query_as::<_, MasterType>(&query).fetch_all(pool).await
    }
}
