//! Postgres data-access layer for the party master service.
//!
//! - [`models`]: row structs and request DTOs, one module per table.
//! - [`repositories`]: zero-sized repository structs with async CRUD methods.
//! - [`constraints`]: names of the unique constraints callers translate.

use sqlx::postgres::PgPoolOptions;

pub mod constraints;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, "Opening database connection pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Name of the unique constraint `err` violated, if it is a unique violation.
pub fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            db_err.constraint()
        }
        _ => None,
    }
}

/// Whether `err` is a violation of the named unique constraint.
///
/// Uniqueness is enforced by the store; callers insert first and translate
/// the violation rather than checking beforehand.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    unique_violation(err) == Some(constraint)
}
