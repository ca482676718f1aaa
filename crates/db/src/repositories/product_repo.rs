//! Repository for the `products` table.

use netage_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product};

const COLUMNS: &str = "product_id, product_code, product_name, group_name, sub_group, \
    item, stock_keeping_unit, created_at";

/// Provides CRUD operations for the product catalogue.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product. A duplicate code violates `uq_products_product_code`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (product_code, product_name, group_name, sub_group, item, stock_keeping_unit)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.product_code)
            .bind(&input.product_name)
            .bind(&input.group_name)
            .bind(&input.sub_group)
            .bind(&input.item)
            .bind(&input.stock_keeping_unit)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE product_id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch all products whose id is in `ids`.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE product_id = ANY($1)");
        sqlx::query_as::<_, Product>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List products ordered by id.
    ///
    /// `pattern` is an `ILIKE` pattern (see `netage_core::search::contains_pattern`)
    /// matched against name and code; `None` lists everything.
    pub async fn list(
        pool: &PgPool,
        pattern: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE $1::TEXT IS NULL OR product_name ILIKE $1 OR product_code ILIKE $1
             ORDER BY product_id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
