use async_trait::async_trait;
use sqlx::PgPool;

use super::PrizeRepository;
use crate::core::error::{AppError, Result};
use crate::features::prizes::models::{NewPrize, Prize, PrizeChanges, PrizeFilter};

const PRIZE_COLUMNS: &str = "id, name, year, description, created_at, updated_at";

/// Convert database error to more specific AppError with user-friendly messages
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // unique_violation
        if db_err.code().as_deref() == Some("23505") {
            return AppError::Conflict(
                "A prize with this name already exists for that year".to_string(),
            );
        }
    }

    AppError::Database(e)
}

pub struct PgPrizeRepository {
    pool: PgPool,
}

impl PgPrizeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrizeRepository for PgPrizeRepository {
    async fn list(&self, filter: &PrizeFilter) -> Result<(Vec<Prize>, i64)> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM prizes WHERE ($1::INT IS NULL OR year = $1)")
                .bind(filter.year)
                .fetch_one(&self.pool)
                .await
                .map_err(handle_db_error)?;

        let query = format!(
            r#"
            SELECT {PRIZE_COLUMNS}
            FROM prizes
            WHERE ($1::INT IS NULL OR year = $1)
            ORDER BY year DESC, id ASC
            LIMIT $2 OFFSET $3
            "#
        );

        let prizes = sqlx::query_as::<_, Prize>(&query)
            .bind(filter.year)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok((prizes, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Prize>> {
        let query = format!("SELECT {PRIZE_COLUMNS} FROM prizes WHERE id = $1");

        sqlx::query_as::<_, Prize>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn insert(&self, prize: NewPrize) -> Result<Prize> {
        let query = format!(
            r#"
            INSERT INTO prizes (name, year, description)
            VALUES ($1, $2, $3)
            RETURNING {PRIZE_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Prize>(&query)
            .bind(prize.name)
            .bind(prize.year)
            .bind(prize.description)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn update(&self, id: i64, changes: PrizeChanges) -> Result<Option<Prize>> {
        let query = format!(
            r#"
            UPDATE prizes
            SET name = COALESCE($1, name),
                year = COALESCE($2, year),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $4
            RETURNING {PRIZE_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Prize>(&query)
            .bind(changes.name)
            .bind(changes.year)
            .bind(changes.description)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM prizes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
