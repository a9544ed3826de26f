//! Repository for the `director` table.

use cinelist_core::types::DbId;

use crate::models::director::{CreateDirector, Director, UpdateDirector};
use crate::DbPool;

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            "INSERT INTO director (name) VALUES (?) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// Find a director by its primary key.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT id, name FROM director WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT id, name FROM director ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Returns the updated row, or `None` if no
    /// row matched the id.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            "UPDATE director SET name = COALESCE(?, name) WHERE id = ? RETURNING id, name",
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a director by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
