//! Repository for the `genre` table.

use cinelist_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};
use crate::DbPool;

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genre (name) VALUES (?) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its primary key.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genre WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genre ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Returns the updated row, or `None` if no
    /// row matched the id.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genre SET name = COALESCE(?, name) WHERE id = ? RETURNING id, name",
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a genre by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genre WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
