//! Repository for the `movie` table.

use cinelist_core::pagination::{clamp_page, page_offset, MOVIE_PAGE_SIZE};
use cinelist_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie};
use crate::DbPool;

/// Column list for movie queries.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie
                (title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its primary key.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies in insertion order, optionally filtered by director
    /// and/or genre, paged at [`MOVIE_PAGE_SIZE`] rows per page.
    pub async fn list(pool: &DbPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let mut conditions: Vec<&str> = Vec::new();

        if filter.director_id.is_some() {
            conditions.push("director_id = ?");
        }
        if filter.genre_id.is_some() {
            conditions.push("genre_id = ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let page = clamp_page(filter.page);
        let offset = page_offset(page, MOVIE_PAGE_SIZE);

        let query = format!(
            "SELECT {COLUMNS} FROM movie {where_clause} \
             ORDER BY id ASC \
             LIMIT ? OFFSET ?"
        );

        let mut q = sqlx::query_as::<_, Movie>(&query);

        if let Some(did) = filter.director_id {
            q = q.bind(did);
        }
        if let Some(gid) = filter.genre_id {
            q = q.bind(gid);
        }

        q = q.bind(MOVIE_PAGE_SIZE).bind(offset);
        q.fetch_all(pool).await
    }

    /// Apply a partial update. Returns the updated row, or `None` if no
    /// row matched the id.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title       = COALESCE(?, title),
                description = COALESCE(?, description),
                trailer     = COALESCE(?, trailer),
                year        = COALESCE(?, year),
                rating      = COALESCE(?, rating),
                genre_id    = COALESCE(?, genre_id),
                director_id = COALESCE(?, director_id)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
