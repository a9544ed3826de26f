//! Movie models and DTOs.
//!
//! The row struct carries the foreign keys; the response struct does not.
//! Filtering accepts `director_id`/`genre_id`, but the serialized movie
//! never echoes them back.

use cinelist_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `movie` table.
///
/// Deliberately not `Serialize`: the wire representation is
/// [`MovieResponse`], which omits `genre_id` and `director_id`.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// Wire representation of a movie.
#[derive(Debug, Clone, Serialize)]
pub struct MovieResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            trailer: movie.trailer,
            year: movie.year,
            rating: movie.rating,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a movie.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for a partial movie update. Absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// Listing constraints: optional foreign-key equality filters plus a
/// 1-based page number.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub page: Option<i64>,
}
