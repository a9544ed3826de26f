//! Handlers for the movie collection and item endpoints.
//!
//! The listing supports equality filters on `director_id`/`genre_id` and
//! fixed-size pagination. Responses never include the foreign keys --
//! [`MovieResponse`] is the only wire shape.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelist_core::error::CoreError;
use cinelist_core::types::DbId;
use cinelist_db::models::movie::{CreateMovie, MovieFilter, MovieResponse, UpdateMovie};
use cinelist_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;
use crate::state::AppState;

/// GET /movies/
///
/// List movies in insertion order, optionally filtered by director and/or
/// genre, paged five at a time.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = MovieFilter {
        director_id: params.director_id,
        genre_id: params.genre_id,
        page: params.page,
    };
    let movies = MovieRepo::list(&state.pool, &filter).await?;

    let body: Vec<MovieResponse> = movies.into_iter().map(MovieResponse::from).collect();
    Ok(Json(body))
}

/// POST /movies/
///
/// Create a movie from a typed payload. Returns 201 with an empty body.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok(StatusCode::CREATED)
}

/// GET /movies/{id}
///
/// Fetch a single movie. 404 if the id is unknown.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "movie", id })?;

    Ok(Json(MovieResponse::from(movie)))
}

/// PUT /movies/{id}
///
/// Apply a partial update. 204 when exactly one row matched, 400 otherwise.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    match MovieRepo::update(&state.pool, id, &input).await? {
        Some(movie) => {
            tracing::info!(movie_id = movie.id, "Movie updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::BadRequest(format!(
            "update matched no movie with id {id}"
        ))),
    }
}

/// DELETE /movies/{id}
///
/// Delete by id. 204 when a row existed, 404 otherwise.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "movie", id }.into());
    }

    tracing::info!(movie_id = id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
