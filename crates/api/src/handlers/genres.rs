//! Handlers for the genre collection and item endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelist_core::error::CoreError;
use cinelist_core::types::DbId;
use cinelist_db::models::genre::{CreateGenre, UpdateGenre};
use cinelist_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /genres/
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// POST /genres/
pub async fn create_genre(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::create(&state.pool, &input).await?;

    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");

    Ok(StatusCode::CREATED)
}

/// GET /genres/{id}
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "genre", id })?;

    Ok(Json(genre))
}

/// PUT /genres/{id}
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    match GenreRepo::update(&state.pool, id, &input).await? {
        Some(genre) => {
            tracing::info!(genre_id = genre.id, "Genre updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::BadRequest(format!(
            "update matched no genre with id {id}"
        ))),
    }
}

/// DELETE /genres/{id}
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "genre", id }.into());
    }

    tracing::info!(genre_id = id, "Genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
