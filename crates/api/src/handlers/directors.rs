//! Handlers for the director collection and item endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelist_core::error::CoreError;
use cinelist_core::types::DbId;
use cinelist_db::models::director::{CreateDirector, UpdateDirector};
use cinelist_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /directors/
pub async fn list_directors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// POST /directors/
pub async fn create_director(
    State(state): State<AppState>,
    Json(input): Json<CreateDirector>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::create(&state.pool, &input).await?;

    tracing::info!(director_id = director.id, name = %director.name, "Director created");

    Ok(StatusCode::CREATED)
}

/// GET /directors/{id}
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "director",
            id,
        })?;

    Ok(Json(director))
}

/// PUT /directors/{id}
pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDirector>,
) -> AppResult<impl IntoResponse> {
    match DirectorRepo::update(&state.pool, id, &input).await? {
        Some(director) => {
            tracing::info!(director_id = director.id, "Director updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::BadRequest(format!(
            "update matched no director with id {id}"
        ))),
    }
}

/// DELETE /directors/{id}
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "director",
            id,
        }
        .into());
    }

    tracing::info!(director_id = id, "Director deleted");
    Ok(StatusCode::NO_CONTENT)
}
