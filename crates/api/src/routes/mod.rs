pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/           list (filter + page), create
/// /movies/{id}       get, update, delete
/// /directors/        list, create
/// /directors/{id}    get, update, delete
/// /genres/           list, create
/// /genres/{id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(directors::router())
        .merge(genres::router())
}
