//! Route definitions for the genre resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Genre routes mounted at `/genres`.
///
/// ```text
/// GET    /      -> list_genres
/// POST   /      -> create_genre
/// GET    /{id}  -> get_genre
/// PUT    /{id}  -> update_genre
/// DELETE /{id}  -> delete_genre
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/genres/",
            get(genres::list_genres).post(genres::create_genre),
        )
        .route(
            "/genres/{id}",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
}
