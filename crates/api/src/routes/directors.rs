//! Route definitions for the director resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::directors;
use crate::state::AppState;

/// Director routes mounted at `/directors`.
///
/// ```text
/// GET    /      -> list_directors
/// POST   /      -> create_director
/// GET    /{id}  -> get_director
/// PUT    /{id}  -> update_director
/// DELETE /{id}  -> delete_director
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/directors/",
            get(directors::list_directors).post(directors::create_director),
        )
        .route(
            "/directors/{id}",
            get(directors::get_director)
                .put(directors::update_director)
                .delete(directors::delete_director),
        )
}
