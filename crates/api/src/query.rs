//! Shared query parameter types for API handlers.

use cinelist_core::types::DbId;
use serde::Deserialize;

/// Query parameters for the movie listing
/// (`?director_id=&genre_id=&page=`).
///
/// Both foreign-key filters are independently optional and match by
/// equality. `page` is 1-based and defaults to the first page; the page
/// size is fixed in the repository layer.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub page: Option<i64>,
}
