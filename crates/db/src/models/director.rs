//! Director models and DTOs.

use cinelist_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `director` table. Serializes as-is (id, name).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a director.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDirector {
    pub name: String,
}

/// DTO for a partial director update.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateDirector {
    pub name: Option<String>,
}
