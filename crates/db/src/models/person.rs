//! Person entity model and list filter.

use census_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `people` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Person {
    #[schema(value_type = i64, example = 1)]
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    #[schema(example = 42)]
    pub age: Option<i32>,
    #[schema(example = "male")]
    pub gender: Option<String>,
    /// ISO 3166-1 alpha-2 code of the most likely country.
    #[schema(example = "RU")]
    pub nationality: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// Optional filters for listing people.
///
/// Text filters are case-insensitive substring matches; age bounds are
/// inclusive. Rows with no age never match an age bound.
#[derive(Debug, Clone, Default)]
pub struct PersonFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
}
