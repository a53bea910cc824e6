//! Query parameter types for list endpoints.

use std::str::FromStr;

use census_core::pagination::{clamp_limit, page_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use census_db::models::person::PersonFilter;
use serde::Deserialize;
use utoipa::IntoParams;

/// `GET /people` query string.
///
/// Every value arrives as a string: empty text filters are dropped and
/// numbers that do not parse are ignored rather than rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPeopleParams {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Case-insensitive substring of the surname.
    pub surname: Option<String>,
    /// Case-insensitive substring of the patronymic.
    pub patronymic: Option<String>,
    /// Case-insensitive substring of the gender.
    pub gender: Option<String>,
    /// Case-insensitive substring of the nationality code.
    pub nationality: Option<String>,
    /// Inclusive lower age bound.
    #[param(value_type = Option<i32>)]
    pub age_min: Option<String>,
    /// Inclusive upper age bound.
    #[param(value_type = Option<i32>)]
    pub age_max: Option<String>,
    /// 1-based page number (default 1).
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size (default 10, max 100).
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

impl ListPeopleParams {
    pub fn filter(&self) -> PersonFilter {
        PersonFilter {
            name: non_empty(&self.name),
            surname: non_empty(&self.surname),
            patronymic: non_empty(&self.patronymic),
            gender: non_empty(&self.gender),
            nationality: non_empty(&self.nationality),
            age_min: parse(&self.age_min),
            age_max: parse(&self.age_max),
        }
    }

    /// Page size, default 10, clamped to `1..=100`.
    pub fn limit(&self) -> i64 {
        clamp_limit(parse(&self.limit), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }

    /// Row offset for the 1-based `page`.
    pub fn offset(&self) -> i64 {
        page_offset(parse(&self.page), self.limit())
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn parse<T: FromStr>(value: &Option<String>) -> Option<T> {
    value.as_deref().and_then(|v| v.parse().ok())
}
