//! OpenAPI document for the HTTP API.
//!
//! [`ApiDoc`] collects the annotated handlers and the schemas they reference.
//! The router serves it as JSON at [`OPENAPI_JSON_PATH`] with Swagger UI
//! under [`SWAGGER_UI_PATH`].

use census_core::person::PersonInput;
use census_db::models::person::Person;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::handlers::people;
use crate::routes::health::{self, HealthResponse};

/// Where Swagger UI is mounted.
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Where the generated document is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// `{ "data": Person }` as returned by get, create and update.
#[derive(Serialize, ToSchema)]
#[allow(dead_code)]
pub struct PersonEnvelope {
    data: Person,
}

/// `{ "data": [Person] }` as returned by list.
#[derive(Serialize, ToSchema)]
#[allow(dead_code)]
pub struct PeopleEnvelope {
    data: Vec<Person>,
}

/// Error payload produced by [`crate::error::AppError`].
#[derive(Serialize, ToSchema)]
#[allow(dead_code)]
pub struct ErrorBody {
    #[schema(example = "name is required")]
    error: String,
    /// `VALIDATION_ERROR`, `NOT_FOUND` or `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    code: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Census API",
        description = "Person records enriched with inferred age, gender and nationality."
    ),
    paths(
        people::list,
        people::get_by_id,
        people::create,
        people::update,
        people::delete,
        health::health_check,
    ),
    components(schemas(
        Person,
        PersonInput,
        PersonEnvelope,
        PeopleEnvelope,
        ErrorBody,
        HealthResponse
    )),
    tags(
        (name = "people", description = "Person records"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
