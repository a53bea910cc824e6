//! Handlers for the `/people` resource.
//!
//! Create and update both run the enricher before writing. Enrichment never
//! fails a request: whatever the lookups produced is saved and returned.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use census_core::error::CoreError;
use census_core::person::PersonInput;
use census_core::types::DbId;
use census_db::repositories::PersonRepo;

use crate::doc::{ErrorBody, PeopleEnvelope, PersonEnvelope};
use crate::error::{AppError, AppResult};
use crate::query::ListPeopleParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Person",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/people?name=&surname=&patronymic=&gender=&nationality=&age_min=&age_max=&page=&limit=
///
/// List people matching the filters, one page at a time.
#[utoipa::path(
    get,
    path = "/api/v1/people",
    params(ListPeopleParams),
    responses(
        (status = 200, description = "One page of people", body = PeopleEnvelope),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["people"]
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListPeopleParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.filter();
    let (limit, offset) = (params.limit(), params.offset());
    tracing::debug!(?filter, limit, offset, "Listing people");

    let people = PersonRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(DataResponse { data: people }))
}

/// GET /api/v1/people/{id}
#[utoipa::path(
    get,
    path = "/api/v1/people/{id}",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "The person", body = PersonEnvelope),
        (status = 404, description = "No such person", body = ErrorBody)
    ),
    tags = ["people"]
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: person }))
}

/// POST /api/v1/people
///
/// Validate, enrich, then insert.
#[utoipa::path(
    post,
    path = "/api/v1/people",
    request_body = PersonInput,
    responses(
        (status = 201, description = "Created, with whatever enrichment succeeded", body = PersonEnvelope),
        (status = 400, description = "Missing name or surname", body = ErrorBody)
    ),
    tags = ["people"]
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PersonInput>,
) -> AppResult<impl IntoResponse> {
    let mut draft = input.validated()?.into_draft();

    state.enricher.enrich(&mut draft).await;

    let person = PersonRepo::create(&state.pool, &draft).await?;
    tracing::info!(person_id = person.id, name = %person.name, "Created person");
    Ok((StatusCode::CREATED, Json(DataResponse { data: person })))
}

/// PUT /api/v1/people/{id}
///
/// Replace name and surname (and patronymic, when given), then re-enrich
/// unconditionally. Previously stored age/gender/nationality are discarded
/// and replaced by this run's results, including with nothing.
#[utoipa::path(
    put,
    path = "/api/v1/people/{id}",
    params(("id" = i64, Path, description = "Person ID")),
    request_body = PersonInput,
    responses(
        (status = 200, description = "Updated and re-enriched", body = PersonEnvelope),
        (status = 400, description = "Missing name or surname", body = ErrorBody),
        (status = 404, description = "No such person", body = ErrorBody)
    ),
    tags = ["people"]
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PersonInput>,
) -> AppResult<impl IntoResponse> {
    let existing = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut draft = input.validated()?.into_draft_over(existing.patronymic);

    tracing::debug!(person_id = id, "Re-enriching person on update");
    state.enricher.enrich(&mut draft).await;

    let person = PersonRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(person_id = id, "Updated person");
    Ok(Json(DataResponse { data: person }))
}

/// DELETE /api/v1/people/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/people/{id}",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such person", body = ErrorBody)
    ),
    tags = ["people"]
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PersonRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(person_id = id, "Deleted person");
    Ok(StatusCode::NO_CONTENT)
}
