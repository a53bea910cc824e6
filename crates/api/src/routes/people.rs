//! Route definitions for people.

use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list).post(people::create))
        .route(
            "/{id}",
            get(people::get_by_id)
                .put(people::update)
                .delete(people::delete),
        )
}
