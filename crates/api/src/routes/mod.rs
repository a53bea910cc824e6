pub mod health;
pub mod people;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /people          list (filtered, paginated), create
/// /people/{id}     get, update (re-enriches), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/people", people::router())
}
