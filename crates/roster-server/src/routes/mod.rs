pub mod dashboard;
pub mod docs;
pub mod members;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the full route tree.
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/docs", get(docs::get_docs))
        .route("/api/mobile/members/test", get(members::test_members))
        .route("/dashboard", get(dashboard::dashboard))
        .with_state(state)
}
