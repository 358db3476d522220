use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::RosterError;

/// Handler failures, each mapped to a fixed JSON envelope.
#[derive(Debug)]
pub enum ApiError {
    /// The documentation file could not be read. Absence, permissions and
    /// encoding problems all land here.
    DocumentationNotFound(std::io::Error),
    /// The member store could not be reached or queried.
    MembersUnavailable(RosterError),
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError::MembersUnavailable(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::DocumentationNotFound(err) => {
                tracing::debug!(kind = ?err.kind(), "documentation read failed: {err}");
                (
                    StatusCode::NOT_FOUND,
                    serde_json::json!({
                        "success": false,
                        "error": "Documentation not found.",
                    }),
                )
            }
            ApiError::MembersUnavailable(err) => {
                tracing::error!("Error fetching members: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "message": "Failed to fetch members",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
