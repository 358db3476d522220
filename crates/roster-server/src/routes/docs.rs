use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub success: bool,
    pub documentation: String,
}

/// GET /api/docs — return the documentation file as JSON.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub async fn get_docs(State(state): State<AppState>) -> Result<Json<DocsResponse>, ApiError> {
    let bytes = tokio::fs::read(&state.docs_path)
        .await
        .map_err(ApiError::DocumentationNotFound)?;

    Ok(Json(DocsResponse {
        success: true,
        documentation: String::from_utf8_lossy(&bytes).into_owned(),
    }))
}
