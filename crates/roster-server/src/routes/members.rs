use axum::Json;
use axum::extract::State;
use roster::MemberSummary;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on members returned by the diagnostic listing.
pub const MEMBER_SAMPLE_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct MembersResponse {
    pub success: bool,
    pub count: usize,
    pub members: Vec<MemberSummary>,
}

/// GET /api/mobile/members/test — first few members, projected.
pub async fn test_members(
    State(state): State<AppState>,
) -> Result<Json<MembersResponse>, ApiError> {
    let members: Vec<MemberSummary> = state
        .db
        .sample(MEMBER_SAMPLE_LIMIT)
        .await?
        .iter()
        .take(MEMBER_SAMPLE_LIMIT)
        .map(|m| m.summary())
        .collect();

    Ok(Json(MembersResponse {
        success: true,
        count: members.len(),
        members,
    }))
}
