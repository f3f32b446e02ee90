use axum::{extract::State, Json};

use crate::{api::AppState, models::OrganisationInfo};

/// Serve the organisation info bound and validated at startup.
pub async fn organisation_info(State(state): State<AppState>) -> Json<OrganisationInfo> {
    Json(state.organisation.as_ref().clone())
}
