//! Axum route handler for plan lookup.

use axum::{extract::State, http::HeaderName, response::IntoResponse, Json};

use crate::extract::JsonBody;
use crate::models::profile::ClientProfile;
use crate::state::AppState;

/// Tells the caller whether the plans are live or demo samples.
pub const PLAN_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-plan-source");

/// POST /plans
///
/// Returns the plans matching the client profile as a JSON array.
pub async fn handle_plans(
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<ClientProfile>,
) -> impl IntoResponse {
    let lookup = state.plan_fetcher.fetch_plans(&profile).await;

    (
        [(PLAN_SOURCE_HEADER, lookup.source.as_str())],
        Json(lookup.plans),
    )
}
