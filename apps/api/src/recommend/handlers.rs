//! Axum route handler for the closing-script recommendation.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::JsonBody;
use crate::recommend::generator::{generate_closing_script, RecommendRequest};
use crate::recommend::parser::ClosingScript;
use crate::state::AppState;

/// POST /ai-recommend
///
/// Returns `{ pitch, rebuttals }` for the selected plan.
pub async fn handle_recommend(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RecommendRequest>,
) -> Result<Json<ClosingScript>, AppError> {
    let script =
        generate_closing_script(&request, &state.llm, state.script_parser.as_ref()).await?;

    Ok(Json(script))
}
