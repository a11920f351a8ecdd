//! Recommendation Generator: renders the closing-script prompt, calls the LLM
//! once, and hands the text to a `ScriptParser`.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::profile::{loose_text, ClientProfile};
use crate::recommend::parser::{ClosingScript, ScriptParser};
use crate::recommend::prompts::CLOSING_SCRIPT_PROMPT_TEMPLATE;

const NOT_PROVIDED: &str = "not provided";
const NONE_LISTED: &str = "none";

/// Body of `POST /ai-recommend`: the client profile plus the chosen plan and
/// the eligibility flags the popup collects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(flatten)]
    pub profile: ClientProfile,
    #[serde(default, deserialize_with = "loose_text")]
    pub plan_id: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub dob: Option<String>,
    pub medicaid: Option<bool>,
    pub lis: Option<bool>,
    pub dsnp: Option<bool>,
}

pub fn render_prompt(request: &RecommendRequest) -> String {
    let profile = &request.profile;

    CLOSING_SCRIPT_PROMPT_TEMPLATE
        .replace("{zip}", or_not_provided(profile.zip()))
        .replace("{dob}", or_not_provided(request.dob.as_deref()))
        .replace("{medicaid}", &flag(request.medicaid))
        .replace("{lis}", &flag(request.lis))
        .replace("{dsnp}", &flag(request.dsnp))
        .replace(
            "{chronic_conditions}",
            &join_or_none(&profile.chronic_conditions),
        )
        .replace("{desired_benefits}", &join_or_none(&profile.desired_benefits))
        .replace("{plan_id}", or_not_provided(request.plan_id.as_deref()))
}

/// Generates the pitch and rebuttals for one client/plan pair.
/// Completion failures are returned as-is; there is no fallback text.
pub async fn generate_closing_script(
    request: &RecommendRequest,
    llm: &LlmClient,
    parser: &dyn ScriptParser,
) -> Result<ClosingScript, AppError> {
    let prompt = render_prompt(request);

    let response = llm.call(&prompt, ASSISTANT_SYSTEM).await?;
    let script = parser.parse(response.text().unwrap_or_default());

    info!(
        "Generated closing script for plan {} ({} rebuttals, model {})",
        request.plan_id.as_deref().unwrap_or(NOT_PROVIDED),
        script.rebuttals.len(),
        llm.model()
    );

    Ok(script)
}

fn or_not_provided(value: Option<&str>) -> &str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_PROVIDED)
}

fn flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => NOT_PROVIDED.to_string(),
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_LISTED.to_string()
    } else {
        items.join(", ")
    }
}
