use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::plans::fetcher::PlanFetcher;
use crate::recommend::parser::ScriptParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub plan_fetcher: PlanFetcher,
    pub llm: LlmClient,
    /// Pluggable completion parser. Default: LineScriptParser.
    pub script_parser: Arc<dyn ScriptParser>,
}
