// Closing-script recommendations.
// All LLM calls go through llm_client; parsing sits behind `ScriptParser`.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
