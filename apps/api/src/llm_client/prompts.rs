// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Default system message for plain-text completions.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful AI assistant.";
