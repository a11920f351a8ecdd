use anyhow::{Context, Result};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const DEFAULT_CMS_ENDPOINT: &str = "https://data.cms.gov/resource/ma-plan-finder.json";

/// Upper bound on the dataset page size. Larger pages slow down every lookup.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,
    pub cms_endpoint: String,
    /// Socrata app token. Anonymous requests work but are rate-limited harder.
    pub cms_app_token: Option<String>,
    pub cms_page_limit: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let cms_page_limit = match std::env::var("CMS_PAGE_LIMIT") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("CMS_PAGE_LIMIT must be a positive integer")?,
            Err(_) => MAX_PAGE_LIMIT,
        };

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_url: optional_env("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            openai_model: optional_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            cms_endpoint: optional_env("CMS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_CMS_ENDPOINT.to_string()),
            cms_app_token: optional_env("CMS_APP_TOKEN"),
            cms_page_limit: clamp_page_limit(cms_page_limit),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn clamp_page_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_PAGE_LIMIT)
}
