//! Access to the CMS MA Plan Finder dataset (a Socrata resource).

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::plan::RawPlanRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset request failed with status {0}")]
    Status(u16),

    #[error("dataset returned an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of raw plan rows. Implement this to swap the live dataset for a
/// stub without touching the fetcher or the handlers.
#[async_trait]
pub trait PlanDataset: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<RawPlanRecord>, DatasetError>;
}

/// The live Socrata endpoint.
pub struct CmsDataset {
    client: Client,
    endpoint: String,
    app_token: Option<String>,
    page_limit: u32,
}

impl CmsDataset {
    pub fn new(endpoint: String, app_token: Option<String>, page_limit: u32) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            app_token,
            page_limit,
        }
    }
}

#[async_trait]
impl PlanDataset for CmsDataset {
    /// One page, one attempt. The token goes in both the query string and the
    /// `X-App-Token` header since Socrata deployments differ in which they read.
    async fn fetch_records(&self) -> Result<Vec<RawPlanRecord>, DatasetError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("$limit", self.page_limit.to_string())]);

        if let Some(token) = &self.app_token {
            request = request
                .query(&[("$$app_token", token)])
                .header("X-App-Token", token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let records: Vec<RawPlanRecord> = serde_json::from_str(&body)?;

        debug!("Fetched {} plan records from dataset", records.len());
        Ok(records)
    }
}
