//! Plan Fetch Orchestrator: runs the dataset call and feeds the rows through filter and normalizer.

use std::sync::Arc;

use tracing::{info, warn};

use crate::models::plan::PlanSummary;
use crate::models::profile::ClientProfile;
use crate::plans::dataset::PlanDataset;
use crate::plans::filter::filter_plans;
use crate::plans::normalizer::normalize_plan;
use crate::plans::samples::sample_records;

/// Where the plans in a lookup came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Live,
    /// The dataset call failed and the demo sample set was used instead.
    Fallback,
}

impl PlanSource {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanSource::Live => "live",
            PlanSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanLookup {
    pub source: PlanSource,
    pub plans: Vec<PlanSummary>,
}

#[derive(Clone)]
pub struct PlanFetcher {
    dataset: Arc<dyn PlanDataset>,
}

impl PlanFetcher {
    pub fn new(dataset: Arc<dyn PlanDataset>) -> Self {
        Self { dataset }
    }

    /// Never fails: dataset errors degrade to the sample set. No retry.
    pub async fn fetch_plans(&self, profile: &ClientProfile) -> PlanLookup {
        let (source, records) = match self.dataset.fetch_records().await {
            Ok(records) => (PlanSource::Live, records),
            Err(e) => {
                warn!("Plan fetch error, serving sample plans: {e}");
                (PlanSource::Fallback, sample_records(profile.zip()))
            }
        };

        let plans: Vec<PlanSummary> = filter_plans(&records, profile)
            .into_iter()
            .map(normalize_plan)
            .collect();

        info!(
            "Plan lookup for zip {:?}: {} of {} records ({})",
            profile.zip(),
            plans.len(),
            records.len(),
            source.as_str()
        );

        PlanLookup { source, plans }
    }
}
