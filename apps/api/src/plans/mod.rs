// Plan lookup: dataset access, filtering, normalization.
// The dataset is reached through the `PlanDataset` trait; everything else is pure.

pub mod dataset;
pub mod fetcher;
pub mod filter;
pub mod handlers;
pub mod normalizer;
pub mod samples;
