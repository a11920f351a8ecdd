//! Plan Normalizer: maps a raw dataset row onto the `PlanSummary` the HUD renders.

use crate::models::plan::{fields, PlanSummary, RawPlanRecord};

/// Rendered in place of a missing id part. Ids built this way are not unique.
const MISSING_ID_PART: &str = "undefined";
const UNRATED: &str = "N/A";

/// Builds a summary from one record. Never fails: numeric fields fall back to 0.
pub fn normalize_plan(record: &RawPlanRecord) -> PlanSummary {
    PlanSummary {
        id: format!(
            "{}-{}",
            id_part(record, fields::CONTRACT_ID),
            id_part(record, fields::PLAN_ID)
        ),
        plan_name: record.text(fields::PLAN_NAME).map(|name| name.into_owned()),
        premium: record.number(fields::MONTHLY_PREMIUM),
        star_rating: record
            .text(fields::STAR_RATING)
            .filter(|rating| !rating.is_empty())
            .map(|rating| rating.into_owned())
            .unwrap_or_else(|| UNRATED.to_string()),
        dental_max: record.number(fields::DENTAL_MAXIMUM),
        vision_max: record.number(fields::VISION_MAXIMUM),
        moop: record.number(fields::MAX_OUT_OF_POCKET),
    }
}

fn id_part(record: &RawPlanRecord, field: &str) -> String {
    record
        .text(field)
        .map(|part| part.into_owned())
        .unwrap_or_else(|| MISSING_ID_PART.to_string())
}
