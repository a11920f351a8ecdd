//! Plan Filter: picks the raw records that fit a client profile.
//!
//! A record qualifies when its `zip_county_text` contains the client's ZIP and
//! every requested benefit has a positive amount. When nothing qualifies but
//! the dataset had rows, the first [`FALLBACK_LIMIT`] rows are returned
//! unfiltered so the agent never stares at an empty list.

use tracing::debug;

use crate::models::plan::{fields, RawPlanRecord};
use crate::models::profile::{Benefit, ClientProfile};

pub const FALLBACK_LIMIT: usize = 10;

/// Returns the qualifying records in input order.
pub fn filter_plans<'a>(
    records: &'a [RawPlanRecord],
    profile: &ClientProfile,
) -> Vec<&'a RawPlanRecord> {
    let benefits: Vec<Benefit> = profile.benefits().collect();

    let matched: Vec<&RawPlanRecord> = records
        .iter()
        .filter(|record| covers_zip(record, profile.zip()))
        .filter(|record| benefits.iter().all(|b| offers_benefit(record, *b)))
        .collect();

    if matched.is_empty() && !records.is_empty() {
        debug!(
            "No plans matched zip {:?} with {} benefit(s); returning first {} unfiltered",
            profile.zip(),
            benefits.len(),
            FALLBACK_LIMIT
        );
        return records.iter().take(FALLBACK_LIMIT).collect();
    }

    matched
}

/// Substring test against the coverage text, not a parsed ZIP set.
/// Without a ZIP nothing is covered.
pub fn covers_zip(record: &RawPlanRecord, zip_code: Option<&str>) -> bool {
    let Some(zip_code) = zip_code else {
        return false;
    };
    record
        .text(fields::ZIP_COUNTY_TEXT)
        .map(|coverage| !coverage.is_empty() && coverage.contains(zip_code))
        .unwrap_or(false)
}

/// Benefits without a backing field always pass.
pub fn offers_benefit(record: &RawPlanRecord, benefit: Benefit) -> bool {
    match benefit.source_field() {
        Some(field) => record.number(field) > 0.0,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::samples::sample_records;
    use serde_json::{json, Value};

    fn record(value: Value) -> RawPlanRecord {
        serde_json::from_value(value).unwrap()
    }

    fn profile(zip: &str, benefits: &[&str]) -> ClientProfile {
        ClientProfile {
            zip_code: Some(zip.to_string()),
            chronic_conditions: vec![],
            desired_benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn plan_ids(records: &[&RawPlanRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.text("plan_id").unwrap().into_owned())
            .collect()
    }

    #[test]
    fn test_samples_with_dental_all_match() {
        let records = sample_records(Some("10001"));
        let result = filter_plans(&records, &profile("10001", &["Dental"]));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_unknown_zip_falls_back_to_all_samples() {
        let records = sample_records(Some("10001"));
        let result = filter_plans(&records, &profile("99999", &[]));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let result = filter_plans(&[], &profile("10001", &["Dental", "Vision"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_fallback_returns_first_ten_unfiltered() {
        let records: Vec<RawPlanRecord> = (0..25)
            .map(|i| record(json!({"plan_id": format!("{i:03}"), "zip_county_text": "60601"})))
            .collect();

        let result = filter_plans(&records, &profile("10001", &["Dental"]));

        assert_eq!(result.len(), FALLBACK_LIMIT);
        let expected: Vec<String> = (0..10).map(|i| format!("{i:03}")).collect();
        assert_eq!(plan_ids(&result), expected);
    }

    #[test]
    fn test_empty_benefits_depend_on_zip_only() {
        let records = vec![
            record(json!({"plan_id": "1", "zip_county_text": "10001;10002"})),
            record(json!({"plan_id": "2", "zip_county_text": "20001"})),
            record(json!({"plan_id": "3", "zip_county_text": "10002", "dental_maximum": "0"})),
        ];

        let result = filter_plans(&records, &profile("10002", &[]));

        assert_eq!(plan_ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_benefits_are_and_combined() {
        let records = vec![
            record(json!({
                "plan_id": "1", "zip_county_text": "10001",
                "dental_maximum": "1000", "vision_maximum": "0"
            })),
            record(json!({
                "plan_id": "2", "zip_county_text": "10001",
                "dental_maximum": "1000", "vision_maximum": "150"
            })),
        ];

        let result = filter_plans(&records, &profile("10001", &["Dental", "Vision"]));

        assert_eq!(plan_ids(&result), vec!["2"]);
    }

    #[test]
    fn test_each_benefit_checks_its_own_field() {
        let full = record(json!({
            "otc_allowance": "100",
            "hearing_aids": "500",
            "fitness_benefit": "1"
        }));
        let empty = record(json!({}));

        for benefit in [Benefit::Otc, Benefit::Hearing, Benefit::Gym] {
            assert!(offers_benefit(&full, benefit), "{benefit:?}");
            assert!(!offers_benefit(&empty, benefit), "{benefit:?}");
        }
    }

    #[test]
    fn test_insulin_always_passes() {
        let records = vec![record(json!({"plan_id": "1", "zip_county_text": "10001"}))];
        let result = filter_plans(&records, &profile("10001", &["Insulin"]));
        assert_eq!(plan_ids(&result), vec!["1"]);
    }

    #[test]
    fn test_missing_or_empty_coverage_never_matches() {
        assert!(!covers_zip(&record(json!({})), Some("10001")));
        assert!(!covers_zip(&record(json!({"zip_county_text": ""})), Some("")));
    }

    #[test]
    fn test_missing_zip_matches_nothing() {
        assert!(!covers_zip(&record(json!({"zip_county_text": "10001"})), None));
        assert!(covers_zip(&record(json!({"zip_county_text": "10001"})), Some("")));
    }

    #[test]
    fn test_missing_zip_falls_back_to_unfiltered_records() {
        let records = vec![
            record(json!({"plan_id": "1", "zip_county_text": "10001"})),
            record(json!({"plan_id": "2"})),
        ];
        let no_zip = ClientProfile::default();

        let result = filter_plans(&records, &no_zip);

        assert_eq!(plan_ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_zip_match_is_substring() {
        let r = record(json!({"zip_county_text": "910001;33101"}));
        assert!(covers_zip(&r, Some("10001")));
    }

    #[test]
    fn test_negative_amount_fails_benefit() {
        let r = record(json!({"dental_maximum": "-5"}));
        assert!(!offers_benefit(&r, Benefit::Dental));
    }
}
