use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names used by the CMS plan finder dataset.
pub mod fields {
    pub const CONTRACT_ID: &str = "contract_id";
    pub const PLAN_ID: &str = "plan_id";
    pub const PLAN_NAME: &str = "plan_name";
    pub const MONTHLY_PREMIUM: &str = "monthly_premium";
    pub const STAR_RATING: &str = "star_rating";
    pub const DENTAL_MAXIMUM: &str = "dental_maximum";
    pub const VISION_MAXIMUM: &str = "vision_maximum";
    pub const OTC_ALLOWANCE: &str = "otc_allowance";
    pub const HEARING_AIDS: &str = "hearing_aids";
    pub const FITNESS_BENEFIT: &str = "fitness_benefit";
    pub const MAX_OUT_OF_POCKET: &str = "max_out_of_pocket";
    pub const ZIP_COUNTY_TEXT: &str = "zip_county_text";
}

/// One row of the plan finder dataset, kept as the loose JSON object it
/// arrived as. Any field may be missing and numbers usually come as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPlanRecord(Map<String, Value>);

impl RawPlanRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Scalar field rendered as text. Null, arrays and objects count as absent.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        scalar_text(self.get(field)?)
    }

    /// Numeric field with loose coercion: anything missing or unparseable is 0.
    pub fn number(&self, field: &str) -> f64 {
        coerce_number(self.get(field))
    }
}

/// Renders a JSON scalar as text. Null, arrays and objects yield `None`.
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// The simplified plan shape the extension renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// `contractId-planId`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    pub premium: f64,
    pub star_rating: String,
    pub dental_max: f64,
    pub vision_max: f64,
    pub moop: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawPlanRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_number_parses_string_amounts() {
        let r = record(json!({"dental_maximum": "1500", "monthly_premium": " 15.5 "}));
        assert_eq!(r.number("dental_maximum"), 1500.0);
        assert_eq!(r.number("monthly_premium"), 15.5);
    }

    #[test]
    fn test_number_accepts_json_numbers() {
        let r = record(json!({"max_out_of_pocket": 6500}));
        assert_eq!(r.number("max_out_of_pocket"), 6500.0);
    }

    #[test]
    fn test_number_defaults_to_zero() {
        let r = record(json!({
            "a": "",
            "b": "$1,000",
            "c": null,
            "d": true,
            "e": "NaN",
            "f": "inf"
        }));
        for field in ["a", "b", "c", "d", "e", "f", "missing"] {
            assert_eq!(r.number(field), 0.0, "field {field}");
        }
    }

    #[test]
    fn test_text_renders_scalars() {
        let r = record(json!({"star_rating": 4.5, "plan_id": "001", "x": null}));
        assert_eq!(r.text("star_rating").as_deref(), Some("4.5"));
        assert_eq!(r.text("plan_id").as_deref(), Some("001"));
        assert_eq!(r.text("x"), None);
        assert_eq!(r.text("missing"), None);
    }

    #[test]
    fn test_record_preserves_unknown_fields() {
        let r = record(json!({"segment_id": "0"}));
        assert_eq!(r.get("segment_id"), Some(&json!("0")));
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = PlanSummary {
            id: "H1234-001".to_string(),
            plan_name: None,
            premium: 0.0,
            star_rating: "N/A".to_string(),
            dental_max: 1000.0,
            vision_max: 0.0,
            moop: 6500.0,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["id"], "H1234-001");
        assert_eq!(value["starRating"], "N/A");
        assert_eq!(value["dentalMax"], 1000.0);
        assert!(value.get("planName").is_none());
    }
}
