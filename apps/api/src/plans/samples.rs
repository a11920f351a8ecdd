//! Demo plans served when the live dataset cannot be reached.

use serde_json::{Map, Value};

use crate::models::plan::{fields, RawPlanRecord};

struct SamplePlan {
    contract_id: &'static str,
    plan_id: &'static str,
    plan_name: &'static str,
    monthly_premium: &'static str,
    star_rating: &'static str,
    dental_maximum: &'static str,
    vision_maximum: &'static str,
    max_out_of_pocket: &'static str,
}

const SAMPLE_PLANS: [SamplePlan; 5] = [
    SamplePlan {
        contract_id: "H1234",
        plan_id: "001",
        plan_name: "Sample MA Plan A",
        monthly_premium: "0",
        star_rating: "4.5",
        dental_maximum: "1000",
        vision_maximum: "300",
        max_out_of_pocket: "6500",
    },
    SamplePlan {
        contract_id: "H5678",
        plan_id: "002",
        plan_name: "Sample MA Plan B",
        monthly_premium: "15",
        star_rating: "4",
        dental_maximum: "1500",
        vision_maximum: "200",
        max_out_of_pocket: "6000",
    },
    SamplePlan {
        contract_id: "H9876",
        plan_id: "003",
        plan_name: "Sample MA Plan C",
        monthly_premium: "25",
        star_rating: "3.5",
        dental_maximum: "2000",
        vision_maximum: "400",
        max_out_of_pocket: "5500",
    },
    SamplePlan {
        contract_id: "H2468",
        plan_id: "004",
        plan_name: "Sample MA Plan D",
        monthly_premium: "50",
        star_rating: "5",
        dental_maximum: "3000",
        vision_maximum: "500",
        max_out_of_pocket: "5000",
    },
    SamplePlan {
        contract_id: "H1357",
        plan_id: "005",
        plan_name: "Sample MA Plan E",
        monthly_premium: "0",
        star_rating: "4.0",
        dental_maximum: "800",
        vision_maximum: "250",
        max_out_of_pocket: "7000",
    },
];

/// The fixed sample set, each row tagged as covering `zip_code` so it survives
/// the ZIP filter. Without a ZIP the rows carry no coverage text.
pub fn sample_records(zip_code: Option<&str>) -> Vec<RawPlanRecord> {
    SAMPLE_PLANS
        .iter()
        .map(|plan| {
            let mut row = Map::new();
            let mut put = |field: &str, value: &str| {
                row.insert(field.to_string(), Value::String(value.to_string()));
            };
            put(fields::CONTRACT_ID, plan.contract_id);
            put(fields::PLAN_ID, plan.plan_id);
            put(fields::PLAN_NAME, plan.plan_name);
            put(fields::MONTHLY_PREMIUM, plan.monthly_premium);
            put(fields::STAR_RATING, plan.star_rating);
            put(fields::DENTAL_MAXIMUM, plan.dental_maximum);
            put(fields::VISION_MAXIMUM, plan.vision_maximum);
            put(fields::MAX_OUT_OF_POCKET, plan.max_out_of_pocket);
            if let Some(zip_code) = zip_code {
                put(fields::ZIP_COUNTY_TEXT, zip_code);
            }
            RawPlanRecord::new(row)
        })
        .collect()
}
