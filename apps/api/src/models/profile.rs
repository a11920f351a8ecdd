use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::plan::scalar_text;

/// Benefits a client can ask for on the popup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Benefit {
    Dental,
    Vision,
    Otc,
    Hearing,
    Gym,
    Insulin,
}

impl Benefit {
    /// Parses the form value. Matching is exact; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Dental" => Some(Benefit::Dental),
            "Vision" => Some(Benefit::Vision),
            "OTC" => Some(Benefit::Otc),
            "Hearing" => Some(Benefit::Hearing),
            "Gym" => Some(Benefit::Gym),
            "Insulin" => Some(Benefit::Insulin),
            _ => None,
        }
    }

    /// The dataset field holding this benefit's amount.
    /// Insulin has no such field in the plan finder data.
    pub fn source_field(self) -> Option<&'static str> {
        use crate::models::plan::fields;

        match self {
            Benefit::Dental => Some(fields::DENTAL_MAXIMUM),
            Benefit::Vision => Some(fields::VISION_MAXIMUM),
            Benefit::Otc => Some(fields::OTC_ALLOWANCE),
            Benefit::Hearing => Some(fields::HEARING_AIDS),
            Benefit::Gym => Some(fields::FITNESS_BENEFIT),
            Benefit::Insulin => None,
        }
    }
}

/// The client being quoted, as entered by the agent.
///
/// The popup's form values arrive loosely typed: a numeric `zip` is read as
/// text and `null` lists count as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// `None` when the caller sent no ZIP; such a profile matches no coverage text.
    #[serde(default, rename = "zip", deserialize_with = "loose_text")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chronic_conditions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desired_benefits: Vec<String>,
}

impl ClientProfile {
    pub fn zip(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    /// Requested benefits the filter knows about.
    pub fn benefits(&self) -> impl Iterator<Item = Benefit> + '_ {
        self.desired_benefits
            .iter()
            .filter_map(|name| Benefit::from_name(name))
    }
}

/// Deserializes `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a string, number or bool as text; `null` is `None`.
pub fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(_) | Value::Object(_) => {
            Err(D::Error::custom("expected a string or number"))
        }
        scalar => Ok(scalar_text(&scalar).map(|text| text.into_owned())),
    }
}
