//! API request and response types

use crate::advice::AdviceSet;
use crate::bmi::StatusCategory;
use crate::charts::{ComparisonChart, IndicatorChart, LegendEntry};
use crate::models::{BmiRecord, Gender, PersonDetails};
use crate::units::{HeightUnit, WeightUnit};
use crate::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Calculate BMI request
///
/// Height defaults to meters and weight to kilograms. The personal fields
/// travel together: send all of name, age and gender to get a full record,
/// or none of them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateBmiRequest {
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub height_unit: HeightUnit,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 1, max = 120))]
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

impl CalculateBmiRequest {
    /// Height converted to meters
    pub fn height_m(&self) -> f64 {
        self.height_unit.to_meters(self.height)
    }

    /// Weight converted to kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_unit.to_kg(self.weight)
    }

    /// Personal details, if any were sent
    ///
    /// Sending only some of name, age and gender is an error on the first
    /// missing field.
    pub fn person(&self) -> Result<Option<PersonDetails>, ValidationError> {
        match (&self.name, self.age, self.gender) {
            (Some(name), Some(age), Some(gender)) => Ok(Some(PersonDetails {
                name: name.clone(),
                age,
                gender,
            })),
            (None, None, None) => Ok(None),
            (name, age, _) => {
                let missing = if name.is_none() {
                    "name"
                } else if age.is_none() {
                    "age"
                } else {
                    "gender"
                };
                Err(ValidationError::new(
                    missing,
                    "is required when any personal detail is given",
                ))
            }
        }
    }
}

/// Calculated BMI with chart data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiReportResponse {
    pub height_m: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub status: StatusCategory,
    /// Status label in the configured wording
    pub status_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<BmiRecord>,
    pub indicator: IndicatorChart,
    pub comparison: ComparisonChart,
    pub calculated_at: DateTime<Utc>,
}

/// Advice request: the caller passes back the status it was given
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdviceRequest {
    #[validate(length(min = 1, max = 32))]
    pub status: String,
}

/// Advice response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub status: StatusCategory,
    pub status_label: String,
    pub tips: Vec<String>,
}

impl AdviceResponse {
    pub fn new(advice: AdviceSet, status_label: &str) -> Self {
        Self {
            status: advice.status,
            status_label: status_label.to_string(),
            tips: advice.to_vec(),
        }
    }
}

/// Legend response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendResponse {
    pub entries: Vec<LegendEntry>,
}

/// Export request: everything needed for one CSV row
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExportRecordRequest {
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(range(min = 1, max = 120))]
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub height_unit: HeightUnit,
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

impl ExportRecordRequest {
    pub fn height_m(&self) -> f64 {
        self.height_unit.to_meters(self.height)
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_unit.to_kg(self.weight)
    }

    pub fn person(&self) -> PersonDetails {
        PersonDetails {
            name: self.name.clone(),
            age: self.age,
            gender: self.gender,
        }
    }
}
