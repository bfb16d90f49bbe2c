//! CSV export of a single BMI record
//!
//! The file holds one header line and one data row:
//! `Name,Age,Gender,Height (m),Weight (kg),BMI,Status`

use crate::error::ApiError;
use bmi_analyzer_shared::advice::AdviceVariant;
use bmi_analyzer_shared::models::BmiRecord;
use bmi_analyzer_shared::types::ExportRecordRequest;
use bmi_analyzer_shared::validation::validate_measurement;
use serde::Serialize;
use tracing::info;
use validator::Validate;

/// CSV export row for a BMI record
#[derive(Debug, Clone, Serialize)]
pub struct BmiCsvRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Height (m)")]
    pub height_m: f64,
    #[serde(rename = "Weight (kg)")]
    pub weight_kg: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Status")]
    pub status: String,
}

impl BmiCsvRow {
    pub fn from_record(record: &BmiRecord, variant: AdviceVariant) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            gender: record.gender.to_string(),
            height_m: record.height_m,
            weight_kg: record.weight_kg,
            bmi: record.bmi,
            status: variant.label(record.status).to_string(),
        }
    }
}

/// Data export service
pub struct ExportService;

impl ExportService {
    /// Validate the request, evaluate it and render the CSV file
    pub fn record_csv(req: &ExportRecordRequest, variant: AdviceVariant) -> Result<String, ApiError> {
        req.validate()?;
        let person = req.person();
        person.validate()?;

        let measurement = validate_measurement(req.height_m(), req.weight_kg())?;
        let record = BmiRecord::new(person, &measurement)?;

        info!(bmi = record.bmi, status = %record.status, "Exporting BMI record");
        Self::to_csv(&[BmiCsvRow::from_record(&record, variant)])
    }

    /// Convert rows to a CSV string with a header line
    fn to_csv<T: Serialize>(data: &[T]) -> Result<String, ApiError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}
