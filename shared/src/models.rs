//! Data models for a single BMI calculation

use crate::bmi::{evaluate, Measurement, StatusCategory};
use crate::errors::EngineResult;
use crate::validation::{validate_age, validate_name, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    #[default]
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
    #[serde(alias = "other")]
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Personal details attached to an exportable record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl PersonDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name).map_err(|msg| ValidationError::new("name", &msg))?;
        validate_age(self.age).map_err(|msg| ValidationError::new("age", &msg))?;
        Ok(())
    }
}

/// One complete result row: who, what was measured, and the outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_m: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub status: StatusCategory,
}

impl BmiRecord {
    /// Evaluate `measurement` and attach the person's details
    pub fn new(person: PersonDetails, measurement: &Measurement) -> EngineResult<Self> {
        let result = evaluate(measurement)?;
        Ok(Self {
            name: person.name.trim().to_string(),
            age: person.age,
            gender: person.gender,
            height_m: measurement.height_m,
            weight_kg: measurement.weight_kg,
            bmi: result.bmi_value,
            status: result.status,
        })
    }
}
