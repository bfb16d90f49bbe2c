//! BMI engine
//!
//! Computes the Body Mass Index for a height/weight pair and classifies it
//! into one of four health-status bands.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no state, no I/O, identical inputs give identical outputs
//! 2. **SI Units**: height in meters, weight in kilograms
//! 3. **Closed Enumeration**: every finite BMI maps to exactly one [`StatusCategory`]
//!
//! # Rounding
//!
//! BMI values are rounded to 2 decimal places, half away from zero
//! (`f64::round` applied to the value scaled by 100).

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound of the Healthy band
pub const HEALTHY_MIN_BMI: f64 = 18.5;
/// Lower bound of the Overweight band
pub const OVERWEIGHT_MIN_BMI: f64 = 25.0;
/// Lower bound of the High Risk band
pub const HIGH_RISK_MIN_BMI: f64 = 30.0;

// ============================================================================
// Status Categories
// ============================================================================

/// Health-status bucket derived from a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Underweight,
    Healthy,
    Overweight,
    HighRisk,
}

impl StatusCategory {
    /// Every category, in ascending BMI order
    pub const ALL: [StatusCategory; 4] = [
        StatusCategory::Underweight,
        StatusCategory::Healthy,
        StatusCategory::Overweight,
        StatusCategory::HighRisk,
    ];

    /// BMI range for this category: lower bound inclusive, upper exclusive
    pub fn range(&self) -> (f64, f64) {
        match self {
            StatusCategory::Underweight => (f64::NEG_INFINITY, HEALTHY_MIN_BMI),
            StatusCategory::Healthy => (HEALTHY_MIN_BMI, OVERWEIGHT_MIN_BMI),
            StatusCategory::Overweight => (OVERWEIGHT_MIN_BMI, HIGH_RISK_MIN_BMI),
            StatusCategory::HighRisk => (HIGH_RISK_MIN_BMI, f64::INFINITY),
        }
    }

    /// Whether `bmi` falls inside this category's half-open range
    pub fn contains(&self, bmi: f64) -> bool {
        let (lower, upper) = self.range();
        bmi >= lower && bmi < upper
    }

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Underweight => "Underweight",
            StatusCategory::Healthy => "Healthy",
            StatusCategory::Overweight => "Overweight",
            StatusCategory::HighRisk => "High Risk",
        }
    }

    /// Indicator color used for this band in charts and the legend
    pub fn color(&self) -> &'static str {
        match self {
            StatusCategory::Underweight => "#f1c40f",
            StatusCategory::Healthy => "#2ecc71",
            StatusCategory::Overweight => "#e67e22",
            StatusCategory::HighRisk => "#e74c3c",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusCategory {
    type Err = EngineError;

    /// Accepts canonical labels, the alternate "Good"/"Obese" wording and
    /// snake_case identifiers, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "underweight" => Ok(StatusCategory::Underweight),
            "healthy" | "good" => Ok(StatusCategory::Healthy),
            "overweight" => Ok(StatusCategory::Overweight),
            "high_risk" | "highrisk" | "obese" => Ok(StatusCategory::HighRisk),
            _ => Err(EngineError::UnknownCategory(s.to_string())),
        }
    }
}

// ============================================================================
// Measurements
// ============================================================================

/// One height/weight pair, in SI units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Height in meters
    pub height_m: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl Measurement {
    /// Create a measurement, rejecting non-positive or non-finite values
    pub fn new(height_m: f64, weight_kg: f64) -> EngineResult<Self> {
        if !height_m.is_finite() || height_m <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "height must be a positive number of meters, got {}",
                height_m
            )));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "weight must be a positive number of kilograms, got {}",
                weight_kg
            )));
        }
        Ok(Self { height_m, weight_kg })
    }

    /// BMI for this measurement, rounded to 2 decimal places
    pub fn bmi(&self) -> EngineResult<f64> {
        let bmi = round_to_hundredths(self.weight_kg / (self.height_m * self.height_m));
        if !bmi.is_finite() {
            return Err(EngineError::InvalidInput(format!(
                "height {} m is too small to produce a finite BMI",
                self.height_m
            )));
        }
        Ok(bmi)
    }
}

/// Magnitude above which an `f64` carries no fractional hundredths
const ROUNDING_EXACT_ABOVE: f64 = 1e15;

/// Round half away from zero to 2 decimal places
///
/// Values at or above 1e15 are already whole and are returned unchanged, so
/// scaling can never overflow a finite input.
pub fn round_to_hundredths(value: f64) -> f64 {
    if value.abs() >= ROUNDING_EXACT_ABOVE {
        return value;
    }
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Engine Operations
// ============================================================================

/// Outcome of one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, rounded to 2 decimal places
    pub bmi_value: f64,
    /// Status band for `bmi_value`
    pub status: StatusCategory,
}

/// Calculate BMI from height and weight
///
/// Formula: BMI = weight(kg) / height(m)², rounded to 2 decimal places
pub fn compute_bmi(height_m: f64, weight_kg: f64) -> EngineResult<f64> {
    Measurement::new(height_m, weight_kg)?.bmi()
}

/// Classify a BMI value
///
/// Bands are inclusive on the lower end. Zero and negative values fall into
/// [`StatusCategory::Underweight`] by the same rule.
pub fn classify_bmi(bmi: f64) -> StatusCategory {
    if bmi < HEALTHY_MIN_BMI {
        StatusCategory::Underweight
    } else if bmi < OVERWEIGHT_MIN_BMI {
        StatusCategory::Healthy
    } else if bmi < HIGH_RISK_MIN_BMI {
        StatusCategory::Overweight
    } else {
        StatusCategory::HighRisk
    }
}

/// Compute and classify in one step
pub fn evaluate(measurement: &Measurement) -> EngineResult<BmiResult> {
    let bmi_value = measurement.bmi()?;
    Ok(BmiResult {
        bmi_value,
        status: classify_bmi(bmi_value),
    })
}
