//! Chart data for the BMI indicator bar, comparison chart and legend
//!
//! Only the data is produced here; drawing and animation belong to whatever
//! front end consumes it.

use crate::bmi::{StatusCategory, HEALTHY_MIN_BMI, HIGH_RISK_MIN_BMI, OVERWEIGHT_MIN_BMI};
use serde::{Deserialize, Serialize};

/// Right edge of the indicator axis
pub const INDICATOR_MAX_BMI: f64 = 40.0;

/// Upper reference value drawn next to the user's BMI
pub const HEALTHY_MAX_REFERENCE: f64 = 24.9;

/// One colored segment of the indicator bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBand {
    pub status: StatusCategory,
    pub start: f64,
    pub width: f64,
    pub color: String,
}

/// Horizontal bar with a marker at the user's BMI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorChart {
    pub title: String,
    pub x_label: String,
    pub x_max: f64,
    pub bands: Vec<IndicatorBand>,
    /// BMI clamped to `[0, x_max]`
    pub marker: f64,
}

/// Single bar of the comparison chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

/// User BMI next to the top of the healthy range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
}

/// Legend row describing one status band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub status: StatusCategory,
    pub label: String,
    pub range: String,
    pub color: String,
}

/// Bands making up the indicator bar, left to right
pub fn indicator_bands() -> Vec<IndicatorBand> {
    let edges = [
        (StatusCategory::Underweight, 0.0, HEALTHY_MIN_BMI),
        (StatusCategory::Healthy, HEALTHY_MIN_BMI, OVERWEIGHT_MIN_BMI),
        (StatusCategory::Overweight, OVERWEIGHT_MIN_BMI, HIGH_RISK_MIN_BMI),
        (StatusCategory::HighRisk, HIGH_RISK_MIN_BMI, INDICATOR_MAX_BMI),
    ];

    edges
        .into_iter()
        .map(|(status, start, end)| IndicatorBand {
            status,
            start,
            width: end - start,
            color: status.color().to_string(),
        })
        .collect()
}

/// Marker position on the indicator axis
pub fn indicator_marker(bmi: f64) -> f64 {
    if bmi.is_nan() {
        return 0.0;
    }
    bmi.clamp(0.0, INDICATOR_MAX_BMI)
}

pub fn indicator_chart(bmi: f64) -> IndicatorChart {
    IndicatorChart {
        title: "BMI Health Indicator".to_string(),
        x_label: "BMI Value".to_string(),
        x_max: INDICATOR_MAX_BMI,
        bands: indicator_bands(),
        marker: indicator_marker(bmi),
    }
}

pub fn comparison_chart(bmi: f64) -> ComparisonChart {
    ComparisonChart {
        title: "BMI Comparison Chart".to_string(),
        y_label: "BMI Value".to_string(),
        bars: vec![
            ChartBar {
                label: "Your BMI".to_string(),
                value: bmi,
            },
            ChartBar {
                label: format!("Healthy Max ({})", HEALTHY_MAX_REFERENCE),
                value: HEALTHY_MAX_REFERENCE,
            },
        ],
    }
}

/// Legend rows, one per status, in ascending BMI order
pub fn legend() -> Vec<LegendEntry> {
    StatusCategory::ALL
        .iter()
        .map(|status| LegendEntry {
            status: *status,
            label: status.label().to_string(),
            range: range_text(*status).to_string(),
            color: status.color().to_string(),
        })
        .collect()
}

fn range_text(status: StatusCategory) -> &'static str {
    match status {
        StatusCategory::Underweight => "BMI < 18.5",
        StatusCategory::Healthy => "18.5 – 24.9",
        StatusCategory::Overweight => "25 – 29.9",
        StatusCategory::HighRisk => "BMI ≥ 30",
    }
}
