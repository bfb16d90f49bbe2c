//! BMI Health Analyzer WASM Module
//!
//! WebAssembly bindings so a browser front end can run the BMI engine
//! locally. Structured results cross the boundary as JSON strings.

use bmi_analyzer_shared::advice::{advice_for_label, AdviceVariant};
use bmi_analyzer_shared::charts::{comparison_chart, indicator_chart, legend};
use bmi_analyzer_shared::errors::{EngineError, EngineResult};
use bmi_analyzer_shared::{bmi, Measurement};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Calculate BMI from height (m) and weight (kg), rounded to 2 decimals
#[wasm_bindgen]
pub fn compute_bmi(height_m: f64, weight_kg: f64) -> Result<f64, JsError> {
    Ok(bmi::compute_bmi(height_m, weight_kg)?)
}

/// Canonical status label for a BMI value
#[wasm_bindgen]
pub fn classify_bmi(bmi_value: f64) -> String {
    bmi::classify_bmi(bmi_value).label().to_string()
}

/// Advice tips for a status label, as a JSON array of strings
///
/// `variant` is "standard" or "basic"; anything else falls back to standard.
#[wasm_bindgen]
pub fn advice_for(status: &str, variant: &str) -> Result<String, JsError> {
    Ok(advice_json(status, parse_variant(variant))?)
}

/// Full report for one measurement: BMI, status and chart data, as JSON
#[wasm_bindgen]
pub fn bmi_report(height_m: f64, weight_kg: f64) -> Result<String, JsError> {
    Ok(report_json(height_m, weight_kg)?)
}

/// Legend entries, as JSON
#[wasm_bindgen]
pub fn legend_json() -> String {
    to_json(&legend()).unwrap_or_else(|_| "[]".to_string())
}

#[derive(Serialize)]
struct Report {
    bmi: f64,
    status: bmi::StatusCategory,
    status_label: &'static str,
    indicator: bmi_analyzer_shared::charts::IndicatorChart,
    comparison: bmi_analyzer_shared::charts::ComparisonChart,
}

fn parse_variant(variant: &str) -> AdviceVariant {
    match variant.to_lowercase().as_str() {
        "basic" => AdviceVariant::Basic,
        _ => AdviceVariant::Standard,
    }
}

fn advice_json(status: &str, variant: AdviceVariant) -> EngineResult<String> {
    let advice = advice_for_label(status, variant)?;
    to_json(&advice.tips)
}

fn report_json(height_m: f64, weight_kg: f64) -> EngineResult<String> {
    let result = bmi::evaluate(&Measurement::new(height_m, weight_kg)?)?;
    to_json(&Report {
        bmi: result.bmi_value,
        status: result.status,
        status_label: result.status.label(),
        indicator: indicator_chart(result.bmi_value),
        comparison: comparison_chart(result.bmi_value),
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> EngineResult<String> {
    serde_json::to_string(value).map_err(|e| EngineError::InvalidInput(e.to_string()))
}
