//! BMI calculation, advice, legend and export routes

use crate::error::ApiError;
use crate::services::bmi::BmiService;
use crate::services::export::ExportService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bmi_analyzer_shared::types::{
    AdviceRequest, AdviceResponse, BmiReportResponse, CalculateBmiRequest, ExportRecordRequest,
    LegendResponse,
};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/advice", post(advice))
        .route("/legend", get(legend))
        .route("/export", post(export_csv))
}

/// POST /api/v1/bmi/calculate - Calculate BMI and status
///
/// Accepts height in m/cm/in and weight in kg/lbs/st; defaults are m and kg.
/// Name, age and gender are all-or-nothing: all three add a `record` to the
/// response, and a partial set is a 400 naming the first missing field.
async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateBmiRequest>,
) -> Result<Json<BmiReportResponse>, ApiError> {
    let report = BmiService::calculate(&req, state.advice_variant())?;
    Ok(Json(report))
}

/// POST /api/v1/bmi/advice - Tips for the status the client sends back
async fn advice(
    State(state): State<AppState>,
    Json(req): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let advice = BmiService::advice(&req, state.advice_variant())?;
    Ok(Json(advice))
}

/// GET /api/v1/bmi/legend - Status bands with ranges and colors
async fn legend(State(state): State<AppState>) -> Json<LegendResponse> {
    Json(BmiService::legend(state.advice_variant()))
}

/// POST /api/v1/bmi/export - Download one BMI record as CSV
async fn export_csv(
    State(state): State<AppState>,
    Json(req): Json<ExportRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = ExportService::record_csv(&req, state.advice_variant())?;

    let disposition = format!("attachment; filename=\"{}\"", state.config().export.filename);
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid export filename: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((headers, csv))
}
