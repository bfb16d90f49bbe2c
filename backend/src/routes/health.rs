//! Service status endpoints
//!
//! `/health` runs one reference measurement through the engine and reports
//! the wording the server was configured with. `/health/live` answers as long
//! as the process can serve requests.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use bmi_analyzer_shared::{evaluate, AdviceVariant, Measurement, StatusCategory};
use serde::Serialize;

/// 1.75 m / 70 kg must classify as Healthy at 22.86
const REFERENCE_HEIGHT_M: f64 = 1.75;
const REFERENCE_WEIGHT_KG: f64 = 70.0;
const REFERENCE_BMI: f64 = 22.86;

/// Engine status report
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub advice_variant: AdviceVariant,
    pub engine_ok: bool,
}

/// Liveness report
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// GET /health - engine self-check plus the configured label wording
///
/// Answers 503 if the reference measurement does not evaluate as expected.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let engine_ok = engine_self_check();
    let (code, status) = if engine_ok {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            advice_variant: state.advice_variant(),
            engine_ok,
        }),
    )
}

/// GET /health/live
pub async fn liveness_check() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

fn engine_self_check() -> bool {
    Measurement::new(REFERENCE_HEIGHT_M, REFERENCE_WEIGHT_KG)
        .and_then(|m| evaluate(&m))
        .map(|r| r.bmi_value == REFERENCE_BMI && r.status == StatusCategory::Healthy)
        .unwrap_or(false)
}
