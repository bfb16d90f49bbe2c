//! BMI calculation and advice service
//!
//! Thin orchestration over the shared engine: range-check the request,
//! evaluate, attach chart data and count outcomes. Nothing is stored between
//! calls; advice is looked up from the status the caller sends back.

use crate::error::ApiError;
use bmi_analyzer_shared::advice::{advice_for_label, AdviceVariant};
use bmi_analyzer_shared::bmi::evaluate;
use bmi_analyzer_shared::charts::{comparison_chart, indicator_chart, legend};
use bmi_analyzer_shared::models::BmiRecord;
use bmi_analyzer_shared::types::{
    AdviceRequest, AdviceResponse, BmiReportResponse, CalculateBmiRequest, LegendResponse,
};
use bmi_analyzer_shared::validation::{validate_measurement, validate_name, ValidationError};
use chrono::Utc;
use tracing::{debug, info, warn};
use validator::Validate;

/// BMI service for business logic
pub struct BmiService;

impl BmiService {
    /// Calculate BMI, status and chart data for one request
    pub fn calculate(
        req: &CalculateBmiRequest,
        variant: AdviceVariant,
    ) -> Result<BmiReportResponse, ApiError> {
        let outcome = Self::build_report(req, variant);

        match &outcome {
            Ok(report) => {
                metrics::counter!("bmi_calculations_total", "status" => report.status.label())
                    .increment(1);
                info!(bmi = report.bmi, status = %report.status, "BMI calculated");
            }
            Err(err) => {
                metrics::counter!("bmi_rejections_total").increment(1);
                warn!(error = %err, "BMI calculation rejected");
            }
        }

        outcome
    }

    fn build_report(
        req: &CalculateBmiRequest,
        variant: AdviceVariant,
    ) -> Result<BmiReportResponse, ApiError> {
        req.validate()?;
        if let Some(name) = &req.name {
            validate_name(name).map_err(|msg| ValidationError::new("name", &msg))?;
        }

        let measurement = validate_measurement(req.height_m(), req.weight_kg())?;
        debug!(
            height_m = measurement.height_m,
            weight_kg = measurement.weight_kg,
            "Evaluating measurement"
        );

        let result = evaluate(&measurement)?;
        let record = req
            .person()?
            .map(|person| BmiRecord::new(person, &measurement))
            .transpose()?;

        Ok(BmiReportResponse {
            height_m: measurement.height_m,
            weight_kg: measurement.weight_kg,
            bmi: result.bmi_value,
            status: result.status,
            status_label: variant.label(result.status).to_string(),
            record,
            indicator: indicator_chart(result.bmi_value),
            comparison: comparison_chart(result.bmi_value),
            calculated_at: Utc::now(),
        })
    }

    /// Advice for the status supplied by the caller
    pub fn advice(req: &AdviceRequest, variant: AdviceVariant) -> Result<AdviceResponse, ApiError> {
        req.validate()?;
        let advice = advice_for_label(&req.status, variant)?;
        metrics::counter!("bmi_advice_requests_total", "status" => advice.status.label())
            .increment(1);
        debug!(status = %advice.status, "Advice requested");

        Ok(AdviceResponse::new(advice, variant.label(advice.status)))
    }

    /// Legend rows for the status bands
    pub fn legend(variant: AdviceVariant) -> LegendResponse {
        let entries = legend()
            .into_iter()
            .map(|mut entry| {
                entry.label = variant.label(entry.status).to_string();
                entry
            })
            .collect();
        LegendResponse { entries }
    }
}
