//! Integration tests for the BMI calculate, advice and legend endpoints

mod common;

use axum::http::StatusCode;
use bmi_analyzer_backend::config::AppConfig;
use bmi_analyzer_shared::AdviceVariant;
use serde_json::json;

#[tokio::test]
async fn test_calculate_healthy() {
    let app = common::TestApp::new();

    let body = json!({ "height": 1.75, "weight": 70 });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    let report = response.json();
    assert_eq!(report["bmi"], 22.86);
    assert_eq!(report["status"], "healthy");
    assert_eq!(report["status_label"], "Healthy");
    assert_eq!(report["indicator"]["marker"], 22.86);
    assert_eq!(report["comparison"]["bars"][0]["label"], "Your BMI");
    assert!(report.get("record").is_none());
}

#[tokio::test]
async fn test_calculate_underweight() {
    let app = common::TestApp::new();

    let body = json!({ "height": 1.60, "weight": 45 });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["bmi"], 17.58);
    assert_eq!(response.json()["status"], "underweight");
}

#[tokio::test]
async fn test_calculate_high_risk() {
    let app = common::TestApp::new();

    let body = json!({ "height": 1.70, "weight": 90 });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["bmi"], 31.14);
    assert_eq!(response.json()["status_label"], "High Risk");
}

#[tokio::test]
async fn test_calculate_boundary_is_overweight() {
    let app = common::TestApp::new();

    let body = json!({ "height": 2.0, "weight": 100 });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.json()["bmi"], 25.0);
    assert_eq!(response.json()["status"], "overweight");
}

#[tokio::test]
async fn test_calculate_with_units_and_person() {
    let app = common::TestApp::new();

    let body = json!({
        "height": 175,
        "height_unit": "cm",
        "weight": 70,
        "name": "Asha",
        "age": 29,
        "gender": "female"
    });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    let report = response.json();
    assert_eq!(report["height_m"], 1.75);
    assert_eq!(report["record"]["name"], "Asha");
    assert_eq!(report["record"]["gender"], "Female");
    assert_eq!(report["record"]["bmi"], 22.86);
}

#[tokio::test]
async fn test_calculate_rejects_height_out_of_range() {
    let app = common::TestApp::new();

    let body = json!({ "height": 0.0, "weight": 70 });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.json();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(error["error"]["field"], "height_m");
}

#[tokio::test]
async fn test_calculate_rejects_blank_name() {
    let app = common::TestApp::new();

    let body = json!({ "height": 1.75, "weight": 70, "name": "  " });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["message"], "Name: Please enter your name");
}

#[tokio::test]
async fn test_calculate_rejects_partial_person() {
    let app = common::TestApp::new();

    let body = json!({ "height": 1.75, "weight": 70, "name": "Asha", "age": 29 });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.json();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(error["error"]["field"], "gender");
}

#[tokio::test]
async fn test_rejected_request_leaves_service_ready() {
    let app = common::TestApp::new();

    let bad = json!({ "height": 3.5, "weight": 70 });
    let response = app.post("/api/v1/bmi/calculate", &bad.to_string()).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let good = json!({ "height": 1.75, "weight": 70 });
    let response = app.post("/api/v1/bmi/calculate", &good.to_string()).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["bmi"], 22.86);
}

#[tokio::test]
async fn test_advice_for_returned_status() {
    let app = common::TestApp::new();

    let body = json!({ "height": 1.75, "weight": 70 });
    let report = app.post("/api/v1/bmi/calculate", &body.to_string()).await.json();

    let body = json!({ "status": report["status"] });
    let response = app.post("/api/v1/bmi/advice", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    let advice = response.json();
    assert_eq!(advice["status"], "healthy");
    let tips = advice["tips"].as_array().unwrap();
    assert_eq!(tips.len(), 4);
    assert!(tips.iter().any(|t| t == "Maintain a balanced diet"));
}

#[tokio::test]
async fn test_advice_accepts_display_label() {
    let app = common::TestApp::new();

    let body = json!({ "status": "High Risk" });
    let response = app.post("/api/v1/bmi/advice", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["tips"][3], "Consult a healthcare professional");
}

#[tokio::test]
async fn test_advice_unknown_category() {
    let app = common::TestApp::new();

    let body = json!({ "status": "Athletic" });
    let response = app.post("/api/v1/bmi/advice", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "UNKNOWN_CATEGORY");
}

#[tokio::test]
async fn test_basic_variant_wording() {
    let mut config = AppConfig::default();
    config.engine.advice_variant = AdviceVariant::Basic;
    let app = common::TestApp::with_config(config);

    let body = json!({ "height": 1.75, "weight": 70 });
    let response = app.post("/api/v1/bmi/calculate", &body.to_string()).await;
    assert_eq!(response.json()["status_label"], "Good");

    let body = json!({ "status": "Good" });
    let response = app.post("/api/v1/bmi/advice", &body.to_string()).await;
    assert_eq!(response.json()["tips"][2], "Stay hydrated");
}

#[tokio::test]
async fn test_legend() {
    let app = common::TestApp::new();

    let response = app.get("/api/v1/bmi/legend").await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.json()["entries"].as_array().unwrap().clone();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["range"], "BMI < 18.5");
    assert_eq!(entries[3]["label"], "High Risk");
}
