//! Integration tests for the CSV export endpoint

mod common;

use axum::http::{header, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_export_csv() {
    let app = common::TestApp::new();

    let body = json!({
        "name": "Ravi",
        "age": 41,
        "gender": "Male",
        "height": 1.70,
        "weight": 90
    });
    let response = app.post("/api/v1/bmi/export", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"bmi_record.csv\""
    );

    let mut lines = response.body.lines();
    assert_eq!(
        lines.next(),
        Some("Name,Age,Gender,Height (m),Weight (kg),BMI,Status")
    );
    let row: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(row[0], "Ravi");
    assert_eq!(row[1], "41");
    assert_eq!(row[2], "Male");
    assert_eq!(row[5].parse::<f64>().unwrap(), 31.14);
    assert_eq!(row[6], "High Risk");
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn test_export_requires_name() {
    let app = common::TestApp::new();

    let body = json!({
        "name": "",
        "age": 41,
        "gender": "Male",
        "height": 1.70,
        "weight": 90
    });
    let response = app.post("/api/v1/bmi/export", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["field"], "name");
}

#[tokio::test]
async fn test_export_rejects_age_out_of_range() {
    let app = common::TestApp::new();

    let body = json!({
        "name": "Ravi",
        "age": 0,
        "gender": "Male",
        "height": 1.70,
        "weight": 90
    });
    let response = app.post("/api/v1/bmi/export", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "VALIDATION_ERROR");
}
