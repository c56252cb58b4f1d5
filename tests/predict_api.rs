//! End-to-end tests for the prediction API
//!
//! Drives the router directly with a stub model of known coefficients,
//! so exact predictions are assertable.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use medcost::config::ServerConfig;
use medcost::model::RegressionModel;
use medcost::server;

const ALLOWED_ORIGIN: &str = "http://localhost:3000";

fn stub_model() -> Arc<RegressionModel> {
    Arc::new(RegressionModel {
        intercept: 1000.0,
        coefficients: vec![100.0, 50.0, 10.0, 200.0, 5000.0, 25.0],
        feature_names: None,
    })
}

fn test_app(model: Arc<RegressionModel>) -> Router {
    let config = ServerConfig {
        allowed_origin: ALLOWED_ORIGIN.to_string(),
        request_logging: false,
        ..ServerConfig::default()
    };
    server::app(model, &config).unwrap()
}

fn sample_payload() -> Value {
    json!({
        "age": 19,
        "sex": "female",
        "bmi": 27.9,
        "children": 0,
        "smoker": "yes",
        "region": "southwest"
    })
}

async fn post_predict_raw(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_predict(app: Router, body: Value) -> (StatusCode, Value) {
    post_predict_raw(app, body.to_string()).await
}

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_predict_returns_expected_scalar() {
    let (status, body) = post_predict(test_app(stub_model()), sample_payload()).await;

    assert_eq!(status, StatusCode::OK);
    let predicted = body["predicted_charges"].as_f64().unwrap();
    assert!(predicted.is_finite());
    // Stub coefficients over [19, 1, 27.9, 0, 1, 3].
    assert!((predicted - 8304.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_predict_is_deterministic() {
    let (_, first) = post_predict(test_app(stub_model()), sample_payload()).await;
    let (_, second) = post_predict(test_app(stub_model()), sample_payload()).await;
    assert_eq!(first["predicted_charges"], second["predicted_charges"]);
}

#[tokio::test]
async fn test_predict_ignores_category_case() {
    let mut shouting = sample_payload();
    shouting["sex"] = json!("FEMALE");
    shouting["smoker"] = json!("YES");
    shouting["region"] = json!("SOUTHWEST");

    let (_, lower) = post_predict(test_app(stub_model()), sample_payload()).await;
    let (status, upper) = post_predict(test_app(stub_model()), shouting).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lower["predicted_charges"], upper["predicted_charges"]);
}

#[tokio::test]
async fn test_predict_rejects_missing_field() {
    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("age");

    let (status, body) = post_predict(test_app(stub_model()), payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error_message(&body).contains("age"));
}

#[tokio::test]
async fn test_predict_rejects_mistyped_field() {
    let mut payload = sample_payload();
    payload["age"] = json!("nineteen");

    let (status, _) = post_predict(test_app(stub_model()), payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_predict_rejects_negative_age() {
    let mut payload = sample_payload();
    payload["age"] = json!(-1);

    let (status, _) = post_predict(test_app(stub_model()), payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_predict_rejects_unknown_region() {
    let mut payload = sample_payload();
    payload["region"] = json!("midwest");

    let (status, body) = post_predict(test_app(stub_model()), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = error_message(&body);
    assert!(message.contains("region"));
    assert!(message.contains("midwest"));
}

#[tokio::test]
async fn test_predict_rejects_malformed_json() {
    let (status, _) = post_predict_raw(test_app(stub_model()), "{ not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_non_finite_model_is_server_error() {
    let broken = Arc::new(RegressionModel {
        intercept: f64::NAN,
        coefficients: vec![0.0; 6],
        feature_names: None,
    });

    let (status, body) = post_predict(test_app(broken), sample_payload()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "server_error");
}

#[tokio::test]
async fn test_health() {
    let response = test_app(stub_model())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight_allowed_origin() {
    let response = test_app(stub_model())
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/predict")
                .header(header::ORIGIN, ALLOWED_ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn test_cors_preflight_other_origin_gets_no_allow_header() {
    let response = test_app(stub_model())
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/predict")
                .header(header::ORIGIN, "http://evil.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
