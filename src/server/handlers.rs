//! HTTP request handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::features::PatientRecord;
use crate::model::RegressionModel;

/// Shared application state
///
/// The model is injected at construction time and read-only afterwards,
/// so handlers share it without locking.
pub struct AppState {
    pub model: Arc<RegressionModel>,
}

impl AppState {
    pub fn new(model: Arc<RegressionModel>) -> Self {
        Self { model }
    }
}

/// Prediction response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_charges: f64,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Cost prediction endpoint
///
/// Validates the payload, encodes it into the fixed-order feature
/// vector, and runs the model over a single-row batch.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PatientRecord>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(record) = payload?;
    let features = record.encode()?;

    let predictions = state.model.predict(std::slice::from_ref(&features));
    let predicted_charges = predictions
        .first()
        .copied()
        .ok_or_else(|| ApiError::Inference("model returned no prediction".to_string()))?;

    if !predicted_charges.is_finite() {
        return Err(ApiError::Inference(
            "model produced a non-finite prediction".to_string(),
        ));
    }

    Ok(Json(PredictResponse { predicted_charges }))
}
