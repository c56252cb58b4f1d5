//! Trained regression model

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// A trained linear regression artifact
///
/// Holds one coefficient per feature column plus an intercept. The model
/// is read-only after load; inference is a dot product over the encoded
/// feature vector, so repeated calls are stateless and never block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    /// Bias term
    pub intercept: f64,
    /// One weight per feature, in feature-vector column order
    pub coefficients: Vec<f64>,
    /// Column names recorded at training time, kept for display only
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

impl RegressionModel {
    /// Predict a batch of rows, yielding one scalar per row
    pub fn predict(&self, rows: &[FeatureVector]) -> Vec<f64> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    fn predict_row(&self, row: &FeatureVector) -> f64 {
        self.intercept
            + row
                .as_slice()
                .iter()
                .zip(&self.coefficients)
                .map(|(x, w)| x * w)
                .sum::<f64>()
    }

    /// Number of feature columns this artifact expects
    pub fn feature_count(&self) -> usize {
        self.coefficients.len()
    }
}
