//! Model artifact loading
//!
//! A trained model ships as a small serde document holding the intercept
//! and per-feature coefficients. Two encodings are supported, detected
//! from the file extension:
//! - JSON (training-pipeline export)
//! - YAML
//!
//! Loading happens once at startup; every failure here is fatal because
//! the service must not accept traffic without a model.

mod detect;

pub use detect::{detect_artifact_format, ArtifactFormat};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::features::FEATURE_COUNT;
use crate::model::RegressionModel;

/// Failure to produce a usable model from an artifact path
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact not found: {path}")]
    NotFound { path: PathBuf },

    #[error("unsupported model file format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("model artifact has {found} coefficients, expected {expected}")]
    FeatureArity { expected: usize, found: usize },
}

/// Load a regression model from a JSON or YAML artifact
///
/// The returned model is validated to carry exactly one coefficient per
/// feature column, so a mismatched artifact fails here instead of
/// skewing predictions at request time.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<RegressionModel, ModelLoadError> {
    let path = path.as_ref();
    let format = detect_artifact_format(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let model: RegressionModel = match format {
        ArtifactFormat::Json => {
            serde_json::from_str(&content).map_err(|e| ModelLoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        ArtifactFormat::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| ModelLoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
    };

    if model.feature_count() != FEATURE_COUNT {
        return Err(ModelLoadError::FeatureArity {
            expected: FEATURE_COUNT,
            found: model.feature_count(),
        });
    }

    Ok(model)
}
