//! Medcost - medical-cost prediction service
//!
//! Loads a pre-trained regression model from disk at startup and serves
//! cost predictions for patient records over HTTP.
//!
//! # Architecture
//!
//! - **loader**: reads the model artifact (JSON or YAML) from disk
//! - **model**: the trained regression model and its inference operation
//! - **features**: patient schema and fixed-order feature encoding
//! - **server**: HTTP surface (`POST /predict`, `GET /health`)
//! - **config**: artifact path, server settings, startup failure policy
//! - **cli**: `serve`, `predict`, and `info` commands
//!
//! # Example
//!
//! ```bash
//! # Start the server
//! medcost serve --model demos/model.json --port 8000
//!
//! # One-shot prediction
//! medcost predict --model demos/model.json --age 19 --sex female \
//!     --bmi 27.9 --children 0 --smoker yes --region southwest
//! ```

pub mod cli;
pub mod config;
pub mod features;
pub mod loader;
pub mod model;
pub mod server;

// Re-export key types
pub use config::{AppConfig, LoadFailurePolicy, ServerConfig};
pub use features::{FeatureVector, PatientRecord};
pub use loader::{load_model, ArtifactFormat, ModelLoadError};
pub use model::RegressionModel;
