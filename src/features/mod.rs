//! Patient schema and feature encoding
//!
//! A patient record carries the six attributes the model was trained on.
//! Encoding maps them into the fixed-order numeric vector the regression
//! model consumes.

mod patient;
mod vector;

pub use patient::{EncodeError, PatientRecord, Region, Sex, SmokerStatus};
pub use vector::{FeatureVector, FEATURE_COUNT};
