//! Fixed-order feature encoding

use super::patient::{EncodeError, PatientRecord, Region, Sex, SmokerStatus};

/// Number of features the model consumes
pub const FEATURE_COUNT: usize = 6;

/// Ordered numeric encoding of a [`PatientRecord`]
///
/// The column order is [age, sex, bmi, children, smoker, region] and must
/// match the order the model was trained on; reordering silently changes
/// every prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// View the encoded values in column order
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<FeatureVector> for [f64; FEATURE_COUNT] {
    fn from(vector: FeatureVector) -> Self {
        vector.0
    }
}

impl PatientRecord {
    /// Encode the record into the fixed-order feature vector
    ///
    /// Pure and deterministic. Categorical fields are parsed
    /// case-insensitively; an unknown value fails with the offending
    /// field and value rather than defaulting.
    pub fn encode(&self) -> Result<FeatureVector, EncodeError> {
        let sex = Sex::parse(&self.sex)?;
        let smoker = SmokerStatus::parse(&self.smoker)?;
        let region = Region::parse(&self.region)?;

        Ok(FeatureVector([
            f64::from(self.age),
            sex.code(),
            self.bmi,
            f64::from(self.children),
            smoker.code(),
            region.code(),
        ]))
    }
}
