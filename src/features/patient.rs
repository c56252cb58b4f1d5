//! Patient record schema and categorical code tables

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to encode a patient record into features
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A categorical field held a value outside its code table
    #[error("unrecognized value '{value}' for field '{field}'")]
    UnknownCategory {
        field: &'static str,
        value: String,
    },
}

/// A prediction request: the six patient attributes the model was trained on
///
/// Categorical fields arrive as strings and are parsed case-insensitively
/// during encoding; every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Age in years
    pub age: u32,
    /// Biological sex ("male" or "female")
    pub sex: String,
    /// Body-mass index
    pub bmi: f64,
    /// Number of dependents
    pub children: u32,
    /// Smoking status ("no" or "yes")
    pub smoker: String,
    /// Residential region
    pub region: String,
}

/// Biological sex category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Integer code assigned at training time
    pub fn code(self) -> f64 {
        match self {
            Sex::Male => 0.0,
            Sex::Female => 1.0,
        }
    }

    /// Parse a request value, ignoring case
    pub fn parse(value: &str) -> Result<Self, EncodeError> {
        match value.to_ascii_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(EncodeError::UnknownCategory {
                field: "sex",
                value: value.to_string(),
            }),
        }
    }
}

/// Smoking status category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokerStatus {
    No,
    Yes,
}

impl SmokerStatus {
    /// Integer code assigned at training time
    pub fn code(self) -> f64 {
        match self {
            SmokerStatus::No => 0.0,
            SmokerStatus::Yes => 1.0,
        }
    }

    /// Parse a request value, ignoring case
    pub fn parse(value: &str) -> Result<Self, EncodeError> {
        match value.to_ascii_lowercase().as_str() {
            "no" => Ok(SmokerStatus::No),
            "yes" => Ok(SmokerStatus::Yes),
            _ => Err(EncodeError::UnknownCategory {
                field: "smoker",
                value: value.to_string(),
            }),
        }
    }
}

/// Residential region category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    /// Integer code assigned at training time
    pub fn code(self) -> f64 {
        match self {
            Region::Northeast => 0.0,
            Region::Northwest => 1.0,
            Region::Southeast => 2.0,
            Region::Southwest => 3.0,
        }
    }

    /// Parse a request value, ignoring case
    pub fn parse(value: &str) -> Result<Self, EncodeError> {
        match value.to_ascii_lowercase().as_str() {
            "northeast" => Ok(Region::Northeast),
            "northwest" => Ok(Region::Northwest),
            "southeast" => Ok(Region::Southeast),
            "southwest" => Ok(Region::Southwest),
            _ => Err(EncodeError::UnknownCategory {
                field: "region",
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_codes() {
        assert_eq!(Sex::Male.code(), 0.0);
        assert_eq!(Sex::Female.code(), 1.0);
    }

    #[test]
    fn test_smoker_codes() {
        assert_eq!(SmokerStatus::No.code(), 0.0);
        assert_eq!(SmokerStatus::Yes.code(), 1.0);
    }

    #[test]
    fn test_region_codes() {
        assert_eq!(Region::Northeast.code(), 0.0);
        assert_eq!(Region::Northwest.code(), 1.0);
        assert_eq!(Region::Southeast.code(), 2.0);
        assert_eq!(Region::Southwest.code(), 3.0);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Sex::parse("MALE").unwrap(), Sex::Male);
        assert_eq!(Sex::parse("Female").unwrap(), Sex::Female);
        assert_eq!(SmokerStatus::parse("Yes").unwrap(), SmokerStatus::Yes);
        assert_eq!(Region::parse("SouthWest").unwrap(), Region::Southwest);
    }

    #[test]
    fn test_parse_unknown_value() {
        let err = Region::parse("midwest").unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownCategory {
                field: "region",
                value: "midwest".to_string(),
            }
        );
        assert!(Sex::parse("unknown").is_err());
        assert!(SmokerStatus::parse("sometimes").is_err());
    }
}
