//! Artifact format detection

use std::path::Path;

use super::ModelLoadError;

/// Supported artifact encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// JSON document (typical training-pipeline export)
    Json,
    /// YAML document
    Yaml,
}

impl ArtifactFormat {
    /// Human-readable format name
    pub fn name(self) -> &'static str {
        match self {
            ArtifactFormat::Json => "JSON",
            ArtifactFormat::Yaml => "YAML",
        }
    }
}

/// Detect the artifact format from a file path
///
/// The path must reference an existing regular file with a `.json`,
/// `.yaml`, or `.yml` extension.
pub fn detect_artifact_format(path: &Path) -> Result<ArtifactFormat, ModelLoadError> {
    if !path.is_file() {
        return Err(ModelLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "json" => Ok(ArtifactFormat::Json),
        "yaml" | "yml" => Ok(ArtifactFormat::Yaml),
        other => Err(ModelLoadError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}
