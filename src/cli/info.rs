//! Model info command

use std::path::PathBuf;

use anyhow::Result;

use crate::loader::{self, detect_artifact_format};

/// Show model artifact information
pub async fn info(model: PathBuf) -> Result<()> {
    let format = detect_artifact_format(&model)?;
    let loaded = loader::load_model(&model)?;

    println!("Model: {}\n", model.display());
    println!("Format: {}", format.name());
    println!("Features: {}", loaded.feature_count());
    println!("Intercept: {}", loaded.intercept);

    println!("\nCoefficients:");
    for (index, coefficient) in loaded.coefficients.iter().enumerate() {
        let name = loaded
            .feature_names
            .as_ref()
            .and_then(|names| names.get(index));
        match name {
            Some(name) => println!("  {}: {}", name, coefficient),
            None => println!("  [{}]: {}", index, coefficient),
        }
    }

    Ok(())
}
