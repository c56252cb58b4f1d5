//! One-shot prediction command

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::features::PatientRecord;
use crate::loader;

/// Predict the cost for a single record and print the estimate
#[allow(clippy::too_many_arguments)]
pub async fn predict(
    model: PathBuf,
    age: u32,
    sex: String,
    bmi: f64,
    children: u32,
    smoker: String,
    region: String,
) -> Result<()> {
    let model = loader::load_model(&model)
        .with_context(|| format!("failed to load model {}", model.display()))?;

    let record = PatientRecord {
        age,
        sex,
        bmi,
        children,
        smoker,
        region,
    };
    let features = record.encode()?;

    let prediction = model
        .predict(std::slice::from_ref(&features))
        .first()
        .copied()
        .context("model returned no prediction")?;

    println!("{:.2}", prediction);

    Ok(())
}
