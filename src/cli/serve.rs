//! HTTP server command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::config::{AppConfig, LoadFailurePolicy};
use crate::loader;
use crate::server;

/// Start the prediction server
pub async fn serve(
    model: Option<PathBuf>,
    config: Option<PathBuf>,
    port: Option<u16>,
    host: Option<String>,
    allowed_origin: Option<String>,
) -> Result<()> {
    let mut config = match config {
        Some(path) => AppConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => match &model {
            Some(path) => AppConfig::with_model(path.clone()),
            None => bail!("either --model or --config is required"),
        },
    };

    // Flags win over the config file.
    if let Some(model) = model {
        config.model_path = model;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(origin) = allowed_origin {
        config.server.allowed_origin = origin;
    }

    tracing::info!("Loading model: {}", config.model_path.display());

    let model = match loader::load_model(&config.model_path) {
        Ok(model) => Arc::new(model),
        Err(err) => match config.on_load_error {
            LoadFailurePolicy::Propagate => {
                return Err(err).with_context(|| {
                    format!("failed to load model {}", config.model_path.display())
                });
            }
            LoadFailurePolicy::LogExit => {
                tracing::error!(
                    "failed to load model {}: {}",
                    config.model_path.display(),
                    err
                );
                std::process::exit(1);
            }
        },
    };

    tracing::info!("Model loaded successfully ({} features)", model.feature_count());

    server::start(model, config.server).await?;

    Ok(())
}
