use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medcost::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medcost=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            model,
            config,
            port,
            host,
            allowed_origin,
        } => {
            medcost::cli::serve(model, config, port, host, allowed_origin).await?;
        }
        Commands::Predict {
            model,
            age,
            sex,
            bmi,
            children,
            smoker,
            region,
        } => {
            medcost::cli::predict(model, age, sex, bmi, children, smoker, region).await?;
        }
        Commands::Info { model } => {
            medcost::cli::info(model).await?;
        }
    }

    Ok(())
}
