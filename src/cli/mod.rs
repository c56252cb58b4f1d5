//! CLI commands
//!
//! `serve` runs the HTTP service; `predict` and `info` are one-shot
//! operator commands against a model artifact.

mod info;
mod predict;
mod serve;

pub use info::info;
pub use predict::predict;
pub use serve::serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Medcost - medical-cost prediction service
#[derive(Parser)]
#[command(name = "medcost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction server
    Serve {
        /// Path to the trained model artifact (.json or .yaml)
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// Path to a configuration file (flags override its values)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Origin allowed to make cross-origin requests
        #[arg(long)]
        allowed_origin: Option<String>,
    },

    /// Predict the cost for a single patient record
    Predict {
        /// Path to the trained model artifact (.json or .yaml)
        #[arg(long, short)]
        model: PathBuf,

        /// Patient age in years
        #[arg(long)]
        age: u32,

        /// Biological sex (male|female)
        #[arg(long)]
        sex: String,

        /// Body-mass index
        #[arg(long)]
        bmi: f64,

        /// Number of dependents
        #[arg(long)]
        children: u32,

        /// Smoking status (no|yes)
        #[arg(long)]
        smoker: String,

        /// Residential region (northeast|northwest|southeast|southwest)
        #[arg(long)]
        region: String,
    },

    /// Show model artifact information
    Info {
        /// Path to the trained model artifact
        model: PathBuf,
    },
}
