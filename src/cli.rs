use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Crop suitability scoring and recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidate crops for a soil type
    Suitability(SuitabilityArgs),
    /// Predict crops, confidence and risk for a soil and weather profile
    Predict(PredictArgs),
    /// List crops suited to a soil type (all soils when omitted)
    Soils {
        soil: Option<String>,
    },
    /// Synthesize a monthly price history for a crop
    Prices {
        crop: String,
        /// Number of months (defaults to the configured length)
        #[arg(short, long)]
        months: Option<usize>,
        /// Seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show costs, revenue and ROI for a crop
    Economics(EconomicsArgs),
    /// Validate config and summarize the active reference tables
    Check,
}

// Numeric inputs are taken as text and parsed leniently.

#[derive(Args)]
pub struct SuitabilityArgs {
    /// Soil type (clay, sandy, loamy, ...)
    pub soil: String,
    /// State or region, e.g. Punjab
    #[arg(long)]
    pub region: Option<String>,
    /// Month number 1-12
    #[arg(long)]
    pub month: Option<String>,
    /// Nitrogen, ppm
    #[arg(short = 'n', long)]
    pub nitrogen: Option<String>,
    /// Phosphorus, ppm
    #[arg(short = 'p', long)]
    pub phosphorus: Option<String>,
    /// Potassium, ppm
    #[arg(short = 'k', long)]
    pub potassium: Option<String>,
    /// excellent, good, fair, poor, waterlogged or terraced
    #[arg(short, long)]
    pub field: Option<String>,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Soil type (alluvial, black, red, laterite, sandy, clay, loamy, saline, peaty)
    pub soil: String,
    #[arg(long)]
    pub ph: Option<String>,
    /// Nitrogen, ppm
    #[arg(short = 'n', long)]
    pub nitrogen: Option<String>,
    /// Phosphorus, ppm
    #[arg(short = 'p', long)]
    pub phosphorus: Option<String>,
    /// Potassium, ppm
    #[arg(short = 'k', long)]
    pub potassium: Option<String>,
    /// Degrees Celsius
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: Option<String>,
    /// Relative humidity, percent
    #[arg(long)]
    pub humidity: Option<String>,
    /// Millimetres
    #[arg(short, long)]
    pub rainfall: Option<String>,
    /// Month number 1-12 (defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// State or region
    #[arg(long, default_value = "")]
    pub region: String,
}

#[derive(Args)]
pub struct EconomicsArgs {
    pub crop: String,
    /// Degrees Celsius, adjusts projected yield
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: Option<String>,
    /// Relative humidity, percent
    #[arg(long)]
    pub humidity: Option<String>,
    /// Millimetres
    #[arg(short, long)]
    pub rainfall: Option<String>,
}
