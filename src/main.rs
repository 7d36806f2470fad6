mod cli;
mod output;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use cli::{Cli, Commands, EconomicsArgs, PredictArgs, SuitabilityArgs};
use cropwise::config::Config;
use cropwise::error::CropwiseError;
use cropwise::logic::calculations::{parse_level, parse_month, parse_reading};
use cropwise::models::{
    normalize_key, CropEconomics, FieldCondition, SoilProfile, SoilType, SuitabilityModifiers,
    WeatherProfile,
};
use cropwise::CropAdvisor;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let advisor = CropAdvisor::new(config);

    match cli.command {
        Commands::Suitability(args) => run_suitability(&advisor, args, cli.json),
        Commands::Predict(args) => run_predict(&advisor, args, cli.json),
        Commands::Soils { soil } => run_soils(&advisor, soil.as_deref(), cli.json),
        Commands::Prices { crop, months, seed } => {
            let months = months.unwrap_or_else(|| advisor.default_price_months());
            let prices = match seed {
                Some(seed) => advisor.analyze_historical_prices_with(
                    &crop,
                    months,
                    &mut ChaCha8Rng::seed_from_u64(seed),
                ),
                None => advisor.analyze_historical_prices(&crop, Some(months)),
            };
            output::prices(&crop, &prices, cli.json)
        }
        Commands::Economics(args) => run_economics(&advisor, args, cli.json),
        Commands::Check => output::check(&advisor, cli.json),
    }
}

fn run_suitability(advisor: &CropAdvisor, args: SuitabilityArgs, json: bool) -> Result<()> {
    let field = args.field.as_deref().and_then(|raw| {
        let parsed = FieldCondition::from_str(raw);
        if parsed.is_none() {
            tracing::warn!("Ignoring unknown field condition '{}'", raw);
        }
        parsed
    });

    let modifiers = SuitabilityModifiers {
        region: args.region,
        month: args.month.as_deref().and_then(parse_month),
        nitrogen: args.nitrogen.as_deref().map(parse_level),
        phosphorus: args.phosphorus.as_deref().map(parse_level),
        potassium: args.potassium.as_deref().map(parse_level),
        field,
    };

    let rows = advisor.score_detailed_suitability(&args.soil, &modifiers);
    output::suitability(&args.soil, &rows, json)
}

fn run_predict(advisor: &CropAdvisor, args: PredictArgs, json: bool) -> Result<()> {
    if SoilType::from_str(&args.soil).is_none() {
        tracing::warn!("'{}' is not a known soil type, prediction will be generic", args.soil);
    }

    // Accept aliases like "loam" while keeping unknown keys as typed
    let soil_type = SoilType::from_str(&args.soil)
        .map(|s| s.key().to_string())
        .unwrap_or(args.soil);

    let soil = SoilProfile {
        soil_type,
        ph: args.ph.as_deref().and_then(parse_reading),
        nitrogen: args.nitrogen.as_deref().map(parse_level),
        phosphorus: args.phosphorus.as_deref().map(parse_level),
        potassium: args.potassium.as_deref().map(parse_level),
    };

    let weather = WeatherProfile {
        temperature: args.temperature.as_deref().and_then(parse_reading),
        humidity: args.humidity.as_deref().and_then(parse_reading),
        rainfall: args.rainfall.as_deref().and_then(parse_reading),
        month: Some(
            args.month
                .as_deref()
                .and_then(parse_month)
                .unwrap_or_else(|| Local::now().month()),
        ),
        location: args.location,
    };

    let prediction = advisor.predict_crops(&soil, &weather, &args.region)?;
    let outlook = advisor.yield_outlook(&weather);
    output::prediction(&prediction, &outlook, json)
}

fn run_soils(advisor: &CropAdvisor, soil: Option<&str>, json: bool) -> Result<()> {
    let listing: Vec<(String, Vec<String>)> = match soil {
        Some(soil) => vec![(soil.to_string(), advisor.soil_type_recommendations(soil))],
        None => SoilType::ALL
            .iter()
            .map(|s| {
                (
                    s.key().to_string(),
                    advisor.soil_type_recommendations(s.key()),
                )
            })
            .collect(),
    };
    output::soils(&listing, json)
}

/// How an economics entry was found for a requested crop name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomicsMatch {
    Exact,
    Similar,
    Fallback,
}

/// Exact lookup first, then any table key containing (or contained in) the
/// requested name, then the `unknown crop` entry.
fn resolve_economics<'a>(
    advisor: &'a CropAdvisor,
    crop: &str,
) -> Option<(&'a CropEconomics, EconomicsMatch)> {
    if let Some(e) = advisor.crop_economics(crop) {
        return Some((e, EconomicsMatch::Exact));
    }

    let wanted = normalize_key(crop);
    let similar = advisor
        .reference()
        .economics
        .iter()
        .find(|(key, _)| {
            !wanted.is_empty() && (key.contains(&wanted) || wanted.contains(key.as_str()))
        });
    if let Some((key, e)) = similar {
        tracing::debug!("No exact economics for '{}', using '{}'", crop, key);
        return Some((e, EconomicsMatch::Similar));
    }

    advisor
        .crop_economics("unknown crop")
        .map(|e| (e, EconomicsMatch::Fallback))
}

fn run_economics(advisor: &CropAdvisor, args: EconomicsArgs, json: bool) -> Result<()> {
    let (economics, matched) = resolve_economics(advisor, &args.crop).ok_or_else(|| {
        CropwiseError::NotFound(format!("No economics data for '{}'", args.crop))
    })?;

    let weather = WeatherProfile {
        temperature: args.temperature.as_deref().and_then(parse_reading),
        humidity: args.humidity.as_deref().and_then(parse_reading),
        rainfall: args.rainfall.as_deref().and_then(parse_reading),
        ..WeatherProfile::default()
    };
    let yield_factor = advisor.yield_variation(&weather);

    output::economics(&args.crop, economics, matched, yield_factor, json)
}
