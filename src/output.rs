use crate::EconomicsMatch;
use anyhow::Result;
use cropwise::logic::prices::PriceSynthesizer;
use cropwise::models::{CropEconomics, PredictionResult, SuitabilityRow, YieldOutlook};
use cropwise::CropAdvisor;
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn suitability(soil: &str, rows: &[SuitabilityRow], json: bool) -> Result<()> {
    if json {
        return print_json(rows);
    }

    if rows.is_empty() {
        println!(
            "No detailed suitability data for '{}' soil. Try clay, sandy or loamy.",
            soil
        );
        return Ok(());
    }

    println!("{:<14} {:>5}  {:<20} Conditions", "Crop", "Score", "Expected Yield");
    for row in rows {
        println!(
            "{:<14} {:>4}%  {:<20} {}",
            row.crop, row.suitability, row.yield_range, row.conditions
        );
    }
    Ok(())
}

pub fn prediction(result: &PredictionResult, outlook: &YieldOutlook, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output<'a> {
            #[serde(flatten)]
            prediction: &'a PredictionResult,
            yield_outlook: &'a YieldOutlook,
        }
        return print_json(&Output {
            prediction: result,
            yield_outlook: outlook,
        });
    }

    println!(
        "Recommended crops: {}",
        result.recommended_crops.join(", ")
    );
    println!("Confidence:        {}%", result.confidence_percent());
    println!("Risk level:        {}", result.risk_level);
    println!(
        "Soil suitability:  {:.0}%",
        result.soil_suitability.score * 100.0
    );
    println!(
        "Market price:      {:.0} - {:.0} per quintal",
        result.market_price_range.min, result.market_price_range.max
    );
    println!(
        "Yield outlook:     {:+.0}% vs. expected ({}% confidence)",
        (outlook.yield_factor - 1.0) * 100.0,
        outlook.confidence
    );
    println!();
    for rec in &result.soil_suitability.recommendations {
        println!("  - {}", rec);
    }

    if !outlook.risks.is_empty() {
        println!();
        println!("Weather risks:");
        for risk in &outlook.risks {
            println!("  [{}] {}: {}", risk.risk_level, risk.description, risk.impact);
            println!("         {}", risk.recommendation);
        }
    }
    Ok(())
}

pub fn soils(listing: &[(String, Vec<String>)], json: bool) -> Result<()> {
    if json {
        let map: std::collections::BTreeMap<_, _> =
            listing.iter().map(|(k, v)| (k.as_str(), v)).collect();
        return print_json(&map);
    }

    for (soil, crops) in listing {
        println!("{:<10} {}", soil, crops.join(", "));
    }
    Ok(())
}

pub fn prices(crop: &str, prices: &[u64], json: bool) -> Result<()> {
    let points = PriceSynthesizer::labelled(prices);
    if json {
        return print_json(&points);
    }

    println!("Simulated price history for {} (per ton, not market data)", crop);
    for point in points {
        println!("  {}  {:>8}", point.month, point.price);
    }
    Ok(())
}

pub fn economics(
    requested: &str,
    economics: &CropEconomics,
    matched: EconomicsMatch,
    yield_factor: f64,
    json: bool,
) -> Result<()> {
    if json {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output<'a> {
            #[serde(flatten)]
            economics: &'a CropEconomics,
            total_cost: f64,
            expected_revenue: f64,
            expected_profit: f64,
            roi_percent: f64,
            yield_factor: f64,
            projected_revenue: f64,
            break_even_months: Option<f64>,
            exact_match: bool,
        }
        return print_json(&Output {
            economics,
            total_cost: economics.total_cost(),
            expected_revenue: economics.expected_revenue(),
            expected_profit: economics.expected_profit(),
            roi_percent: economics.roi_percent(),
            yield_factor,
            projected_revenue: economics.projected_revenue(yield_factor),
            break_even_months: economics.break_even_months(),
            exact_match: matched == EconomicsMatch::Exact,
        });
    }

    match matched {
        EconomicsMatch::Exact => {}
        EconomicsMatch::Similar => println!(
            "No exact data for '{}', showing {}",
            requested, economics.crop_name
        ),
        EconomicsMatch::Fallback => println!(
            "No data for '{}', showing {}",
            requested, economics.crop_name
        ),
    }

    println!("{}", economics.crop_name);
    println!("  Setup cost:        {:>10.0}", economics.setup_cost);
    println!("  Maintenance cost:  {:>10.0}", economics.maintenance_cost);
    println!("  Expected yield:    {:>10.1} tons/acre", economics.expected_yield);
    println!("  Market price:      {:>10.0} per ton", economics.market_price);
    println!("  Time to harvest:   {:>10} months", economics.months_to_harvest);
    println!("  Total cost:        {:>10.0}", economics.total_cost());
    println!("  Expected revenue:  {:>10.0}", economics.expected_revenue());
    println!("  Expected profit:   {:>10.0}", economics.expected_profit());
    println!("  ROI:               {:>9.2}%", economics.roi_percent());
    match economics.break_even_months() {
        Some(months) => println!("  Break-even:        {:>10.1} months", months),
        None => println!("  Break-even:        {:>10}", "never"),
    }
    if yield_factor != 1.0 {
        println!(
            "  Weather-adjusted revenue: {:.0} ({:+.0}% yield)",
            economics.projected_revenue(yield_factor),
            (yield_factor - 1.0) * 100.0
        );
    }
    Ok(())
}

pub fn check(advisor: &CropAdvisor, json: bool) -> Result<()> {
    let reference = advisor.reference();
    let scored_soils = reference
        .soils
        .values()
        .filter(|s| !s.candidates.is_empty())
        .count();

    if json {
        return print_json(&serde_json::json!({
            "soils": reference.soils.len(),
            "scoredSoils": scored_soils,
            "pricedCrops": reference.base_prices.len(),
            "economicsEntries": reference.economics.len(),
            "regions": reference.region_bonuses.len(),
            "model": advisor.model_name(),
            "adjustments": advisor.adjustments().iter().map(|(id, _)| *id).collect::<Vec<_>>(),
        }));
    }

    println!("Configuration OK");
    println!(
        "  Soils:            {} ({} with scored candidates)",
        reference.soils.len(),
        scored_soils
    );
    println!("  Priced crops:     {}", reference.base_prices.len());
    println!("  Economics:        {}", reference.economics.len());
    println!("  Regions:          {}", reference.region_bonuses.len());
    println!("  Prediction model: {}", advisor.model_name());
    for (id, name) in advisor.adjustments() {
        println!("  Adjustment:       {} ({})", name, id);
    }
    Ok(())
}
