//! Rule-based crop advice: detailed suitability scoring, soil/weather crop
//! prediction, synthetic price history and per-crop economics.
//!
//! Every operation is a pure function of its inputs and an immutable
//! [`ReferenceData`] table. [`CropAdvisor`] bundles the components around one
//! shared table.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

use config::Config;
use error::Result;
use logic::calculations;
use logic::{PriceSynthesizer, RecommendationEngine, SuitabilityScorer};
use models::{
    CropEconomics, PredictionResult, ReferenceData, SoilProfile, SuitabilityModifiers,
    SuitabilityRow, WeatherProfile, WeatherRisk, YieldOutlook,
};
use rand::Rng;
use std::sync::Arc;

pub struct CropAdvisor {
    reference: Arc<ReferenceData>,
    scorer: SuitabilityScorer,
    engine: RecommendationEngine,
    prices: PriceSynthesizer,
}

impl CropAdvisor {
    pub fn new(config: Config) -> Self {
        let reference = Arc::new(config.reference);
        Self {
            scorer: SuitabilityScorer::new(Arc::clone(&reference)),
            engine: RecommendationEngine::new(Arc::clone(&reference), config.weather),
            prices: PriceSynthesizer::new(Arc::clone(&reference), config.pricing),
            reference,
        }
    }

    /// Advisor over the built-in tables.
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Ranked candidate crops for a soil, best first. Empty for unknown soils.
    pub fn score_detailed_suitability(
        &self,
        soil_type: &str,
        modifiers: &SuitabilityModifiers,
    ) -> Vec<SuitabilityRow> {
        self.scorer.score(soil_type, modifiers)
    }

    pub fn predict_crops(
        &self,
        soil: &SoilProfile,
        weather: &WeatherProfile,
        region: &str,
    ) -> Result<PredictionResult> {
        self.engine.predict(soil, weather, region)
    }

    pub fn soil_type_recommendations(&self, soil_type: &str) -> Vec<String> {
        self.reference.soil_type_recommendations(soil_type)
    }

    /// Synthetic monthly prices; `None` uses the configured default length.
    pub fn analyze_historical_prices(&self, crop: &str, months: Option<usize>) -> Vec<u64> {
        let months = months.unwrap_or(self.prices.default_months());
        self.prices.analyze(crop, months)
    }

    pub fn default_price_months(&self) -> usize {
        self.prices.default_months()
    }

    pub fn analyze_historical_prices_with<R: Rng + ?Sized>(
        &self,
        crop: &str,
        months: usize,
        rng: &mut R,
    ) -> Vec<u64> {
        self.prices.analyze_with(crop, months, rng)
    }

    pub fn yield_variation(&self, weather: &WeatherProfile) -> f64 {
        calculations::yield_variation(weather)
    }

    pub fn weather_confidence(&self, weather: &WeatherProfile) -> u8 {
        calculations::weather_confidence(weather)
    }

    pub fn weather_risks(&self, weather: &WeatherProfile) -> Vec<WeatherRisk> {
        calculations::weather_risks(weather)
    }

    /// Yield factor, its confidence and the weather risks behind it.
    pub fn yield_outlook(&self, weather: &WeatherProfile) -> YieldOutlook {
        YieldOutlook {
            yield_factor: self.yield_variation(weather),
            confidence: self.weather_confidence(weather),
            risks: self.weather_risks(weather),
        }
    }

    /// `(id, name)` of each suitability adjustment, in application order.
    pub fn adjustments(&self) -> Vec<(&'static str, &'static str)> {
        self.scorer.list_adjustments()
    }

    pub fn model_name(&self) -> &'static str {
        self.engine.model_name()
    }

    /// Exact, case-insensitive economics lookup.
    pub fn crop_economics(&self, crop: &str) -> Option<&CropEconomics> {
        self.reference.economics(crop)
    }
}

impl Default for CropAdvisor {
    fn default() -> Self {
        Self::with_defaults()
    }
}
