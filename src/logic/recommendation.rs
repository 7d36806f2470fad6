use super::calculations::{level_or_zero, weather_suitability};
use crate::config::WeatherBands;
use crate::error::{CropwiseError, Result};
use crate::models::{
    PredictionResult, ReferenceData, RiskLevel, SoilProfile, SoilSuitability, WeatherProfile,
};
use std::sync::Arc;

/// What a soil model concludes about a field before confidence and risk are
/// derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilAssessment {
    /// Fraction in [0, 1]
    pub soil_score: f64,
    /// Multiplier in [0, 1]
    pub weather_factor: f64,
    pub crops: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Produces a [`SoilAssessment`]. The rule tables implement this today; a
/// trained model backend can replace them without touching the engine.
pub trait SoilModel: Send + Sync {
    fn name(&self) -> &'static str;

    fn assess(
        &self,
        soil: &SoilProfile,
        weather: &WeatherProfile,
        region: &str,
    ) -> Result<SoilAssessment>;
}

/// Soil and weather assessment driven by the reference tables.
pub struct RuleBasedModel {
    reference: Arc<ReferenceData>,
    bands: WeatherBands,
}

impl RuleBasedModel {
    pub fn new(reference: Arc<ReferenceData>, bands: WeatherBands) -> Self {
        Self { reference, bands }
    }

    /// Advisory strings for the soil itself. These never change the score.
    ///
    /// A missing nutrient reading fails its adequacy check and produces the
    /// fertilizer advice; a missing pH produces no pH advice.
    fn soil_advice(&self, soil: &SoilProfile, crops: Option<&[String]>) -> Vec<String> {
        let mut advice = Vec::new();

        let suitable_for = match crops {
            Some(crops) if !crops.is_empty() => crops.join(", "),
            _ => "limited crops".to_string(),
        };
        advice.push(format!(
            "Your {} soil is suitable for: {}",
            soil.soil_type, suitable_for
        ));

        match self.reference.soil(&soil.soil_type) {
            Some(entry) => advice.push(entry.care_advice.clone()),
            None => advice.push(self.reference.generic_advice.clone()),
        }

        if let Some(ph) = soil.ph.filter(|v| v.is_finite()) {
            if ph < 6.5 {
                advice.push(
                    "Consider liming to increase soil pH for better nutrient availability."
                        .to_string(),
                );
            } else if ph > 7.5 {
                advice.push(
                    "Consider adding organic matter or sulfur to decrease soil pH.".to_string(),
                );
            }
        }

        if level_or_zero(soil.nitrogen) < 140.0 {
            advice.push(
                "Nitrogen levels are low. Consider adding nitrogen-rich fertilizers.".to_string(),
            );
        }
        if level_or_zero(soil.phosphorus) < 10.0 {
            advice.push(
                "Phosphorus levels are low. Consider adding phosphorus-rich fertilizers."
                    .to_string(),
            );
        }
        if level_or_zero(soil.potassium) < 200.0 {
            advice.push(
                "Potassium levels are low. Consider adding potassium-rich fertilizers."
                    .to_string(),
            );
        }

        advice
    }
}

impl SoilModel for RuleBasedModel {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn assess(
        &self,
        soil: &SoilProfile,
        weather: &WeatherProfile,
        region: &str,
    ) -> Result<SoilAssessment> {
        let entry = self.reference.soil(&soil.soil_type);
        if entry.is_none() {
            tracing::debug!(
                "Soil '{}' not in reference table, using neutral score",
                soil.soil_type
            );
        }

        let soil_score = entry
            .map(|e| e.fraction())
            .unwrap_or_else(|| f64::from(self.reference.default_soil_score) / 100.0);
        let crops = entry
            .map(|e| e.crops.clone())
            .unwrap_or_else(|| self.reference.fallback_crops.clone());
        let recommendations = self.soil_advice(soil, entry.map(|e| e.crops.as_slice()));
        let weather_factor = weather_suitability(weather, &self.bands);

        tracing::debug!(
            soil = %soil.soil_type,
            region,
            soil_score,
            weather_factor,
            "Assessed field"
        );

        Ok(SoilAssessment {
            soil_score,
            weather_factor,
            crops,
            recommendations,
        })
    }
}

/// Turns a soil assessment into a crop prediction with confidence and risk.
pub struct RecommendationEngine {
    reference: Arc<ReferenceData>,
    model: Box<dyn SoilModel>,
    confidence_scale: f64,
}

impl RecommendationEngine {
    pub fn new(reference: Arc<ReferenceData>, bands: WeatherBands) -> Self {
        let model = RuleBasedModel::new(Arc::clone(&reference), bands);
        Self::with_model(reference, Box::new(model), bands.confidence_scale)
    }

    pub fn with_model(
        reference: Arc<ReferenceData>,
        model: Box<dyn SoilModel>,
        confidence_scale: f64,
    ) -> Self {
        Self {
            reference,
            model,
            confidence_scale,
        }
    }

    /// Predicts suitable crops for a field.
    ///
    /// Unknown soils are not an error. Any failure inside the model is logged
    /// and reported as [`CropwiseError::PredictionFailed`]; no partial result
    /// is returned.
    pub fn predict(
        &self,
        soil: &SoilProfile,
        weather: &WeatherProfile,
        region: &str,
    ) -> Result<PredictionResult> {
        let assessment = self.model.assess(soil, weather, region).map_err(|e| {
            tracing::error!("Soil model '{}' failed: {}", self.model.name(), e);
            CropwiseError::PredictionFailed
        })?;

        if !assessment.soil_score.is_finite() || !assessment.weather_factor.is_finite() {
            tracing::error!(
                "Soil model '{}' returned non-finite scores: {:?}",
                self.model.name(),
                assessment
            );
            return Err(CropwiseError::PredictionFailed);
        }

        let soil_score = assessment.soil_score.clamp(0.0, 1.0);
        let weather_factor = assessment.weather_factor.clamp(0.0, 1.0);
        let confidence = (self.confidence_scale * soil_score * weather_factor).clamp(0.0, 1.0);

        Ok(PredictionResult {
            recommended_crops: assessment.crops,
            confidence,
            market_price_range: self.reference.market_price_range,
            risk_level: RiskLevel::from_soil_score(soil_score),
            soil_suitability: SoilSuitability {
                score: soil_score,
                recommendations: assessment.recommendations,
            },
        })
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }
}
