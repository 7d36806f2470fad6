use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Risk depends on soil suitability alone, not on confidence.
    pub fn from_soil_score(score: f64) -> Self {
        if score > 0.7 {
            RiskLevel::Low
        } else if score > 0.5 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSuitability {
    /// Fraction in [0, 1]
    pub score: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub recommended_crops: Vec<String>,
    pub confidence: f64,
    pub market_price_range: PriceRange,
    pub risk_level: RiskLevel,
    pub soil_suitability: SoilSuitability,
}

impl PredictionResult {
    pub fn primary_crop(&self) -> Option<&str> {
        self.recommended_crops.first().map(String::as_str)
    }

    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// One row of the detailed suitability table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityRow {
    pub crop: String,
    pub suitability: u8,
    #[serde(rename = "yield")]
    pub yield_range: String,
    /// Adjustment reasons joined with ", "
    pub conditions: String,
}

/// A weather hazard for the growing period, with what to do about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRisk {
    pub risk_level: RiskLevel,
    pub description: String,
    pub impact: String,
    pub recommendation: String,
}

impl WeatherRisk {
    pub fn new(
        risk_level: RiskLevel,
        description: &str,
        impact: &str,
        recommendation: &str,
    ) -> Self {
        Self {
            risk_level,
            description: description.to_string(),
            impact: impact.to_string(),
            recommendation: recommendation.to_string(),
        }
    }
}

/// How the weather is expected to move yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldOutlook {
    /// Multiplier on expected yield, 1.0 = as expected
    pub yield_factor: f64,
    /// Confidence in the yield estimate, percent
    pub confidence: u8,
    pub risks: Vec<WeatherRisk>,
}
