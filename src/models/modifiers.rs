use crate::models::{FieldCondition, Season};
use serde::{Deserialize, Serialize};

/// Optional context for the detailed suitability table. Anything left unset
/// has no effect on the scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityModifiers {
    pub region: Option<String>,
    pub month: Option<u32>,
    /// ppm
    pub nitrogen: Option<f64>,
    /// ppm
    pub phosphorus: Option<f64>,
    /// ppm
    pub potassium: Option<f64>,
    pub field: Option<FieldCondition>,
}

impl SuitabilityModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_nitrogen(mut self, ppm: f64) -> Self {
        self.nitrogen = Some(ppm);
        self
    }

    pub fn with_phosphorus(mut self, ppm: f64) -> Self {
        self.phosphorus = Some(ppm);
        self
    }

    pub fn with_potassium(mut self, ppm: f64) -> Self {
        self.potassium = Some(ppm);
        self
    }

    pub fn with_field(mut self, field: FieldCondition) -> Self {
        self.field = Some(field);
        self
    }

    pub fn season(&self) -> Option<Season> {
        self.month.and_then(Season::from_month)
    }

    /// Region with surrounding whitespace removed; blank counts as unset.
    pub fn region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}
