use super::{crop_in, Adjustment, Effect};
use crate::models::{ReferenceData, SuitabilityModifiers};

const NITROGEN_HUNGRY: &[&str] = &["Maize", "Rice", "Wheat"];
const NITROGEN_FIXING: &[&str] = &["Groundnut", "Soybean", "Chickpea"];
const PHOSPHORUS_RESPONSIVE: &[&str] = &["Sunflower", "Mustard", "Cotton"];
const POTASSIUM_RESPONSIVE: &[&str] = &["Sugarcane", "Potato", "Tomato"];

/// Soil nutrient response
///
/// Checks (all ppm, independent of each other):
/// - N > 140: cereals that respond to nitrogen
/// - N < 80: legumes that fix their own nitrogen
/// - P > 30: oilseeds and cotton
/// - K > 150: potassium-demanding crops
///
/// A nutrient that was not supplied is skipped; a supplied reading that is
/// not a finite number counts as zero.
pub struct NutrientAdjustment;

fn supplied(reading: Option<f64>) -> Option<f64> {
    reading.map(|v| if v.is_finite() { v } else { 0.0 })
}

impl Adjustment for NutrientAdjustment {
    fn id(&self) -> &'static str {
        "nutrient_response"
    }

    fn name(&self) -> &'static str {
        "Nutrient Response"
    }

    fn evaluate(
        &self,
        crop: &str,
        modifiers: &SuitabilityModifiers,
        _reference: &ReferenceData,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(nitrogen) = supplied(modifiers.nitrogen) {
            if nitrogen > 140.0 && crop_in(NITROGEN_HUNGRY, crop) {
                effects.push(Effect::new(8, "High nitrogen benefits this crop"));
            } else if nitrogen < 80.0 && crop_in(NITROGEN_FIXING, crop) {
                effects.push(Effect::new(
                    5,
                    "Nitrogen-fixing crop suitable for low nitrogen soil",
                ));
            }
        }

        if let Some(phosphorus) = supplied(modifiers.phosphorus) {
            if phosphorus > 30.0 && crop_in(PHOSPHORUS_RESPONSIVE, crop) {
                effects.push(Effect::new(6, "High phosphorus benefits this crop"));
            }
        }

        if let Some(potassium) = supplied(modifiers.potassium) {
            if potassium > 150.0 && crop_in(POTASSIUM_RESPONSIVE, crop) {
                effects.push(Effect::new(7, "High potassium benefits this crop"));
            }
        }

        effects
    }
}
