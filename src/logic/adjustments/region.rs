use super::{Adjustment, Effect};
use crate::models::{ReferenceData, SuitabilityModifiers};

/// Regional bonus
///
/// Some states are known producers of particular crops (Punjab wheat, Kerala
/// coconut, ...). The bonus comes from the reference table's region entries.
pub struct RegionAdjustment;

impl Adjustment for RegionAdjustment {
    fn id(&self) -> &'static str {
        "region_bonus"
    }

    fn name(&self) -> &'static str {
        "Regional Growing Bonus"
    }

    fn evaluate(
        &self,
        crop: &str,
        modifiers: &SuitabilityModifiers,
        reference: &ReferenceData,
    ) -> Vec<Effect> {
        let Some(region) = modifiers.region() else {
            return Vec::new();
        };

        reference
            .region_bonus(region, crop)
            .map(|bonus| Effect::new(bonus, format!("Ideal growing region in {}", region)))
            .into_iter()
            .collect()
    }
}
