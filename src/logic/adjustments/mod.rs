pub mod field;
pub mod nutrient;
pub mod region;
pub mod season;

pub use field::FieldConditionAdjustment;
pub use nutrient::NutrientAdjustment;
pub use region::RegionAdjustment;
pub use season::SeasonAdjustment;

use crate::models::{ReferenceData, SuitabilityModifiers};

/// A score change applied to one crop, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub delta: i32,
    pub reason: String,
}

impl Effect {
    /// `label` gets the signed delta appended, e.g. "Ideal winter crop (+10)".
    pub fn new(delta: i32, label: impl std::fmt::Display) -> Self {
        Self {
            delta,
            reason: format!("{} ({:+})", label, delta),
        }
    }
}

/// Trait for suitability score adjustments
pub trait Adjustment: Send + Sync {
    /// Unique identifier for this adjustment
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Effects this adjustment has on `crop`, empty when it does not apply
    fn evaluate(
        &self,
        crop: &str,
        modifiers: &SuitabilityModifiers,
        reference: &ReferenceData,
    ) -> Vec<Effect>;
}

/// Case-insensitive crop set membership.
pub(crate) fn crop_in(set: &[&str], crop: &str) -> bool {
    set.iter().any(|c| c.eq_ignore_ascii_case(crop))
}
