use super::{crop_in, Adjustment, Effect};
use crate::models::{FieldCondition, ReferenceData, SuitabilityModifiers};

const TERRACE_CROPS: &[&str] = &["Grapes", "Tea"];

/// Field condition
///
/// Exactly one branch applies per call:
/// - waterlogged: paddy rice +15
/// - terraced: terrace crops +12
/// - excellent: +5 for every crop
/// - poor: -10 for every crop
///
/// Good and fair fields are neutral.
pub struct FieldConditionAdjustment;

impl Adjustment for FieldConditionAdjustment {
    fn id(&self) -> &'static str {
        "field_condition"
    }

    fn name(&self) -> &'static str {
        "Field Condition"
    }

    fn evaluate(
        &self,
        crop: &str,
        modifiers: &SuitabilityModifiers,
        _reference: &ReferenceData,
    ) -> Vec<Effect> {
        let effect = match modifiers.field {
            Some(FieldCondition::Waterlogged) if crop.eq_ignore_ascii_case("Rice") => {
                Some(Effect::new(15, "Perfect for paddy cultivation"))
            }
            Some(FieldCondition::Terraced) if crop_in(TERRACE_CROPS, crop) => {
                Some(Effect::new(12, "Suitable for terrace farming"))
            }
            Some(FieldCondition::Excellent) => Some(Effect::new(
                5,
                "Well-maintained field benefits all crops",
            )),
            Some(FieldCondition::Poor) => {
                Some(Effect::new(-10, "Poor field condition reduces yields"))
            }
            _ => None,
        };

        effect.into_iter().collect()
    }
}
