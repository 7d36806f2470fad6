use super::{crop_in, Adjustment, Effect};
use crate::models::{ReferenceData, Season, SuitabilityModifiers};

const MONSOON_CROPS: &[&str] = &["Rice", "Maize", "Soybean"];
const WINTER_CROPS: &[&str] = &["Wheat", "Mustard", "Peas"];
const SUMMER_CROPS: &[&str] = &["Cotton", "Sugarcane", "Sunflower"];

/// Seasonal fit
///
/// Kharif crops are sown with the monsoon (June-September), rabi crops over
/// winter (November-February); a few cash crops favour the hot months.
pub struct SeasonAdjustment;

impl Adjustment for SeasonAdjustment {
    fn id(&self) -> &'static str {
        "season_bonus"
    }

    fn name(&self) -> &'static str {
        "Seasonal Fit"
    }

    fn evaluate(
        &self,
        crop: &str,
        modifiers: &SuitabilityModifiers,
        _reference: &ReferenceData,
    ) -> Vec<Effect> {
        let effect = match modifiers.season() {
            Some(Season::Monsoon) if crop_in(MONSOON_CROPS, crop) => {
                Some(Effect::new(10, "Perfect monsoon crop"))
            }
            Some(Season::Winter) if crop_in(WINTER_CROPS, crop) => {
                Some(Effect::new(10, "Ideal winter crop"))
            }
            Some(Season::Summer) if crop_in(SUMMER_CROPS, crop) => {
                Some(Effect::new(8, "Good summer crop"))
            }
            _ => None,
        };

        effect.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deltas(crop: &str, month: u32) -> Vec<i32> {
        let modifiers = SuitabilityModifiers::new().with_month(month);
        SeasonAdjustment
            .evaluate(crop, &modifiers, &ReferenceData::default())
            .into_iter()
            .map(|e| e.delta)
            .collect()
    }

    #[test]
    fn monsoon_crops() {
        assert_eq!(deltas("Rice", 7), vec![10]);
        assert_eq!(deltas("Soybean", 9), vec![10]);
        assert!(deltas("Wheat", 7).is_empty());
    }

    #[test]
    fn winter_crops() {
        assert_eq!(deltas("Wheat", 12), vec![10]);
        assert_eq!(deltas("Mustard", 1), vec![10]);
        assert!(deltas("Rice", 1).is_empty());
    }

    #[test]
    fn summer_crops() {
        assert_eq!(deltas("Cotton", 4), vec![8]);
        assert_eq!(deltas("Sugarcane", 10), vec![8]);
        assert!(deltas("Rice", 4).is_empty());
    }

    #[test]
    fn no_month_no_bonus() {
        let effects = SeasonAdjustment.evaluate(
            "Cotton",
            &SuitabilityModifiers::new(),
            &ReferenceData::default(),
        );
        assert!(effects.is_empty());
        assert!(deltas("Cotton", 13).is_empty());
    }
}
