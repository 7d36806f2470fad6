use super::adjustments::{
    Adjustment, FieldConditionAdjustment, NutrientAdjustment, RegionAdjustment, SeasonAdjustment,
};
use crate::models::{CropCandidate, ReferenceData, SuitabilityModifiers, SuitabilityRow};
use std::sync::Arc;

/// Ranks a soil's candidate crops by base score plus adjustments.
pub struct SuitabilityScorer {
    reference: Arc<ReferenceData>,
    adjustments: Vec<Box<dyn Adjustment>>,
}

impl SuitabilityScorer {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        let adjustments: Vec<Box<dyn Adjustment>> = vec![
            Box::new(RegionAdjustment),
            Box::new(SeasonAdjustment),
            Box::new(NutrientAdjustment),
            Box::new(FieldConditionAdjustment),
        ];

        Self {
            reference,
            adjustments,
        }
    }

    /// Scores every candidate for `soil_type`, best first.
    ///
    /// An unknown soil, or one without scored candidates, yields an empty
    /// list: there is not enough input to rank anything.
    pub fn score(&self, soil_type: &str, modifiers: &SuitabilityModifiers) -> Vec<SuitabilityRow> {
        let Some(entry) = self.reference.soil(soil_type) else {
            tracing::debug!("No suitability data for soil '{}'", soil_type);
            return Vec::new();
        };

        let mut rows: Vec<SuitabilityRow> = entry
            .candidates
            .iter()
            .map(|candidate| self.score_candidate(candidate, modifiers))
            .collect();

        // Stable: equal scores keep reference-table order
        rows.sort_by(|a, b| b.suitability.cmp(&a.suitability));

        tracing::debug!(
            soil = soil_type,
            candidates = rows.len(),
            top = rows.first().map(|r| r.crop.as_str()).unwrap_or("-"),
            "Scored detailed suitability"
        );

        rows
    }

    fn score_candidate(
        &self,
        candidate: &CropCandidate,
        modifiers: &SuitabilityModifiers,
    ) -> SuitabilityRow {
        let effects: Vec<_> = self
            .adjustments
            .iter()
            .flat_map(|a| a.evaluate(&candidate.crop, modifiers, &self.reference))
            .collect();

        let score = effects
            .iter()
            .fold(i32::from(candidate.base_score), |acc, e| acc.saturating_add(e.delta));
        let reasons: Vec<&str> = effects.iter().map(|e| e.reason.as_str()).collect();

        SuitabilityRow {
            crop: candidate.crop.clone(),
            suitability: score.clamp(0, 100) as u8,
            yield_range: candidate.yield_range.clone(),
            conditions: reasons.join(", "),
        }
    }

    pub fn list_adjustments(&self) -> Vec<(&'static str, &'static str)> {
        self.adjustments.iter().map(|a| (a.id(), a.name())).collect()
    }
}
