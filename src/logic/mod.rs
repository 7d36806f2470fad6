pub mod adjustments;
pub mod calculations;
pub mod prices;
pub mod recommendation;
pub mod suitability;

pub use prices::PriceSynthesizer;
pub use recommendation::{RecommendationEngine, RuleBasedModel, SoilAssessment, SoilModel};
pub use suitability::SuitabilityScorer;
