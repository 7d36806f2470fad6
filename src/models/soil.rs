use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Sandy,
    Clay,
    Loamy,
    Saline,
    Peaty,
}

impl SoilType {
    pub const ALL: [SoilType; 9] = [
        SoilType::Alluvial,
        SoilType::Black,
        SoilType::Red,
        SoilType::Laterite,
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Saline,
        SoilType::Peaty,
    ];

    /// Lower-case key used by the reference table.
    pub fn key(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "alluvial",
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Laterite => "laterite",
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
            SoilType::Saline => "saline",
            SoilType::Peaty => "peaty",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black",
            SoilType::Red => "Red",
            SoilType::Laterite => "Laterite",
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
            SoilType::Saline => "Saline",
            SoilType::Peaty => "Peaty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alluvial" => Some(SoilType::Alluvial),
            "black" | "black cotton" | "regur" => Some(SoilType::Black),
            "red" => Some(SoilType::Red),
            "laterite" | "lateritic" => Some(SoilType::Laterite),
            "sandy" | "sand" => Some(SoilType::Sandy),
            "clay" => Some(SoilType::Clay),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "saline" => Some(SoilType::Saline),
            "peaty" | "peat" => Some(SoilType::Peaty),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discrete field modifier used by the detailed scorer.
///
/// Mixes maintenance quality (excellent/good/fair/poor) with terrain
/// (waterlogged/terraced); only one value applies per scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Waterlogged,
    Terraced,
}

impl FieldCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCondition::Excellent => "Excellent",
            FieldCondition::Good => "Good",
            FieldCondition::Fair => "Fair",
            FieldCondition::Poor => "Poor",
            FieldCondition::Waterlogged => "Waterlogged",
            FieldCondition::Terraced => "Terraced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Some(FieldCondition::Excellent),
            "good" => Some(FieldCondition::Good),
            "fair" => Some(FieldCondition::Fair),
            "poor" => Some(FieldCondition::Poor),
            "waterlogged" | "water-logged" => Some(FieldCondition::Waterlogged),
            "terraced" | "terrace" => Some(FieldCondition::Terraced),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soil test results for a field.
///
/// `soil_type` is a free-form key so that soils outside [`SoilType`] can still
/// be submitted; they take the unknown-soil path in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilProfile {
    #[serde(rename = "type")]
    pub soil_type: String,
    pub ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
}

impl SoilProfile {
    pub fn new(soil_type: impl Into<String>) -> Self {
        Self {
            soil_type: soil_type.into(),
            ph: None,
            nitrogen: None,
            phosphorus: None,
            potassium: None,
        }
    }

    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = Some(ph);
        self
    }

    pub fn with_npk(mut self, nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        self.nitrogen = Some(nitrogen);
        self.phosphorus = Some(phosphorus);
        self.potassium = Some(potassium);
        self
    }
}

impl From<SoilType> for SoilProfile {
    fn from(soil_type: SoilType) -> Self {
        Self::new(soil_type.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_type_from_str_valid() {
        assert_eq!(SoilType::from_str("clay"), Some(SoilType::Clay));
        assert_eq!(SoilType::from_str("Loamy"), Some(SoilType::Loamy));
        assert_eq!(SoilType::from_str("loam"), Some(SoilType::Loamy));
        assert_eq!(SoilType::from_str(" SANDY "), Some(SoilType::Sandy));
        assert_eq!(SoilType::from_str("regur"), Some(SoilType::Black));
    }

    #[test]
    fn soil_type_from_str_invalid() {
        assert_eq!(SoilType::from_str("dirt"), None);
        assert_eq!(SoilType::from_str(""), None);
    }

    #[test]
    fn soil_type_keys_round_trip() {
        for soil in SoilType::ALL {
            assert_eq!(SoilType::from_str(soil.key()), Some(soil));
            assert_eq!(SoilType::from_str(soil.as_str()), Some(soil));
        }
    }

    #[test]
    fn field_condition_from_str() {
        assert_eq!(
            FieldCondition::from_str("waterlogged"),
            Some(FieldCondition::Waterlogged)
        );
        assert_eq!(
            FieldCondition::from_str("Terraced"),
            Some(FieldCondition::Terraced)
        );
        assert_eq!(FieldCondition::from_str("POOR"), Some(FieldCondition::Poor));
        assert_eq!(FieldCondition::from_str("swampy"), None);
    }

    #[test]
    fn soil_profile_serializes_type_key() {
        let profile = SoilProfile::from(SoilType::Clay).with_ph(6.8);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["type"], "clay");
        assert_eq!(json["ph"], 6.8);
        assert!(json["nitrogen"].is_null());
    }
}
