use crate::error::{CropwiseError, Result};
use crate::models::PriceRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Largest region bonus, in points, either way.
pub const MAX_REGION_BONUS: i32 = 100;

/// Normalizes a lookup key: trimmed and lower-cased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropCandidate {
    pub crop: String,
    pub base_score: u8,
    pub yield_range: String,
}

impl CropCandidate {
    pub fn new(crop: &str, base_score: u8, yield_range: &str) -> Self {
        Self {
            crop: crop.to_string(),
            base_score,
            yield_range: yield_range.to_string(),
        }
    }
}

/// Everything the engine knows about one soil type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilEntry {
    /// Suitability as an integer percentage. This is the only stored scale;
    /// the recommendation engine works with [`SoilEntry::fraction`].
    pub score: u8,
    /// Recommended crops, primary first.
    pub crops: Vec<String>,
    /// Scored candidates for the detailed suitability table.
    #[serde(default)]
    pub candidates: Vec<CropCandidate>,
    pub care_advice: String,
    /// Short crop-planning list; `crops` stands in when empty.
    #[serde(default)]
    pub rotation: Vec<String>,
}

impl SoilEntry {
    pub fn fraction(&self) -> f64 {
        f64::from(self.score) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropEconomics {
    pub crop_name: String,
    pub setup_cost: f64,
    pub maintenance_cost: f64,
    /// Tons per acre
    pub expected_yield: f64,
    /// Currency units per ton
    pub market_price: f64,
    pub months_to_harvest: u32,
}

impl CropEconomics {
    pub fn total_cost(&self) -> f64 {
        self.setup_cost + self.maintenance_cost
    }

    pub fn expected_revenue(&self) -> f64 {
        self.expected_yield * self.market_price
    }

    pub fn expected_profit(&self) -> f64 {
        self.expected_revenue() - self.total_cost()
    }

    pub fn roi_percent(&self) -> f64 {
        let cost = self.total_cost();
        if cost == 0.0 {
            0.0
        } else {
            self.expected_profit() / cost * 100.0
        }
    }

    /// Revenue after scaling the expected yield by a weather factor.
    pub fn projected_revenue(&self, yield_factor: f64) -> f64 {
        self.expected_revenue() * yield_factor
    }

    /// Months of revenue, spread evenly over the growing period, needed to
    /// cover total cost. `None` when the crop earns nothing.
    pub fn break_even_months(&self) -> Option<f64> {
        let revenue = self.expected_revenue();
        if revenue <= 0.0 || self.months_to_harvest == 0 {
            return None;
        }
        let monthly_revenue = revenue / f64::from(self.months_to_harvest);
        Some(self.total_cost() / monthly_revenue)
    }
}

/// Immutable lookup tables shared by every scoring component.
///
/// Built once (from [`Default`] or the config file) and handed out behind an
/// `Arc`. All keys are stored lower-cased; see [`ReferenceData::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub soils: BTreeMap<String, SoilEntry>,
    /// Percentage used when a soil type is not in the table
    pub default_soil_score: u8,
    /// Crop list reported for unknown soils
    pub fallback_crops: Vec<String>,
    /// Care advice reported for unknown soils
    pub generic_advice: String,
    /// Answer to a rotation lookup for an unknown soil
    pub soil_testing_advice: String,
    pub market_price_range: PriceRange,
    /// Currency units per ton, keyed by crop
    pub base_prices: BTreeMap<String, f64>,
    pub default_base_price: f64,
    /// region -> crop -> bonus points
    pub region_bonuses: BTreeMap<String, BTreeMap<String, i32>>,
    pub economics: BTreeMap<String, CropEconomics>,
}

impl ReferenceData {
    pub fn soil(&self, soil_type: &str) -> Option<&SoilEntry> {
        self.soils.get(&normalize_key(soil_type))
    }

    pub fn base_price(&self, crop: &str) -> f64 {
        self.base_prices
            .get(&normalize_key(crop))
            .copied()
            .unwrap_or(self.default_base_price)
    }

    pub fn region_bonus(&self, region: &str, crop: &str) -> Option<i32> {
        self.region_bonuses
            .get(&normalize_key(region))?
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(crop))
            .map(|(_, bonus)| *bonus)
    }

    /// Exact, case-insensitive lookup. Fuzzy matching is left to callers.
    pub fn economics(&self, crop: &str) -> Option<&CropEconomics> {
        self.economics.get(&normalize_key(crop))
    }

    /// Crop-planning suggestions for a soil type.
    pub fn soil_type_recommendations(&self, soil_type: &str) -> Vec<String> {
        match self.soil(soil_type) {
            Some(entry) if !entry.rotation.is_empty() => entry.rotation.clone(),
            Some(entry) => entry.crops.clone(),
            None => vec![self.soil_testing_advice.clone()],
        }
    }

    /// Re-keys every table with lower-cased keys so lookups stay exact.
    pub fn normalized(self) -> Self {
        Self {
            soils: self
                .soils
                .into_iter()
                .map(|(k, v)| (normalize_key(&k), v))
                .collect(),
            base_prices: self
                .base_prices
                .into_iter()
                .map(|(k, v)| (normalize_key(&k), v))
                .collect(),
            region_bonuses: self
                .region_bonuses
                .into_iter()
                .map(|(k, v)| (normalize_key(&k), v))
                .collect(),
            economics: self
                .economics
                .into_iter()
                .map(|(k, v)| (normalize_key(&k), v))
                .collect(),
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_soil_score > 100 {
            return Err(CropwiseError::Config(format!(
                "default_soil_score {} exceeds 100",
                self.default_soil_score
            )));
        }
        if self.fallback_crops.is_empty() {
            return Err(CropwiseError::Config(
                "fallback_crops must not be empty".into(),
            ));
        }
        for (name, entry) in &self.soils {
            if entry.score > 100 {
                return Err(CropwiseError::Config(format!(
                    "soil '{}' score {} exceeds 100",
                    name, entry.score
                )));
            }
            if let Some(c) = entry.candidates.iter().find(|c| c.base_score > 100) {
                return Err(CropwiseError::Config(format!(
                    "soil '{}' candidate '{}' base score {} exceeds 100",
                    name, c.crop, c.base_score
                )));
            }
        }
        for (region, bonuses) in &self.region_bonuses {
            if let Some((crop, bonus)) = bonuses
                .iter()
                .find(|(_, b)| !(-MAX_REGION_BONUS..=MAX_REGION_BONUS).contains(*b))
            {
                return Err(CropwiseError::Config(format!(
                    "region bonus for '{}' in '{}' is {}, must be within +/-{}",
                    crop, region, bonus, MAX_REGION_BONUS
                )));
            }
        }
        if !is_positive(self.default_base_price) {
            return Err(CropwiseError::Config(
                "default_base_price must be a positive number".into(),
            ));
        }
        if let Some((crop, price)) = self.base_prices.iter().find(|(_, p)| !is_positive(**p)) {
            return Err(CropwiseError::Config(format!(
                "base price for '{}' must be a positive number, got {}",
                crop, price
            )));
        }
        let range = self.market_price_range;
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(CropwiseError::Config(
                "market_price_range must be finite with min <= max".into(),
            ));
        }
        if let Some((crop, _)) = self.economics.iter().find(|(_, e)| {
            !is_non_negative(e.setup_cost)
                || !is_non_negative(e.maintenance_cost)
                || !is_non_negative(e.expected_yield)
                || !is_non_negative(e.market_price)
        }) {
            return Err(CropwiseError::Config(format!(
                "economics for '{}' must use finite, non-negative figures",
                crop
            )));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn soil(score: u8, crops: &[&str], candidates: Vec<CropCandidate>, care_advice: &str) -> SoilEntry {
    SoilEntry {
        score,
        crops: crops.iter().map(|c| c.to_string()).collect(),
        candidates,
        care_advice: care_advice.to_string(),
        rotation: Vec::new(),
    }
}

fn economics(
    crop_name: &str,
    setup_cost: f64,
    maintenance_cost: f64,
    expected_yield: f64,
    market_price: f64,
    months_to_harvest: u32,
) -> CropEconomics {
    CropEconomics {
        crop_name: crop_name.to_string(),
        setup_cost,
        maintenance_cost,
        expected_yield,
        market_price,
        months_to_harvest,
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        let mut soils = BTreeMap::from([
            (
                "alluvial".to_string(),
                soil(
                    95,
                    &[
                        "Rice", "Wheat", "Sugarcane", "Cotton", "Jute", "Maize", "Mustard",
                        "Chickpea", "Peanut",
                    ],
                    vec![],
                    "Maintain organic matter with green manuring; alluvial soils respond well to balanced NPK.",
                ),
            ),
            (
                "black".to_string(),
                soil(
                    90,
                    &[
                        "Cotton", "Sugarcane", "Wheat", "Pulses", "Sunflower", "Soybeans",
                        "Chickpea", "Onion",
                    ],
                    vec![],
                    "Avoid working black soil when wet; it holds moisture well but cracks as it dries.",
                ),
            ),
            (
                "clay".to_string(),
                soil(
                    85,
                    &[
                        "Rice", "Wheat", "Cotton", "Sugarcane", "Black Gram", "Green Gram",
                        "Turmeric",
                    ],
                    vec![
                        CropCandidate::new("Wheat", 90, "3.5-4.2 tons/acre"),
                        CropCandidate::new("Rice", 88, "4.0-4.5 tons/acre"),
                        CropCandidate::new("Sugarcane", 85, "60-80 tons/acre"),
                        CropCandidate::new("Cotton", 82, "2.5-3.0 tons/acre"),
                        CropCandidate::new("Jute", 80, "2.0-2.5 tons/acre"),
                        CropCandidate::new("Tobacco", 75, "1.8-2.2 tons/acre"),
                    ],
                    "Improve drainage with raised beds and organic matter to limit waterlogging.",
                ),
            ),
            (
                "loamy".to_string(),
                soil(
                    80,
                    &[
                        "Most Vegetables", "Wheat", "Cotton", "Sugarcane", "Pulses", "Mustard",
                        "Soybeans", "Onion", "Turmeric",
                    ],
                    vec![
                        CropCandidate::new("Maize", 95, "4.0-4.8 tons/acre"),
                        CropCandidate::new("Sugarcane", 92, "70-90 tons/acre"),
                        CropCandidate::new("Cotton", 90, "2.8-3.2 tons/acre"),
                        CropCandidate::new("Soybean", 88, "2.5-3.0 tons/acre"),
                        CropCandidate::new("Sorghum", 85, "3.0-3.5 tons/acre"),
                        CropCandidate::new("Mustard", 82, "1.2-1.5 tons/acre"),
                    ],
                    "Keep fertility up with compost and crop rotation; loamy soil suits most crops.",
                ),
            ),
            (
                "sandy".to_string(),
                soil(
                    60,
                    &[
                        "Groundnut", "Potato", "Watermelon", "Carrot", "Pearl Millet", "Sesame",
                        "Peanut",
                    ],
                    vec![
                        CropCandidate::new("Groundnut", 88, "2.0-2.5 tons/acre"),
                        CropCandidate::new("Pearl Millet", 85, "2.5-3.0 tons/acre"),
                        CropCandidate::new("Coconut", 82, "10-12 tons/acre"),
                        CropCandidate::new("Cashew", 80, "0.8-1.2 tons/acre"),
                        CropCandidate::new("Sweet Potato", 78, "8-10 tons/acre"),
                        CropCandidate::new("Sesame", 75, "0.6-0.8 tons/acre"),
                    ],
                    "Add compost or manure to hold water and nutrients; irrigate little and often.",
                ),
            ),
            (
                "red".to_string(),
                soil(
                    70,
                    &[
                        "Groundnut", "Millet", "Pulses", "Pearl Millet", "Green Gram",
                        "Black Gram",
                    ],
                    vec![],
                    "Apply lime and organic manure; red soils are usually short of nitrogen and phosphorus.",
                ),
            ),
            (
                "laterite".to_string(),
                soil(
                    65,
                    &["Tea", "Coffee", "Rubber", "Cashew", "Turmeric"],
                    vec![],
                    "Correct acidity with lime and mulch heavily; laterite soils leach nutrients quickly.",
                ),
            ),
            (
                "saline".to_string(),
                soil(
                    40,
                    &["Date Palm", "Barley", "Cotton", "Sunflower"],
                    vec![],
                    "Leach salts with good-quality irrigation water and apply gypsum where sodicity is high.",
                ),
            ),
            (
                "peaty".to_string(),
                soil(
                    50,
                    &["Rice", "Vegetables", "Grass", "Turmeric"],
                    vec![],
                    "Improve drainage and add lime; peaty soils are acidic and rich in organic matter.",
                ),
            ),
        ]);

        let rotations: [(&str, &[&str]); 9] = [
            ("alluvial", &["Sugarcane", "Rice", "Wheat", "Cotton", "Maize", "Mustard"]),
            ("black", &["Cotton", "Sugarcane", "Wheat", "Chickpea", "Sunflower", "Soybeans"]),
            ("red", &["Groundnut", "Pearl Millet", "Green Gram", "Black Gram"]),
            ("laterite", &["Cashew", "Rubber", "Tea", "Turmeric"]),
            ("sandy", &["Groundnut", "Pearl Millet", "Potato", "Sesame"]),
            ("clay", &["Rice", "Sugarcane", "Cotton", "Black Gram", "Turmeric"]),
            ("loamy", &["Most crops", "Vegetables", "Wheat", "Soybeans", "Onion"]),
            ("saline", &["Barley", "Date palm", "Cotton", "Sunflower"]),
            ("peaty", &["Rice", "Vegetables", "Turmeric"]),
        ];
        for (key, crops) in rotations {
            if let Some(entry) = soils.get_mut(key) {
                entry.rotation = crops.iter().map(|c| c.to_string()).collect();
            }
        }

        let base_prices = [
            ("rice", 22000.0),
            ("wheat", 25000.0),
            ("maize", 20000.0),
            ("cotton", 65000.0),
            ("groundnut", 45000.0),
            ("sugarcane", 3500.0),
            ("soybean", 38000.0),
            ("mustard", 42000.0),
            ("barley", 28000.0),
            ("pearl millet", 18000.0),
            ("chickpea", 52000.0),
            ("turmeric", 75000.0),
            ("onion", 15000.0),
            ("peanut", 48000.0),
            ("green gram", 65000.0),
            ("black gram", 62000.0),
            ("sesame", 85000.0),
            ("sunflower", 45000.0),
        ]
        .into_iter()
        .map(|(crop, price)| (crop.to_string(), price))
        .collect();

        let region_bonuses = [
            ("punjab", vec![("Wheat", 10), ("Rice", 8)]),
            ("kerala", vec![("Rice", 12), ("Coconut", 15)]),
            ("gujarat", vec![("Cotton", 12), ("Groundnut", 10)]),
            ("karnataka", vec![("Coffee", 15), ("Sugarcane", 8)]),
            ("maharashtra", vec![("Sugarcane", 12), ("Cotton", 10)]),
        ]
        .into_iter()
        .map(|(region, bonuses)| {
            (
                region.to_string(),
                bonuses
                    .into_iter()
                    .map(|(crop, bonus)| (crop.to_string(), bonus))
                    .collect(),
            )
        })
        .collect();

        let economics = [
            economics("Corn", 42000.0, 22000.0, 6.5, 20000.0, 4),
            economics("Rice", 45000.0, 25000.0, 5.5, 22000.0, 4),
            economics("Wheat", 35000.0, 18000.0, 4.2, 25000.0, 5),
            economics("Winter Wheat", 35000.0, 18000.0, 4.2, 25000.0, 5),
            economics("Cotton", 55000.0, 28000.0, 2.8, 65000.0, 6),
            economics("Groundnut", 36000.0, 19000.0, 2.5, 45000.0, 4),
            economics("Sugarcane", 60000.0, 32000.0, 70.0, 3500.0, 12),
            economics("Maize", 42000.0, 22000.0, 6.5, 20000.0, 4),
            economics("Soybean", 38000.0, 20000.0, 3.5, 38000.0, 4),
            economics("Barley", 30000.0, 15000.0, 3.8, 28000.0, 4),
            economics("Vegetables", 52000.0, 30000.0, 8.2, 35000.0, 3),
        ]
        .into_iter()
        .map(|e| (normalize_key(&e.crop_name), e))
        // Peanuts are sold as groundnut
        .chain(std::iter::once((
            "peanuts".to_string(),
            economics("Groundnut", 36000.0, 19000.0, 2.5, 45000.0, 4),
        )))
        .chain(std::iter::once((
            "unknown crop".to_string(),
            economics("Vegetables (Recommended)", 52000.0, 30000.0, 8.2, 35000.0, 3),
        )))
        .collect();

        Self {
            soils,
            default_soil_score: 50,
            fallback_crops: vec!["Generic Crops".to_string()],
            generic_advice: "Soil type not recognised; get a laboratory soil test before choosing crops."
                .to_string(),
            soil_testing_advice: "Consider soil testing for specific recommendations".to_string(),
            market_price_range: PriceRange {
                min: 3200.0,
                max: 3800.0,
            },
            base_prices,
            default_base_price: 30000.0,
            region_bonuses,
            economics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilType;

    #[test]
    fn default_table_covers_every_soil_type() {
        let reference = ReferenceData::default();
        for soil_type in SoilType::ALL {
            let entry = reference
                .soil(soil_type.key())
                .unwrap_or_else(|| panic!("missing soil {:?}", soil_type));
            assert!(!entry.crops.is_empty());
            assert!(!entry.rotation.is_empty());
            assert!(entry.score <= 100);
        }
    }

    #[test]
    fn soil_lookup_is_case_insensitive() {
        let reference = ReferenceData::default();
        assert_eq!(reference.soil("CLAY"), reference.soil("clay"));
        assert!(reference.soil(" Loamy ").is_some());
        assert!(reference.soil("clayish").is_none());
    }

    #[test]
    fn soil_fraction_converts_percent() {
        let reference = ReferenceData::default();
        assert_eq!(reference.soil("clay").unwrap().fraction(), 0.85);
        assert_eq!(reference.soil("saline").unwrap().fraction(), 0.4);
    }

    #[test]
    fn base_price_lookup_and_default() {
        let reference = ReferenceData::default();
        assert_eq!(reference.base_price("Rice"), 22000.0);
        assert_eq!(reference.base_price("pearl millet"), 18000.0);
        assert_eq!(reference.base_price("dragonfruit"), 30000.0);
    }

    #[test]
    fn region_bonus_lookup() {
        let reference = ReferenceData::default();
        assert_eq!(reference.region_bonus("Punjab", "Wheat"), Some(10));
        assert_eq!(reference.region_bonus("kerala", "coconut"), Some(15));
        assert_eq!(reference.region_bonus("punjab", "Cotton"), None);
        assert_eq!(reference.region_bonus("haryana", "Wheat"), None);
    }

    #[test]
    fn economics_lookup_is_exact() {
        let reference = ReferenceData::default();
        assert_eq!(reference.economics("RICE").unwrap().market_price, 22000.0);
        assert_eq!(
            reference.economics("peanuts").unwrap().crop_name,
            "Groundnut"
        );
        assert!(reference.economics("ric").is_none());
        assert!(reference.economics("basmati rice").is_none());
    }

    #[test]
    fn economics_derived_values() {
        let reference = ReferenceData::default();
        let rice = reference.economics("rice").unwrap();
        assert_eq!(rice.total_cost(), 70000.0);
        assert_eq!(rice.expected_revenue(), 121000.0);
        assert_eq!(rice.expected_profit(), 51000.0);
        assert!((rice.roi_percent() - 72.857).abs() < 0.01);
        assert_eq!(rice.projected_revenue(0.5), 60500.0);
    }

    #[test]
    fn roi_with_zero_cost_is_zero() {
        let free = economics("Free", 0.0, 0.0, 1.0, 100.0, 1);
        assert_eq!(free.roi_percent(), 0.0);
    }

    #[test]
    fn break_even_months() {
        let reference = ReferenceData::default();
        // 70000 cost against 121000 / 4 per month
        let rice = reference.economics("rice").unwrap();
        assert!((rice.break_even_months().unwrap() - 2.314).abs() < 0.001);

        let sugarcane = reference.economics("sugarcane").unwrap();
        assert!((sugarcane.break_even_months().unwrap() - 4.506).abs() < 0.001);

        assert_eq!(economics("Fallow", 100.0, 0.0, 0.0, 100.0, 3).break_even_months(), None);
        assert_eq!(economics("Instant", 100.0, 0.0, 1.0, 100.0, 0).break_even_months(), None);
    }

    #[test]
    fn soil_type_recommendations_use_rotation_table() {
        let reference = ReferenceData::default();
        assert_eq!(
            reference.soil_type_recommendations("clay"),
            vec!["Rice", "Sugarcane", "Cotton", "Black Gram", "Turmeric"]
        );
        assert_eq!(
            reference.soil_type_recommendations("Peaty"),
            vec!["Rice", "Vegetables", "Turmeric"]
        );
        assert_ne!(
            reference.soil_type_recommendations("clay"),
            reference.soil("clay").unwrap().crops
        );
    }

    #[test]
    fn soil_type_recommendations_without_rotation_use_crops() {
        let mut reference = ReferenceData::default();
        reference.soils.get_mut("peaty").unwrap().rotation.clear();
        assert_eq!(
            reference.soil_type_recommendations("peaty"),
            vec!["Rice", "Vegetables", "Grass", "Turmeric"]
        );
    }

    #[test]
    fn soil_type_recommendations_fallback() {
        let reference = ReferenceData::default();
        assert_eq!(
            reference.soil_type_recommendations("moon dust"),
            vec!["Consider soil testing for specific recommendations"]
        );
    }

    #[test]
    fn normalized_lowercases_keys() {
        let mut reference = ReferenceData::default();
        reference.base_prices.insert("Quinoa".into(), 90000.0);
        let entry = reference.soils.remove("clay").unwrap();
        reference.soils.insert("Clay".into(), entry);

        let reference = reference.normalized();
        assert_eq!(reference.base_price("quinoa"), 90000.0);
        assert!(reference.soils.contains_key("clay"));
        assert!(!reference.soils.contains_key("Clay"));
    }

    #[test]
    fn default_table_validates() {
        assert!(ReferenceData::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_tables() {
        let mut reference = ReferenceData::default();
        reference.soils.get_mut("clay").unwrap().score = 120;
        assert!(matches!(
            reference.validate(),
            Err(CropwiseError::Config(_))
        ));

        let mut reference = ReferenceData::default();
        reference.fallback_crops.clear();
        assert!(reference.validate().is_err());

        let mut reference = ReferenceData::default();
        reference.base_prices.insert("rice".into(), 0.0);
        assert!(reference.validate().is_err());

        let mut reference = ReferenceData::default();
        reference
            .region_bonuses
            .get_mut("punjab")
            .unwrap()
            .insert("Wheat".into(), i32::MAX);
        assert!(reference.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_numbers() {
        let mut reference = ReferenceData::default();
        reference.base_prices.insert("rice".into(), f64::NAN);
        assert!(reference.validate().is_err());

        let mut reference = ReferenceData::default();
        reference.market_price_range.max = f64::INFINITY;
        assert!(reference.validate().is_err());

        let mut reference = ReferenceData::default();
        reference.economics.get_mut("rice").unwrap().setup_cost = f64::NAN;
        assert!(reference.validate().is_err());
    }

    #[test]
    fn region_bonus_bounds_are_inclusive() {
        let mut reference = ReferenceData::default();
        let punjab = reference.region_bonuses.get_mut("punjab").unwrap();
        punjab.insert("Wheat".into(), MAX_REGION_BONUS);
        punjab.insert("Rice".into(), -MAX_REGION_BONUS);
        assert!(reference.validate().is_ok());
    }
}
