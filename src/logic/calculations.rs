use crate::config::WeatherBands;
use crate::models::{RiskLevel, WeatherProfile, WeatherRisk};

/// Parses a user-entered nutrient or weather reading.
///
/// Anything that is not a finite number reads as zero; this never fails.
pub fn parse_level(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses an optional reading. Blank or non-numeric input means no reading.
pub fn parse_reading(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a month number. Blank or non-numeric input means no month.
pub fn parse_month(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Replaces missing or non-finite nutrient readings with zero.
pub fn level_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Multiplicative weather suitability: the baseline scaled by each band the
/// readings fall outside of.
pub fn weather_suitability(weather: &WeatherProfile, bands: &WeatherBands) -> f64 {
    bands.baseline
        * bands.temperature.factor(weather.temperature)
        * bands.humidity.factor(weather.humidity)
        * bands.rainfall.factor(weather.rainfall)
}

/// Expected yield multiplier for the given weather, e.g. 1.05 for +5 %.
///
/// Temperature contributes -20 % to +10 %, rainfall -25 % to +15 % and
/// humidity -10 % to +5 %. Missing readings contribute nothing.
pub fn yield_variation(weather: &WeatherProfile) -> f64 {
    let mut variation = 0.0;

    if let Some(temp) = weather.temperature.filter(|v| v.is_finite()) {
        if temp > 35.0 {
            variation -= 0.2;
        } else if temp < 15.0 {
            variation -= 0.15;
        } else if (22.0..=28.0).contains(&temp) {
            variation += 0.1;
        }
    }

    if let Some(rain) = weather.rainfall.filter(|v| v.is_finite()) {
        if rain < 50.0 {
            variation -= 0.25;
        } else if rain > 200.0 {
            variation -= 0.15;
        } else if (80.0..=150.0).contains(&rain) {
            variation += 0.15;
        }
    }

    if let Some(humidity) = weather.humidity.filter(|v| v.is_finite()) {
        if humidity > 80.0 || humidity < 30.0 {
            variation -= 0.1;
        } else if (50.0..=70.0).contains(&humidity) {
            variation += 0.05;
        }
    }

    1.0 + variation
}

/// Confidence, in percent, that [`yield_variation`] holds. Starts at 80 and
/// loses 10 for temperature outside 15-35 C, 15 for rainfall outside
/// 50-200 mm and 5 for humidity outside 30-80 %. Never below 30.
pub fn weather_confidence(weather: &WeatherProfile) -> u8 {
    let mut score: u8 = 80;

    if finite(weather.temperature).is_some_and(|t| !(15.0..=35.0).contains(&t)) {
        score -= 10;
    }
    if finite(weather.rainfall).is_some_and(|r| !(50.0..=200.0).contains(&r)) {
        score -= 15;
    }
    if finite(weather.humidity).is_some_and(|h| !(30.0..=80.0).contains(&h)) {
        score -= 5;
    }

    score.max(30)
}

/// Weather hazards worth acting on, in temperature, rainfall, humidity order.
pub fn weather_risks(weather: &WeatherProfile) -> Vec<WeatherRisk> {
    let mut risks = Vec::new();

    match finite(weather.temperature) {
        Some(t) if t > 35.0 => risks.push(WeatherRisk::new(
            RiskLevel::High,
            "High Temperature Risk",
            "May cause crop stress and reduce yield",
            "Consider additional irrigation and shade structures",
        )),
        Some(t) if t < 15.0 => risks.push(WeatherRisk::new(
            RiskLevel::Medium,
            "Low Temperature Risk",
            "May slow down growth rate",
            "Monitor crop development closely",
        )),
        _ => {}
    }

    match finite(weather.rainfall) {
        Some(r) if r < 50.0 => risks.push(WeatherRisk::new(
            RiskLevel::High,
            "Low Rainfall Risk",
            "Drought stress likely",
            "Implement irrigation system",
        )),
        Some(r) if r > 200.0 => risks.push(WeatherRisk::new(
            RiskLevel::Medium,
            "High Rainfall Risk",
            "Potential waterlogging",
            "Ensure proper drainage",
        )),
        _ => {}
    }

    if finite(weather.humidity).is_some_and(|h| h > 80.0) {
        risks.push(WeatherRisk::new(
            RiskLevel::High,
            "High Humidity Risk",
            "Increased disease pressure",
            "Monitor for diseases and improve air circulation",
        ));
    }

    risks
}

fn finite(reading: Option<f64>) -> Option<f64> {
    reading.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parse_level_accepts_numbers() {
        assert_eq!(parse_level("150"), 150.0);
        assert_eq!(parse_level(" 42.5 "), 42.5);
        assert_eq!(parse_level("-3"), -3.0);
    }

    #[test]
    fn parse_level_treats_garbage_as_zero() {
        assert_eq!(parse_level(""), 0.0);
        assert_eq!(parse_level("lots"), 0.0);
        assert_eq!(parse_level("NaN"), 0.0);
        assert_eq!(parse_level("inf"), 0.0);
    }

    #[test]
    fn parse_reading_values() {
        assert_eq!(parse_reading("28.5"), Some(28.5));
        assert_eq!(parse_reading(""), None);
        assert_eq!(parse_reading("warm"), None);
        assert_eq!(parse_reading("NaN"), None);
    }

    #[test]
    fn parse_month_values() {
        assert_eq!(parse_month("7"), Some(7));
        assert_eq!(parse_month(" 12 "), Some(12));
        assert_eq!(parse_month(""), None);
        assert_eq!(parse_month("July"), None);
    }

    #[test]
    fn level_or_zero_handles_missing() {
        assert_eq!(level_or_zero(Some(12.0)), 12.0);
        assert_eq!(level_or_zero(None), 0.0);
        assert_eq!(level_or_zero(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn weather_suitability_ideal() {
        let weather = WeatherProfile::new()
            .with_temperature(25.0)
            .with_humidity(60.0)
            .with_rainfall(120.0);
        assert_eq!(weather_suitability(&weather, &WeatherBands::default()), 1.0);
    }

    #[test]
    fn weather_suitability_penalties_compose() {
        let bands = WeatherBands::default();

        let hot = WeatherProfile::new().with_temperature(38.0);
        assert_relative_eq!(weather_suitability(&hot, &bands), 0.7, epsilon = 1e-9);

        let hot_and_muggy = hot.clone().with_humidity(90.0);
        assert_relative_eq!(weather_suitability(&hot_and_muggy, &bands), 0.56, epsilon = 1e-9);

        let everything = hot_and_muggy.with_rainfall(10.0);
        assert_relative_eq!(weather_suitability(&everything, &bands), 0.392, epsilon = 1e-9);
    }

    #[test]
    fn weather_suitability_missing_readings_are_neutral() {
        assert_eq!(
            weather_suitability(&WeatherProfile::new(), &WeatherBands::default()),
            1.0
        );
    }

    #[test]
    fn yield_variation_ideal_conditions() {
        let weather = WeatherProfile::new()
            .with_temperature(25.0)
            .with_rainfall(100.0)
            .with_humidity(60.0);
        assert_relative_eq!(yield_variation(&weather), 1.3, epsilon = 1e-9);
    }

    #[test]
    fn yield_variation_harsh_conditions() {
        let weather = WeatherProfile::new()
            .with_temperature(40.0)
            .with_rainfall(20.0)
            .with_humidity(90.0);
        assert_relative_eq!(yield_variation(&weather), 0.45, epsilon = 1e-9);
    }

    #[test]
    fn yield_variation_neutral_bands() {
        // 30 C, 180 mm and 75 % sit between the ideal and penalty bands
        let weather = WeatherProfile::new()
            .with_temperature(30.0)
            .with_rainfall(180.0)
            .with_humidity(75.0);
        assert_eq!(yield_variation(&weather), 1.0);
        assert_eq!(yield_variation(&WeatherProfile::new()), 1.0);
    }

    #[test]
    fn weather_confidence_deductions() {
        let mild = WeatherProfile::new()
            .with_temperature(25.0)
            .with_rainfall(120.0)
            .with_humidity(60.0);
        assert_eq!(weather_confidence(&mild), 80);
        assert_eq!(weather_confidence(&WeatherProfile::new()), 80);

        assert_eq!(weather_confidence(&mild.clone().with_temperature(38.0)), 70);
        assert_eq!(weather_confidence(&mild.clone().with_rainfall(250.0)), 65);
        assert_eq!(weather_confidence(&mild.clone().with_humidity(20.0)), 75);

        let harsh = WeatherProfile::new()
            .with_temperature(5.0)
            .with_rainfall(10.0)
            .with_humidity(95.0);
        assert_eq!(weather_confidence(&harsh), 50);
    }

    #[test]
    fn weather_confidence_band_edges_are_inside() {
        let edges = WeatherProfile::new()
            .with_temperature(35.0)
            .with_rainfall(50.0)
            .with_humidity(80.0);
        assert_eq!(weather_confidence(&edges), 80);
    }

    #[test]
    fn weather_risks_for_harsh_weather() {
        let weather = WeatherProfile::new()
            .with_temperature(38.0)
            .with_rainfall(20.0)
            .with_humidity(90.0);
        let risks = weather_risks(&weather);

        let described: Vec<_> = risks
            .iter()
            .map(|r| (r.description.as_str(), r.risk_level))
            .collect();
        assert_eq!(
            described,
            vec![
                ("High Temperature Risk", RiskLevel::High),
                ("Low Rainfall Risk", RiskLevel::High),
                ("High Humidity Risk", RiskLevel::High),
            ]
        );
        assert_eq!(risks[1].recommendation, "Implement irrigation system");
    }

    #[test]
    fn weather_risks_medium_grades() {
        let weather = WeatherProfile::new()
            .with_temperature(10.0)
            .with_rainfall(250.0)
            .with_humidity(20.0);
        let risks = weather_risks(&weather);

        assert_eq!(risks.len(), 2);
        assert_eq!(risks[0].description, "Low Temperature Risk");
        assert_eq!(risks[0].risk_level, RiskLevel::Medium);
        assert_eq!(risks[1].impact, "Potential waterlogging");
    }

    #[test]
    fn weather_risks_none_for_mild_or_missing_weather() {
        let mild = WeatherProfile::new()
            .with_temperature(25.0)
            .with_rainfall(120.0)
            .with_humidity(60.0);
        assert!(weather_risks(&mild).is_empty());
        assert!(weather_risks(&WeatherProfile::new()).is_empty());
        assert!(weather_risks(&WeatherProfile::new().with_temperature(f64::NAN)).is_empty());
    }
}
