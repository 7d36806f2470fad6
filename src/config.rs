use crate::error::{CropwiseError, Result};
use crate::models::ReferenceData;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration. Every section is optional in the YAML file; the
/// built-in defaults reproduce the stock reference tables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherBands,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub reference: ReferenceData,
}

/// Acceptable range for one weather reading. Readings outside `[min, max]`
/// scale weather suitability by `penalty`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub penalty: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64, penalty: f64) -> Self {
        Self { min, max, penalty }
    }

    /// Multiplier for a reading; missing or non-finite readings are neutral.
    pub fn factor(&self, reading: Option<f64>) -> f64 {
        match reading.filter(|v| v.is_finite()) {
            Some(v) if v < self.min || v > self.max => self.penalty,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeatherBands {
    /// Weather suitability before any penalty
    pub baseline: f64,
    /// Celsius
    pub temperature: Band,
    /// Percent relative humidity
    pub humidity: Band,
    /// Millimetres
    pub rainfall: Band,
    /// Scale applied to soil x weather when computing confidence
    pub confidence_scale: f64,
}

impl Default for WeatherBands {
    fn default() -> Self {
        Self {
            baseline: 1.0,
            temperature: Band::new(15.0, 35.0, 0.7),
            humidity: Band::new(40.0, 80.0, 0.8),
            rainfall: Band::new(30.0, 300.0, 0.7),
            confidence_scale: 0.85,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Peak deviation of the seasonal sine term, as a fraction of base price
    pub seasonal_amplitude: f64,
    /// Half-width of the uniform noise term, as a fraction of base price
    pub noise_amplitude: f64,
    pub default_months: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            seasonal_amplitude: 0.15,
            noise_amplitude: 0.1,
            default_months: 12,
        }
    }
}

impl Config {
    /// Loads the config file if one exists, otherwise the built-in defaults.
    /// An explicit override path must exist.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(CropwiseError::Config(format!(
                    "Config file not found at {:?}",
                    p
                )));
            }
            Some(p) => Some(p.to_path_buf()),
            None => Self::find_config_path(),
        };

        let Some(config_path) = config_path else {
            tracing::debug!("No config file found, using built-in reference tables");
            return Ok(Self::default());
        };

        tracing::debug!("Loading config from {}", config_path.display());
        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropwiseError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    /// Parses YAML config text, substituting `${VAR}` references first.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CropwiseError::Config(format!("Failed to parse config: {}", e)))?;

        config.reference = config.reference.normalized();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weather;
        if !(0.0..=1.0).contains(&w.baseline) || !(0.0..=1.0).contains(&w.confidence_scale) {
            return Err(CropwiseError::Config(
                "weather baseline and confidence_scale must be within 0-1".into(),
            ));
        }
        for (name, band) in [
            ("temperature", w.temperature),
            ("humidity", w.humidity),
            ("rainfall", w.rainfall),
        ] {
            if !band.min.is_finite()
                || !band.max.is_finite()
                || band.min > band.max
                || !(0.0..=1.0).contains(&band.penalty)
            {
                return Err(CropwiseError::Config(format!(
                    "invalid {} band: bounds must be finite with min <= max, penalty within 0-1",
                    name
                )));
            }
        }

        let p = &self.pricing;
        // Written so NaN fails every comparison
        let amplitudes_ok = p.seasonal_amplitude >= 0.0
            && p.noise_amplitude >= 0.0
            && p.seasonal_amplitude + p.noise_amplitude < 1.0;
        if !amplitudes_ok {
            return Err(CropwiseError::Config(
                "pricing amplitudes must be non-negative and sum to less than 1".into(),
            ));
        }

        self.reference.validate()
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropwise").join("config.yaml"))
            .filter(|p| p.exists())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropwiseError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            match std::env::var(var_name) {
                Ok(value) => result = result.replace(placeholder, &value),
                Err(_) => tracing::warn!("Config references unset variable {}", var_name),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_factor() {
        let band = Band::new(15.0, 35.0, 0.7);
        assert_eq!(band.factor(Some(20.0)), 1.0);
        assert_eq!(band.factor(Some(15.0)), 1.0);
        assert_eq!(band.factor(Some(35.0)), 1.0);
        assert_eq!(band.factor(Some(14.9)), 0.7);
        assert_eq!(band.factor(Some(40.0)), 0.7);
        assert_eq!(band.factor(None), 1.0);
        assert_eq!(band.factor(Some(f64::NAN)), 1.0);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = r#"
weather:
  humidity:
    min: 30
    max: 90
    penalty: 0.9
pricing:
  noise_amplitude: 0.0
reference:
  default_base_price: 40000
  base_prices:
    Quinoa: 90000
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.weather.humidity, Band::new(30.0, 90.0, 0.9));
        assert_eq!(config.weather.temperature, WeatherBands::default().temperature);
        assert_eq!(config.pricing.noise_amplitude, 0.0);
        assert_eq!(config.pricing.default_months, 12);
        assert_eq!(config.reference.base_price("quinoa"), 90000.0);
        // base_prices was replaced wholesale
        assert_eq!(config.reference.base_price("rice"), 40000.0);
        assert!(config.reference.soil("clay").is_some());
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("CROPWISE_TEST_DEFAULT_PRICE", "12345");
        let config =
            Config::from_yaml("reference:\n  default_base_price: ${CROPWISE_TEST_DEFAULT_PRICE}\n")
                .unwrap();
        assert_eq!(config.reference.default_base_price, 12345.0);
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let err = Config::from_yaml("weather: [1, 2").unwrap_err();
        assert!(matches!(err, CropwiseError::Config(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_yaml("pricing:\n  seasonal_amplitude: 0.6\n  noise_amplitude: 0.5\n").is_err());
        assert!(Config::from_yaml("weather:\n  baseline: 1.5\n").is_err());
        assert!(Config::from_yaml(
            "weather:\n  rainfall:\n    min: 300\n    max: 30\n    penalty: 0.7\n"
        )
        .is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for yaml in [
            "pricing:\n  seasonal_amplitude: .nan\n",
            "pricing:\n  noise_amplitude: .nan\n",
            "weather:\n  temperature: { min: .nan, max: 35, penalty: 0.7 }\n",
            "weather:\n  humidity: { min: 40, max: .inf, penalty: 0.8 }\n",
            "weather:\n  rainfall: { min: 30, max: 300, penalty: .nan }\n",
            "weather:\n  confidence_scale: .nan\n",
            "reference:\n  default_base_price: .nan\n",
            "reference:\n  base_prices: { rice: .inf }\n",
        ] {
            let err = Config::from_yaml(yaml).unwrap_err();
            assert!(matches!(err, CropwiseError::Config(_)), "{}", yaml);
        }
    }

    #[test]
    fn missing_override_path_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/cropwise.yaml"))).unwrap_err();
        assert!(matches!(err, CropwiseError::Config(_)));
    }
}
