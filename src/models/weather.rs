use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Monsoon,
    Winter,
    Summer,
}

impl Season {
    /// Monsoon runs June-September, winter November-February, summer covers
    /// March-May and October. Months outside 1-12 (0 included) have no
    /// season rather than falling into summer.
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            6..=9 => Some(Season::Monsoon),
            11 | 12 | 1 | 2 => Some(Season::Winter),
            3..=5 | 10 => Some(Season::Summer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Monsoon => "Monsoon",
            Season::Winter => "Winter",
            Season::Summer => "Summer",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observed or expected weather for the planting period. Every field is
/// optional; missing readings never penalize a prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherProfile {
    /// Degrees Celsius
    pub temperature: Option<f64>,
    /// Relative humidity, percent
    pub humidity: Option<f64>,
    /// Millimetres
    pub rainfall: Option<f64>,
    pub month: Option<u32>,
    pub location: Option<String>,
}

impl WeatherProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    pub fn with_rainfall(mut self, mm: f64) -> Self {
        self.rainfall = Some(mm);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn season(&self) -> Option<Season> {
        self.month.and_then(Season::from_month)
    }
}
