//! Synthetic historical price series.
//!
//! The series is a seasonal sine curve around the crop's base price with
//! uniform noise on top. It is a display placeholder, not market data.

use crate::config::PricingConfig;
use crate::models::ReferenceData;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::f64::consts::PI;
use std::sync::Arc;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Chart label for the `index`-th point of a series.
pub fn month_label(index: usize) -> &'static str {
    MONTH_LABELS[index % 12]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    pub month: &'static str,
    pub price: u64,
}

pub struct PriceSynthesizer {
    reference: Arc<ReferenceData>,
    config: PricingConfig,
}

impl PriceSynthesizer {
    pub fn new(reference: Arc<ReferenceData>, config: PricingConfig) -> Self {
        Self { reference, config }
    }

    pub fn default_months(&self) -> usize {
        self.config.default_months
    }

    /// `months` prices for `crop` drawn from the thread-local RNG.
    pub fn analyze(&self, crop: &str, months: usize) -> Vec<u64> {
        self.analyze_with(crop, months, &mut rand::thread_rng())
    }

    /// Reproducible series from a fixed seed.
    pub fn analyze_seeded(&self, crop: &str, months: usize, seed: u64) -> Vec<u64> {
        self.analyze_with(crop, months, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// `price_i = base * (1 + seasonal * sin(2*pi*i/12) + noise)`, rounded.
    pub fn analyze_with<R: Rng + ?Sized>(&self, crop: &str, months: usize, rng: &mut R) -> Vec<u64> {
        let base_price = self.reference.base_price(crop);
        let seasonal = self.config.seasonal_amplitude;
        let noise = self.config.noise_amplitude;

        tracing::debug!(crop, base_price, months, "Synthesizing price history");

        (0..months)
            .map(|i| {
                let wave = seasonal * (2.0 * PI * i as f64 / 12.0).sin();
                let jitter = if noise > 0.0 {
                    rng.gen_range(-noise..=noise)
                } else {
                    0.0
                };
                (base_price * (1.0 + wave + jitter)).round().max(0.0) as u64
            })
            .collect()
    }

    /// Pairs a series with month labels for charting.
    pub fn labelled(prices: &[u64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                month: month_label(i),
                price,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesizer() -> PriceSynthesizer {
        PriceSynthesizer::new(Arc::new(ReferenceData::default()), PricingConfig::default())
    }

    fn mean(prices: &[u64]) -> f64 {
        prices.iter().sum::<u64>() as f64 / prices.len() as f64
    }

    #[test]
    fn rice_series_shape() {
        let prices = synthesizer().analyze("rice", 12);
        assert_eq!(prices.len(), 12);
        assert!(prices.iter().all(|&p| p > 0));
        let avg = mean(&prices);
        assert!((avg - 22000.0).abs() <= 22000.0 * 0.2, "mean {}", avg);
    }

    #[test]
    fn every_point_within_bounds() {
        let prices = synthesizer().analyze_seeded("Cotton", 36, 7);
        for p in prices {
            // 1 +/- (0.15 + 0.1)
            assert!((48750..=81250).contains(&p), "price {}", p);
        }
    }

    #[test]
    fn seeded_series_is_reproducible() {
        let s = synthesizer();
        assert_eq!(s.analyze_seeded("wheat", 12, 42), s.analyze_seeded("wheat", 12, 42));
        assert_ne!(s.analyze_seeded("wheat", 12, 42), s.analyze_seeded("wheat", 12, 43));
    }

    #[test]
    fn injected_rng_is_used() {
        let s = synthesizer();
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(s.analyze_with("maize", 6, &mut a), s.analyze_with("maize", 6, &mut b));
    }

    #[test]
    fn noiseless_series_is_pure_sine() {
        let config = PricingConfig {
            noise_amplitude: 0.0,
            ..PricingConfig::default()
        };
        let s = PriceSynthesizer::new(Arc::new(ReferenceData::default()), config);
        let prices = s.analyze("rice", 12);

        assert_eq!(prices[0], 22000);
        assert_eq!(prices[3], 25300); // sin(pi/2) peak
        assert_eq!(prices[6], 22000);
        assert_eq!(prices[9], 18700); // trough
    }

    #[test]
    fn unknown_crop_uses_default_price() {
        let config = PricingConfig {
            noise_amplitude: 0.0,
            ..PricingConfig::default()
        };
        let s = PriceSynthesizer::new(Arc::new(ReferenceData::default()), config);
        assert_eq!(s.analyze("Dragonfruit", 1), vec![30000]);
    }

    #[test]
    fn zero_months_is_empty() {
        assert!(synthesizer().analyze("rice", 0).is_empty());
    }

    #[test]
    fn labels_wrap_after_december() {
        let points = PriceSynthesizer::labelled(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(points[0].month, "Jan");
        assert_eq!(points[11].month, "Dec");
        assert_eq!(points[12], PricePoint { month: "Jan", price: 13 });
    }
}
