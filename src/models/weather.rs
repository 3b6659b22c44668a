//! Canonical per-day weather record

use serde::{Deserialize, Serialize};

/// Description used when the provider has no condition text
pub const DEFAULT_DESCRIPTION: &str = "Clear";

/// Provider-agnostic weather summary for one forecast day.
///
/// Temperatures follow the request's unit system. Wind speed is always mph
/// and precipitation always inches, whatever unit system was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Minimum temperature
    pub tempmin: Option<f64>,
    /// Maximum temperature
    pub tempmax: Option<f64>,
    /// Average relative humidity in percent
    pub humidity: Option<f64>,
    /// Maximum wind speed in mph
    pub windspeed: Option<f64>,
    /// Total precipitation in inches
    pub precip: f64,
    /// Short human-readable condition
    pub description: String,
}

impl WeatherDay {
    /// Maximum temperature, 70 when unknown
    #[must_use]
    pub fn tempmax_or_neutral(&self) -> f64 {
        self.tempmax.unwrap_or(70.0)
    }

    /// Wind speed, 0 when unknown
    #[must_use]
    pub fn windspeed_or_calm(&self) -> f64 {
        self.windspeed.unwrap_or(0.0)
    }

    /// Whether the condition text reads as sunny or clear
    #[must_use]
    pub fn is_sunny(&self) -> bool {
        let description = self.description.to_lowercase();
        description.contains("sunny") || description.contains("clear")
    }
}

/// Unit system requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Fahrenheit temperatures
    #[default]
    Us,
    /// Celsius temperatures
    Metric,
}

impl UnitSystem {
    /// The `unit_group` value that selects the US system
    pub const US_GROUP: &'static str = "us";

    /// Map a raw `unit_group` value. Anything other than `"us"` is metric.
    #[must_use]
    pub fn from_group(unit_group: &str) -> Self {
        if unit_group == Self::US_GROUP {
            Self::Us
        } else {
            Self::Metric
        }
    }
}
