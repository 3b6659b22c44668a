//! Request orchestration: validate, fetch the forecast once, generate tips per day

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::WeatherWiseConfig;
use crate::models::{FocusSelector, UnitSystem, WeatherDay};
use crate::tips::{self, TipSource};
use crate::weather::ForecastService;
use crate::{Result, WeatherWiseError};

fn default_unit_group() -> String {
    UnitSystem::US_GROUP.to_string()
}

/// Body of a tips request
#[derive(Debug, Clone, Deserialize)]
pub struct TipsRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default = "default_unit_group")]
    pub unit_group: String,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub focuses: Option<Vec<String>>,
}

impl Default for TipsRequest {
    fn default() -> Self {
        Self {
            location: None,
            lat: None,
            lon: None,
            unit_group: default_unit_group(),
            focus: None,
            focuses: None,
        }
    }
}

impl TipsRequest {
    /// Provider query string and the location echoed back to the caller.
    ///
    /// Coordinates win over a place name when both are present.
    pub fn resolve_location(&self) -> Result<String> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Ok(format!("{lat},{lon}"));
        }

        match self.location.as_deref().map(str::trim) {
            Some(location) if !location.is_empty() => Ok(location.to_string()),
            _ => Err(WeatherWiseError::validation("Location or lat/lon required")),
        }
    }

    #[must_use]
    pub fn focus_selector(&self) -> FocusSelector {
        FocusSelector::from_request(self.focus.as_deref(), self.focuses.as_deref())
    }
}

/// One forecast day with its tips
#[derive(Debug, Clone, Serialize)]
pub struct DayTips {
    pub date: String,
    pub weather: WeatherDay,
    pub suggestions: Vec<String>,
}

/// Full response for a tips request
#[derive(Debug, Clone, Serialize)]
pub struct TipsResponse {
    pub location: String,
    pub unit_group: String,
    pub days: Vec<DayTips>,
}

/// Ties the forecast and the tip source together
#[derive(Clone)]
pub struct TipsAdvisor {
    forecasts: ForecastService,
    tips: Arc<dyn TipSource>,
}

impl TipsAdvisor {
    pub fn new(forecasts: ForecastService, tips: Arc<dyn TipSource>) -> Self {
        Self { forecasts, tips }
    }

    /// Build the providers described by `config`
    pub fn from_config(config: &WeatherWiseConfig) -> Result<Self> {
        let forecasts = ForecastService::from_config(&config.weather)?;
        let tips = tips::tip_source_from_config(&config.llm)?;
        Ok(Self::new(forecasts, tips))
    }

    /// Validate the request, fetch the forecast once and produce tips for each day in turn.
    #[instrument(skip_all, fields(tips = self.tips.name()))]
    pub async fn advise(&self, request: &TipsRequest) -> Result<TipsResponse> {
        let location = request.resolve_location()?;
        let units = UnitSystem::from_group(&request.unit_group);
        let focus = request.focus_selector();

        let forecast = self.forecasts.fetch(&location, units).await?;

        let mut days = Vec::with_capacity(forecast.len());
        for day in forecast {
            let suggestions = self.tips.generate(&day, &focus).await;
            days.push(DayTips {
                date: day.date.clone(),
                weather: day,
                suggestions,
            });
        }

        info!(location = %location, days = days.len(), "Tips generated");
        Ok(TipsResponse {
            location,
            unit_group: request.unit_group.clone(),
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tips::RuleBasedTips;
    use crate::weather::FORECAST_DAYS;

    fn advisor() -> TipsAdvisor {
        TipsAdvisor::new(ForecastService::mock(), Arc::new(RuleBasedTips))
    }

    #[test]
    fn test_request_defaults() {
        let request: TipsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.unit_group, "us");
        assert!(request.location.is_none());
        assert!(request.focus_selector().is_empty());
    }

    #[test]
    fn test_resolve_location() {
        let request = TipsRequest {
            location: Some("  Austin, TX ".to_string()),
            ..TipsRequest::default()
        };
        assert_eq!(request.resolve_location().unwrap(), "Austin, TX");

        let request = TipsRequest {
            location: Some("Austin".to_string()),
            lat: Some(40.7),
            lon: Some(-74.25),
            ..TipsRequest::default()
        };
        assert_eq!(request.resolve_location().unwrap(), "40.7,-74.25");
    }

    #[test]
    fn test_missing_location_is_rejected() {
        let only_lat = TipsRequest {
            lat: Some(40.7),
            ..TipsRequest::default()
        };
        let blank = TipsRequest {
            location: Some("   ".to_string()),
            ..TipsRequest::default()
        };

        for request in [TipsRequest::default(), only_lat, blank] {
            let err = request.resolve_location().unwrap_err();
            assert!(err.is_client_error());
            assert_eq!(err.user_message(), "Location or lat/lon required");
        }
    }

    #[tokio::test]
    async fn test_advise_returns_three_days_of_three_tips() {
        let request = TipsRequest {
            location: Some("Denver".to_string()),
            unit_group: "metric".to_string(),
            focus: Some("solar".to_string()),
            ..TipsRequest::default()
        };

        let response = advisor().advise(&request).await.unwrap();
        assert_eq!(response.location, "Denver");
        assert_eq!(response.unit_group, "metric");
        assert_eq!(response.days.len(), FORECAST_DAYS);
        for day in &response.days {
            assert_eq!(day.suggestions.len(), tips::MAX_TIPS);
            assert_eq!(day.date, day.weather.date);
        }
    }

    #[tokio::test]
    async fn test_advise_rejects_before_fetching() {
        let err = advisor().advise(&TipsRequest::default()).await.unwrap_err();
        assert!(matches!(err, WeatherWiseError::Validation { .. }));
    }
}
