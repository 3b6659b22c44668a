//! Forecast normalization
//!
//! Turns a location query into exactly [`FORECAST_DAYS`] canonical
//! [`WeatherDay`] records, starting tomorrow. Without a provider key, or when
//! the provider is unreachable or denies the request, synthetic data is
//! served instead.

use tracing::{info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::{UnitSystem, WeatherDay};
use crate::{Result, WeatherWiseError};

pub mod mock;
pub mod weatherapi;

pub use mock::mock_forecast;
pub use weatherapi::{ProviderError, WeatherApiClient};

/// Number of future days returned per request
pub const FORECAST_DAYS: usize = 3;

/// Fetches and normalizes the 3-day forecast
#[derive(Debug, Clone)]
pub struct ForecastService {
    provider: Option<WeatherApiClient>,
}

impl ForecastService {
    /// Build the service from configuration. No API key means mock mode.
    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        let provider = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => {
                Some(WeatherApiClient::new(key.to_string(), config)?)
            }
            _ => None,
        };
        Ok(Self { provider })
    }

    /// Service that always serves synthetic data
    #[must_use]
    pub fn mock() -> Self {
        Self { provider: None }
    }

    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.provider.is_none()
    }

    /// Forecast for the three days after today at `location`.
    ///
    /// `location` is passed through to the provider as-is (place name or
    /// `"lat,lon"`). Only non-auth, non-quota HTTP failures are returned as
    /// errors; everything else degrades to mock data.
    #[instrument(skip(self))]
    pub async fn fetch(&self, location: &str, units: UnitSystem) -> Result<Vec<WeatherDay>> {
        let Some(provider) = &self.provider else {
            info!("No weather API key configured, serving mock forecast");
            return Ok(mock_forecast());
        };

        let fetched = provider
            .forecast(location, FORECAST_DAYS + 1)
            .await
            .and_then(|response| response.into_weather_days(units, FORECAST_DAYS));

        match fetched {
            Ok(days) => Ok(days),
            Err(err) if err.is_degradable() => {
                warn!(error = %err, "Weather provider unavailable, falling back to mock forecast");
                Ok(mock_forecast())
            }
            Err(ProviderError::Status { status, body }) => {
                Err(WeatherWiseError::upstream_status(status.as_u16(), body))
            }
            Err(err) => Err(WeatherWiseError::general(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(base_url: String) -> WeatherConfig {
        WeatherConfig {
            api_key: Some("test-weather-key".to_string()),
            base_url,
            timeout_seconds: 2,
        }
    }

    fn forecast_payload() -> serde_json::Value {
        let day = |date: &str, max_f: f64, max_c: f64| {
            json!({
                "date": date,
                "day": {
                    "maxtemp_f": max_f, "maxtemp_c": max_c,
                    "mintemp_f": 50.0, "mintemp_c": 10.0,
                    "avghumidity": 60, "maxwind_mph": 9.4,
                    "totalprecip_in": 0.0,
                    "condition": {"text": "Sunny"}
                }
            })
        };
        json!({
            "forecast": {
                "forecastday": [
                    day("2025-07-01", 70.0, 21.0),
                    day("2025-07-02", 88.0, 31.1),
                    day("2025-07-03", 80.0, 26.7),
                    day("2025-07-04", 75.0, 23.9)
                ]
            }
        })
    }

    #[test]
    fn test_missing_key_means_mock_mode() {
        let config = WeatherConfig::default();
        let service = ForecastService::from_config(&config).unwrap();
        assert!(service.is_mock());

        let config = WeatherConfig {
            api_key: Some(String::new()),
            ..WeatherConfig::default()
        };
        assert!(ForecastService::from_config(&config).unwrap().is_mock());
    }

    #[tokio::test]
    async fn test_mock_mode_returns_three_days() {
        let days = ForecastService::mock()
            .fetch("Boston", UnitSystem::Us)
            .await
            .unwrap();
        assert_eq!(days.len(), FORECAST_DAYS);
    }

    #[tokio::test]
    async fn test_provider_success_is_normalized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("q", "40.7,-74"))
            .and(query_param("days", "4"))
            .and(query_param("aqi", "no"))
            .and(query_param("alerts", "no"))
            .and(query_param("key", "test-weather-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let service = ForecastService::from_config(&config_for(server.uri())).unwrap();
        let days = service.fetch("40.7,-74", UnitSystem::Metric).await.unwrap();

        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-07-02", "2025-07-03", "2025-07-04"]);
        assert_eq!(days[0].tempmax, Some(31.1));
        assert_eq!(days[0].windspeed, Some(9.4));
    }

    #[tokio::test]
    async fn test_quota_denial_degrades_to_mock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let service = ForecastService::from_config(&config_for(server.uri())).unwrap();
        let days = service.fetch("Boston", UnitSystem::Us).await.unwrap();
        assert_eq!(days.len(), FORECAST_DAYS);
    }

    #[tokio::test]
    async fn test_auth_denial_degrades_to_mock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let service = ForecastService::from_config(&config_for(server.uri())).unwrap();
        assert!(service.fetch("Boston", UnitSystem::Us).await.is_ok());
    }

    #[tokio::test]
    async fn test_server_error_is_a_hard_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let service = ForecastService::from_config(&config_for(server.uri())).unwrap();
        let err = service.fetch("Boston", UnitSystem::Us).await.unwrap_err();
        assert!(matches!(
            err,
            WeatherWiseError::UpstreamStatus { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_degrades_to_mock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let service = ForecastService::from_config(&config_for(server.uri())).unwrap();
        let days = service.fetch("Boston", UnitSystem::Us).await.unwrap();
        assert_eq!(days.len(), FORECAST_DAYS);
    }

    #[tokio::test]
    async fn test_unreachable_provider_degrades_to_mock() {
        // Nothing listens on the discard port
        let service =
            ForecastService::from_config(&config_for("http://127.0.0.1:9".to_string())).unwrap();
        let days = service.fetch("Boston", UnitSystem::Us).await.unwrap();
        assert_eq!(days.len(), FORECAST_DAYS);
    }
}
