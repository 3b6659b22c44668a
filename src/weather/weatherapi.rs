//! WeatherAPI.com forecast client
//!
//! Fetches daily forecasts and maps them into [`WeatherDay`] records.

use std::time::Duration;

use chrono::{Days, Local};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::WeatherConfig;
use crate::models::weather::DEFAULT_DESCRIPTION;
use crate::models::{UnitSystem, WeatherDay};

/// Failure talking to the weather provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Timeout, DNS, refused connection, unreadable or undecodable body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Provider answered successfully but with too few forecast days
    #[error("Malformed forecast: expected {expected} future days, got {actual}")]
    MissingDays { expected: usize, actual: usize },
}

impl ProviderError {
    /// Whether the failure should be absorbed by serving mock data.
    ///
    /// Auth and quota denials (401, 403, 429) are absorbed like transport
    /// failures; every other status is a hard error.
    #[must_use]
    pub fn is_degradable(&self) -> bool {
        match self {
            ProviderError::Network(_) | ProviderError::MissingDays { .. } => true,
            ProviderError::Status { status, .. } => matches!(
                *status,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
            ),
        }
    }
}

/// Forecast response from WeatherAPI.com (only the fields we read)
#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastDay {
    pub date: Option<String>,
    #[serde(default)]
    pub day: DaySummary,
}

#[derive(Debug, Default, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: Option<f64>,
    pub maxtemp_f: Option<f64>,
    pub mintemp_c: Option<f64>,
    pub mintemp_f: Option<f64>,
    pub avghumidity: Option<f64>,
    pub maxwind_mph: Option<f64>,
    pub totalprecip_in: Option<f64>,
    #[serde(default)]
    pub condition: Option<Condition>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Condition {
    pub text: Option<String>,
}

impl ForecastResponse {
    /// Skip today and map the next `count` days into canonical records.
    pub fn into_weather_days(
        self,
        units: UnitSystem,
        count: usize,
    ) -> Result<Vec<WeatherDay>, ProviderError> {
        let forecast_days = self.forecast.map(|f| f.forecastday).unwrap_or_default();
        let future = forecast_days.len().saturating_sub(1);
        if future < count {
            return Err(ProviderError::MissingDays {
                expected: count,
                actual: future,
            });
        }

        let today = Local::now().date_naive();
        Ok(forecast_days
            .into_iter()
            .enumerate()
            .skip(1)
            .take(count)
            .map(|(offset, fd)| {
                let date = fd.date.unwrap_or_else(|| {
                    today
                        .checked_add_days(Days::new(offset as u64))
                        .unwrap_or(today)
                        .format("%Y-%m-%d")
                        .to_string()
                });
                fd.day.into_weather_day(date, units)
            })
            .collect())
    }
}

impl DaySummary {
    fn into_weather_day(self, date: String, units: UnitSystem) -> WeatherDay {
        let (tempmin, tempmax) = match units {
            UnitSystem::Us => (self.mintemp_f, self.maxtemp_f),
            UnitSystem::Metric => (self.mintemp_c, self.maxtemp_c),
        };

        WeatherDay {
            date,
            tempmin,
            tempmax,
            humidity: self.avghumidity,
            // Wind and precipitation stay mph / inches in every unit system
            // to match the frontend's fixed labels.
            windspeed: self.maxwind_mph,
            precip: self.totalprecip_in.unwrap_or(0.0),
            description: self
                .condition
                .and_then(|c| c.text)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

/// HTTP client for the WeatherAPI.com forecast endpoint
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherApiClient {
    /// Create a new client with the configured timeout
    pub fn new(api_key: String, config: &WeatherConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("WeatherWise/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                crate::WeatherWiseError::config(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request `days` days of forecast (today included) for `location`.
    #[instrument(skip(self))]
    pub async fn forecast(
        &self,
        location: &str,
        days: usize,
    ) -> Result<ForecastResponse, ProviderError> {
        let url = format!(
            "{}/forecast.json?key={}&q={}&days={}&aqi=no&alerts=no",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(location),
            days
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "WeatherAPI responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
