//! `WeatherWise` - weather-aware energy and water saving tips
//!
//! This library fetches a 3-day forecast for a location and turns each day
//! into three short saving tips, from an LLM when one is configured and from
//! a deterministic rule engine otherwise.

pub mod advisor;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod tips;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisor::{DayTips, TipsAdvisor, TipsRequest, TipsResponse};
pub use config::WeatherWiseConfig;
pub use error::WeatherWiseError;
pub use models::{Focus, FocusSelector, UnitSystem, WeatherDay};
pub use tips::{RuleBasedTips, TipSource};
pub use weather::ForecastService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherWiseError>;
