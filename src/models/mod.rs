//! Data models for the WeatherWise relay
//!
//! - Weather: the canonical per-day forecast record and unit system
//! - Focus: user-selected focus areas that bias tip selection

pub mod focus;
pub mod weather;

// Re-export all public types for convenient access
pub use focus::{Focus, FocusSelector};
pub use weather::{UnitSystem, WeatherDay};
