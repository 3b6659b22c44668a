//! Synthetic forecast for running without a weather provider key

use chrono::{Days, Local, NaiveDate};
use rand::RngExt;

use crate::models::WeatherDay;
use crate::weather::FORECAST_DAYS;

const DESCRIPTIONS: [&str; 5] = [
    "Clear skies",
    "Partly cloudy",
    "Light rain",
    "Sunny",
    "Scattered clouds",
];

/// Three plausible days starting tomorrow, using the local clock.
#[must_use]
pub fn mock_forecast() -> Vec<WeatherDay> {
    mock_forecast_from(Local::now().date_naive(), &mut rand::rng())
}

/// Three plausible days starting the day after `today`.
pub fn mock_forecast_from<R: RngExt>(today: NaiveDate, rng: &mut R) -> Vec<WeatherDay> {
    (1..=FORECAST_DAYS as u64)
        .map(|offset| {
            let date = today
                .checked_add_days(Days::new(offset))
                .unwrap_or(today);
            let tempmin = 60.0 + rng.random_range(-5.0..=5.0_f64);
            let tempmax = 75.0 + rng.random_range(-5.0..=10.0_f64);
            let humidity = (35.0 + rng.random_range(0.0..=50.0_f64)).trunc();
            let windspeed = 5.0 + rng.random_range(0.0..=20.0_f64);
            let precip = rng.random_range(0.0..=0.5_f64);
            let description = DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())];

            WeatherDay {
                date: date.format("%Y-%m-%d").to_string(),
                tempmin: Some(round_to(tempmin, 1)),
                tempmax: Some(round_to(tempmax, 1)),
                humidity: Some(humidity),
                windspeed: Some(round_to(windspeed, 1)),
                precip: round_to(precip, 2),
                description: description.to_string(),
            }
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let multiplier = 10_f64.powi(decimals);
    (value * multiplier).round() / multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_start_tomorrow_in_order() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        let days = mock_forecast_from(today, &mut rand::rng());

        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-12-31", "2026-01-01", "2026-01-02"]);
    }

    #[test]
    fn test_values_within_plausible_ranges() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        for _ in 0..50 {
            for day in mock_forecast_from(today, &mut rand::rng()) {
                let tempmin = day.tempmin.unwrap();
                let tempmax = day.tempmax.unwrap();
                let humidity = day.humidity.unwrap();
                let windspeed = day.windspeed.unwrap();

                assert!((55.0..=65.0).contains(&tempmin), "tempmin {tempmin}");
                assert!((70.0..=85.0).contains(&tempmax), "tempmax {tempmax}");
                assert!((35.0..=85.0).contains(&humidity), "humidity {humidity}");
                assert_eq!(humidity.fract(), 0.0);
                assert!((5.0..=25.0).contains(&windspeed), "windspeed {windspeed}");
                assert!((0.0..=0.5).contains(&day.precip), "precip {}", day.precip);
                assert!(DESCRIPTIONS.contains(&day.description.as_str()));
            }
        }
    }

    #[test]
    fn test_default_entry_point_uses_tomorrow() {
        let days = mock_forecast();
        let tomorrow = Local::now().date_naive() + Days::new(1);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, tomorrow.format("%Y-%m-%d").to_string());
    }
}
