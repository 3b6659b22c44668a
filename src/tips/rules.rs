//! Deterministic tips derived from temperature, rain and wind thresholds

use crate::models::WeatherDay;
use crate::tips::MAX_TIPS;

/// Precipitation (inches) above which watering is pointless
pub const RAIN_THRESHOLD_IN: f64 = 0.1;
/// Maximum temperature above which a day counts as hot
pub const HOT_THRESHOLD: f64 = 85.0;
/// Maximum temperature below which a day counts as cool
pub const COOL_THRESHOLD: f64 = 60.0;
/// Wind speed (mph) above which a day counts as windy
pub const WINDY_THRESHOLD_MPH: f64 = 15.0;

pub const RAIN_TIP: &str = "Rain expected — skip sprinklers, save water and pump energy.";
pub const DRY_TIP: &str = "Dry conditions — water in evening for efficiency.";
pub const HOT_TIP: &str = "Hot day — set thermostat 3°F higher; use fans to cut A/C use.";
pub const COOL_TIP: &str = "Cool weather — lower heat by 2°F and wear layers to save energy.";
pub const MILD_TIP: &str = "Mild temps — open windows instead of running HVAC systems.";
pub const WINDY_TIP: &str = "High winds — expect good turbine output; delay noisy generator use.";
pub const CALM_TIP: &str = "Calm conditions — run appliances during off-peak hours for savings.";

/// One irrigation, one climate-control and one wind/appliance tip, in that order.
#[must_use]
pub fn derive_tips(day: &WeatherDay) -> Vec<String> {
    let tempmax = day.tempmax_or_neutral();

    let irrigation = if day.precip > RAIN_THRESHOLD_IN {
        RAIN_TIP
    } else {
        DRY_TIP
    };

    let climate = if tempmax > HOT_THRESHOLD {
        HOT_TIP
    } else if tempmax < COOL_THRESHOLD {
        COOL_TIP
    } else {
        MILD_TIP
    };

    let appliances = if day.windspeed_or_calm() > WINDY_THRESHOLD_MPH {
        WINDY_TIP
    } else {
        CALM_TIP
    };

    [irrigation, climate, appliances]
        .into_iter()
        .take(MAX_TIPS)
        .map(str::to_string)
        .collect()
}
