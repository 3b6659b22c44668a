//! Focus-specific tips placed ahead of the general ones

use crate::models::{Focus, FocusSelector, WeatherDay};
use crate::tips::MAX_TIPS;
use crate::tips::rules::{HOT_THRESHOLD, RAIN_THRESHOLD_IN};

pub const SPRINKLERS_TIP: &str =
    "Rain expected — skip sprinklers tomorrow to save water and energy.";
pub const THERMOSTAT_TIP: &str =
    "Hot day tomorrow — set thermostat ~3°F higher and use fans to save A/C costs.";
pub const SOLAR_TIP: &str =
    "Sunny tomorrow — prioritize solar-powered usage for appliances/EV charging.";

/// Evaluation order of the focus rules
const FOCUS_ORDER: [Focus; 3] = [Focus::Sprinklers, Focus::Thermostat, Focus::Solar];

fn focus_tip(focus: Focus, day: &WeatherDay) -> Option<&'static str> {
    match focus {
        Focus::Sprinklers if day.precip > RAIN_THRESHOLD_IN => Some(SPRINKLERS_TIP),
        Focus::Thermostat if day.tempmax_or_neutral() > HOT_THRESHOLD => Some(THERMOSTAT_TIP),
        Focus::Solar if day.is_sunny() => Some(SOLAR_TIP),
        _ => None,
    }
}

/// Prepend the tips of every selected focus whose weather condition holds,
/// then keep the first [`MAX_TIPS`]. An empty selector returns `tips` as-is.
#[must_use]
pub fn apply_focus(day: &WeatherDay, selector: &FocusSelector, tips: Vec<String>) -> Vec<String> {
    if selector.is_empty() {
        return tips;
    }

    FOCUS_ORDER
        .into_iter()
        .filter(|focus| selector.contains(*focus))
        .filter_map(|focus| focus_tip(focus, day))
        .map(str::to_string)
        .chain(tips)
        .take(MAX_TIPS)
        .collect()
}
