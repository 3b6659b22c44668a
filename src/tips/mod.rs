//! Tip generation
//!
//! A [`TipSource`] turns one [`WeatherDay`] into exactly [`MAX_TIPS`] tips.
//! Which source serves requests is decided once at startup: the LLM-backed
//! source when a Gemini key is configured, the rule engine otherwise. Both
//! finish with the focus overrides.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::Result;
use crate::config::LlmConfig;
use crate::models::{FocusSelector, WeatherDay};

pub mod focus;
pub mod gemini;
pub mod llm;
pub mod rules;

pub use focus::apply_focus;
pub use gemini::GeminiClient;
pub use llm::{LanguageModel, LlmTips, parse_suggestions};
pub use rules::derive_tips;

/// Number of tips produced per day
pub const MAX_TIPS: usize = 3;

/// Produces the tips for one forecast day
#[async_trait]
pub trait TipSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Tips for `day`, biased by `focus`. Never fails; sources degrade internally.
    async fn generate(&self, day: &WeatherDay, focus: &FocusSelector) -> Vec<String>;
}

/// Rule engine output with focus overrides applied
#[must_use]
pub fn fallback_tips(day: &WeatherDay, focus: &FocusSelector) -> Vec<String> {
    apply_focus(day, focus, derive_tips(day))
}

/// Tip source used when no LLM is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedTips;

#[async_trait]
impl TipSource for RuleBasedTips {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn generate(&self, day: &WeatherDay, focus: &FocusSelector) -> Vec<String> {
        fallback_tips(day, focus)
    }
}

/// Pick the tip source for the process lifetime
pub fn tip_source_from_config(config: &LlmConfig) -> Result<Arc<dyn TipSource>> {
    match config.api_key.as_deref() {
        Some(key) if !key.is_empty() && !config.model.is_empty() => {
            info!(model = %config.model, "Generating tips with Gemini");
            let client = GeminiClient::new(key.to_string(), config)?;
            Ok(Arc::new(LlmTips::new(client)))
        }
        _ => {
            info!("No Gemini API key configured, generating tips from rules");
            Ok(Arc::new(RuleBasedTips))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> WeatherDay {
        WeatherDay {
            date: "2025-06-02".to_string(),
            tempmin: Some(61.0),
            tempmax: Some(78.0),
            humidity: Some(50.0),
            windspeed: Some(7.0),
            precip: 0.0,
            description: "Sunny".to_string(),
        }
    }

    #[tokio::test]
    async fn test_rule_based_source_matches_fallback() {
        let focus = FocusSelector::from_tokens(["solar"]);
        let tips = RuleBasedTips.generate(&day(), &focus).await;
        assert_eq!(tips, fallback_tips(&day(), &focus));
        assert_eq!(tips.len(), MAX_TIPS);
        assert_eq!(tips[0], focus::SOLAR_TIP);
    }

    #[test]
    fn test_source_selection() {
        let config = LlmConfig::default();
        assert_eq!(tip_source_from_config(&config).unwrap().name(), "rules");

        let config = LlmConfig {
            api_key: Some("gemini-key".to_string()),
            ..LlmConfig::default()
        };
        assert_eq!(tip_source_from_config(&config).unwrap().name(), "llm");
    }
}
