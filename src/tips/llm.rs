//! LLM-backed tips with a strict parse-or-fallback contract

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{FocusSelector, WeatherDay};
use crate::tips::{MAX_TIPS, TipSource, apply_focus, fallback_tips};

/// A text-completion backend
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run one completion and return the raw text output
    async fn complete(&self, system: &str, prompt: &str) -> anyhow::Result<String>;
}

pub const SYSTEM_INSTRUCTION: &str = "You are WeatherWise, a friendly energy-saving assistant. \
Given a single day's weather data, produce three concrete, varied tips that help a typical \
household save energy, water, or money. Use short, crisp sentences. Avoid repeating the same \
structure or phrases across tips.";

/// User prompt carrying the serialized day and the output contract
#[must_use]
pub fn build_prompt(day: &WeatherDay) -> String {
    let weather_json = serde_json::to_string(day).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Weather JSON: {weather_json}\n\n\
         Return strictly this JSON shape (no extra text):\n\
         {{\"suggestions\": [\"tip1\", \"tip2\", \"tip3\"]}}\n\n\
         Constraints:\n\
         - Exactly 3 tips.\n\
         - 6–20 words each.\n\
         - Each states an action and expected benefit.\n\
         - Vary wording and focus (HVAC, lighting, laundry, irrigation, EV, solar, cooking, etc).\n\
         - Use Fahrenheit-friendly phrasing if temps look like US units.\n"
    )
}

/// Extract exactly [`MAX_TIPS`] suggestions from raw model output.
///
/// Returns `None` for anything that is not an object with a `suggestions`
/// array of the right length. Non-string elements are kept as their JSON text.
#[must_use]
pub fn parse_suggestions(text: &str) -> Option<Vec<String>> {
    let value: Value = serde_json::from_str(strip_fences(text)).ok()?;
    let suggestions = value.get("suggestions")?.as_array()?;
    if suggestions.len() != MAX_TIPS {
        return None;
    }

    Some(
        suggestions
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
    )
}

fn strip_fences(text: &str) -> &str {
    let trimmed = text
        .trim()
        .trim_matches(|c: char| c == '`' || c == '\n' || c == ' ');
    // ```json fences leave the language tag behind
    trimmed.strip_prefix("json").unwrap_or(trimmed).trim()
}

/// Tip source that asks a [`LanguageModel`] once per day
pub struct LlmTips<M> {
    model: M,
}

impl<M: LanguageModel> LlmTips<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

#[async_trait]
impl<M: LanguageModel> TipSource for LlmTips<M> {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn generate(&self, day: &WeatherDay, focus: &FocusSelector) -> Vec<String> {
        let prompt = build_prompt(day);

        let text = match self.model.complete(SYSTEM_INSTRUCTION, &prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(date = %day.date, error = %err, "LLM call failed, using rule-based tips");
                return fallback_tips(day, focus);
            }
        };

        match parse_suggestions(&text) {
            Some(tips) => apply_focus(day, focus, tips),
            None => {
                debug!(date = %day.date, output = %text, "Unusable LLM output, using rule-based tips");
                fallback_tips(day, focus)
            }
        }
    }
}
