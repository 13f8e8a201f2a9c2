// ABOUTME: Drafts the narrative nutrition analysis and score for a meal
// ABOUTME: One text-generation call over the meal totals with a fixed fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Analysis
//!
//! The narrative is returned exactly as generated. [`extract_score`] reads the
//! `Score: X/10` marker for the structured report without touching the text.

use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

use crate::constants::messages;
use crate::llm::prompts::render_meal_analysis_prompt;
use crate::llm::{GenerationSettings, LlmProvider};
use crate::models::MealTotals;

static SCORE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Tolerates markdown emphasis: "**Score: 7/10**", "Score: **7.5** / 10"
    Regex::new(r"(?i)score\s*:?\s*\**\s*(\d{1,2}(?:\.\d+)?)\s*\**\s*/\s*10\b").ok()
});

/// Generates the nutrition narrative from meal totals
pub struct MealAnalysisGenerator {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
}

impl MealAnalysisGenerator {
    /// Create a generator calling `provider` with `settings`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// Generate the narrative analysis and score
    ///
    /// Any provider failure yields the fixed fallback message.
    pub async fn generate(&self, totals: &MealTotals) -> String {
        let request = self.settings.request(render_meal_analysis_prompt(totals));
        match self.provider.complete(&request).await {
            Ok(response) => {
                debug!("Analysis response: {} chars", response.content.len());
                response.content
            }
            Err(e) => {
                warn!("Analysis generation error: {}", e);
                messages::ANALYSIS_UNAVAILABLE.to_owned()
            }
        }
    }
}

/// Read the 0-10 score from a narrative's `Score: X/10` marker
#[must_use]
pub fn extract_score(narrative: &str) -> Option<f64> {
    let pattern = SCORE_PATTERN.as_ref()?;
    let captures = pattern.captures(narrative)?;
    let score: f64 = captures.get(1)?.as_str().parse().ok()?;
    (0.0..=10.0).contains(&score).then_some(score)
}
