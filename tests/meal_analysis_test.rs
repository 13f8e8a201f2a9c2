// ABOUTME: Tests for the narrative meal analysis and score extraction
// ABOUTME: Covers prompt rendering of totals, verbatim narratives and the fallback text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, ScriptedLlmProvider};
use meal_analyzer::config::LlmConfig;
use meal_analyzer::constants::messages;
use meal_analyzer::intelligence::{extract_score, MealAnalysisGenerator};
use meal_analyzer::llm::prompts::render_meal_analysis_prompt;
use meal_analyzer::llm::LlmProvider;
use meal_analyzer::models::{MealTotals, NutrientKey};
use std::sync::Arc;

const NARRATIVE: &str = "**Score: 6/10**\n**Breakdown:**\n- High protein, little fiber\n\
                         **Verdict:**\n- A solid but incomplete breakfast";

fn generator_with(provider: &Arc<ScriptedLlmProvider>) -> MealAnalysisGenerator {
    let provider: Arc<dyn LlmProvider> = provider.clone();
    MealAnalysisGenerator::new(provider, LlmConfig::default().generation_settings())
}

fn breakfast_totals() -> MealTotals {
    let mut totals = MealTotals::zeroed();
    totals.insert(NutrientKey::Calories, 144.0);
    totals.insert(NutrientKey::Protein, 12.72);
    totals.insert(NutrientKey::Fat, 9.53);
    totals.insert(NutrientKey::SaturatedFat, 3.13);
    totals.insert(NutrientKey::Carbohydrates, 0.72);
    totals.insert(NutrientKey::Sugars, 0.37);
    totals.insert(NutrientKey::Sodium, 144.0);
    totals
}

#[test]
fn test_prompt_embeds_every_total() {
    let prompt = render_meal_analysis_prompt(&breakfast_totals());

    assert!(prompt.contains("- Calories: 144 kcal"));
    assert!(prompt.contains("- Protein: 12.72g"));
    assert!(prompt.contains("- Total Fat: 9.53g (Saturated: 3.13g)"));
    assert!(prompt.contains("- Carbohydrates: 0.72g"));
    assert!(prompt.contains("- Fiber: 0g"));
    assert!(prompt.contains("- Sugars: 0.37g"));
    assert!(prompt.contains("- Sodium: 144mg"));
    assert!(prompt.contains("**Score: X/10**"));
}

#[tokio::test]
async fn test_narrative_is_returned_verbatim() {
    init_test_logging();
    let provider = Arc::new(ScriptedLlmProvider::with_texts(&[NARRATIVE]));
    let generator = generator_with(&provider);

    let narrative = generator.generate(&breakfast_totals()).await;

    assert_eq!(narrative, NARRATIVE);
    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].temperature, Some(0.2));
    assert_eq!(requests[0].max_tokens, Some(1024));
    assert!(provider.prompt(0).contains("- Calories: 144 kcal"));
}

#[tokio::test]
async fn test_provider_failure_falls_back_to_fixed_message() {
    init_test_logging();
    let provider = Arc::new(ScriptedLlmProvider::failing());
    let generator = generator_with(&provider);

    let narrative = generator.generate(&breakfast_totals()).await;
    assert_eq!(narrative, messages::ANALYSIS_UNAVAILABLE);
}

#[test]
fn test_extract_score_variants() {
    assert_eq!(extract_score(NARRATIVE), Some(6.0));
    assert_eq!(extract_score("Nutrition Score: 7.5/10"), Some(7.5));
    assert_eq!(extract_score("score: **8** / 10 overall"), Some(8.0));
    assert_eq!(extract_score("**Score: 10/10**"), Some(10.0));
}

#[test]
fn test_extract_score_rejects_missing_or_out_of_range() {
    assert_eq!(extract_score("No score given."), None);
    assert_eq!(extract_score("Score: X/10"), None);
    assert_eq!(extract_score("Score: 11/10"), None);
    assert_eq!(extract_score(messages::ANALYSIS_UNAVAILABLE), None);
}
