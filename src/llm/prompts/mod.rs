// ABOUTME: Prompt templates for the meal pipeline loaded at compile time
// ABOUTME: Food-list extraction prompt and meal analysis prompt with placeholder rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Prompts are kept in markdown files next to this module and embedded with
//! `include_str!`. Placeholders use the `{{NAME}}` form and are filled by
//! plain string replacement.

use crate::models::{MealTotals, NutrientKey};

/// Instruction for turning meal text into a JSON array of `{food, amount}`
pub const FOOD_PARSING_PROMPT: &str = include_str!("food_parsing.md");

/// Instruction for scoring a meal from its nutrient totals
pub const MEAL_ANALYSIS_PROMPT: &str = include_str!("meal_analysis.md");

/// Fill the food parsing prompt with the user's meal description
#[must_use]
pub fn render_food_parsing_prompt(user_input: &str) -> String {
    FOOD_PARSING_PROMPT.replace("{{USER_INPUT}}", user_input)
}

/// Fill the meal analysis prompt with the meal totals
///
/// Keys missing from `totals` render as 0.
#[must_use]
pub fn render_meal_analysis_prompt(totals: &MealTotals) -> String {
    NutrientKey::ALL
        .iter()
        .fold(MEAL_ANALYSIS_PROMPT.to_owned(), |prompt, key| {
            let placeholder = format!("{{{{{}}}}}", key.as_str().to_uppercase());
            prompt.replace(&placeholder, &format_amount(totals.get(*key)))
        })
}

/// Render a nutrient amount with at most two decimals and no trailing zeros
#[must_use]
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}
