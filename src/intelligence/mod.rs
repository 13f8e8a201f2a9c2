// ABOUTME: Meal intelligence: food parsing, nutrient extraction, totals and analysis
// ABOUTME: The stages the agent chains together for one meal description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal intelligence stages

/// Free text to food list via the text-generation service
pub mod food_parser;
/// Narrative analysis and score generation
pub mod meal_analysis;
/// Summing per-item nutrients into meal totals
pub mod meal_totals;
/// USDA nutrient entries to the fixed nutrient set
pub mod nutrient_extraction;

pub use food_parser::{extract_fenced_block, parse_food_response, FoodParser};
pub use meal_analysis::{extract_score, MealAnalysisGenerator};
pub use meal_totals::aggregate_meal;
pub use nutrient_extraction::{classify_nutrient, extract_nutrients};
