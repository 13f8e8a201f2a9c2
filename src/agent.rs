// ABOUTME: Meal nutrition agent chaining parsing, lookup, aggregation and analysis
// ABOUTME: Short-circuits with a user-facing outcome when a stage comes back empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Agent
//!
//! Runs one meal description through the pipeline, strictly in order:
//!
//! 1. Parse the text into foods; none found ends the run.
//! 2. Look up each food one at a time; foods without a match are skipped.
//! 3. No resolved foods ends the run.
//! 4. Sum the nutrients and generate the narrative.
//!
//! Every stage recovers its own failures, so [`NutritionAgent::analyze`]
//! always returns an outcome rather than an error.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config::AgentConfig;
use crate::constants::messages;
use crate::errors::AppResult;
use crate::external::{FoodLookup, UsdaClient};
use crate::intelligence::{
    aggregate_meal, extract_nutrients, extract_score, FoodParser, MealAnalysisGenerator,
};
use crate::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::models::{MealItem, MealReport, ParsedFoodItem};

/// Result of analyzing one meal description
#[derive(Debug, Clone, PartialEq)]
pub enum MealOutcome {
    /// The text-generation service found no foods in the text
    NoFoodsIdentified,
    /// None of the parsed foods resolved to a database record
    NoNutritionData,
    /// Full report with the narrative analysis
    Analyzed(MealReport),
}

impl MealOutcome {
    /// Text shown to the user for this outcome
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NoFoodsIdentified => messages::NO_FOODS_IDENTIFIED,
            Self::NoNutritionData => messages::NO_NUTRITION_DATA,
            Self::Analyzed(report) => &report.narrative,
        }
    }

    /// The report, when the pipeline ran to completion
    #[must_use]
    pub const fn report(&self) -> Option<&MealReport> {
        match self {
            Self::Analyzed(report) => Some(report),
            Self::NoFoodsIdentified | Self::NoNutritionData => None,
        }
    }
}

/// Converts meal descriptions into nutrition reports
pub struct NutritionAgent {
    parser: FoodParser,
    lookup: Arc<dyn FoodLookup>,
    analysis: MealAnalysisGenerator,
}

impl NutritionAgent {
    /// Assemble an agent from its collaborators
    #[must_use]
    pub fn new(
        parser: FoodParser,
        lookup: Arc<dyn FoodLookup>,
        analysis: MealAnalysisGenerator,
    ) -> Self {
        Self {
            parser,
            lookup,
            analysis,
        }
    }

    /// Build an agent sharing one provider for both generation calls
    #[must_use]
    pub fn with_services(
        config: &AgentConfig,
        provider: Arc<dyn LlmProvider>,
        lookup: Arc<dyn FoodLookup>,
    ) -> Self {
        let settings = config.llm.generation_settings();
        Self::new(
            FoodParser::new(Arc::clone(&provider), settings.clone()),
            lookup,
            MealAnalysisGenerator::new(provider, settings),
        )
    }

    /// Build an agent talking to the configured HTTP services
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be created
    pub fn from_config(config: &AgentConfig) -> AppResult<Self> {
        let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from_llm_config(
            &config.llm,
        ))?;
        let lookup = UsdaClient::new(config.usda.clone())?;
        Ok(Self::with_services(
            config,
            Arc::new(provider),
            Arc::new(lookup),
        ))
    }

    /// Analyze one meal description
    #[instrument(skip(self, user_text), fields(input_len = user_text.len()))]
    pub async fn analyze(&self, user_text: &str) -> MealOutcome {
        debug!("User input: {}", user_text);

        let parsed_foods = self.parser.parse(user_text).await;
        if parsed_foods.is_empty() {
            return MealOutcome::NoFoodsIdentified;
        }
        debug!("Parsed foods: {}", pretty_json(&parsed_foods));

        let items = self.resolve_items(parsed_foods).await;
        if items.is_empty() {
            return MealOutcome::NoNutritionData;
        }

        let totals = aggregate_meal(&items);
        debug!("Meal totals: {}", pretty_json(&totals));

        let narrative = self.analysis.generate(&totals).await;
        let score = extract_score(&narrative);
        info!(
            resolved = items.len(),
            score = ?score,
            "Meal analysis complete"
        );

        MealOutcome::Analyzed(MealReport {
            items,
            totals,
            narrative,
            score,
        })
    }

    async fn resolve_items(&self, parsed_foods: Vec<ParsedFoodItem>) -> Vec<MealItem> {
        let mut items = Vec::with_capacity(parsed_foods.len());
        for ParsedFoodItem { food, amount } in parsed_foods {
            if food.is_empty() {
                continue;
            }

            let Some(record) = self.lookup.lookup(&food).await else {
                warn!("Skipping {} - no USDA data", food);
                continue;
            };

            let nutrients = extract_nutrients(&record);
            debug!("{} nutrients: {}", food, pretty_json(&nutrients));
            items.push(MealItem {
                food,
                amount,
                nutrients,
            });
        }
        items
    }
}

fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
