// ABOUTME: Shared test utilities and fakes for meal analyzer integration tests
// ABOUTME: Scripted text-generation provider, in-memory food lookup and USDA record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `meal_analyzer`

use async_trait::async_trait;
use meal_analyzer::config::{AgentConfig, LlmConfig};
use meal_analyzer::errors::AppError;
use meal_analyzer::external::{FoodLookup, SearchFood, SearchFoodNutrient, UsdaClientConfig};
use meal_analyzer::llm::{ChatRequest, ChatResponse, LlmProvider};
use std::collections::{HashMap, VecDeque};
use std::env;
use std::sync::{Mutex, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats agree to within 1e-9
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Scripted LLM provider
// ============================================================================

/// One scripted reply
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Successful completion with this content
    Text(String),
    /// Provider failure
    Fail,
}

/// Provider that replays canned replies in order and records every request
#[derive(Default)]
pub struct ScriptedLlmProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedLlmProvider {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider answering each call with the given texts, in order
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|text| ScriptedReply::Text((*text).to_owned()))
                .collect(),
        )
    }

    /// Provider whose every call fails
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Prompt text of the `index`-th request
    pub fn prompt(&self, index: usize) -> String {
        self.requests()[index].messages[0].content.clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlmProvider {
    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(ScriptedReply::Text(content)) => Ok(ChatResponse {
                content,
                model: "scripted-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Some(ScriptedReply::Fail) | None => Err(AppError::external_unavailable(
                "Scripted",
                "no reply scripted",
            )),
        }
    }
}

// ============================================================================
// In-memory food lookup
// ============================================================================

/// Lookup backed by a fixed map from food name to record
#[derive(Default)]
pub struct FakeFoodLookup {
    records: HashMap<String, SearchFood>,
    queries: Mutex<Vec<String>>,
}

impl FakeFoodLookup {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_record(mut self, food_name: &str, record: SearchFood) -> Self {
        self.records.insert(food_name.to_owned(), record);
        self
    }

    /// Food names looked up so far, in call order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FoodLookup for FakeFoodLookup {
    async fn lookup(&self, food_name: &str) -> Option<SearchFood> {
        self.queries.lock().unwrap().push(food_name.to_owned());
        self.records.get(food_name).cloned()
    }
}

// ============================================================================
// USDA record builders
// ============================================================================

pub fn nutrient(name: &str, unit: &str, value: f64) -> SearchFoodNutrient {
    SearchFoodNutrient {
        nutrient_id: None,
        nutrient_name: name.to_owned(),
        unit_name: unit.to_owned(),
        value: Some(value),
    }
}

pub fn food_record(description: &str, score: f64, nutrients: Vec<SearchFoodNutrient>) -> SearchFood {
    SearchFood {
        fdc_id: None,
        description: Some(description.to_owned()),
        data_type: Some("SR Legacy".to_owned()),
        score: Some(score),
        food_nutrients: nutrients,
    }
}

/// Whole raw egg, per 100 g
pub fn egg_record() -> SearchFood {
    food_record(
        "Egg, whole, raw, fresh",
        812.4,
        vec![
            nutrient("Protein", "G", 12.6),
            nutrient("Total lipid (fat)", "G", 9.51),
            nutrient("Carbohydrate, by difference", "G", 0.72),
            nutrient("Energy", "KCAL", 143.0),
            nutrient("Energy", "kJ", 599.0),
            nutrient("Sugars, total including NLEA", "G", 0.37),
            nutrient("Fiber, total dietary", "G", 0.0),
            nutrient("Sodium, Na", "MG", 142.0),
            nutrient("Fatty acids, total saturated", "G", 3.13),
            nutrient("Cholesterol", "MG", 372.0),
        ],
    )
}

/// Brewed coffee, per 100 g
pub fn coffee_record() -> SearchFood {
    food_record(
        "Beverages, coffee, brewed, prepared with tap water",
        640.0,
        vec![
            nutrient("Energy", "KCAL", 1.0),
            nutrient("Protein", "G", 0.12),
            nutrient("Total lipid (fat)", "G", 0.02),
            nutrient("Carbohydrate, by difference", "G", 0.0),
            nutrient("Sodium, Na", "MG", 2.0),
        ],
    )
}

/// Configuration pointing at the given service URLs
pub fn test_config(llm_base_url: &str, usda_base_url: &str) -> AgentConfig {
    AgentConfig {
        llm: LlmConfig {
            api_key: "sk-test-key".to_owned(),
            base_url: llm_base_url.to_owned(),
            ..LlmConfig::default()
        },
        usda: UsdaClientConfig {
            api_key: "usda-test-key".to_owned(),
            base_url: usda_base_url.to_owned(),
            ..UsdaClientConfig::default()
        },
    }
}
