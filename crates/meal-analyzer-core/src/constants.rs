// ABOUTME: Constants for the meal analyzer organized by domain
// ABOUTME: Environment variable names, upstream service defaults and console messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Environment variable names read at startup
pub mod env_vars {
    /// API key for the text-generation service
    pub const DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
    /// Override for the text-generation base URL
    pub const LLM_BASE_URL: &str = "LLM_BASE_URL";
    /// Override for the text-generation model
    pub const LLM_MODEL: &str = "LLM_MODEL";
    /// Override for the sampling temperature
    pub const LLM_TEMPERATURE: &str = "LLM_TEMPERATURE";
    /// Override for the completion token cap
    pub const LLM_MAX_TOKENS: &str = "LLM_MAX_TOKENS";
    /// API key for USDA `FoodData` Central
    pub const USDA_API_KEY: &str = "USDA_API_KEY";
    /// Override for the USDA base URL
    pub const USDA_BASE_URL: &str = "USDA_BASE_URL";
    /// Override for the USDA request timeout in seconds
    pub const USDA_TIMEOUT_SECS: &str = "USDA_TIMEOUT_SECS";
}

/// Text-generation service defaults
pub mod llm {
    /// `DeepSeek` OpenAI-compatible endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
    /// Default chat model
    pub const DEFAULT_MODEL: &str = "deepseek-chat";
    /// Near-deterministic sampling for structured output
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;
    /// Completion token cap
    pub const DEFAULT_MAX_TOKENS: u32 = 1024;
    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;
    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 120;
    /// Service label used in error messages
    pub const SERVICE_NAME: &str = "DeepSeek";
}

/// USDA `FoodData` Central defaults
pub mod usda {
    /// API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
    /// Candidates requested per search
    pub const DEFAULT_PAGE_SIZE: u32 = 3;
    /// Data-quality categories searched
    pub const DEFAULT_DATA_TYPES: &[&str] = &["Foundation", "SR Legacy"];
    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
    /// Service label used in error messages
    pub const SERVICE_NAME: &str = "USDA API";
}

/// User-facing console messages
pub mod messages {
    /// Interactive prompt shown before reading stdin
    pub const INPUT_PROMPT: &str =
        "[AGENT] Please enter what you ate in this meal (e.g., 'I ate 2 eggs and a bowl of rice'):";
    /// Printed when stdin yields nothing
    pub const NO_INPUT: &str = "No input received. Exiting.";
    /// Header printed before the result
    pub const RESULT_HEADER: &str = "[AGENT] Nutrition analysis and score:";
    /// Pipeline found no foods in the text
    pub const NO_FOODS_IDENTIFIED: &str = "❌ Could not identify any foods in your input. Please try again with more specific descriptions.";
    /// Pipeline resolved none of the foods
    pub const NO_NUTRITION_DATA: &str =
        "⚠️ No nutritional data found for the foods mentioned. Try different food names.";
    /// Narrative generation failed
    pub const ANALYSIS_UNAVAILABLE: &str = "Unable to generate nutrition analysis at this time.";
}

/// Service names for structured logging
pub mod service_names {
    /// Binary and tracing target name
    pub const MEAL_ANALYZER: &str = "meal-analyzer";
}
