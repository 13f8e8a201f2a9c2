// ABOUTME: Environment configuration for the text-generation and food database services
// ABOUTME: Reads API keys and optional overrides, tolerating missing credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{env_vars, llm, usda};
use crate::external::UsdaClientConfig;
use crate::llm::GenerationSettings;
use anyhow::{Context, Result};
use std::env;
use tracing::{info, warn};

/// Text-generation service settings
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// API key; empty when not configured
    pub api_key: String,
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature for both prompts
    pub temperature: f32,
    /// Completion token cap for both prompts
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: llm::DEFAULT_BASE_URL.to_owned(),
            model: llm::DEFAULT_MODEL.to_owned(),
            temperature: llm::DEFAULT_TEMPERATURE,
            max_tokens: llm::DEFAULT_MAX_TOKENS,
        }
    }
}

impl LlmConfig {
    /// Sampling settings derived from this configuration
    #[must_use]
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Process-wide configuration for one analyzer instance
#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    /// Text-generation service
    pub llm: LlmConfig,
    /// USDA `FoodData` Central
    pub usda: UsdaClientConfig,
}

impl AgentConfig {
    /// Load configuration from environment variables
    ///
    /// Missing API keys are tolerated: they load as empty strings and every
    /// call to the corresponding service then fails.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric override cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let llm = LlmConfig {
            api_key: env_var_or(env_vars::DEEPSEEK_API_KEY, ""),
            base_url: env_var_or(env_vars::LLM_BASE_URL, llm::DEFAULT_BASE_URL),
            model: env_var_or(env_vars::LLM_MODEL, llm::DEFAULT_MODEL),
            temperature: env_var_or(
                env_vars::LLM_TEMPERATURE,
                &llm::DEFAULT_TEMPERATURE.to_string(),
            )
            .parse()
            .context("Invalid LLM_TEMPERATURE value")?,
            max_tokens: env_var_or(env_vars::LLM_MAX_TOKENS, &llm::DEFAULT_MAX_TOKENS.to_string())
                .parse()
                .context("Invalid LLM_MAX_TOKENS value")?,
        };

        let usda = UsdaClientConfig {
            api_key: env_var_or(env_vars::USDA_API_KEY, ""),
            base_url: env_var_or(env_vars::USDA_BASE_URL, usda::DEFAULT_BASE_URL),
            timeout_secs: env_var_or(
                env_vars::USDA_TIMEOUT_SECS,
                &usda::DEFAULT_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid USDA_TIMEOUT_SECS value")?,
            ..UsdaClientConfig::default()
        };

        if llm.api_key.is_empty() {
            warn!("{} is not set; text generation will fail", env_vars::DEEPSEEK_API_KEY);
        }
        if usda.api_key.is_empty() {
            warn!("{} is not set; food lookups will fail", env_vars::USDA_API_KEY);
        }

        Ok(Self { llm, usda })
    }

    /// Human-readable summary with API keys masked
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Meal Analyzer Configuration:\n\
             - LLM Endpoint: {}\n\
             - LLM Model: {}\n\
             - LLM Temperature: {}\n\
             - LLM Max Tokens: {}\n\
             - LLM Key: {}\n\
             - USDA Endpoint: {}\n\
             - USDA Data Types: {}\n\
             - USDA Timeout: {}s\n\
             - USDA Key: {}",
            self.llm.base_url,
            self.llm.model,
            self.llm.temperature,
            self.llm.max_tokens,
            mask_key(&self.llm.api_key),
            self.usda.base_url,
            self.usda.data_types.join(", "),
            self.usda.timeout_secs,
            mask_key(&self.usda.api_key),
        )
    }
}

/// Show the first 8 characters of a key, or "Not found" when unset
#[must_use]
pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        "Not found".to_owned()
    } else {
        format!("{}...", key.chars().take(8).collect::<String>())
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
