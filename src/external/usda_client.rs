// ABOUTME: USDA FoodData Central search client used to resolve parsed foods
// ABOUTME: Single-attempt search, best-match selection by relevance score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! USDA `FoodData` Central API Client
//!
//! One search request per food name, filtered to the Foundation and SR Legacy
//! data types with every query word required. Search results already carry
//! their nutrient list, so no per-food detail request is needed.
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>
//!
//! # Example
//! ```rust,no_run
//! use meal_analyzer::external::{FoodLookup, UsdaClient, UsdaClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = UsdaClient::new(UsdaClientConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..UsdaClientConfig::default()
//! })?;
//! let best = client.lookup("egg, whole, raw").await;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::FoodLookup;
use crate::constants::usda;
use crate::errors::{AppError, AppResult, ErrorCode};

/// USDA API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Candidates requested per search (default: 3)
    pub page_size: u32,
    /// Data types searched (default: Foundation, SR Legacy)
    pub data_types: Vec<String>,
    /// Require every query word to match (default: true)
    pub require_all_words: bool,
    /// Request timeout in seconds (default: 15)
    pub timeout_secs: u64,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: usda::DEFAULT_BASE_URL.to_owned(),
            page_size: usda::DEFAULT_PAGE_SIZE,
            data_types: usda::DEFAULT_DATA_TYPES
                .iter()
                .map(|data_type| (*data_type).to_owned())
                .collect(),
            require_all_words: true,
            timeout_secs: usda::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// A candidate returned by the food search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFood {
    /// `FoodData` Central ID
    #[serde(default)]
    pub fdc_id: Option<u64>,
    /// Food description
    #[serde(default)]
    pub description: Option<String>,
    /// Data type (e.g., "Foundation", "SR Legacy")
    #[serde(default)]
    pub data_type: Option<String>,
    /// Search relevance score
    #[serde(default)]
    pub score: Option<f64>,
    /// Nutrients per 100 g
    #[serde(default, deserialize_with = "null_as_default")]
    pub food_nutrients: Vec<SearchFoodNutrient>,
}

/// A nutrient entry inside a search result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFoodNutrient {
    /// Nutrient ID
    #[serde(default)]
    pub nutrient_id: Option<u32>,
    /// Nutrient name (e.g., "Protein", "Energy")
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrient_name: String,
    /// Nutrient unit (e.g., "G", "KCAL", "MG")
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_name: String,
    /// Amount per 100 g
    #[serde(default)]
    pub value: Option<f64>,
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// USDA API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Option<Vec<SearchFood>>,
}

/// Pick the candidate with the highest score
///
/// A missing score counts as 0. On ties the earliest candidate wins.
#[must_use]
pub fn select_best_match(foods: Vec<SearchFood>) -> Option<SearchFood> {
    foods.into_iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.score.unwrap_or(0.0) > current.score.unwrap_or(0.0) => {
            Some(candidate)
        }
        Some(current) => Some(current),
        None => Some(candidate),
    })
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: Client,
}

impl UsdaClient {
    /// Create a new USDA API client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: UsdaClientConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Search for foods by query string
    ///
    /// Returns an empty list when the response carries no `foods` array.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty, the request fails or times
    /// out, the status is not 2xx, or the body is not valid JSON
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<SearchFood>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.config.api_key.clone()),
            ("query", query.to_owned()),
            ("pageSize", self.config.page_size.to_string()),
        ];
        params.extend(
            self.config
                .data_types
                .iter()
                .map(|data_type| ("dataType", data_type.clone())),
        );
        params.push(("requireAllWords", self.config.require_all_words.to_string()));

        let url = format!("{}/foods/search", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    AppError::external_unavailable(usda::SERVICE_NAME, e.to_string())
                } else {
                    AppError::external_service(usda::SERVICE_NAME, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let code = match status.as_u16() {
                401 | 403 => ErrorCode::ExternalAuthFailed,
                429 => ErrorCode::ExternalRateLimited,
                _ => ErrorCode::ExternalServiceError,
            };
            return Err(AppError::new(
                code,
                format!(
                    "{}: HTTP {}: {}",
                    usda::SERVICE_NAME,
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service(usda::SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        let foods = search_response.foods.unwrap_or_default();
        debug!("USDA search for '{}' returned {} candidates", query, foods.len());
        Ok(foods)
    }
}

#[async_trait]
impl FoodLookup for UsdaClient {
    #[instrument(skip(self))]
    async fn lookup(&self, food_name: &str) -> Option<SearchFood> {
        match self.search_foods(food_name).await {
            Ok(foods) if foods.is_empty() => {
                info!("No USDA data found for '{}'", food_name);
                None
            }
            Ok(foods) => select_best_match(foods),
            Err(e) => {
                warn!("USDA lookup for '{}' failed: {}", food_name, e);
                None
            }
        }
    }
}
