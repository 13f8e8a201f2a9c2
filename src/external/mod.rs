// ABOUTME: External API client modules (USDA FoodData Central)
// ABOUTME: Defines the food lookup seam the pipeline resolves foods through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

pub mod usda_client;

use async_trait::async_trait;

pub use usda_client::{
    select_best_match, SearchFood, SearchFoodNutrient, UsdaClient, UsdaClientConfig,
};

/// Resolves a food name to its best-matching composition record
///
/// Implementations swallow their own failures: an unreachable service, a
/// timeout or an empty result all come back as `None`.
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Best match for `food_name`, if any
    async fn lookup(&self, food_name: &str) -> Option<SearchFood>;
}
