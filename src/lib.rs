// ABOUTME: Main library entry point for the meal nutrition analyzer
// ABOUTME: Turns a free-text meal description into nutrient totals and a scored narrative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Analyzer
//!
//! A command-line nutrition analyzer. One meal description flows through a
//! short pipeline:
//!
//! - **Food parsing**: a text-generation service lists foods and amounts
//! - **Lookup**: each food is searched in USDA `FoodData` Central
//! - **Extraction**: eight tracked nutrients are read from the best match
//! - **Aggregation**: per-food nutrients are summed into meal totals
//! - **Analysis**: a second generation call writes a scored narrative
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use meal_analyzer::agent::NutritionAgent;
//! use meal_analyzer::config::AgentConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AgentConfig::from_env()?;
//!     let agent = NutritionAgent::from_config(&config)?;
//!
//!     let outcome = agent.analyze("two eggs and a black coffee").await;
//!     println!("{}", outcome.message());
//!
//!     Ok(())
//! }
//! ```

/// Pipeline orchestration
pub mod agent;

/// Environment configuration
pub mod config;

/// External API clients
pub mod external;

/// Food parsing, nutrient extraction, aggregation and meal analysis
pub mod intelligence;

/// Text-generation provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Meal data model
pub mod models;

pub use meal_analyzer_core::{constants, errors};
