// ABOUTME: Data model for the meal pipeline: parsed foods, nutrient sets and reports
// ABOUTME: Fixed eight-key nutrient mapping shared by extraction, aggregation and analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Models
//!
//! All values here live for a single pipeline run. A [`NutrientSet`] can only
//! ever hold the eight [`NutrientKey`]s, so nutrients the food database
//! reports under other names have nowhere to go and are dropped on extraction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A food item the text-generation service identified in the user's text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFoodItem {
    /// Name standardized toward USDA naming (e.g. "egg, whole, raw")
    #[serde(default)]
    pub food: String,
    /// Free-form quantity (e.g. "2 large (100 g)")
    #[serde(default)]
    pub amount: String,
}

impl ParsedFoodItem {
    /// Create a parsed item
    #[must_use]
    pub fn new(food: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            food: food.into(),
            amount: amount.into(),
        }
    }
}

/// The nutrients tracked for every meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKey {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
    /// Total fat in grams
    Fat,
    /// Carbohydrate (by difference) in grams
    Carbohydrates,
    /// Total dietary fiber in grams
    Fiber,
    /// Total sugars in grams
    Sugars,
    /// Saturated fatty acids in grams
    SaturatedFat,
    /// Sodium in milligrams
    Sodium,
}

impl NutrientKey {
    /// Every tracked key, in report order
    pub const ALL: [Self; 8] = [
        Self::Calories,
        Self::Protein,
        Self::Fat,
        Self::Carbohydrates,
        Self::Fiber,
        Self::Sugars,
        Self::SaturatedFat,
        Self::Sodium,
    ];

    /// Snake-case key name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carbohydrates => "carbohydrates",
            Self::Fiber => "fiber",
            Self::Sugars => "sugars",
            Self::SaturatedFat => "saturated_fat",
            Self::Sodium => "sodium",
        }
    }

}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from the fixed nutrient keys to values; absent keys read as 0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientSet {
    values: BTreeMap<NutrientKey, f64>,
}

impl NutrientSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding every key at zero
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            values: NutrientKey::ALL.iter().map(|key| (*key, 0.0)).collect(),
        }
    }

    /// Value for `key`, 0 when absent
    #[must_use]
    pub fn get(&self, key: NutrientKey) -> f64 {
        self.values.get(&key).copied().unwrap_or(0.0)
    }

    /// Value for `key` if present
    #[must_use]
    pub fn value(&self, key: NutrientKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Set `key`, replacing any previous value
    pub fn insert(&mut self, key: NutrientKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Add `value` to `key`, starting from 0 when absent
    pub fn add(&mut self, key: NutrientKey, value: f64) {
        *self.values.entry(key).or_insert(0.0) += value;
    }

    /// Number of keys carrying a value
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(NutrientKey, f64)> for NutrientSet {
    fn from_iter<I: IntoIterator<Item = (NutrientKey, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

/// Meal-level totals: a nutrient set carrying all eight keys
pub type MealTotals = NutrientSet;

/// A food that resolved to a database record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    /// Food name as parsed
    pub food: String,
    /// Quantity as parsed
    pub amount: String,
    /// Nutrients extracted from the best-matching record
    pub nutrients: NutrientSet,
}

/// Result of a successful pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealReport {
    /// Resolved foods in input order
    pub items: Vec<MealItem>,
    /// Element-wise sum over the items
    pub totals: MealTotals,
    /// Narrative returned by the text-generation service
    pub narrative: String,
    /// `Score: X/10` marker read from the narrative, if present
    pub score: Option<f64>,
}
