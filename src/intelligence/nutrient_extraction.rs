// ABOUTME: Maps USDA nutrient entries onto the fixed eight-key nutrient set
// ABOUTME: Case-insensitive substring rules over nutrient name and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient extraction
//!
//! USDA names the same nutrient differently across data types ("Total lipid
//! (fat)" vs "Total fat (NLEA)", "Energy" in both kcal and kJ), so entries are
//! classified by substring rules rather than by nutrient id.

use crate::external::SearchFood;
use crate::models::{NutrientKey, NutrientSet};

/// Classify one nutrient entry
///
/// Rules are checked in order and the first match decides. Returns `None`
/// for nutrients outside the tracked set, including energy reported in kJ.
#[must_use]
pub fn classify_nutrient(name: &str, unit: &str) -> Option<NutrientKey> {
    let name = name.to_lowercase();
    let unit = unit.to_lowercase();

    if name.contains("energy") && unit.contains("kcal") {
        Some(NutrientKey::Calories)
    } else if name.contains("protein") {
        Some(NutrientKey::Protein)
    } else if name.contains("total lipid") || name.contains("total fat") {
        Some(NutrientKey::Fat)
    } else if name.contains("carbohydrate") && name.contains("by difference") {
        Some(NutrientKey::Carbohydrates)
    } else if name.contains("fiber") && name.contains("total dietary") {
        Some(NutrientKey::Fiber)
    } else if name.contains("sugars") && name.contains("total") {
        Some(NutrientKey::Sugars)
    } else if name.contains("fatty acids") && name.contains("saturated") {
        Some(NutrientKey::SaturatedFat)
    } else if name.contains("sodium") {
        Some(NutrientKey::Sodium)
    } else {
        None
    }
}

/// Extract the tracked nutrients from a search record
///
/// When several entries classify to the same key the last one wins. Missing
/// values read as 0.
#[must_use]
pub fn extract_nutrients(record: &SearchFood) -> NutrientSet {
    let mut nutrients = NutrientSet::new();
    for entry in &record.food_nutrients {
        if let Some(key) = classify_nutrient(&entry.nutrient_name, &entry.unit_name) {
            nutrients.insert(key, entry.value.unwrap_or(0.0));
        }
    }
    nutrients
}
