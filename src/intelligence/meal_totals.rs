// ABOUTME: Sums per-item nutrient sets into meal-level totals
// ABOUTME: Zero-initialized over the fixed eight nutrient keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{MealItem, MealTotals, NutrientKey};

/// Calculate total nutrition values for the meal
///
/// Every key starts at 0, so the result always carries all eight keys even
/// for an empty meal. Keys an item lacks contribute nothing.
#[must_use]
pub fn aggregate_meal(items: &[MealItem]) -> MealTotals {
    let mut totals = MealTotals::zeroed();
    for item in items {
        for key in NutrientKey::ALL {
            if let Some(value) = item.nutrients.value(key) {
                totals.add(key, value);
            }
        }
    }
    totals
}
