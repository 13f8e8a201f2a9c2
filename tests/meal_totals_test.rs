// ABOUTME: Tests for summing per-item nutrients into meal totals
// ABOUTME: Covers the empty meal, partial nutrient sets and order independence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, coffee_record, egg_record};
use meal_analyzer::intelligence::{aggregate_meal, extract_nutrients};
use meal_analyzer::models::{MealItem, NutrientKey, NutrientSet};

fn item(food: &str, nutrients: NutrientSet) -> MealItem {
    MealItem {
        food: food.to_owned(),
        amount: "1 serving".to_owned(),
        nutrients,
    }
}

#[test]
fn test_empty_meal_has_all_keys_at_zero() {
    let totals = aggregate_meal(&[]);

    assert_eq!(totals.len(), NutrientKey::ALL.len());
    for key in NutrientKey::ALL {
        assert_eq!(totals.value(key), Some(0.0), "{key} should be zero");
    }
}

#[test]
fn test_egg_and_coffee_totals() {
    let items = vec![
        item("egg, whole, raw", extract_nutrients(&egg_record())),
        item("coffee, brewed", extract_nutrients(&coffee_record())),
    ];
    let totals = aggregate_meal(&items);

    assert_close(totals.get(NutrientKey::Calories), 144.0);
    assert_close(totals.get(NutrientKey::Protein), 12.6 + 0.12);
    assert_close(totals.get(NutrientKey::Fat), 9.51 + 0.02);
    assert_close(totals.get(NutrientKey::Carbohydrates), 0.72);
    assert_close(totals.get(NutrientKey::Sugars), 0.37);
    assert_close(totals.get(NutrientKey::SaturatedFat), 3.13);
    assert_close(totals.get(NutrientKey::Sodium), 144.0);
}

#[test]
fn test_missing_keys_contribute_nothing() {
    let protein_only: NutrientSet = [(NutrientKey::Protein, 20.0)].into_iter().collect();
    let sodium_only: NutrientSet = [(NutrientKey::Sodium, 300.0)].into_iter().collect();
    let totals = aggregate_meal(&[item("a", protein_only), item("b", sodium_only)]);

    assert_close(totals.get(NutrientKey::Protein), 20.0);
    assert_close(totals.get(NutrientKey::Sodium), 300.0);
    assert_eq!(totals.value(NutrientKey::Fiber), Some(0.0));
    assert_eq!(totals.len(), NutrientKey::ALL.len());
}

#[test]
fn test_item_order_does_not_change_totals() {
    let egg = item("egg", extract_nutrients(&egg_record()));
    let coffee = item("coffee", extract_nutrients(&coffee_record()));
    let snack: NutrientSet = [(NutrientKey::Calories, 95.0), (NutrientKey::Fiber, 4.4)]
        .into_iter()
        .collect();
    let apple = item("apple", snack);

    let forward = aggregate_meal(&[egg.clone(), coffee.clone(), apple.clone()]);
    let backward = aggregate_meal(&[apple, coffee, egg]);

    for key in NutrientKey::ALL {
        assert_close(forward.get(key), backward.get(key));
    }
}

#[test]
fn test_totals_serialize_with_snake_case_keys() {
    let totals = aggregate_meal(&[]);
    let json = serde_json::to_value(&totals).unwrap();

    assert_eq!(json["saturated_fat"], 0.0);
    assert_eq!(json["calories"], 0.0);
    assert_eq!(json.as_object().unwrap().len(), 8);
}
