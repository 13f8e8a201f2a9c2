// ABOUTME: Tests for turning text-generation replies into parsed food items
// ABOUTME: Covers fenced replies, malformed JSON, missing fields and provider failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, ScriptedLlmProvider};
use meal_analyzer::config::LlmConfig;
use meal_analyzer::errors::ErrorCode;
use meal_analyzer::intelligence::{parse_food_response, FoodParser};
use meal_analyzer::llm::LlmProvider;
use meal_analyzer::models::ParsedFoodItem;
use std::sync::Arc;

fn parser_with(provider: &Arc<ScriptedLlmProvider>) -> FoodParser {
    let provider: Arc<dyn LlmProvider> = provider.clone();
    FoodParser::new(provider, LlmConfig::default().generation_settings())
}

#[test]
fn test_fenced_reply_parses_items() {
    let reply = "```json\n[{\"food\": \"egg, whole, raw\", \"amount\": \"2 large (100 g)\"}, \
                 {\"food\": \"coffee, brewed\", \"amount\": \"1 cup (240 ml)\"}]\n```";
    let items = parse_food_response(reply).unwrap();

    assert_eq!(
        items,
        vec![
            ParsedFoodItem::new("egg, whole, raw", "2 large (100 g)"),
            ParsedFoodItem::new("coffee, brewed", "1 cup (240 ml)"),
        ]
    );
}

#[test]
fn test_bare_json_reply_parses_items() {
    let items = parse_food_response("[{\"food\": \"rice, white, cooked\", \"amount\": \"1 bowl (150 g)\"}]")
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].food, "rice, white, cooked");
}

#[test]
fn test_empty_array_yields_no_items() {
    assert!(parse_food_response("[]").unwrap().is_empty());
}

#[test]
fn test_truncated_json_is_an_error() {
    let error = parse_food_response("```json\n[{\"food\": \"egg\", \"amou").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_non_array_payload_is_an_error() {
    let error = parse_food_response("{\"food\": \"egg\", \"amount\": \"1\"}").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_missing_or_non_string_fields_become_empty() {
    let items =
        parse_food_response("[{\"food\": \"toast\"}, {\"amount\": 2}, \"banana\"]").unwrap();

    assert_eq!(
        items,
        vec![
            ParsedFoodItem::new("toast", ""),
            ParsedFoodItem::new("", ""),
            ParsedFoodItem::new("", ""),
        ]
    );
}

#[tokio::test]
async fn test_parser_sends_user_text_with_configured_sampling() {
    init_test_logging();
    let provider = Arc::new(ScriptedLlmProvider::with_texts(&["[]"]));
    let parser = parser_with(&provider);

    let items = parser.parse("I ate 2 eggs and a bowl of rice").await;
    assert!(items.is_empty());

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].temperature, Some(0.2));
    assert_eq!(requests[0].max_tokens, Some(1024));
    assert_eq!(requests[0].model.as_deref(), Some("deepseek-chat"));
    assert!(provider
        .prompt(0)
        .contains("I ate 2 eggs and a bowl of rice"));
}

#[tokio::test]
async fn test_parser_recovers_from_provider_failure() {
    init_test_logging();
    let provider = Arc::new(ScriptedLlmProvider::failing());
    let parser = parser_with(&provider);

    assert!(parser.parse("two slices of toast").await.is_empty());
    assert!(parser.try_parse("two slices of toast").await.is_err());
}

#[tokio::test]
async fn test_parser_recovers_from_malformed_reply() {
    init_test_logging();
    let provider = Arc::new(ScriptedLlmProvider::with_texts(&[
        "Sorry, I cannot help with that.",
    ]));
    let parser = parser_with(&provider);

    assert!(parser.parse("a sandwich").await.is_empty());
}

#[tokio::test]
async fn test_truncated_reply_yields_empty_list() {
    init_test_logging();
    let provider = Arc::new(ScriptedLlmProvider::with_texts(&[
        "```json\n[{\"food\": \"egg, whole, raw\", \"amount\": \"2 la",
    ]));
    let parser = parser_with(&provider);

    assert!(parser.parse("2 eggs").await.is_empty());
}
