// ABOUTME: Turns a free-text meal description into a list of foods and amounts
// ABOUTME: Prompts the text-generation service and defensively parses its JSON reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Parser
//!
//! The text-generation service is asked for a bare JSON array, but replies
//! often wrap it in a markdown fence or come back truncated. The reply is
//! treated as untrusted: [`parse_food_response`] reports what went wrong, and
//! [`FoodParser::parse`] turns any failure into an empty list, which the
//! caller reads as "no foods found".

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};
use crate::llm::prompts::render_food_parsing_prompt;
use crate::llm::{GenerationSettings, LlmProvider};
use crate::models::ParsedFoodItem;

const FENCE: &str = "```";

/// Extracts foods and portion estimates from meal descriptions
pub struct FoodParser {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
}

impl FoodParser {
    /// Create a parser calling `provider` with `settings`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// Parse food items from user text
    ///
    /// Provider errors and malformed replies yield an empty list.
    pub async fn parse(&self, user_text: &str) -> Vec<ParsedFoodItem> {
        match self.try_parse(user_text).await {
            Ok(items) => {
                info!("Identified {} food items", items.len());
                items
            }
            Err(e) => {
                warn!("Food parsing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Parse food items from user text, reporting failures
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails or the reply does not hold
    /// a JSON array
    pub async fn try_parse(&self, user_text: &str) -> AppResult<Vec<ParsedFoodItem>> {
        let request = self.settings.request(render_food_parsing_prompt(user_text));
        let response = self.provider.complete(&request).await?;
        debug!("Parsing response: {}", response.content);
        parse_food_response(&response.content)
    }
}

/// Parse a text-generation reply into food items
///
/// The first fenced code block is used when present, otherwise the whole
/// reply. Elements that are not objects, or lack string `food`/`amount`
/// fields, become items with empty strings.
///
/// # Errors
///
/// Returns an error if the payload is not valid JSON or is not an array
pub fn parse_food_response(content: &str) -> AppResult<Vec<ParsedFoodItem>> {
    let payload = extract_fenced_block(content).unwrap_or(content).trim();
    let value: Value = serde_json::from_str(payload)?;

    let Value::Array(entries) = value else {
        return Err(AppError::invalid_format(
            "Expected a JSON array of food items",
        ));
    };

    Ok(entries.iter().map(parsed_item_from_value).collect())
}

/// Body of the first markdown code fence, without its language tag
///
/// An unterminated fence runs to the end of the text.
#[must_use]
pub fn extract_fenced_block(content: &str) -> Option<&str> {
    let start = content.find(FENCE)?;
    let after_fence = &content[start + FENCE.len()..];
    let body = strip_language_tag(after_fence);
    let block = body.find(FENCE).map_or(body, |end| &body[..end]);
    Some(block.trim())
}

fn strip_language_tag(body: &str) -> &str {
    let tag_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')))
        .unwrap_or(body.len());
    if tag_len == 0 {
        return body;
    }
    match body[tag_len..].chars().next() {
        None => "",
        Some(c) if c.is_whitespace() || c == '[' || c == '{' => &body[tag_len..],
        Some(_) => body,
    }
}

fn parsed_item_from_value(entry: &Value) -> ParsedFoodItem {
    let field = |name: &str| {
        entry
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };
    ParsedFoodItem {
        food: field("food"),
        amount: field("amount"),
    }
}
