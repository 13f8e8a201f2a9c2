// ABOUTME: Configuration module for the meal analyzer
// ABOUTME: Loads credentials, endpoints and sampling settings once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is read from the environment once and handed to each
//! component when it is constructed; nothing reads the environment later.

/// Environment-driven agent configuration
pub mod environment;

pub use environment::{AgentConfig, LlmConfig};
