// ABOUTME: Core types and constants for the meal nutrition analyzer
// ABOUTME: Foundation crate with error handling and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Analyzer Core
//!
//! Foundation crate providing shared types and constants for the meal
//! analyzer. It changes rarely, so the pipeline crate gets incremental
//! compilation benefits from keeping these apart.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Environment variable names, service defaults and user-facing messages

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
