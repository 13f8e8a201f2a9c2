// ABOUTME: Command-line entry point reading one meal description and printing its analysis
// ABOUTME: Wires environment configuration, logging and the nutrition agent together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Analyzer Binary
//!
//! Reads a meal description from the command line or a single line of
//! standard input, runs it through the nutrition agent and prints the result.
//! Logs go to stderr so stdout only carries the analysis.

use anyhow::Result;
use clap::Parser;
use meal_analyzer::{
    agent::NutritionAgent,
    config::AgentConfig,
    constants::messages,
    logging,
};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "meal-analyzer")]
#[command(about = "Estimate a meal's nutrients and get a scored nutrition analysis")]
pub struct Args {
    /// Meal description; read from stdin when omitted
    meal: Option<String>,

    /// Print the full report as JSON instead of the narrative
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let config = AgentConfig::from_env().inspect_err(|e| {
        error!("Failed to load configuration: {:#}", e);
    })?;
    info!("{}", config.summary());

    let user_text = match args.meal {
        Some(meal) => meal.trim().to_owned(),
        None => read_meal_from_stdin().await?,
    };

    if user_text.is_empty() {
        println!("{}", messages::NO_INPUT);
        return Ok(());
    }

    let agent = NutritionAgent::from_config(&config).inspect_err(|e| {
        error!("Failed to initialize services: {}", e);
    })?;

    let outcome = agent.analyze(&user_text).await;

    if args.json {
        match outcome.report() {
            Some(report) => println!("{}", serde_json::to_string_pretty(report)?),
            None => println!("{}", outcome.message()),
        }
    } else {
        println!("\n{}", messages::RESULT_HEADER);
        println!("{}", outcome.message());
    }

    Ok(())
}

/// Prompt for and read one line of input, trimmed
async fn read_meal_from_stdin() -> Result<String> {
    println!("{}", messages::INPUT_PROMPT);

    let mut line = String::new();
    BufReader::new(stdin()).read_line(&mut line).await?;
    Ok(line.trim().to_owned())
}
