// ABOUTME: Pierre program CLI - inspect, validate, and push program files against the backend
// ABOUTME: Also browses the discovery feed and exercise library for quick manual checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Check a program-detail JSON file against the builder's save rules
//! pierre-program-cli validate program.json
//!
//! # Print the bulk save body the builder would send
//! pierre-program-cli payload program.json
//!
//! # Validate and save through the configured backend
//! PROGRAM_API_TOKEN=... pierre-program-cli push program.json
//!
//! # Browse
//! pierre-program-cli discover
//! pierre-program-cli exercises --search squat
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pierre_program_builder::client::HttpProgramApi;
use pierre_program_builder::logging::LoggingConfig;
use pierre_program_builder::{AppError, AppResult};
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pierre-program-cli",
    about = "Pierre Program Builder CLI",
    long_about = "Validate, inspect, and save workout program files, and browse the public program and exercise catalogs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the validation errors of a program-detail JSON file
    Validate {
        /// Program-detail JSON file
        file: PathBuf,
    },

    /// Print the save payload built from a program-detail JSON file
    Payload {
        /// Program-detail JSON file
        file: PathBuf,
    },

    /// Validate a program-detail JSON file and save it to the backend
    Push {
        /// Program-detail JSON file
        file: PathBuf,
    },

    /// Show the discovery feed
    Discover,

    /// Search the exercise library
    Exercises {
        /// Text matched against name, description, category, and muscle groups
        #[arg(long, short = 's')]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    info!("Pierre Program Builder CLI");

    match cli.command {
        Command::Validate { file } => {
            let valid = commands::program::validate(&file).await?;
            return Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Command::Payload { file } => {
            commands::program::payload(&file).await?;
        }
        Command::Push { file } => {
            let api = HttpProgramApi::from_env()?;
            commands::program::push(&api, &file).await?;
        }
        Command::Discover => {
            let api = HttpProgramApi::from_env()?;
            commands::library::discover(&api).await?;
        }
        Command::Exercises { search } => {
            let api = HttpProgramApi::from_env()?;
            commands::library::exercises(&api, search).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
