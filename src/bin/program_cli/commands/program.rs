// ABOUTME: Program file commands for pierre-program-cli
// ABOUTME: Loads a program-detail JSON file into the builder to validate, print, or push it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_program_builder::builder::ProgramBuilderStore;
use pierre_program_builder::client::{save_program, ProgramApi};
use pierre_program_builder::transform::{
    decode_program_detail, from_program_detail, to_save_payload,
};
use pierre_program_builder::{AppError, AppResult};
use serde_json::Value;
use tracing::info;

use crate::helpers::display::{display_saved_program, display_validation};

type Result<T> = AppResult<T>;

/// Print validation errors; returns whether the program is valid
pub async fn validate(file: &Path) -> Result<bool> {
    let store = open_program(file).await?;
    let errors = store.validation_errors();
    display_validation(&store, &errors);
    Ok(errors.is_empty())
}

/// Print the save payload as pretty JSON
pub async fn payload(file: &Path) -> Result<()> {
    let store = open_program(file).await?;
    let body = serde_json::to_string_pretty(&to_save_payload(store.program()))
        .map_err(|e| AppError::serialization(format!("failed to encode payload: {e}")))?;
    println!("{body}");
    Ok(())
}

/// Validate and save through the backend
pub async fn push<A: ProgramApi>(api: &A, file: &Path) -> Result<()> {
    let store = open_program(file).await?;
    info!(
        file = %file.display(),
        weeks = store.program().weeks.len(),
        "Pushing program"
    );
    let saved = save_program(&store, api).await?;
    display_saved_program(&saved);
    Ok(())
}

async fn open_program(file: &Path) -> Result<ProgramBuilderStore> {
    let text = tokio::fs::read_to_string(file).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read {}: {e}", file.display()))
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| {
        AppError::serialization(format!("{} is not valid JSON: {e}", file.display()))
    })?;
    let detail = decode_program_detail(value)?;
    Ok(ProgramBuilderStore::with_program(from_program_detail(detail)))
}
