// ABOUTME: Catalog browsing commands for pierre-program-cli
// ABOUTME: Prints the discovery feed and exercise library search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_program_builder::client::ProgramApi;
use pierre_program_builder::models::ExerciseQuery;
use pierre_program_builder::AppResult;

use crate::helpers::display::{display_exercises, display_feed};

type Result<T> = AppResult<T>;

/// Print the discovery feed sections
pub async fn discover<A: ProgramApi>(api: &A) -> Result<()> {
    let feed = api.discovery_feed().await?;
    display_feed(&feed);
    Ok(())
}

/// Print one page of exercise search results
pub async fn exercises<A: ProgramApi>(api: &A, search: Option<String>) -> Result<()> {
    let query = ExerciseQuery {
        search: search.filter(|text| !text.trim().is_empty()),
        ..ExerciseQuery::default()
    };
    let page = api.search_exercises(&query).await?;
    display_exercises(&page);
    Ok(())
}
