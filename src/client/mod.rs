// ABOUTME: Backend program API collaborator interface and the save/load flows built on it
// ABOUTME: Defines the ProgramApi trait so the save flow is testable against in-memory fakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Program API
//!
//! [`ProgramApi`] is the seam between the synchronous builder core and the
//! remote backend. [`HttpProgramApi`] is the production implementation; tests
//! substitute in-memory fakes.
//!
//! The flows here own exactly one decision: a save is rejected before any
//! network call when the tree fails validation. Transport and status errors
//! are passed through to the caller untouched.

/// `reqwest` implementation of the program API
pub mod http;

use async_trait::async_trait;
use pierre_program_core::errors::{ApiResult, AppResult};
use pierre_program_core::models::{
    DiscoveryFeed, Exercise, ExerciseQuery, ProgramDetail, ProgramQuery, ProgramSummary,
    PublicUser,
};
use pierre_program_core::pagination::Page;
use tracing::info;

use crate::builder::{BuilderProgram, ProgramBuilderStore};
use crate::transform::{from_program_detail, SaveProgramPayload};

pub use http::HttpProgramApi;

/// Remote operations the builder depends on
#[async_trait]
pub trait ProgramApi: Send + Sync {
    /// Persist a whole program tree in one request
    async fn save_full_program(&self, payload: &SaveProgramPayload) -> ApiResult<ProgramDetail>;

    /// Fetch one program with its full tree
    async fn get_program(&self, program_id: i64) -> ApiResult<ProgramDetail>;

    /// List public programs matching the filters
    async fn list_public_programs(&self, query: &ProgramQuery) -> ApiResult<Page<ProgramSummary>>;

    /// Fetch the discovery feed
    async fn discovery_feed(&self) -> ApiResult<DiscoveryFeed>;

    /// Search the exercise library
    async fn search_exercises(&self, query: &ExerciseQuery) -> ApiResult<Page<Exercise>>;

    /// Fetch another user's public profile
    async fn get_public_user(&self, user_id: i64) -> ApiResult<PublicUser>;
}

/// Validate the store's tree and save it
///
/// The payload is built from a snapshot of the tree at call time, so edits
/// made while the request is in flight are not part of this save.
///
/// # Errors
///
/// Returns `ValidationFailed` without calling `api` when the tree is invalid,
/// otherwise any error reported by `api`.
pub async fn save_program<A>(store: &ProgramBuilderStore, api: &A) -> AppResult<ProgramDetail>
where
    A: ProgramApi + ?Sized,
{
    let payload = store.prepare_save()?;
    let saved = api.save_full_program(&payload).await?;
    info!(
        program_id = saved.id,
        weeks = saved.weeks.len(),
        created = payload.id.is_none(),
        "Saved program"
    );
    Ok(saved)
}

/// Fetch a program and adapt it into an editable tree
///
/// # Errors
///
/// Returns any error reported by `api`.
pub async fn load_program<A>(api: &A, program_id: i64) -> AppResult<BuilderProgram>
where
    A: ProgramApi + ?Sized,
{
    let detail = api.get_program(program_id).await?;
    let program = from_program_detail(detail);
    info!(
        program_id,
        weeks = program.weeks.len(),
        sessions = program.session_count(),
        "Loaded program for editing"
    );
    Ok(program)
}
