// ABOUTME: Main library entry point for the Pierre program builder
// ABOUTME: In-memory workout program editor with wire transform and backend API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Program Builder
//!
//! Client-side core for assembling multi-week workout programs
//! (weeks → sessions → blocks → activities → set prescriptions) before they
//! are saved to the Pierre program backend in one request.
//!
//! ## Architecture
//!
//! - **Builder**: the program tree, temporary identities, default factories,
//!   the pure reducer, and the store every edit goes through
//! - **Transform**: save payload on the way out, detail adaptation and
//!   lenient list decoding on the way in
//! - **Client**: the `ProgramApi` collaborator trait and its `reqwest`
//!   implementation
//! - **Config**: backend connection settings from the environment
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_program_builder::builder::{ProgramBuilderStore, ProgramInfoUpdate, SessionUpdate};
//!
//! let mut store = ProgramBuilderStore::new();
//! store.update_program_info(ProgramInfoUpdate::title("Base Strength"));
//! let week = store.add_week();
//! let session = store.add_session(&week).unwrap();
//! store.update_session(&week, &session, SessionUpdate::title("Lower Body"));
//!
//! let payload = store.prepare_save().unwrap();
//! assert_eq!(payload.weeks[0].sessions[0].title, "Lower Body");
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the CLI binary (src/bin/) and integration tests (tests/).

/// Program tree model and editing store
pub mod builder;
/// Backend program API collaborator
pub mod client;
/// Configuration management
pub mod config;
/// Structured logging setup
pub mod logging;
/// Wire transform between the builder tree and backend JSON
pub mod transform;

// Foundation types re-exported from pierre-program-core
pub use pierre_program_core::{constants, errors, models, pagination};

pub use pierre_program_core::errors::{ApiError, AppError, AppResult, ErrorCode};
