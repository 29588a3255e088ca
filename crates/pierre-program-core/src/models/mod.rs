// ABOUTME: Core data models for the Pierre program builder
// ABOUTME: Re-exports Exercise, program display types, profiles, and domain enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Read-path types decoded from backend responses, plus the enumerations the
//! in-memory builder tree shares with them.
//!
//! ## Core Models
//!
//! - `Exercise`: shared library exercise referenced by activities
//! - `ProgramSummary` / `ProgramDetail`: list cards and the full nested tree
//! - `DiscoveryFeed`: new, featured, and trending program lists
//! - `PublicUser`: another user's profile

mod enums;
mod exercise;
mod profile;
mod program;

pub use enums::{
    DayOfWeek, Difficulty, IntensityType, PrimaryMetric, ProgramFocus, SchemeType, SessionFocus,
    SetTag, Units,
};
pub use exercise::Exercise;
pub use profile::{PublicUser, UserProfile};
pub use program::{
    ActivityDetail, BlockDetail, DiscoveryFeed, ExerciseQuery, PrescriptionDetail, ProgramDetail,
    ProgramQuery, ProgramSummary, SessionDetail, WeekDetail,
};
