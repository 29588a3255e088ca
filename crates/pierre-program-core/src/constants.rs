// ABOUTME: Constants for the Pierre program builder organized by domain
// ABOUTME: Builder defaults, validation messages, endpoint paths, and pagination limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Default values used when the builder creates new nodes
pub mod builder_defaults {
    /// Suffix appended to the duplicated node's own name
    pub const COPY_SUFFIX: &str = " (Copy)";
    /// Name given to a freshly added manual activity
    pub const MANUAL_ACTIVITY_NAME: &str = "Custom Exercise";
    /// Display name for an activity with neither exercise nor manual name
    pub const UNTITLED_ACTIVITY: &str = "Untitled Activity";
    /// Prefix of every client-generated temporary identifier
    pub const TEMP_ID_PREFIX: &str = "temp_";
    /// Length of the random suffix in a temporary identifier
    pub const TEMP_ID_RANDOM_LEN: usize = 6;

    /// Default week name derived from its position
    #[must_use]
    pub fn week_name(week_number: u32) -> String {
        format!("Week {week_number}")
    }
}

/// Session time estimation parameters
pub mod session_timing {
    /// Seconds budgeted per prescribed repetition
    pub const SECONDS_PER_REP: u32 = 2;
    /// Seconds budgeted to move between activities
    pub const TRANSITION_SECONDS: u32 = 30;
}

/// Validation messages reported by the builder store
pub mod validation {
    /// Program title is blank after trimming
    pub const TITLE_REQUIRED: &str = "Program title is required";
    /// Program has no weeks
    pub const WEEK_REQUIRED: &str = "At least one week is required";

    /// Week has no sessions
    #[must_use]
    pub fn week_needs_session(week_number: u32) -> String {
        format!("Week {week_number} needs at least one session")
    }

    /// Session title is blank after trimming
    #[must_use]
    pub fn session_needs_title(session_index: usize, week_number: u32) -> String {
        format!("Session {session_index} in Week {week_number} needs a title")
    }
}

/// Backend endpoint paths (relative to the configured base URL)
pub mod endpoints {
    /// Core API prefix
    pub const CORE_API: &str = "/api/v1/core";
    /// Accounts API prefix
    pub const ACCOUNTS_API: &str = "/api/v1/accounts";
    /// Bulk save of a full program tree
    pub const SAVE_FULL_PROGRAM: &str = "/api/v1/core/programs/save-full/";
    /// Public program listing
    pub const PUBLIC_PROGRAMS: &str = "/api/v1/core/public-programs/";
    /// Discovery feed
    pub const DISCOVERY_FEED: &str = "/api/v1/core/discovery/feed/";
    /// Exercise library search
    pub const EXERCISE_SEARCH: &str = "/api/v1/core/exercises/search/";

    /// Program detail path
    #[must_use]
    pub fn program_detail(program_id: i64) -> String {
        format!("{CORE_API}/programs/{program_id}/")
    }

    /// Public user profile path
    #[must_use]
    pub fn public_user(user_id: i64) -> String {
        format!("{ACCOUNTS_API}/users/{user_id}/")
    }
}

/// Pagination limits mirrored from the backend
pub mod pagination {
    /// Default page size for program lists
    pub const DEFAULT_PAGE_SIZE: u32 = 20;
    /// Maximum page size for program lists
    pub const MAX_PAGE_SIZE: u32 = 100;
    /// Default page size for the exercise library
    pub const EXERCISE_PAGE_SIZE: u32 = 50;
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported in log records
    pub const PROGRAM_BUILDER: &str = "pierre-program-builder";
}
