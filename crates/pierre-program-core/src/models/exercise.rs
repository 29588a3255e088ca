// ABOUTME: Exercise library record referenced by library-backed activities
// ABOUTME: Opaque value supplied by the exercise lookup; the builder never mutates it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Canonical exercise definition from the shared library
///
/// # Examples
///
/// ```rust
/// use pierre_program_core::models::Exercise;
///
/// let bench = Exercise::new(12, "Bench Press");
/// assert_eq!(bench.default_sets, 3);
/// assert_eq!(bench.muscle_group_list(), Vec::<&str>::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Backend identifier
    pub id: i64,
    /// Display name (e.g. "Bench Press")
    pub name: String,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Category (e.g. "Chest")
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text equipment list
    #[serde(default)]
    pub equipment_needed: Option<String>,
    /// Comma separated muscle groups
    #[serde(default)]
    pub muscle_groups: Option<String>,
    /// Stored image path
    #[serde(default)]
    pub image: Option<String>,
    /// Absolute image URL computed by the backend
    #[serde(default)]
    pub image_url: Option<String>,
    /// Demonstration video
    #[serde(default)]
    pub video_url: Option<String>,
    /// Suggested set count
    #[serde(default = "default_sets")]
    pub default_sets: u32,
    /// Suggested reps per set
    #[serde(default = "default_reps")]
    pub default_reps: u32,
    /// Suggested rest in seconds
    #[serde(default = "default_rest")]
    pub default_rest: u32,
    /// Curated by application admins
    #[serde(default)]
    pub is_official: bool,
}

const fn default_sets() -> u32 {
    3
}

const fn default_reps() -> u32 {
    8
}

const fn default_rest() -> u32 {
    60
}

impl Exercise {
    /// Create an exercise with library defaults for every optional field
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            category: None,
            equipment_needed: None,
            muscle_groups: None,
            image: None,
            image_url: None,
            video_url: None,
            default_sets: default_sets(),
            default_reps: default_reps(),
            default_rest: default_rest(),
            is_official: false,
        }
    }

    /// Muscle groups split on commas, trimmed, blanks removed
    #[must_use]
    pub fn muscle_group_list(&self) -> Vec<&str> {
        self.muscle_groups
            .as_deref()
            .map(|groups| {
                groups
                    .split(',')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
