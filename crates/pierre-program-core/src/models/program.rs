// ABOUTME: Program display types decoded from backend list and detail responses
// ABOUTME: ProgramSummary, the nested ProgramDetail tree, and the discovery feed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{
    DayOfWeek, Difficulty, IntensityType, PrimaryMetric, ProgramFocus, SchemeType, SessionFocus,
    SetTag,
};
use super::exercise::Exercise;
use crate::serde_helpers::{decimal_or_zero, optional_decimal};

/// Program card shown in lists, the discovery feed, and profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSummary {
    /// Backend identifier
    pub id: i64,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Training focus
    #[serde(default)]
    pub focus: ProgramFocus,
    /// Difficulty
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Cover image
    #[serde(default)]
    pub image: Option<String>,
    /// Visible to other users
    #[serde(default)]
    pub is_public: bool,
    /// Offered as a starter template
    #[serde(default)]
    pub is_template: bool,
    /// Number of weeks
    #[serde(default)]
    pub week_count: u32,
    /// Number of sessions across all weeks
    #[serde(default)]
    pub session_count: u32,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full program tree as returned by the detail and save endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDetail {
    /// Backend identifier
    pub id: i64,
    /// Owner user id
    #[serde(default)]
    pub user: Option<i64>,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Training focus
    #[serde(default)]
    pub focus: ProgramFocus,
    /// Difficulty
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Cover image
    #[serde(default)]
    pub image: Option<String>,
    /// Promotional video
    #[serde(default)]
    pub video_url: Option<String>,
    /// Price (decimal rendered as string by the backend)
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub price: f64,
    /// Visible to other users
    #[serde(default)]
    pub is_public: bool,
    /// Offered as a starter template
    #[serde(default)]
    pub is_template: bool,
    /// Weeks ordered by `week_number`
    #[serde(default)]
    pub weeks: Vec<WeekDetail>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Week inside a program detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDetail {
    /// Backend identifier
    pub id: i64,
    /// 1-based position in the program
    pub week_number: u32,
    /// Optional custom name
    #[serde(default)]
    pub week_name: Option<String>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Sessions in backend order
    #[serde(default)]
    pub sessions: Vec<SessionDetail>,
}

/// Session inside a program detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetail {
    /// Backend identifier
    pub id: i64,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Session focus
    #[serde(default)]
    pub focus: SessionFocus,
    /// Scheduled weekday
    #[serde(default)]
    pub day_of_week: DayOfWeek,
    /// Ordering hint within the day
    #[serde(default)]
    pub day_ordering: i32,
    /// Preview image
    #[serde(default)]
    pub preview_image: Option<String>,
    /// Backend computed display string (e.g. "42 min")
    #[serde(default)]
    pub estimated_session_time: Option<String>,
    /// Blocks ordered by `block_order`
    #[serde(default)]
    pub blocks: Vec<BlockDetail>,
}

/// Block inside a session detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDetail {
    /// Backend identifier
    pub id: i64,
    /// 0-based position in the session
    pub block_order: u32,
    /// Execution scheme
    #[serde(default)]
    pub scheme_type: SchemeType,
    /// Optional name (e.g. "Metcon A")
    #[serde(default)]
    pub block_name: Option<String>,
    /// Notes
    #[serde(default)]
    pub block_notes: Option<String>,
    /// Seconds for AMRAP/EMOM/TABATA
    #[serde(default)]
    pub duration_target: Option<u32>,
    /// Rounds for RFT
    #[serde(default)]
    pub rounds_target: Option<u32>,
    /// Activities ordered by `order_in_block`
    #[serde(default)]
    pub activities: Vec<ActivityDetail>,
}

/// Activity inside a block detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetail {
    /// Backend identifier
    pub id: i64,
    /// 0-based position in the block
    pub order_in_block: u32,
    /// Library exercise, absent for manual activities
    #[serde(default)]
    pub exercise: Option<Exercise>,
    /// Manual activity name
    #[serde(default)]
    pub manual_name: Option<String>,
    /// Manual activity video
    #[serde(default)]
    pub manual_video_url: Option<String>,
    /// Manual activity image
    #[serde(default)]
    pub manual_image: Option<String>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Backend computed display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Prescriptions ordered by `set_number`
    #[serde(default)]
    pub prescriptions: Vec<PrescriptionDetail>,
}

/// Prescription (one planned set) inside an activity detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionDetail {
    /// Backend identifier
    pub id: i64,
    /// 1-based set number
    pub set_number: u32,
    /// Set kind
    #[serde(default)]
    pub set_tag: SetTag,
    /// Driving metric
    #[serde(default)]
    pub primary_metric: PrimaryMetric,
    /// Notes
    #[serde(default)]
    pub prescription_notes: Option<String>,
    /// Target reps (free text, e.g. "8-10")
    #[serde(default)]
    pub reps: Option<String>,
    /// Rest after the set in seconds
    #[serde(default)]
    pub rest_seconds: Option<u32>,
    /// Tempo notation
    #[serde(default)]
    pub tempo: Option<String>,
    /// Weight in kilograms
    #[serde(default, deserialize_with = "optional_decimal")]
    pub weight: Option<f64>,
    /// Weight is per side
    #[serde(default)]
    pub is_per_side: bool,
    /// Relative intensity value (e.g. "8", "75%")
    #[serde(default)]
    pub intensity_value: Option<String>,
    /// How intensity is expressed
    #[serde(default)]
    pub intensity_type: Option<IntensityType>,
    /// Target duration in seconds
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    /// Distance in meters
    #[serde(default, deserialize_with = "optional_decimal")]
    pub distance: Option<f64>,
    /// Target calories
    #[serde(default)]
    pub calories: Option<u32>,
    /// Free-form extra data
    #[serde(default)]
    pub extra_data: Value,
    /// Backend computed label
    #[serde(default)]
    pub display_label: Option<String>,
}

/// Aggregated lists for the discovery screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryFeed {
    /// Most recently created public programs
    #[serde(default)]
    pub new: Vec<ProgramSummary>,
    /// Featured templates
    #[serde(default)]
    pub featured: Vec<ProgramSummary>,
    /// Trending public programs
    #[serde(default)]
    pub trending: Vec<ProgramSummary>,
}

impl DiscoveryFeed {
    /// Whether every section is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.featured.is_empty() && self.trending.is_empty()
    }
}

/// Filters accepted by the public program listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgramQuery {
    /// Restrict to one focus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<ProgramFocus>,
    /// Restrict to one difficulty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Search in title and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Filters accepted by the exercise library search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExerciseQuery {
    /// Search in name, description, category, and muscle groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Comma separated categories (any match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Comma separated muscle groups (any match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_groups: Option<String>,
    /// Equipment substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    /// Official-only (`true`) or own custom-only (`false`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_official: Option<bool>,
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
