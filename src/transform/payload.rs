// ABOUTME: Save payload for the backend bulk "save full program" endpoint
// ABOUTME: Typed nested structs emitting id and temp_id at every level plus all editable fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_program_core::models::{
    DayOfWeek, Difficulty, IntensityType, PrimaryMetric, ProgramFocus, SchemeType, SessionFocus,
    SetTag,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::{
    ActivitySource, BuilderActivity, BuilderBlock, BuilderPrescription, BuilderProgram,
    BuilderSession, BuilderWeek, TempId,
};

/// Body of the bulk save request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveProgramPayload {
    /// Backend id, null for a new program
    pub id: Option<i64>,
    /// Client correlation token
    pub temp_id: TempId,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Training focus
    pub focus: ProgramFocus,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Cover image
    pub image: Option<String>,
    /// Promotional video
    pub video_url: Option<String>,
    /// Price
    pub price: f64,
    /// Visible to other users
    pub is_public: bool,
    /// Offered as a starter template
    pub is_template: bool,
    /// Weeks
    pub weeks: Vec<WeekPayload>,
}

/// Week entry of the save payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPayload {
    /// Backend id
    pub id: Option<i64>,
    /// Client correlation token
    pub temp_id: TempId,
    /// 1-based position
    pub week_number: u32,
    /// Name
    pub week_name: String,
    /// Notes
    pub notes: String,
    /// Sessions
    pub sessions: Vec<SessionPayload>,
}

/// Session entry of the save payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Backend id
    pub id: Option<i64>,
    /// Client correlation token
    pub temp_id: TempId,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Focus
    pub focus: SessionFocus,
    /// Weekday
    pub day_of_week: DayOfWeek,
    /// Day ordering hint
    pub day_ordering: i32,
    /// Blocks
    pub blocks: Vec<BlockPayload>,
}

/// Block entry of the save payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPayload {
    /// Backend id
    pub id: Option<i64>,
    /// Client correlation token
    pub temp_id: TempId,
    /// 0-based position
    pub block_order: u32,
    /// Scheme
    pub scheme_type: SchemeType,
    /// Name
    pub block_name: Option<String>,
    /// Notes
    pub block_notes: String,
    /// Duration target in seconds
    pub duration_target: Option<u32>,
    /// Rounds target
    pub rounds_target: Option<u32>,
    /// Activities
    pub activities: Vec<ActivityPayload>,
}

/// Activity entry of the save payload
///
/// Library activities carry `exercise_id` with null manual fields; manual
/// activities carry the manual fields with a null `exercise_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPayload {
    /// Backend id
    pub id: Option<i64>,
    /// Client correlation token
    pub temp_id: TempId,
    /// 0-based position
    pub order_in_block: u32,
    /// Library exercise reference
    pub exercise_id: Option<i64>,
    /// Manual name
    pub manual_name: Option<String>,
    /// Manual video
    pub manual_video_url: Option<String>,
    /// Manual image
    pub manual_image: Option<String>,
    /// Notes
    pub notes: String,
    /// Prescriptions
    pub prescriptions: Vec<PrescriptionPayload>,
}

/// Prescription entry of the save payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionPayload {
    /// Backend id
    pub id: Option<i64>,
    /// Client correlation token
    pub temp_id: TempId,
    /// 1-based position
    pub set_number: u32,
    /// Set kind
    pub set_tag: SetTag,
    /// Driving metric
    pub primary_metric: PrimaryMetric,
    /// Notes
    pub prescription_notes: String,
    /// Target reps
    pub reps: Option<String>,
    /// Rest in seconds
    pub rest_seconds: Option<u32>,
    /// Tempo
    pub tempo: Option<String>,
    /// Weight
    pub weight: Option<f64>,
    /// Per-side flag
    pub is_per_side: bool,
    /// Intensity value
    pub intensity_value: Option<String>,
    /// Intensity type
    pub intensity_type: Option<IntensityType>,
    /// Duration in seconds
    pub duration_seconds: Option<u32>,
    /// Distance
    pub distance: Option<f64>,
    /// Calories
    pub calories: Option<u32>,
    /// Free-form data
    pub extra_data: Value,
}

/// Map the builder tree to the bulk save body without consuming it
#[must_use]
pub fn to_save_payload(program: &BuilderProgram) -> SaveProgramPayload {
    SaveProgramPayload {
        id: program.id,
        temp_id: program.temp_id.clone(),
        title: program.title.clone(),
        description: program.description.clone(),
        focus: program.focus,
        difficulty: program.difficulty,
        image: program.image.clone(),
        video_url: program.video_url.clone(),
        price: program.price,
        is_public: program.is_public,
        is_template: program.is_template,
        weeks: program.weeks.iter().map(WeekPayload::from).collect(),
    }
}

impl From<&BuilderWeek> for WeekPayload {
    fn from(week: &BuilderWeek) -> Self {
        Self {
            id: week.id,
            temp_id: week.temp_id.clone(),
            week_number: week.week_number,
            week_name: week.week_name.clone(),
            notes: week.notes.clone(),
            sessions: week.sessions.iter().map(SessionPayload::from).collect(),
        }
    }
}

impl From<&BuilderSession> for SessionPayload {
    fn from(session: &BuilderSession) -> Self {
        Self {
            id: session.id,
            temp_id: session.temp_id.clone(),
            title: session.title.clone(),
            description: session.description.clone(),
            focus: session.focus,
            day_of_week: session.day_of_week,
            day_ordering: session.day_ordering,
            blocks: session.blocks.iter().map(BlockPayload::from).collect(),
        }
    }
}

impl From<&BuilderBlock> for BlockPayload {
    fn from(block: &BuilderBlock) -> Self {
        Self {
            id: block.id,
            temp_id: block.temp_id.clone(),
            block_order: block.block_order,
            scheme_type: block.scheme_type,
            block_name: block.block_name.clone(),
            block_notes: block.block_notes.clone(),
            duration_target: block.duration_target,
            rounds_target: block.rounds_target,
            activities: block.activities.iter().map(ActivityPayload::from).collect(),
        }
    }
}

impl From<&BuilderActivity> for ActivityPayload {
    fn from(activity: &BuilderActivity) -> Self {
        let (exercise_id, manual_name, manual_video_url, manual_image) = match &activity.source {
            ActivitySource::Library { exercise } => (Some(exercise.id), None, None, None),
            ActivitySource::Manual {
                name,
                video_url,
                image,
            } => (None, Some(name.clone()), video_url.clone(), image.clone()),
        };
        Self {
            id: activity.id,
            temp_id: activity.temp_id.clone(),
            order_in_block: activity.order_in_block,
            exercise_id,
            manual_name,
            manual_video_url,
            manual_image,
            notes: activity.notes.clone(),
            prescriptions: activity
                .prescriptions
                .iter()
                .map(PrescriptionPayload::from)
                .collect(),
        }
    }
}

impl From<&BuilderPrescription> for PrescriptionPayload {
    fn from(set: &BuilderPrescription) -> Self {
        Self {
            id: set.id,
            temp_id: set.temp_id.clone(),
            set_number: set.set_number,
            set_tag: set.set_tag,
            primary_metric: set.primary_metric,
            prescription_notes: set.prescription_notes.clone(),
            reps: set.reps.clone(),
            rest_seconds: set.rest_seconds,
            tempo: set.tempo.clone(),
            weight: set.weight,
            is_per_side: set.is_per_side,
            intensity_value: set.intensity_value.clone(),
            intensity_type: set.intensity_type,
            duration_seconds: set.duration_seconds,
            distance: set.distance,
            calories: set.calories,
            extra_data: set.extra_data.clone(),
        }
    }
}
