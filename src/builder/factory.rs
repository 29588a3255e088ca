// ABOUTME: Factories for default builder nodes and deep copies with fresh identities
// ABOUTME: Every node produced here has a new temp id, no backend id, and domain defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_program_core::constants::builder_defaults;
use pierre_program_core::models::{
    DayOfWeek, Difficulty, Exercise, PrimaryMetric, ProgramFocus, SchemeType, SessionFocus, SetTag,
};
use serde_json::Value;

use super::ids::generate_temp_id;
use super::model::{
    ActivitySource, BuilderActivity, BuilderBlock, BuilderPrescription, BuilderProgram,
    BuilderSession, BuilderWeek,
};

/// Empty program: blank title, no weeks, Strength/Beginner, private
#[must_use]
pub fn create_empty_program() -> BuilderProgram {
    BuilderProgram {
        id: None,
        temp_id: generate_temp_id(),
        title: String::new(),
        description: String::new(),
        focus: ProgramFocus::Strength,
        difficulty: Difficulty::Beginner,
        image: None,
        video_url: None,
        price: 0.0,
        is_public: false,
        is_template: false,
        weeks: Vec::new(),
    }
}

/// Week named `"Week {n}"` with no sessions
#[must_use]
pub fn create_empty_week(week_number: u32) -> BuilderWeek {
    BuilderWeek {
        id: None,
        temp_id: generate_temp_id(),
        week_number,
        week_name: builder_defaults::week_name(week_number),
        notes: String::new(),
        is_collapsed: false,
        sessions: Vec::new(),
    }
}

/// Untitled Monday lift session; the hint seeds `day_ordering`
#[must_use]
pub fn create_empty_session(order_hint: i32) -> BuilderSession {
    BuilderSession {
        id: None,
        temp_id: generate_temp_id(),
        title: String::new(),
        description: String::new(),
        focus: SessionFocus::Lift,
        day_of_week: DayOfWeek::Monday,
        day_ordering: order_hint,
        blocks: Vec::new(),
    }
}

/// Unnamed STANDARD block
#[must_use]
pub fn create_empty_block(block_order: u32) -> BuilderBlock {
    BuilderBlock {
        id: None,
        temp_id: generate_temp_id(),
        block_order,
        block_name: None,
        scheme_type: SchemeType::Standard,
        block_notes: String::new(),
        duration_target: None,
        rounds_target: None,
        activities: Vec::new(),
    }
}

/// Normal working set driven by reps, every target unset
#[must_use]
pub fn create_empty_prescription(set_number: u32) -> BuilderPrescription {
    BuilderPrescription {
        id: None,
        temp_id: generate_temp_id(),
        set_number,
        set_tag: SetTag::Normal,
        primary_metric: PrimaryMetric::Reps,
        reps: None,
        weight: None,
        is_per_side: false,
        tempo: None,
        intensity_type: None,
        intensity_value: None,
        duration_seconds: None,
        distance: None,
        calories: None,
        rest_seconds: None,
        prescription_notes: String::new(),
        extra_data: Value::Null,
    }
}

/// Library-backed activity with one default set
#[must_use]
pub fn create_activity_from_exercise(exercise: Exercise, order_in_block: u32) -> BuilderActivity {
    activity_with_source(ActivitySource::Library { exercise }, order_in_block)
}

/// Manual activity named "Custom Exercise" with one default set
#[must_use]
pub fn create_manual_activity(order_in_block: u32) -> BuilderActivity {
    activity_with_source(ActivitySource::manual(), order_in_block)
}

fn activity_with_source(source: ActivitySource, order_in_block: u32) -> BuilderActivity {
    BuilderActivity {
        id: None,
        temp_id: generate_temp_id(),
        order_in_block,
        source,
        notes: String::new(),
        prescriptions: vec![create_empty_prescription(1)],
    }
}

/// Deep copy that gives the node and every descendant a fresh identity
///
/// Backend ids are cleared and new temp ids minted at every depth; all other
/// fields, including names, are copied verbatim.
pub trait FreshClone {
    /// Copy with new identities throughout the subtree
    #[must_use]
    fn fresh_clone(&self) -> Self;
}

impl FreshClone for BuilderPrescription {
    fn fresh_clone(&self) -> Self {
        Self {
            id: None,
            temp_id: generate_temp_id(),
            ..self.clone()
        }
    }
}

impl FreshClone for BuilderActivity {
    fn fresh_clone(&self) -> Self {
        Self {
            id: None,
            temp_id: generate_temp_id(),
            order_in_block: self.order_in_block,
            source: self.source.clone(),
            notes: self.notes.clone(),
            prescriptions: self.prescriptions.iter().map(FreshClone::fresh_clone).collect(),
        }
    }
}

impl FreshClone for BuilderBlock {
    fn fresh_clone(&self) -> Self {
        Self {
            id: None,
            temp_id: generate_temp_id(),
            block_order: self.block_order,
            block_name: self.block_name.clone(),
            scheme_type: self.scheme_type,
            block_notes: self.block_notes.clone(),
            duration_target: self.duration_target,
            rounds_target: self.rounds_target,
            activities: self.activities.iter().map(FreshClone::fresh_clone).collect(),
        }
    }
}

impl FreshClone for BuilderSession {
    fn fresh_clone(&self) -> Self {
        Self {
            id: None,
            temp_id: generate_temp_id(),
            title: self.title.clone(),
            description: self.description.clone(),
            focus: self.focus,
            day_of_week: self.day_of_week,
            day_ordering: self.day_ordering,
            blocks: self.blocks.iter().map(FreshClone::fresh_clone).collect(),
        }
    }
}

impl FreshClone for BuilderWeek {
    fn fresh_clone(&self) -> Self {
        Self {
            id: None,
            temp_id: generate_temp_id(),
            week_number: self.week_number,
            week_name: self.week_name.clone(),
            notes: self.notes.clone(),
            is_collapsed: self.is_collapsed,
            sessions: self.sessions.iter().map(FreshClone::fresh_clone).collect(),
        }
    }
}

/// Append the copy suffix to a name
#[must_use]
pub fn copy_name(name: &str) -> String {
    format!("{name}{}", builder_defaults::COPY_SUFFIX)
}
