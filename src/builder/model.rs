// ABOUTME: In-memory builder tree edited by the program builder store
// ABOUTME: Program, Week, Session, Block, Activity, Prescription nodes plus partial update types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Builder tree
//!
//! Every node carries an optional backend `id` (set once persisted) and a
//! client `temp_id` that is always present and is the only key used to locate
//! nodes during edits. Children are owned ordered lists; there are no parent
//! pointers.

use pierre_program_core::constants::{builder_defaults, session_timing};
use pierre_program_core::models::{
    DayOfWeek, Difficulty, Exercise, IntensityType, PrimaryMetric, ProgramFocus, SchemeType,
    SessionFocus, SetTag,
};
use serde_json::Value;

use super::ids::TempId;

/// Root of the tree being edited
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderProgram {
    /// Backend id once persisted
    pub id: Option<i64>,
    /// Client key
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
    /// Weeks, `week_number` 1..N in array order
    pub weeks: Vec<BuilderWeek>,
}

impl BuilderProgram {
    /// Total sessions across all weeks
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.weeks.iter().map(|w| w.sessions.len()).sum()
    }

    /// Total activities across all sessions
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|w| &w.sessions)
            .flat_map(|s| &s.blocks)
            .map(|b| b.activities.len())
            .sum()
    }

    /// Locate a week by key
    #[must_use]
    pub fn week(&self, week_id: &TempId) -> Option<&BuilderWeek> {
        self.weeks.iter().find(|w| &w.temp_id == week_id)
    }
}

/// One week of a program
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderWeek {
    /// Backend id once persisted
    pub id: Option<i64>,
    /// Client key
    pub temp_id: TempId,
    /// 1-based position
    pub week_number: u32,
    /// Name, `"Week {n}"` unless customized
    pub week_name: String,
    /// Notes
    pub notes: String,
    /// Editor-only collapse flag, never saved
    pub is_collapsed: bool,
    /// Sessions in array order
    pub sessions: Vec<BuilderSession>,
}

impl BuilderWeek {
    /// Name to show, falling back to the positional default when blank
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.week_name.trim().is_empty() {
            builder_defaults::week_name(self.week_number)
        } else {
            self.week_name.clone()
        }
    }

    /// Locate a session by key
    #[must_use]
    pub fn session(&self, session_id: &TempId) -> Option<&BuilderSession> {
        self.sessions.iter().find(|s| &s.temp_id == session_id)
    }
}

/// One training session within a week
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderSession {
    /// Backend id once persisted
    pub id: Option<i64>,
    /// Client key
    pub temp_id: TempId,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Session focus
    pub focus: SessionFocus,
    /// Scheduled weekday
    pub day_of_week: DayOfWeek,
    /// User-set ordering hint within the day
    pub day_ordering: i32,
    /// Blocks, `block_order` 0..N-1 in array order
    pub blocks: Vec<BuilderBlock>,
}

impl BuilderSession {
    /// Rough session length in whole minutes
    ///
    /// Each prescription contributes its rest plus two seconds per rep, and
    /// each activity adds a thirty second transition.
    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        let total: u32 = self
            .blocks
            .iter()
            .flat_map(|b| &b.activities)
            .map(|activity| {
                activity
                    .prescriptions
                    .iter()
                    .map(BuilderPrescription::estimated_seconds)
                    .fold(session_timing::TRANSITION_SECONDS, u32::saturating_add)
            })
            .fold(0, u32::saturating_add);
        total / 60
    }

    /// Locate a block by key
    #[must_use]
    pub fn block(&self, block_id: &TempId) -> Option<&BuilderBlock> {
        self.blocks.iter().find(|b| &b.temp_id == block_id)
    }
}

/// Group of activities sharing one execution scheme
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderBlock {
    /// Backend id once persisted
    pub id: Option<i64>,
    /// Client key
    pub temp_id: TempId,
    /// 0-based position
    pub block_order: u32,
    /// Optional name
    pub block_name: Option<String>,
    /// Execution scheme
    pub scheme_type: SchemeType,
    /// Notes
    pub block_notes: String,
    /// Seconds for AMRAP/EMOM/TABATA
    pub duration_target: Option<u32>,
    /// Rounds for RFT
    pub rounds_target: Option<u32>,
    /// Activities, `order_in_block` 0..N-1 in array order
    pub activities: Vec<BuilderActivity>,
}

impl BuilderBlock {
    /// Locate an activity by key
    #[must_use]
    pub fn activity(&self, activity_id: &TempId) -> Option<&BuilderActivity> {
        self.activities.iter().find(|a| &a.temp_id == activity_id)
    }
}

/// What an activity performs
#[derive(Debug, Clone, PartialEq)]
pub enum ActivitySource {
    /// References a shared library exercise
    Library {
        /// The referenced exercise, never mutated by the builder
        exercise: Exercise,
    },
    /// Free-form exercise described inline
    Manual {
        /// Name
        name: String,
        /// Demonstration video
        video_url: Option<String>,
        /// Image
        image: Option<String>,
    },
}

impl ActivitySource {
    /// Manual source with the default name
    #[must_use]
    pub fn manual() -> Self {
        Self::Manual {
            name: builder_defaults::MANUAL_ACTIVITY_NAME.to_owned(),
            video_url: None,
            image: None,
        }
    }

    /// Referenced exercise id, library variant only
    #[must_use]
    pub const fn exercise_id(&self) -> Option<i64> {
        match self {
            Self::Library { exercise } => Some(exercise.id),
            Self::Manual { .. } => None,
        }
    }

    /// Whether this is the manual variant
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self, Self::Manual { .. })
    }
}

/// One exercise entry inside a block
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderActivity {
    /// Backend id once persisted
    pub id: Option<i64>,
    /// Client key
    pub temp_id: TempId,
    /// 0-based position
    pub order_in_block: u32,
    /// Library exercise or manual description
    pub source: ActivitySource,
    /// Notes
    pub notes: String,
    /// Prescriptions, `set_number` 1..N in array order
    pub prescriptions: Vec<BuilderPrescription>,
}

impl BuilderActivity {
    /// Manual name, else exercise name, else a placeholder
    #[must_use]
    pub fn display_name(&self) -> &str {
        match &self.source {
            ActivitySource::Manual { name, .. } if !name.trim().is_empty() => name.as_str(),
            ActivitySource::Library { exercise } if !exercise.name.trim().is_empty() => {
                exercise.name.as_str()
            }
            _ => builder_defaults::UNTITLED_ACTIVITY,
        }
    }

    /// Locate a prescription by key
    #[must_use]
    pub fn prescription(&self, prescription_id: &TempId) -> Option<&BuilderPrescription> {
        self.prescriptions
            .iter()
            .find(|p| &p.temp_id == prescription_id)
    }
}

/// One planned set
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderPrescription {
    /// Backend id once persisted
    pub id: Option<i64>,
    /// Client key
    pub temp_id: TempId,
    /// 1-based position
    pub set_number: u32,
    /// Set kind
    pub set_tag: SetTag,
    /// Driving metric
    pub primary_metric: PrimaryMetric,
    /// Target reps, free text such as "8-10"
    pub reps: Option<String>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Weight is per side
    pub is_per_side: bool,
    /// Tempo notation
    pub tempo: Option<String>,
    /// How intensity is expressed
    pub intensity_type: Option<IntensityType>,
    /// Intensity value
    pub intensity_value: Option<String>,
    /// Target duration in seconds
    pub duration_seconds: Option<u32>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Target calories
    pub calories: Option<u32>,
    /// Rest after the set in seconds
    pub rest_seconds: Option<u32>,
    /// Notes
    pub prescription_notes: String,
    /// Free-form data passed through to the backend
    pub extra_data: Value,
}

impl BuilderPrescription {
    /// Short human label such as `"8 reps 60 kg per side @ 8 rpe"`
    #[must_use]
    pub fn display_label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(reps) = self.reps.as_deref().filter(|r| !r.trim().is_empty()) {
            parts.push(format!("{reps} reps"));
        }
        if let Some(weight) = self.weight {
            let side = if self.is_per_side { " per side" } else { "" };
            parts.push(format!("{weight} kg{side}"));
        }
        if let (Some(kind), Some(value)) = (
            self.intensity_type,
            self.intensity_value.as_deref().filter(|v| !v.is_empty()),
        ) {
            parts.push(format!("@ {value} {}", kind.as_str()));
        }
        if let Some(duration) = self.duration_seconds.filter(|d| *d > 0) {
            parts.push(format!("{duration}s"));
        }
        if let Some(distance) = self.distance.filter(|d| *d != 0.0) {
            parts.push(format!("{distance} m"));
        }
        parts.join(" ")
    }

    /// Leading integer of the reps text, zero when there is none
    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.reps.as_deref().map_or(0, |reps| {
            let digits: String = reps
                .trim()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().unwrap_or(0)
        })
    }

    fn estimated_seconds(&self) -> u32 {
        // reps is free text, so large counts saturate
        self.rest_seconds
            .unwrap_or(0)
            .saturating_add(self.rep_count().saturating_mul(session_timing::SECONDS_PER_REP))
    }
}

// ============================================================================
// Partial updates
// ============================================================================
//
// `None` leaves a field alone. Nullable attributes use `Option<Option<_>>` so
// `Some(None)` clears them. Ordering, identity, and child lists are absent on
// purpose: a merge can never break renumbering.

/// Merge into top-level program fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramInfoUpdate {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New focus
    pub focus: Option<ProgramFocus>,
    /// New difficulty
    pub difficulty: Option<Difficulty>,
    /// New or cleared image
    pub image: Option<Option<String>>,
    /// New or cleared video
    pub video_url: Option<Option<String>>,
    /// New price
    pub price: Option<f64>,
    /// New visibility
    pub is_public: Option<bool>,
    /// New template flag
    pub is_template: Option<bool>,
}

impl ProgramInfoUpdate {
    /// Update that only sets the title
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Apply to a program without touching its weeks
    pub fn apply(self, program: &mut BuilderProgram) {
        merge(&mut program.title, self.title);
        merge(&mut program.description, self.description);
        merge(&mut program.focus, self.focus);
        merge(&mut program.difficulty, self.difficulty);
        merge(&mut program.image, self.image);
        merge(&mut program.video_url, self.video_url);
        merge(&mut program.price, self.price);
        merge(&mut program.is_public, self.is_public);
        merge(&mut program.is_template, self.is_template);
    }
}

/// Merge into a week
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekUpdate {
    /// New name
    pub week_name: Option<String>,
    /// New notes
    pub notes: Option<String>,
    /// New collapse flag
    pub is_collapsed: Option<bool>,
}

impl WeekUpdate {
    /// Apply to a week without touching its number or sessions
    pub fn apply(self, week: &mut BuilderWeek) {
        merge(&mut week.week_name, self.week_name);
        merge(&mut week.notes, self.notes);
        merge(&mut week.is_collapsed, self.is_collapsed);
    }
}

/// Merge into a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New focus
    pub focus: Option<SessionFocus>,
    /// New weekday
    pub day_of_week: Option<DayOfWeek>,
    /// New day ordering hint
    pub day_ordering: Option<i32>,
}

impl SessionUpdate {
    /// Update that only sets the title
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Apply to a session without touching its blocks
    pub fn apply(self, session: &mut BuilderSession) {
        merge(&mut session.title, self.title);
        merge(&mut session.description, self.description);
        merge(&mut session.focus, self.focus);
        merge(&mut session.day_of_week, self.day_of_week);
        merge(&mut session.day_ordering, self.day_ordering);
    }
}

/// Merge into a block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockUpdate {
    /// New or cleared name
    pub block_name: Option<Option<String>>,
    /// New scheme
    pub scheme_type: Option<SchemeType>,
    /// New notes
    pub block_notes: Option<String>,
    /// New or cleared duration target
    pub duration_target: Option<Option<u32>>,
    /// New or cleared rounds target
    pub rounds_target: Option<Option<u32>>,
}

impl BlockUpdate {
    /// Apply to a block without touching its order or activities
    pub fn apply(self, block: &mut BuilderBlock) {
        merge(&mut block.block_name, self.block_name);
        merge(&mut block.scheme_type, self.scheme_type);
        merge(&mut block.block_notes, self.block_notes);
        merge(&mut block.duration_target, self.duration_target);
        merge(&mut block.rounds_target, self.rounds_target);
    }
}

/// Merge into an activity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityUpdate {
    /// Replace the whole source (applied before the manual fields)
    pub source: Option<ActivitySource>,
    /// New manual name, manual variant only
    pub manual_name: Option<String>,
    /// New or cleared manual video, manual variant only
    pub manual_video_url: Option<Option<String>>,
    /// New or cleared manual image, manual variant only
    pub manual_image: Option<Option<String>>,
    /// New notes
    pub notes: Option<String>,
}

impl ActivityUpdate {
    /// Apply to an activity without touching its order or prescriptions
    pub fn apply(self, activity: &mut BuilderActivity) {
        merge(&mut activity.source, self.source);
        if let ActivitySource::Manual {
            name,
            video_url,
            image,
        } = &mut activity.source
        {
            merge(name, self.manual_name);
            merge(video_url, self.manual_video_url);
            merge(image, self.manual_image);
        }
        merge(&mut activity.notes, self.notes);
    }
}

/// Merge into a prescription
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrescriptionUpdate {
    /// New set tag
    pub set_tag: Option<SetTag>,
    /// New primary metric
    pub primary_metric: Option<PrimaryMetric>,
    /// New or cleared reps
    pub reps: Option<Option<String>>,
    /// New or cleared weight
    pub weight: Option<Option<f64>>,
    /// New per-side flag
    pub is_per_side: Option<bool>,
    /// New or cleared tempo
    pub tempo: Option<Option<String>>,
    /// New or cleared intensity type
    pub intensity_type: Option<Option<IntensityType>>,
    /// New or cleared intensity value
    pub intensity_value: Option<Option<String>>,
    /// New or cleared duration
    pub duration_seconds: Option<Option<u32>>,
    /// New or cleared distance
    pub distance: Option<Option<f64>>,
    /// New or cleared calories
    pub calories: Option<Option<u32>>,
    /// New or cleared rest
    pub rest_seconds: Option<Option<u32>>,
    /// New notes
    pub prescription_notes: Option<String>,
    /// New extra data
    pub extra_data: Option<Value>,
}

impl PrescriptionUpdate {
    /// Apply to a prescription without touching its set number
    pub fn apply(self, prescription: &mut BuilderPrescription) {
        merge(&mut prescription.set_tag, self.set_tag);
        merge(&mut prescription.primary_metric, self.primary_metric);
        merge(&mut prescription.reps, self.reps);
        merge(&mut prescription.weight, self.weight);
        merge(&mut prescription.is_per_side, self.is_per_side);
        merge(&mut prescription.tempo, self.tempo);
        merge(&mut prescription.intensity_type, self.intensity_type);
        merge(&mut prescription.intensity_value, self.intensity_value);
        merge(&mut prescription.duration_seconds, self.duration_seconds);
        merge(&mut prescription.distance, self.distance);
        merge(&mut prescription.calories, self.calories);
        merge(&mut prescription.rest_seconds, self.rest_seconds);
        merge(&mut prescription.prescription_notes, self.prescription_notes);
        merge(&mut prescription.extra_data, self.extra_data);
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::factory::{
        create_empty_block, create_empty_prescription, create_manual_activity,
    };

    #[test]
    fn test_display_label_parts() {
        let mut set = create_empty_prescription(1);
        set.reps = Some("8".to_owned());
        set.weight = Some(60.0);
        set.is_per_side = true;
        set.intensity_type = Some(IntensityType::Rpe);
        set.intensity_value = Some("8".to_owned());
        assert_eq!(set.display_label(), "8 reps 60 kg per side @ 8 rpe");

        let mut run = create_empty_prescription(1);
        run.duration_seconds = Some(90);
        run.distance = Some(400.0);
        assert_eq!(run.display_label(), "90s 400 m");
    }

    #[test]
    fn test_intensity_needs_type_and_value() {
        let mut set = create_empty_prescription(1);
        set.intensity_value = Some("75%".to_owned());
        assert_eq!(set.display_label(), "");
    }

    #[test]
    fn test_rep_count_uses_leading_integer() {
        let mut set = create_empty_prescription(1);
        set.reps = Some("8-10".to_owned());
        assert_eq!(set.rep_count(), 8);
        set.reps = Some("max".to_owned());
        assert_eq!(set.rep_count(), 0);
    }

    #[test]
    fn test_estimated_minutes() {
        let mut activity = create_manual_activity(0);
        activity.prescriptions[0].reps = Some("10".to_owned());
        activity.prescriptions[0].rest_seconds = Some(90);
        let mut second = create_empty_prescription(2);
        second.reps = Some("10".to_owned());
        second.rest_seconds = Some(90);
        activity.prescriptions.push(second);

        let mut block = create_empty_block(0);
        block.activities.push(activity);
        let session = BuilderSession {
            id: None,
            temp_id: TempId::from("s"),
            title: String::new(),
            description: String::new(),
            focus: SessionFocus::Lift,
            day_of_week: DayOfWeek::Monday,
            day_ordering: 0,
            blocks: vec![block],
        };
        // (90 + 20) * 2 + 30 = 250 seconds
        assert_eq!(session.estimated_minutes(), 4);
    }

    #[test]
    fn test_activity_update_ignores_manual_fields_for_library() {
        let mut activity = create_manual_activity(0);
        activity.source = ActivitySource::Library {
            exercise: Exercise::new(3, "Squat"),
        };
        ActivityUpdate {
            manual_name: Some("Ignored".to_owned()),
            notes: Some("Brace".to_owned()),
            ..ActivityUpdate::default()
        }
        .apply(&mut activity);
        assert_eq!(activity.display_name(), "Squat");
        assert_eq!(activity.notes, "Brace");
    }

    #[test]
    fn test_double_option_clears_nullable_field() {
        let mut block = create_empty_block(0);
        block.block_name = Some("Metcon".to_owned());
        BlockUpdate {
            block_name: Some(None),
            ..BlockUpdate::default()
        }
        .apply(&mut block);
        assert_eq!(block.block_name, None);
    }
}
