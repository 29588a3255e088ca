// ABOUTME: Program builder store owning the tree for one editing session
// ABOUTME: Dispatches actions through the reducer and derives validation state on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_program_core::constants::validation;
use pierre_program_core::errors::{AppError, AppResult};
use pierre_program_core::models::Exercise;
use tracing::{debug, warn};

use super::actions::{ActivityPath, BlockPath, BuilderAction, PrescriptionPath, SessionPath};
use super::factory::create_empty_program;
use super::ids::TempId;
use super::model::{
    ActivityUpdate, BlockUpdate, BuilderProgram, PrescriptionUpdate, ProgramInfoUpdate,
    SessionUpdate, WeekUpdate,
};
use super::reducer::try_reduce;
use crate::transform::{to_save_payload, SaveProgramPayload};

/// Single source of truth for the program being edited
///
/// Created when the editor opens and dropped when it closes. Every command
/// replaces the tree with the reducer's output; commands whose ids do not
/// resolve leave it untouched.
///
/// # Examples
///
/// ```rust
/// use pierre_program_builder::builder::{ProgramBuilderStore, ProgramInfoUpdate, SessionUpdate};
///
/// let mut store = ProgramBuilderStore::new();
/// store.update_program_info(ProgramInfoUpdate::title("12-Week Strength"));
/// let week = store.add_week();
/// let session = store.add_session(&week).unwrap();
/// store.update_session(&week, &session, SessionUpdate::title("Day 1"));
/// assert!(store.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramBuilderStore {
    program: BuilderProgram,
}

impl Default for ProgramBuilderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilderStore {
    /// Store holding an empty program
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: create_empty_program(),
        }
    }

    /// Store holding an existing tree (edit mode)
    #[must_use]
    pub const fn with_program(program: BuilderProgram) -> Self {
        Self { program }
    }

    /// Current tree
    #[must_use]
    pub const fn program(&self) -> &BuilderProgram {
        &self.program
    }

    /// Tear down the store, keeping the tree
    #[must_use]
    pub fn into_program(self) -> BuilderProgram {
        self.program
    }

    /// Apply one action; returns whether its target resolved
    pub fn dispatch(&mut self, action: BuilderAction) -> bool {
        let command = action.name();
        match try_reduce(&self.program, action) {
            Ok(next) => {
                debug!(command, "Applied builder command");
                self.program = next;
                true
            }
            Err(unresolved) => {
                warn!(
                    command = unresolved.command,
                    target = %unresolved.target,
                    "Builder command target not found, state unchanged"
                );
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Every reason the current tree cannot be saved, in tree order
    #[must_use]
    pub fn validation_errors(&self) -> Vec<String> {
        let program = &self.program;
        let mut errors = Vec::new();

        if program.title.trim().is_empty() {
            errors.push(validation::TITLE_REQUIRED.to_owned());
        }
        if program.weeks.is_empty() {
            errors.push(validation::WEEK_REQUIRED.to_owned());
        }
        for week in &program.weeks {
            if week.sessions.is_empty() {
                errors.push(validation::week_needs_session(week.week_number));
            }
            for (index, session) in week.sessions.iter().enumerate() {
                if session.title.trim().is_empty() {
                    errors.push(validation::session_needs_title(
                        index + 1,
                        week.week_number,
                    ));
                }
            }
        }
        errors
    }

    /// Whether the tree has no validation errors
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Save payload for the current tree, or the full error list
    ///
    /// # Errors
    ///
    /// Returns a `ValidationFailed` error carrying every validation message
    /// when the tree is not valid.
    pub fn prepare_save(&self) -> AppResult<SaveProgramPayload> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(to_save_payload(&self.program))
        } else {
            Err(AppError::validation_failed(&errors))
        }
    }

    // ------------------------------------------------------------------
    // Program
    // ------------------------------------------------------------------

    /// Replace the whole tree
    pub fn set_program(&mut self, program: BuilderProgram) {
        self.dispatch(BuilderAction::SetProgram(Box::new(program)));
    }

    /// Replace the tree with an empty program
    pub fn reset_program(&mut self) {
        self.dispatch(BuilderAction::ResetProgram);
    }

    /// Merge top-level fields
    pub fn update_program_info(&mut self, update: ProgramInfoUpdate) {
        self.dispatch(BuilderAction::UpdateProgramInfo(update));
    }

    // ------------------------------------------------------------------
    // Weeks
    // ------------------------------------------------------------------

    /// Append a week; returns its key
    pub fn add_week(&mut self) -> TempId {
        self.dispatch(BuilderAction::AddWeek);
        self.last_week_id().unwrap_or_else(|| TempId::from(""))
    }

    /// Merge into a week
    pub fn update_week(&mut self, week_id: &TempId, update: WeekUpdate) {
        self.dispatch(BuilderAction::UpdateWeek {
            week_id: week_id.clone(),
            update,
        });
    }

    /// Remove a week and renumber the rest
    pub fn delete_week(&mut self, week_id: &TempId) {
        self.dispatch(BuilderAction::DeleteWeek {
            week_id: week_id.clone(),
        });
    }

    /// Flip a week's collapse flag
    pub fn toggle_week_collapse(&mut self, week_id: &TempId) {
        self.dispatch(BuilderAction::ToggleWeekCollapse {
            week_id: week_id.clone(),
        });
    }

    /// Reorder weeks by key and renumber
    pub fn reorder_weeks(&mut self, order: Vec<TempId>) {
        self.dispatch(BuilderAction::ReorderWeeks { order });
    }

    /// Deep copy a week to the end; returns the copy's key
    pub fn duplicate_week(&mut self, week_id: &TempId) -> Option<TempId> {
        self.dispatch(BuilderAction::DuplicateWeek {
            week_id: week_id.clone(),
        })
        .then(|| self.last_week_id())
        .flatten()
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Append a session to a week; returns its key
    pub fn add_session(&mut self, week_id: &TempId) -> Option<TempId> {
        self.dispatch(BuilderAction::AddSession {
            week_id: week_id.clone(),
        })
        .then(|| self.last_session_id(week_id))
        .flatten()
    }

    /// Merge into a session
    pub fn update_session(
        &mut self,
        week_id: &TempId,
        session_id: &TempId,
        update: SessionUpdate,
    ) {
        self.dispatch(BuilderAction::UpdateSession {
            path: session_path(week_id, session_id),
            update,
        });
    }

    /// Remove a session
    pub fn delete_session(&mut self, week_id: &TempId, session_id: &TempId) {
        self.dispatch(BuilderAction::DeleteSession {
            path: session_path(week_id, session_id),
        });
    }

    /// Deep copy a session to the end of its week; returns the copy's key
    pub fn duplicate_session(
        &mut self,
        week_id: &TempId,
        session_id: &TempId,
    ) -> Option<TempId> {
        self.dispatch(BuilderAction::DuplicateSession {
            path: session_path(week_id, session_id),
        })
        .then(|| self.last_session_id(week_id))
        .flatten()
    }

    /// Move a session to the end of another week
    pub fn move_session(
        &mut self,
        from_week_id: &TempId,
        to_week_id: &TempId,
        session_id: &TempId,
    ) {
        self.dispatch(BuilderAction::MoveSession {
            from_week_id: from_week_id.clone(),
            to_week_id: to_week_id.clone(),
            session_id: session_id.clone(),
        });
    }

    /// Reorder a week's sessions by key
    pub fn reorder_sessions(&mut self, week_id: &TempId, order: Vec<TempId>) {
        self.dispatch(BuilderAction::ReorderSessions {
            week_id: week_id.clone(),
            order,
        });
    }

    // ------------------------------------------------------------------
    // Blocks
    // ------------------------------------------------------------------

    /// Append a block to a session; returns its key
    pub fn add_block(&mut self, week_id: &TempId, session_id: &TempId) -> Option<TempId> {
        let path = session_path(week_id, session_id);
        self.dispatch(BuilderAction::AddBlock { path: path.clone() })
            .then(|| self.last_block_id(&path))
            .flatten()
    }

    /// Merge into a block
    pub fn update_block(&mut self, path: &BlockPath, update: BlockUpdate) {
        self.dispatch(BuilderAction::UpdateBlock {
            path: path.clone(),
            update,
        });
    }

    /// Remove a block and renumber the rest
    pub fn delete_block(&mut self, path: &BlockPath) {
        self.dispatch(BuilderAction::DeleteBlock { path: path.clone() });
    }

    /// Reorder a session's blocks by key and renumber
    pub fn reorder_blocks(&mut self, week_id: &TempId, session_id: &TempId, order: Vec<TempId>) {
        self.dispatch(BuilderAction::ReorderBlocks {
            path: session_path(week_id, session_id),
            order,
        });
    }

    /// Deep copy a block to the end of its session; returns the copy's key
    pub fn duplicate_block(&mut self, path: &BlockPath) -> Option<TempId> {
        self.dispatch(BuilderAction::DuplicateBlock { path: path.clone() })
            .then(|| self.last_block_id(&path.session()))
            .flatten()
    }

    // ------------------------------------------------------------------
    // Activities
    // ------------------------------------------------------------------

    /// Append a library-backed activity; returns its key
    pub fn add_activity_from_exercise(
        &mut self,
        path: &BlockPath,
        exercise: Exercise,
    ) -> Option<TempId> {
        self.dispatch(BuilderAction::AddActivityFromExercise {
            path: path.clone(),
            exercise: Box::new(exercise),
        })
        .then(|| self.last_activity_id(path))
        .flatten()
    }

    /// Append a manual activity; returns its key
    pub fn add_manual_activity(&mut self, path: &BlockPath) -> Option<TempId> {
        self.dispatch(BuilderAction::AddManualActivity { path: path.clone() })
            .then(|| self.last_activity_id(path))
            .flatten()
    }

    /// Merge into an activity
    pub fn update_activity(&mut self, path: &ActivityPath, update: ActivityUpdate) {
        self.dispatch(BuilderAction::UpdateActivity {
            path: path.clone(),
            update: Box::new(update),
        });
    }

    /// Remove an activity and renumber the rest
    pub fn delete_activity(&mut self, path: &ActivityPath) {
        self.dispatch(BuilderAction::DeleteActivity { path: path.clone() });
    }

    /// Reorder a block's activities by key and renumber
    pub fn reorder_activities(&mut self, path: &BlockPath, order: Vec<TempId>) {
        self.dispatch(BuilderAction::ReorderActivities {
            path: path.clone(),
            order,
        });
    }

    /// Deep copy an activity to the end of its block; returns the copy's key
    pub fn duplicate_activity(&mut self, path: &ActivityPath) -> Option<TempId> {
        self.dispatch(BuilderAction::DuplicateActivity { path: path.clone() })
            .then(|| self.last_activity_id(&path.block()))
            .flatten()
    }

    // ------------------------------------------------------------------
    // Prescriptions
    // ------------------------------------------------------------------

    /// Append a default set; returns its key
    pub fn add_prescription(&mut self, path: &ActivityPath) -> Option<TempId> {
        self.dispatch(BuilderAction::AddPrescription { path: path.clone() })
            .then(|| self.last_prescription_id(path))
            .flatten()
    }

    /// Merge into a prescription
    pub fn update_prescription(&mut self, path: &PrescriptionPath, update: PrescriptionUpdate) {
        self.dispatch(BuilderAction::UpdatePrescription {
            path: path.clone(),
            update: Box::new(update),
        });
    }

    /// Remove a prescription and renumber the rest
    pub fn delete_prescription(&mut self, path: &PrescriptionPath) {
        self.dispatch(BuilderAction::DeletePrescription { path: path.clone() });
    }

    /// Copy a set to the end of its activity; returns the copy's key
    pub fn duplicate_prescription(&mut self, path: &PrescriptionPath) -> Option<TempId> {
        self.dispatch(BuilderAction::DuplicatePrescription { path: path.clone() })
            .then(|| self.last_prescription_id(&path.activity()))
            .flatten()
    }

    /// Reorder an activity's sets by key and renumber
    pub fn reorder_prescriptions(&mut self, path: &ActivityPath, order: Vec<TempId>) {
        self.dispatch(BuilderAction::ReorderPrescriptions {
            path: path.clone(),
            order,
        });
    }

    // ------------------------------------------------------------------
    // Lookups for freshly appended nodes
    // ------------------------------------------------------------------

    fn last_week_id(&self) -> Option<TempId> {
        self.program.weeks.last().map(|w| w.temp_id.clone())
    }

    fn last_session_id(&self, week_id: &TempId) -> Option<TempId> {
        self.program
            .week(week_id)?
            .sessions
            .last()
            .map(|s| s.temp_id.clone())
    }

    fn last_block_id(&self, path: &SessionPath) -> Option<TempId> {
        self.program
            .week(&path.week_id)?
            .session(&path.session_id)?
            .blocks
            .last()
            .map(|b| b.temp_id.clone())
    }

    fn last_activity_id(&self, path: &BlockPath) -> Option<TempId> {
        self.program
            .week(&path.week_id)?
            .session(&path.session_id)?
            .block(&path.block_id)?
            .activities
            .last()
            .map(|a| a.temp_id.clone())
    }

    fn last_prescription_id(&self, path: &ActivityPath) -> Option<TempId> {
        self.program
            .week(&path.week_id)?
            .session(&path.session_id)?
            .block(&path.block_id)?
            .activity(&path.activity_id)?
            .prescriptions
            .last()
            .map(|p| p.temp_id.clone())
    }
}

fn session_path(week_id: &TempId, session_id: &TempId) -> SessionPath {
    SessionPath::new(week_id.clone(), session_id.clone())
}
