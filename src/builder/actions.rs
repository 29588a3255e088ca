// ABOUTME: Closed set of structural edit commands applied by the builder reducer
// ABOUTME: BuilderAction variants plus the temp id paths that locate their targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use pierre_program_core::models::Exercise;

use super::ids::TempId;
use super::model::{
    ActivityUpdate, BlockUpdate, BuilderProgram, PrescriptionUpdate, ProgramInfoUpdate,
    SessionUpdate, WeekUpdate,
};

/// Locates a session: week, then session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPath {
    /// Owning week
    pub week_id: TempId,
    /// Target session
    pub session_id: TempId,
}

/// Locates a block: week, session, then block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPath {
    /// Owning week
    pub week_id: TempId,
    /// Owning session
    pub session_id: TempId,
    /// Target block
    pub block_id: TempId,
}

/// Locates an activity down through its block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPath {
    /// Owning week
    pub week_id: TempId,
    /// Owning session
    pub session_id: TempId,
    /// Owning block
    pub block_id: TempId,
    /// Target activity
    pub activity_id: TempId,
}

/// Locates a prescription down through its activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionPath {
    /// Owning week
    pub week_id: TempId,
    /// Owning session
    pub session_id: TempId,
    /// Owning block
    pub block_id: TempId,
    /// Owning activity
    pub activity_id: TempId,
    /// Target prescription
    pub prescription_id: TempId,
}

impl SessionPath {
    /// Path to a session inside a week
    #[must_use]
    pub const fn new(week_id: TempId, session_id: TempId) -> Self {
        Self {
            week_id,
            session_id,
        }
    }

    /// Extend to a block in this session
    #[must_use]
    pub fn block(&self, block_id: TempId) -> BlockPath {
        BlockPath {
            week_id: self.week_id.clone(),
            session_id: self.session_id.clone(),
            block_id,
        }
    }
}

impl BlockPath {
    /// Extend to an activity in this block
    #[must_use]
    pub fn activity(&self, activity_id: TempId) -> ActivityPath {
        ActivityPath {
            week_id: self.week_id.clone(),
            session_id: self.session_id.clone(),
            block_id: self.block_id.clone(),
            activity_id,
        }
    }

    /// The owning session
    #[must_use]
    pub fn session(&self) -> SessionPath {
        SessionPath::new(self.week_id.clone(), self.session_id.clone())
    }
}

impl ActivityPath {
    /// Extend to a prescription of this activity
    #[must_use]
    pub fn prescription(&self, prescription_id: TempId) -> PrescriptionPath {
        PrescriptionPath {
            week_id: self.week_id.clone(),
            session_id: self.session_id.clone(),
            block_id: self.block_id.clone(),
            activity_id: self.activity_id.clone(),
            prescription_id,
        }
    }

    /// The owning block
    #[must_use]
    pub fn block(&self) -> BlockPath {
        BlockPath {
            week_id: self.week_id.clone(),
            session_id: self.session_id.clone(),
            block_id: self.block_id.clone(),
        }
    }
}

impl PrescriptionPath {
    /// The owning activity
    #[must_use]
    pub fn activity(&self) -> ActivityPath {
        ActivityPath {
            week_id: self.week_id.clone(),
            session_id: self.session_id.clone(),
            block_id: self.block_id.clone(),
            activity_id: self.activity_id.clone(),
        }
    }
}

impl fmt::Display for SessionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.week_id, self.session_id)
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.week_id, self.session_id, self.block_id)
    }
}

impl fmt::Display for ActivityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.block(), self.activity_id)
    }
}

impl fmt::Display for PrescriptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.activity(), self.prescription_id)
    }
}

/// Structural edit applied to a [`BuilderProgram`] by [`super::reduce`]
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderAction {
    /// Replace the whole tree
    SetProgram(Box<BuilderProgram>),
    /// Replace the tree with an empty program
    ResetProgram,
    /// Merge top-level program fields
    UpdateProgramInfo(ProgramInfoUpdate),

    /// Append a week numbered after the last one
    AddWeek,
    /// Merge into a week
    UpdateWeek {
        /// Target week
        week_id: TempId,
        /// Fields to merge
        update: WeekUpdate,
    },
    /// Remove a week and renumber the rest
    DeleteWeek {
        /// Target week
        week_id: TempId,
    },
    /// Flip the editor-only collapse flag
    ToggleWeekCollapse {
        /// Target week
        week_id: TempId,
    },
    /// Reorder weeks to match the given keys, then renumber
    ReorderWeeks {
        /// Desired order of week keys
        order: Vec<TempId>,
    },
    /// Deep copy a week to the end of the program
    DuplicateWeek {
        /// Source week
        week_id: TempId,
    },

    /// Append a session to a week
    AddSession {
        /// Owning week
        week_id: TempId,
    },
    /// Merge into a session
    UpdateSession {
        /// Target session
        path: SessionPath,
        /// Fields to merge
        update: SessionUpdate,
    },
    /// Remove a session
    DeleteSession {
        /// Target session
        path: SessionPath,
    },
    /// Deep copy a session to the end of its week
    DuplicateSession {
        /// Source session
        path: SessionPath,
    },
    /// Move a session to the end of another week
    MoveSession {
        /// Week currently holding the session
        from_week_id: TempId,
        /// Week receiving the session
        to_week_id: TempId,
        /// Session to move
        session_id: TempId,
    },
    /// Reorder a week's sessions to match the given keys
    ReorderSessions {
        /// Owning week
        week_id: TempId,
        /// Desired order of session keys
        order: Vec<TempId>,
    },

    /// Append a block to a session
    AddBlock {
        /// Owning session
        path: SessionPath,
    },
    /// Merge into a block
    UpdateBlock {
        /// Target block
        path: BlockPath,
        /// Fields to merge
        update: BlockUpdate,
    },
    /// Remove a block and renumber the rest
    DeleteBlock {
        /// Target block
        path: BlockPath,
    },
    /// Reorder a session's blocks, then renumber
    ReorderBlocks {
        /// Owning session
        path: SessionPath,
        /// Desired order of block keys
        order: Vec<TempId>,
    },
    /// Deep copy a block to the end of its session
    DuplicateBlock {
        /// Source block
        path: BlockPath,
    },

    /// Append a library-backed activity
    AddActivityFromExercise {
        /// Owning block
        path: BlockPath,
        /// Referenced exercise
        exercise: Box<Exercise>,
    },
    /// Append a manual activity
    AddManualActivity {
        /// Owning block
        path: BlockPath,
    },
    /// Merge into an activity
    UpdateActivity {
        /// Target activity
        path: ActivityPath,
        /// Fields to merge
        update: Box<ActivityUpdate>,
    },
    /// Remove an activity and renumber the rest
    DeleteActivity {
        /// Target activity
        path: ActivityPath,
    },
    /// Reorder a block's activities, then renumber
    ReorderActivities {
        /// Owning block
        path: BlockPath,
        /// Desired order of activity keys
        order: Vec<TempId>,
    },
    /// Deep copy an activity to the end of its block
    DuplicateActivity {
        /// Source activity
        path: ActivityPath,
    },

    /// Append a default set
    AddPrescription {
        /// Owning activity
        path: ActivityPath,
    },
    /// Merge into a prescription
    UpdatePrescription {
        /// Target prescription
        path: PrescriptionPath,
        /// Fields to merge
        update: Box<PrescriptionUpdate>,
    },
    /// Remove a prescription and renumber the rest
    DeletePrescription {
        /// Target prescription
        path: PrescriptionPath,
    },
    /// Copy a prescription to the end of its activity
    DuplicatePrescription {
        /// Source prescription
        path: PrescriptionPath,
    },
    /// Reorder an activity's prescriptions, then renumber
    ReorderPrescriptions {
        /// Owning activity
        path: ActivityPath,
        /// Desired order of prescription keys
        order: Vec<TempId>,
    },
}

impl BuilderAction {
    /// Command name used in log records
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetProgram(_) => "set_program",
            Self::ResetProgram => "reset_program",
            Self::UpdateProgramInfo(_) => "update_program_info",
            Self::AddWeek => "add_week",
            Self::UpdateWeek { .. } => "update_week",
            Self::DeleteWeek { .. } => "delete_week",
            Self::ToggleWeekCollapse { .. } => "toggle_week_collapse",
            Self::ReorderWeeks { .. } => "reorder_weeks",
            Self::DuplicateWeek { .. } => "duplicate_week",
            Self::AddSession { .. } => "add_session",
            Self::UpdateSession { .. } => "update_session",
            Self::DeleteSession { .. } => "delete_session",
            Self::DuplicateSession { .. } => "duplicate_session",
            Self::MoveSession { .. } => "move_session",
            Self::ReorderSessions { .. } => "reorder_sessions",
            Self::AddBlock { .. } => "add_block",
            Self::UpdateBlock { .. } => "update_block",
            Self::DeleteBlock { .. } => "delete_block",
            Self::ReorderBlocks { .. } => "reorder_blocks",
            Self::DuplicateBlock { .. } => "duplicate_block",
            Self::AddActivityFromExercise { .. } => "add_activity_from_exercise",
            Self::AddManualActivity { .. } => "add_manual_activity",
            Self::UpdateActivity { .. } => "update_activity",
            Self::DeleteActivity { .. } => "delete_activity",
            Self::ReorderActivities { .. } => "reorder_activities",
            Self::DuplicateActivity { .. } => "duplicate_activity",
            Self::AddPrescription { .. } => "add_prescription",
            Self::UpdatePrescription { .. } => "update_prescription",
            Self::DeletePrescription { .. } => "delete_prescription",
            Self::DuplicatePrescription { .. } => "duplicate_prescription",
            Self::ReorderPrescriptions { .. } => "reorder_prescriptions",
        }
    }

    /// Temp id path the command addresses, empty for program-level commands
    #[must_use]
    pub fn target(&self) -> String {
        match self {
            Self::SetProgram(_)
            | Self::ResetProgram
            | Self::UpdateProgramInfo(_)
            | Self::AddWeek
            | Self::ReorderWeeks { .. } => String::new(),
            Self::UpdateWeek { week_id, .. }
            | Self::DeleteWeek { week_id }
            | Self::ToggleWeekCollapse { week_id }
            | Self::DuplicateWeek { week_id }
            | Self::AddSession { week_id }
            | Self::ReorderSessions { week_id, .. } => week_id.to_string(),
            Self::MoveSession {
                from_week_id,
                to_week_id,
                session_id,
            } => format!("{from_week_id}/{session_id} -> {to_week_id}"),
            Self::UpdateSession { path, .. }
            | Self::DeleteSession { path }
            | Self::DuplicateSession { path }
            | Self::AddBlock { path }
            | Self::ReorderBlocks { path, .. } => path.to_string(),
            Self::UpdateBlock { path, .. }
            | Self::DeleteBlock { path }
            | Self::DuplicateBlock { path }
            | Self::AddActivityFromExercise { path, .. }
            | Self::AddManualActivity { path }
            | Self::ReorderActivities { path, .. } => path.to_string(),
            Self::UpdateActivity { path, .. }
            | Self::DeleteActivity { path }
            | Self::DuplicateActivity { path }
            | Self::AddPrescription { path }
            | Self::ReorderPrescriptions { path, .. } => path.to_string(),
            Self::UpdatePrescription { path, .. }
            | Self::DeletePrescription { path }
            | Self::DuplicatePrescription { path } => path.to_string(),
        }
    }
}
