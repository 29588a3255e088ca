// ABOUTME: Pure state transition for the builder tree: old program plus action gives new program
// ABOUTME: Resolves temp id paths, applies edits on a copy, and renumbers ordering fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt;

use pierre_program_core::constants::builder_defaults;
use tracing::warn;

use super::actions::BuilderAction;
use super::factory::{
    copy_name, create_activity_from_exercise, create_empty_block, create_empty_prescription,
    create_empty_program, create_empty_session, create_empty_week, create_manual_activity,
    FreshClone,
};
use super::ids::TempId;
use super::model::{
    BuilderActivity, BuilderBlock, BuilderPrescription, BuilderProgram, BuilderSession,
    BuilderWeek,
};

/// A command whose temp id path does not exist in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    /// Command name
    pub command: &'static str,
    /// The ids it addressed
    pub target: String,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} target not found: {}", self.command, self.target)
    }
}

/// Apply an action, returning the unchanged tree when its path does not resolve
///
/// The input is never mutated. An unresolved path is logged at warn level
/// and otherwise ignored.
#[must_use]
pub fn reduce(state: &BuilderProgram, action: BuilderAction) -> BuilderProgram {
    match try_reduce(state, action) {
        Ok(next) => next,
        Err(unresolved) => {
            warn!(
                command = unresolved.command,
                target = %unresolved.target,
                "Builder command target not found, state unchanged"
            );
            state.clone()
        }
    }
}

/// Apply an action, reporting an unresolved path instead of absorbing it
///
/// # Errors
///
/// Returns [`Unresolved`] when any id on the action's path is not in the tree.
pub fn try_reduce(
    state: &BuilderProgram,
    action: BuilderAction,
) -> Result<BuilderProgram, Unresolved> {
    let action = match action {
        BuilderAction::SetProgram(program) => return Ok(*program),
        BuilderAction::ResetProgram => return Ok(create_empty_program()),
        other => other,
    };

    let command = action.name();
    let target = action.target();
    let mut next = state.clone();
    match apply(&mut next, action) {
        Some(()) => Ok(next),
        None => Err(Unresolved { command, target }),
    }
}

fn apply(program: &mut BuilderProgram, action: BuilderAction) -> Option<()> {
    match action {
        // Handled in try_reduce
        BuilderAction::SetProgram(_) | BuilderAction::ResetProgram => {}
        BuilderAction::UpdateProgramInfo(update) => update.apply(program),

        BuilderAction::AddWeek => {
            let week_number = ordinal(program.weeks.len()) + 1;
            program.weeks.push(create_empty_week(week_number));
        }
        BuilderAction::UpdateWeek { week_id, update } => {
            update.apply(find_mut(&mut program.weeks, &week_id)?);
        }
        BuilderAction::DeleteWeek { week_id } => {
            remove_by_key(&mut program.weeks, &week_id)?;
            renumber_weeks(&mut program.weeks);
        }
        BuilderAction::ToggleWeekCollapse { week_id } => {
            let week = find_mut(&mut program.weeks, &week_id)?;
            week.is_collapsed = !week.is_collapsed;
        }
        BuilderAction::ReorderWeeks { order } => {
            reorder_by_keys(&mut program.weeks, &order);
            renumber_weeks(&mut program.weeks);
        }
        BuilderAction::DuplicateWeek { week_id } => {
            let source = find(&program.weeks, &week_id)?;
            let mut copy = source.fresh_clone();
            copy.week_name = copy_name(&source.display_name());
            copy.week_number = ordinal(program.weeks.len()) + 1;
            program.weeks.push(copy);
        }

        BuilderAction::AddSession { week_id } => {
            let sessions = sessions_mut(program, &week_id)?;
            let hint = i32::try_from(sessions.len()).unwrap_or(i32::MAX);
            sessions.push(create_empty_session(hint));
        }
        BuilderAction::UpdateSession { path, update } => {
            let sessions = sessions_mut(program, &path.week_id)?;
            update.apply(find_mut(sessions, &path.session_id)?);
        }
        BuilderAction::DeleteSession { path } => {
            // Sessions carry no sequence number; array order is the only ordering
            remove_by_key(sessions_mut(program, &path.week_id)?, &path.session_id)?;
        }
        BuilderAction::DuplicateSession { path } => {
            let sessions = sessions_mut(program, &path.week_id)?;
            let source = find(sessions, &path.session_id)?;
            let mut copy = source.fresh_clone();
            if !source.title.trim().is_empty() {
                copy.title = copy_name(&source.title);
            }
            sessions.push(copy);
        }
        BuilderAction::MoveSession {
            from_week_id,
            to_week_id,
            session_id,
        } => {
            find(&program.weeks, &to_week_id)?;
            let session = remove_by_key(sessions_mut(program, &from_week_id)?, &session_id)?;
            sessions_mut(program, &to_week_id)?.push(session);
        }
        BuilderAction::ReorderSessions { week_id, order } => {
            reorder_by_keys(sessions_mut(program, &week_id)?, &order);
        }

        BuilderAction::AddBlock { path } => {
            let blocks = blocks_mut(program, &path.week_id, &path.session_id)?;
            let block_order = ordinal(blocks.len());
            blocks.push(create_empty_block(block_order));
        }
        BuilderAction::UpdateBlock { path, update } => {
            let blocks = blocks_mut(program, &path.week_id, &path.session_id)?;
            update.apply(find_mut(blocks, &path.block_id)?);
        }
        BuilderAction::DeleteBlock { path } => {
            let blocks = blocks_mut(program, &path.week_id, &path.session_id)?;
            remove_by_key(blocks, &path.block_id)?;
            renumber_blocks(blocks);
        }
        BuilderAction::ReorderBlocks { path, order } => {
            let blocks = blocks_mut(program, &path.week_id, &path.session_id)?;
            reorder_by_keys(blocks, &order);
            renumber_blocks(blocks);
        }
        BuilderAction::DuplicateBlock { path } => {
            let blocks = blocks_mut(program, &path.week_id, &path.session_id)?;
            let mut copy = find(blocks, &path.block_id)?.fresh_clone();
            copy.block_name = copy.block_name.as_deref().map(copy_name);
            copy.block_order = ordinal(blocks.len());
            blocks.push(copy);
        }

        BuilderAction::AddActivityFromExercise { path, exercise } => {
            let activities =
                activities_mut(program, &path.week_id, &path.session_id, &path.block_id)?;
            let order = ordinal(activities.len());
            activities.push(create_activity_from_exercise(*exercise, order));
        }
        BuilderAction::AddManualActivity { path } => {
            let activities =
                activities_mut(program, &path.week_id, &path.session_id, &path.block_id)?;
            let order = ordinal(activities.len());
            activities.push(create_manual_activity(order));
        }
        BuilderAction::UpdateActivity { path, update } => {
            let activities =
                activities_mut(program, &path.week_id, &path.session_id, &path.block_id)?;
            (*update).apply(find_mut(activities, &path.activity_id)?);
        }
        BuilderAction::DeleteActivity { path } => {
            let activities =
                activities_mut(program, &path.week_id, &path.session_id, &path.block_id)?;
            remove_by_key(activities, &path.activity_id)?;
            renumber_activities(activities);
        }
        BuilderAction::ReorderActivities { path, order } => {
            let activities =
                activities_mut(program, &path.week_id, &path.session_id, &path.block_id)?;
            reorder_by_keys(activities, &order);
            renumber_activities(activities);
        }
        BuilderAction::DuplicateActivity { path } => {
            let activities =
                activities_mut(program, &path.week_id, &path.session_id, &path.block_id)?;
            let mut copy = find(activities, &path.activity_id)?.fresh_clone();
            copy.order_in_block = ordinal(activities.len());
            activities.push(copy);
        }

        BuilderAction::AddPrescription { path } => {
            let sets = prescriptions_mut(
                program,
                &path.week_id,
                &path.session_id,
                &path.block_id,
                &path.activity_id,
            )?;
            let set_number = ordinal(sets.len()) + 1;
            sets.push(create_empty_prescription(set_number));
        }
        BuilderAction::UpdatePrescription { path, update } => {
            let sets = prescriptions_mut(
                program,
                &path.week_id,
                &path.session_id,
                &path.block_id,
                &path.activity_id,
            )?;
            (*update).apply(find_mut(sets, &path.prescription_id)?);
        }
        BuilderAction::DeletePrescription { path } => {
            let sets = prescriptions_mut(
                program,
                &path.week_id,
                &path.session_id,
                &path.block_id,
                &path.activity_id,
            )?;
            remove_by_key(sets, &path.prescription_id)?;
            renumber_prescriptions(sets);
        }
        BuilderAction::DuplicatePrescription { path } => {
            let sets = prescriptions_mut(
                program,
                &path.week_id,
                &path.session_id,
                &path.block_id,
                &path.activity_id,
            )?;
            let mut copy = find(sets, &path.prescription_id)?.fresh_clone();
            copy.set_number = ordinal(sets.len()) + 1;
            sets.push(copy);
        }
        BuilderAction::ReorderPrescriptions { path, order } => {
            let sets = prescriptions_mut(
                program,
                &path.week_id,
                &path.session_id,
                &path.block_id,
                &path.activity_id,
            )?;
            reorder_by_keys(sets, &order);
            renumber_prescriptions(sets);
        }
    }
    Some(())
}

// ============================================================================
// Path resolution
// ============================================================================

trait Keyed {
    fn key(&self) -> &TempId;
}

macro_rules! impl_keyed {
    ($($node:ty),*) => {
        $(impl Keyed for $node {
            fn key(&self) -> &TempId {
                &self.temp_id
            }
        })*
    };
}

impl_keyed!(
    BuilderWeek,
    BuilderSession,
    BuilderBlock,
    BuilderActivity,
    BuilderPrescription
);

fn find<'a, T: Keyed>(items: &'a [T], id: &TempId) -> Option<&'a T> {
    items.iter().find(|item| item.key() == id)
}

fn find_mut<'a, T: Keyed>(items: &'a mut [T], id: &TempId) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.key() == id)
}

fn remove_by_key<T: Keyed>(items: &mut Vec<T>, id: &TempId) -> Option<T> {
    let index = items.iter().position(|item| item.key() == id)?;
    Some(items.remove(index))
}

fn sessions_mut<'a>(
    program: &'a mut BuilderProgram,
    week_id: &TempId,
) -> Option<&'a mut Vec<BuilderSession>> {
    Some(&mut find_mut(&mut program.weeks, week_id)?.sessions)
}

fn blocks_mut<'a>(
    program: &'a mut BuilderProgram,
    week_id: &TempId,
    session_id: &TempId,
) -> Option<&'a mut Vec<BuilderBlock>> {
    Some(&mut find_mut(sessions_mut(program, week_id)?, session_id)?.blocks)
}

fn activities_mut<'a>(
    program: &'a mut BuilderProgram,
    week_id: &TempId,
    session_id: &TempId,
    block_id: &TempId,
) -> Option<&'a mut Vec<BuilderActivity>> {
    Some(&mut find_mut(blocks_mut(program, week_id, session_id)?, block_id)?.activities)
}

fn prescriptions_mut<'a>(
    program: &'a mut BuilderProgram,
    week_id: &TempId,
    session_id: &TempId,
    block_id: &TempId,
    activity_id: &TempId,
) -> Option<&'a mut Vec<BuilderPrescription>> {
    let activities = activities_mut(program, week_id, session_id, block_id)?;
    Some(&mut find_mut(activities, activity_id)?.prescriptions)
}

// ============================================================================
// Ordering
// ============================================================================

fn ordinal(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Stable sort into the given key order; keys not listed go last
fn reorder_by_keys<T: Keyed>(items: &mut [T], order: &[TempId]) {
    let mut rank: HashMap<&TempId, usize> = HashMap::with_capacity(order.len());
    for (position, id) in order.iter().enumerate() {
        rank.entry(id).or_insert(position);
    }
    items.sort_by_key(|item| rank.get(item.key()).copied().unwrap_or(usize::MAX));
}

/// Number weeks 1..N; placeholder names follow the new position
fn renumber_weeks(weeks: &mut [BuilderWeek]) {
    for (index, week) in weeks.iter_mut().enumerate() {
        let week_number = ordinal(index) + 1;
        let is_placeholder = week.week_name.trim().is_empty()
            || week.week_name == builder_defaults::week_name(week.week_number);
        week.week_number = week_number;
        if is_placeholder {
            week.week_name = builder_defaults::week_name(week_number);
        }
    }
}

fn renumber_blocks(blocks: &mut [BuilderBlock]) {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.block_order = ordinal(index);
    }
}

fn renumber_activities(activities: &mut [BuilderActivity]) {
    for (index, activity) in activities.iter_mut().enumerate() {
        activity.order_in_block = ordinal(index);
    }
}

fn renumber_prescriptions(sets: &mut [BuilderPrescription]) {
    for (index, set) in sets.iter_mut().enumerate() {
        set.set_number = ordinal(index) + 1;
    }
}
