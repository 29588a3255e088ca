// ABOUTME: Load boundary adapting a backend program detail into the builder tree
// ABOUTME: Assigns fresh temp ids, picks the activity variant, sorts and renumbers children
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_program_core::constants::builder_defaults;
use pierre_program_core::models::{
    ActivityDetail, BlockDetail, PrescriptionDetail, ProgramDetail, SessionDetail, WeekDetail,
};
use tracing::debug;

use crate::builder::{
    generate_temp_id, ActivitySource, BuilderActivity, BuilderBlock, BuilderPrescription,
    BuilderProgram, BuilderSession, BuilderWeek,
};

/// Adapt a persisted program for editing
///
/// Every node keeps its backend `id` and receives a new `temp_id`. Children
/// are sorted by their ordering field and renumbered, so the tree satisfies
/// the builder's ordering invariants even if the response did not.
#[must_use]
pub fn from_program_detail(detail: ProgramDetail) -> BuilderProgram {
    let mut weeks = detail.weeks;
    weeks.sort_by_key(|w| w.week_number);

    let program = BuilderProgram {
        id: Some(detail.id),
        temp_id: generate_temp_id(),
        title: detail.title,
        description: detail.description.unwrap_or_default(),
        focus: detail.focus,
        difficulty: detail.difficulty,
        image: detail.image,
        video_url: detail.video_url,
        price: detail.price,
        is_public: detail.is_public,
        is_template: detail.is_template,
        weeks: weeks
            .into_iter()
            .enumerate()
            .map(|(index, week)| adapt_week(week, position(index) + 1))
            .collect(),
    };
    debug!(
        program_id = detail.id,
        weeks = program.weeks.len(),
        sessions = program.session_count(),
        "Adapted program detail for editing"
    );
    program
}

fn adapt_week(week: WeekDetail, week_number: u32) -> BuilderWeek {
    let week_name = week
        .week_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| builder_defaults::week_name(week_number));
    BuilderWeek {
        id: Some(week.id),
        temp_id: generate_temp_id(),
        week_number,
        week_name,
        notes: week.notes.unwrap_or_default(),
        is_collapsed: false,
        sessions: week.sessions.into_iter().map(adapt_session).collect(),
    }
}

fn adapt_session(session: SessionDetail) -> BuilderSession {
    let mut blocks = session.blocks;
    blocks.sort_by_key(|b| b.block_order);
    BuilderSession {
        id: Some(session.id),
        temp_id: generate_temp_id(),
        title: session.title,
        description: session.description.unwrap_or_default(),
        focus: session.focus,
        day_of_week: session.day_of_week,
        day_ordering: session.day_ordering,
        blocks: blocks
            .into_iter()
            .enumerate()
            .map(|(index, block)| adapt_block(block, position(index)))
            .collect(),
    }
}

fn adapt_block(block: BlockDetail, block_order: u32) -> BuilderBlock {
    let mut activities = block.activities;
    activities.sort_by_key(|a| a.order_in_block);
    BuilderBlock {
        id: Some(block.id),
        temp_id: generate_temp_id(),
        block_order,
        block_name: block.block_name,
        scheme_type: block.scheme_type,
        block_notes: block.block_notes.unwrap_or_default(),
        duration_target: block.duration_target,
        rounds_target: block.rounds_target,
        activities: activities
            .into_iter()
            .enumerate()
            .map(|(index, activity)| adapt_activity(activity, position(index)))
            .collect(),
    }
}

fn adapt_activity(activity: ActivityDetail, order_in_block: u32) -> BuilderActivity {
    let source = match activity.exercise {
        Some(exercise) => ActivitySource::Library { exercise },
        None => ActivitySource::Manual {
            name: activity
                .manual_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| builder_defaults::UNTITLED_ACTIVITY.to_owned()),
            video_url: activity.manual_video_url,
            image: activity.manual_image,
        },
    };

    let mut sets = activity.prescriptions;
    sets.sort_by_key(|p| p.set_number);
    BuilderActivity {
        id: Some(activity.id),
        temp_id: generate_temp_id(),
        order_in_block,
        source,
        notes: activity.notes.unwrap_or_default(),
        prescriptions: sets
            .into_iter()
            .enumerate()
            .map(|(index, set)| adapt_prescription(set, position(index) + 1))
            .collect(),
    }
}

fn adapt_prescription(set: PrescriptionDetail, set_number: u32) -> BuilderPrescription {
    BuilderPrescription {
        id: Some(set.id),
        temp_id: generate_temp_id(),
        set_number,
        set_tag: set.set_tag,
        primary_metric: set.primary_metric,
        reps: set.reps,
        weight: set.weight,
        is_per_side: set.is_per_side,
        tempo: set.tempo,
        intensity_type: set.intensity_type,
        intensity_value: set.intensity_value,
        duration_seconds: set.duration_seconds,
        distance: set.distance,
        calories: set.calories,
        rest_seconds: set.rest_seconds,
        prescription_notes: set.prescription_notes.unwrap_or_default(),
        extra_data: set.extra_data,
    }
}

fn position(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
