// ABOUTME: Integration tests for deep-copy duplication at every tree level
// ABOUTME: Verifies fresh identities throughout, copy naming, placement, and descendant counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use pierre_program_builder::builder::{
    BlockUpdate, BuilderWeek, FreshClone, SessionUpdate, TempId, WeekUpdate,
};

use common::populated_store;

fn week_keys(week: &BuilderWeek) -> HashSet<TempId> {
    let mut keys = HashSet::from([week.temp_id.clone()]);
    for session in &week.sessions {
        keys.insert(session.temp_id.clone());
        for block in &session.blocks {
            keys.insert(block.temp_id.clone());
            for activity in &block.activities {
                keys.insert(activity.temp_id.clone());
                keys.extend(activity.prescriptions.iter().map(|p| p.temp_id.clone()));
            }
        }
    }
    keys
}

fn week_ids(week: &BuilderWeek) -> Vec<Option<i64>> {
    let mut ids = vec![week.id];
    for session in &week.sessions {
        ids.push(session.id);
        for block in &session.blocks {
            ids.push(block.id);
            for activity in &block.activities {
                ids.push(activity.id);
                ids.extend(activity.prescriptions.iter().map(|p| p.id));
            }
        }
    }
    ids
}

fn shape(week: &BuilderWeek) -> Vec<usize> {
    let mut counts = vec![week.sessions.len()];
    for session in &week.sessions {
        counts.push(session.blocks.len());
        for block in &session.blocks {
            counts.push(block.activities.len());
            counts.extend(block.activities.iter().map(|a| a.prescriptions.len()));
        }
    }
    counts
}

#[test]
fn test_duplicate_week_copies_whole_subtree_with_fresh_keys() {
    let (mut store, ids) = populated_store();
    let copy_id = store.duplicate_week(&ids.week_1).unwrap();

    let program = store.program();
    assert_eq!(program.weeks.len(), 3);
    let original = &program.weeks[0];
    let copy = &program.weeks[2];

    assert_eq!(copy.temp_id, copy_id);
    assert_eq!(copy.week_number, 3);
    assert_eq!(copy.week_name, "Week 1 (Copy)");
    assert_eq!(shape(copy), shape(original));
    assert!(week_keys(copy).is_disjoint(&week_keys(original)));
    assert!(week_ids(copy).iter().all(Option::is_none));
    assert_eq!(
        copy.sessions[0].blocks[0].activities[0].display_name(),
        "Back Squat"
    );
}

#[test]
fn test_duplicate_persisted_week_clears_backend_ids() {
    let (store, _) = populated_store();
    let mut week = store.program().weeks[0].clone();
    week.id = Some(10);
    week.sessions[0].id = Some(20);
    week.sessions[0].blocks[0].id = Some(30);
    week.sessions[0].blocks[0].activities[0].id = Some(40);
    week.sessions[0].blocks[0].activities[0].prescriptions[0].id = Some(50);

    let copy = week.fresh_clone();
    assert!(week_ids(&copy).iter().all(Option::is_none));
    assert!(week_keys(&copy).is_disjoint(&week_keys(&week)));
    assert_eq!(week.id, Some(10));
}

#[test]
fn test_reduplicating_a_copy_stacks_the_suffix() {
    let (mut store, ids) = populated_store();
    store.update_week(
        &ids.week_2,
        WeekUpdate {
            week_name: Some("Peak".to_owned()),
            ..WeekUpdate::default()
        },
    );
    let copy = store.duplicate_week(&ids.week_2).unwrap();
    store.duplicate_week(&copy).unwrap();

    let names: Vec<&str> = store
        .program()
        .weeks
        .iter()
        .map(|w| w.week_name.as_str())
        .collect();
    assert_eq!(names, ["Week 1", "Peak", "Peak (Copy)", "Peak (Copy) (Copy)"]);
}

#[test]
fn test_duplicate_session_appends_to_same_week() {
    let (mut store, ids) = populated_store();
    let copy_id = store.duplicate_session(&ids.week_1, &ids.session_1).unwrap();

    let sessions = &store.program().weeks[0].sessions;
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[1].temp_id, copy_id);
    assert_eq!(sessions[1].title, "Lower Body (Copy)");
    assert_eq!(sessions[1].blocks.len(), sessions[0].blocks.len());
    assert_ne!(sessions[1].blocks[0].temp_id, sessions[0].blocks[0].temp_id);
}

#[test]
fn test_duplicate_untitled_session_stays_untitled() {
    let (mut store, ids) = populated_store();
    store.update_session(&ids.week_2, &ids.session_2, SessionUpdate::title(""));
    store.duplicate_session(&ids.week_2, &ids.session_2).unwrap();
    assert_eq!(store.program().weeks[1].sessions[1].title, "");
}

#[test]
fn test_duplicate_block_suffixes_named_blocks_only() {
    let (mut store, ids) = populated_store();
    let unnamed_copy = store.duplicate_block(&ids.block).unwrap();
    store.update_block(
        &ids.block,
        BlockUpdate {
            block_name: Some(Some("Strength".to_owned())),
            ..BlockUpdate::default()
        },
    );
    store.duplicate_block(&ids.block).unwrap();

    let blocks = &store.program().weeks[0].sessions[0].blocks;
    let summary: Vec<(u32, Option<&str>)> = blocks
        .iter()
        .map(|b| (b.block_order, b.block_name.as_deref()))
        .collect();
    assert_eq!(
        summary,
        [
            (0, Some("Strength")),
            (1, None),
            (2, Some("Strength (Copy)")),
        ]
    );
    assert_eq!(blocks[1].temp_id, unnamed_copy);
    assert_eq!(blocks[2].activities.len(), 1);
}

#[test]
fn test_duplicate_activity_copies_sets_to_block_end() {
    let (mut store, ids) = populated_store();
    store.add_manual_activity(&ids.block).unwrap();
    let copy_id = store.duplicate_activity(&ids.squat).unwrap();

    let activities = &store.program().weeks[0].sessions[0].blocks[0].activities;
    assert_eq!(activities.len(), 3);
    let copy = &activities[2];
    assert_eq!(copy.temp_id, copy_id);
    assert_eq!(copy.order_in_block, 2);
    assert_eq!(copy.source, activities[0].source);
    let numbers: Vec<u32> = copy.prescriptions.iter().map(|p| p.set_number).collect();
    assert_eq!(numbers, [1, 2]);
    assert_ne!(copy.prescriptions[0].temp_id, activities[0].prescriptions[0].temp_id);
}

#[test]
fn test_duplicate_prescription_takes_next_set_number() {
    let (mut store, ids) = populated_store();
    let copy_id = store.duplicate_prescription(&ids.first_set).unwrap();

    let sets = &store.program().weeks[0].sessions[0].blocks[0].activities[0].prescriptions;
    assert_eq!(sets.len(), 3);
    assert_eq!(sets[2].temp_id, copy_id);
    assert_eq!(sets[2].set_number, 3);
    assert_eq!(sets[2].id, None);
}
