// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, sample backend JSON, and populated builder stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_program_builder`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use std::sync::Once;

use pierre_program_builder::builder::{
    ActivityPath, BlockPath, PrescriptionPath, ProgramBuilderStore, ProgramInfoUpdate,
    SessionUpdate, TempId,
};
use pierre_program_builder::models::Exercise;
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Library exercise with backend defaults
pub fn sample_exercise(id: i64, name: &str) -> Exercise {
    let mut exercise = Exercise::new(id, name);
    exercise.category = Some("Legs".to_owned());
    exercise.muscle_groups = Some("Quadriceps, Glutes".to_owned());
    exercise.is_official = true;
    exercise
}

/// Keys of the nodes created by [`populated_store`]
pub struct SampleIds {
    pub week_1: TempId,
    pub week_2: TempId,
    pub session_1: TempId,
    pub session_2: TempId,
    pub block: BlockPath,
    pub squat: ActivityPath,
    pub first_set: PrescriptionPath,
}

/// Valid two-week program: week 1 holds a squat block with two sets
pub fn populated_store() -> (ProgramBuilderStore, SampleIds) {
    init_test_logging();
    let mut store = ProgramBuilderStore::new();
    store.update_program_info(ProgramInfoUpdate::title("Base Strength"));

    let week_1 = store.add_week();
    let week_2 = store.add_week();
    let session_1 = store.add_session(&week_1).unwrap();
    let session_2 = store.add_session(&week_2).unwrap();
    store.update_session(&week_1, &session_1, SessionUpdate::title("Lower Body"));
    store.update_session(&week_2, &session_2, SessionUpdate::title("Upper Body"));

    let block_id = store.add_block(&week_1, &session_1).unwrap();
    let block = BlockPath {
        week_id: week_1.clone(),
        session_id: session_1.clone(),
        block_id,
    };
    let squat_id = store
        .add_activity_from_exercise(&block, sample_exercise(12, "Back Squat"))
        .unwrap();
    let squat = block.activity(squat_id);
    store.add_prescription(&squat).unwrap();

    let first_set_id = store.program().weeks[0].sessions[0].blocks[0].activities[0]
        .prescriptions[0]
        .temp_id
        .clone();
    let first_set = squat.prescription(first_set_id);

    (
        store,
        SampleIds {
            week_1,
            week_2,
            session_1,
            session_2,
            block,
            squat,
            first_set,
        },
    )
}

/// Squat sets, listed out of `set_number` order
fn squat_sets_json() -> Value {
    let heavy = json!({
        "id": 512,
        "set_number": 3,
        "set_tag": "N",
        "primary_metric": "reps",
        "reps": "5",
        "weight": "102.50",
        "rest_seconds": 180
    });
    let warmup = json!({
        "id": 511,
        "set_number": 1,
        "set_tag": "W",
        "primary_metric": "reps",
        "reps": "8",
        "weight": 60,
        "rest_seconds": 90,
        "intensity_type": "rpe",
        "intensity_value": "6"
    });
    json!([heavy, warmup])
}

/// Main block 301: a blank manual activity ahead of the squat in array order
fn main_block_json() -> Value {
    let blank = json!({
        "id": 403,
        "order_in_block": 5,
        "exercise": null,
        "manual_name": "  ",
        "prescriptions": []
    });
    let exercise = json!({
        "id": 12,
        "name": "Back Squat",
        "category": "Legs",
        "is_official": true
    });
    let squat = json!({
        "id": 401,
        "order_in_block": 2,
        "exercise": exercise,
        "notes": "Brace hard",
        "prescriptions": squat_sets_json()
    });
    json!({
        "id": 301,
        "block_order": 1,
        "scheme_type": "STANDARD",
        "block_name": null,
        "activities": [blank, squat]
    })
}

/// Finisher block 302 with a manual distance activity
fn finisher_block_json() -> Value {
    let set = json!({
        "id": 502,
        "set_number": 1,
        "set_tag": "N",
        "primary_metric": "distance",
        "distance": "25.50",
        "weight": null,
        "extra_data": {}
    });
    let sled = json!({
        "id": 402,
        "order_in_block": 0,
        "exercise": null,
        "manual_name": "Sled Push",
        "manual_video_url": null,
        "manual_image": null,
        "notes": "",
        "prescriptions": [set]
    });
    json!({
        "id": 302,
        "block_order": 4,
        "scheme_type": "AMRAP",
        "block_name": "Finisher",
        "block_notes": null,
        "duration_target": 600,
        "rounds_target": null,
        "activities": [sled]
    })
}

fn first_week_json() -> Value {
    let session = json!({
        "id": 201,
        "title": "Engine Day",
        "description": "Mixed work",
        "focus": "Lift",
        "day_of_week": "Monday",
        "day_ordering": 0,
        "blocks": [finisher_block_json(), main_block_json()]
    });
    json!({
        "id": 101,
        "week_number": 1,
        "week_name": "",
        "notes": "Build the base",
        "sessions": [session]
    })
}

fn deload_week_json() -> Value {
    let session = json!({
        "id": 202,
        "title": "Easy Row",
        "focus": "Cardio",
        "day_of_week": "Wednesday",
        "day_ordering": 0,
        "estimated_session_time": "0",
        "blocks": []
    });
    json!({
        "id": 102,
        "week_number": 2,
        "week_name": "Deload",
        "notes": null,
        "sessions": [session]
    })
}

/// Program detail as the backend renders it: decimals as strings, children out of order
pub fn program_detail_json() -> Value {
    json!({
        "id": 41,
        "user": 7,
        "title": "Hybrid Engine",
        "description": null,
        "focus": "Hybrid",
        "difficulty": "Intermediate",
        "image": null,
        "video_url": "https://videos.example.com/engine.mp4",
        "price": "19.99",
        "is_public": true,
        "is_template": false,
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-02T10:00:00Z",
        "weeks": [deload_week_json(), first_week_json()]
    })
}
