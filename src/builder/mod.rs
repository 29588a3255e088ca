// ABOUTME: Program builder state machine: tree model, identities, factories, reducer, store
// ABOUTME: The only component allowed to mutate the program tree during an editing session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Program Builder
//!
//! A normalized Program → Week → Session → Block → Activity → Prescription
//! tree edited through a closed set of [`BuilderAction`]s. Every edit is a
//! pure transition computed by [`reduce`]; [`ProgramBuilderStore`] holds the
//! current tree and exposes one method per command.
//!
//! Ordering invariants hold after every command:
//!
//! - `week_number` and `set_number` run `1..=N` in array order
//! - `block_order` and `order_in_block` run `0..N` in array order
//! - sessions are ordered by array position only
//!
//! Commands addressing an unknown temp id leave the tree unchanged.

/// Structural edit commands and temp id paths
pub mod actions;
/// Default nodes and fresh-identity deep copies
pub mod factory;
/// Temporary identifiers
pub mod ids;
/// Tree node types and partial updates
pub mod model;
/// Pure state transition
pub mod reducer;
/// Editing-session store
pub mod store;

pub use actions::{ActivityPath, BlockPath, BuilderAction, PrescriptionPath, SessionPath};
pub use factory::{
    create_activity_from_exercise, create_empty_block, create_empty_prescription,
    create_empty_program, create_empty_session, create_empty_week, create_manual_activity,
    FreshClone,
};
pub use ids::{generate_temp_id, TempId};
pub use model::{
    ActivitySource, ActivityUpdate, BlockUpdate, BuilderActivity, BuilderBlock,
    BuilderPrescription, BuilderProgram, BuilderSession, BuilderWeek, PrescriptionUpdate,
    ProgramInfoUpdate, SessionUpdate, WeekUpdate,
};
pub use reducer::{reduce, try_reduce, Unresolved};
pub use store::ProgramBuilderStore;
