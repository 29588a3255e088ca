// ABOUTME: Wire transform between the builder tree and backend JSON
// ABOUTME: Save payload on the way out, detail adaptation and list decoding on the way in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Wire Transform
//!
//! - [`to_save_payload`] walks the tree and emits the bulk save body with both
//!   `id` and `temp_id` at every level
//! - [`from_program_detail`] adapts a persisted program into an editable tree
//! - [`decode_list`] and [`decode_discovery_feed`] turn read-path responses
//!   into display types without ever failing on an unexpected shape

/// Load boundary adaptation
pub mod load;
/// Bulk save payload types
pub mod payload;
/// Read-path response decoding
pub mod read;

pub use load::from_program_detail;
pub use payload::{
    to_save_payload, ActivityPayload, BlockPayload, PrescriptionPayload, SaveProgramPayload,
    SessionPayload, WeekPayload,
};
pub use read::{decode_discovery_feed, decode_list, decode_program_detail, Page, PageLink};
