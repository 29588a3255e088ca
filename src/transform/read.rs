// ABOUTME: Read-path decoding of list, feed, and detail responses into display types
// ABOUTME: Falls back to empty results for unrecognized list and feed shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_program_core::errors::{AppError, AppResult};
use pierre_program_core::models::{DiscoveryFeed, ProgramDetail};
use serde_json::Value;
use tracing::warn;

pub use pierre_program_core::pagination::{decode_list, Page, PageLink};

/// Decode the discovery feed; missing sections are empty
///
/// A response that is not a feed object yields an empty feed.
#[must_use]
pub fn decode_discovery_feed(value: Value) -> DiscoveryFeed {
    if !value.is_object() {
        warn!("Discovery feed response is not an object, using empty feed");
        return DiscoveryFeed::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(error = %e, "Discovery feed failed to decode, using empty feed");
        DiscoveryFeed::default()
    })
}

/// Decode a program detail response
///
/// # Errors
///
/// Returns a serialization error when the body is not a program detail.
pub fn decode_program_detail(value: Value) -> AppResult<ProgramDetail> {
    serde_json::from_value(value)
        .map_err(|e| AppError::serialization(format!("invalid program detail: {e}")))
}
