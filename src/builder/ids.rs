// ABOUTME: Client-local temporary identifiers for builder tree nodes
// ABOUTME: TempId newtype plus a generator combining wall clock, counter, and random suffix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use pierre_program_core::constants::builder_defaults::{TEMP_ID_PREFIX, TEMP_ID_RANDOM_LEN};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// Process-wide sequence so ids minted in the same millisecond still differ
static TEMP_ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Stable key of a builder node, present from creation until teardown
///
/// Sent to the backend as `temp_id` so created rows can be correlated with
/// their client-side placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TempId(String);

impl TempId {
    /// Wrap an existing identifier
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id was minted by [`generate_temp_id`]
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.0.starts_with(TEMP_ID_PREFIX)
    }
}

impl fmt::Display for TempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TempId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TempId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TempId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Mint a fresh identifier of the form `temp_{millis}_{seq}_{rand}`
#[must_use]
pub fn generate_temp_id() -> TempId {
    let millis = Utc::now().timestamp_millis();
    let sequence = TEMP_ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_ID_RANDOM_LEN)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();
    TempId(format!("{TEMP_ID_PREFIX}{millis}_{sequence}_{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<TempId> = (0..10_000).map(|_| generate_temp_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_generated_id_format() {
        let id = generate_temp_id();
        assert!(id.is_temporary());
        let parts: Vec<&str> = id.as_str().split('_').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "temp");
        assert!(parts[1].parse::<i64>().is_ok());
        assert!(parts[2].parse::<u64>().is_ok());
        assert_eq!(parts[3].len(), TEMP_ID_RANDOM_LEN);
        assert!(parts[3]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_foreign_ids_are_not_temporary() {
        assert!(!TempId::from("42").is_temporary());
        assert!(TempId::from("temp_1_2_abcdef").is_temporary());
    }

    #[test]
    fn test_serializes_transparently() {
        let id = TempId::from("temp_1_0_aaaaaa");
        assert_eq!(serde_json::to_value(&id).unwrap(), "temp_1_0_aaaaaa");
    }
}
