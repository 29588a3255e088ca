// ABOUTME: Paginated list envelope returned by the program backend
// ABOUTME: Decodes {results, count, next, previous} envelopes or bare arrays into Page<T>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Link to an adjacent page.
///
/// Standard list endpoints return absolute URLs; the exercise search endpoint
/// returns bare page numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageLink {
    /// Page number
    Number(u64),
    /// Absolute URL of the page
    Url(String),
}

/// One page of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub results: Vec<T>,
    /// Total number of items across all pages
    pub count: u64,
    /// Link to the next page, if any
    #[serde(default)]
    pub next: Option<PageLink>,
    /// Link to the previous page, if any
    #[serde(default)]
    pub previous: Option<PageLink>,
}

impl<T> Page<T> {
    /// Create an empty page
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            next: None,
            previous: None,
        }
    }

    /// Wrap a bare item list as a single complete page
    #[must_use]
    pub fn from_items(results: Vec<T>) -> Self {
        let count = results.len() as u64;
        Self {
            results,
            count,
            next: None,
            previous: None,
        }
    }

    /// Whether another page follows this one
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Whether the page carries no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    results: Vec<T>,
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next: Option<PageLink>,
    #[serde(default)]
    previous: Option<PageLink>,
}

/// Decode a list response into a page.
///
/// Accepts either the paginated envelope or a bare JSON array. Any other
/// shape, or items that fail to decode, yield an empty page instead of an
/// error.
#[must_use]
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Page<T> {
    match value {
        Value::Array(_) => match serde_json::from_value::<Vec<T>>(value) {
            Ok(items) => Page::from_items(items),
            Err(e) => {
                warn!(error = %e, "list response items failed to decode, using empty page");
                Page::empty()
            }
        },
        Value::Object(map) if map.contains_key("results") => {
            match serde_json::from_value::<Envelope<T>>(Value::Object(map)) {
                Ok(envelope) => {
                    let count = envelope
                        .count
                        .unwrap_or(envelope.results.len() as u64);
                    Page {
                        results: envelope.results,
                        count,
                        next: envelope.next,
                        previous: envelope.previous,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "paginated envelope failed to decode, using empty page");
                    Page::empty()
                }
            }
        }
        other => {
            warn!(
                kind = json_kind(&other),
                "unrecognized list response shape, using empty page"
            );
            Page::empty()
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
