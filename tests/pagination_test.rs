// ABOUTME: Integration tests for read-path list and feed decoding
// ABOUTME: Envelope and bare-array lists, numeric page links, and empty fallbacks for bad shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_program_builder::models::{Difficulty, Exercise, ProgramSummary};
use pierre_program_builder::transform::{decode_discovery_feed, decode_list, Page, PageLink};
use serde_json::json;

use common::init_test_logging;

fn summary(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "focus": "Strength",
        "difficulty": "Advanced",
        "is_public": true,
        "week_count": 4,
        "session_count": 12
    })
}

#[test]
fn test_paginated_envelope_with_url_links() {
    init_test_logging();
    let page: Page<ProgramSummary> = decode_list(json!({
        "count": 45,
        "next": "https://api.example.com/api/v1/core/public-programs/?page=3",
        "previous": "https://api.example.com/api/v1/core/public-programs/?page=1",
        "results": [summary(1, "Strongman Prep"), summary(2, "Barbell Basics")]
    }));

    assert_eq!(page.count, 45);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].difficulty, Difficulty::Advanced);
    assert_eq!(page.results[1].session_count, 12);
    assert!(page.has_more());
    assert_eq!(
        page.previous,
        Some(PageLink::Url(
            "https://api.example.com/api/v1/core/public-programs/?page=1".to_owned()
        ))
    );
}

#[test]
fn test_exercise_search_envelope_with_page_numbers() {
    init_test_logging();
    let page: Page<Exercise> = decode_list(json!({
        "results": [
            { "id": 3, "name": "Deadlift", "category": "Back", "is_official": true }
        ],
        "count": 51,
        "next": 2,
        "previous": null,
        "page": 1,
        "page_size": 50,
        "total_pages": 2
    }));

    assert_eq!(page.next, Some(PageLink::Number(2)));
    assert_eq!(page.previous, None);
    assert_eq!(page.results[0].name, "Deadlift");
    assert_eq!(page.results[0].default_sets, 3);
}

#[test]
fn test_bare_array_becomes_single_page() {
    init_test_logging();
    let page: Page<ProgramSummary> = decode_list(json!([summary(5, "Run Club")]));
    assert_eq!(page.count, 1);
    assert!(!page.has_more());
    assert_eq!(page.results[0].title, "Run Club");
}

#[test]
fn test_envelope_without_count_uses_result_length() {
    init_test_logging();
    let page: Page<ProgramSummary> =
        decode_list(json!({ "results": [summary(1, "A"), summary(2, "B")] }));
    assert_eq!(page.count, 2);
}

#[test]
fn test_unrecognized_shapes_yield_empty_page() {
    init_test_logging();
    for body in [
        json!(null),
        json!("oops"),
        json!({ "detail": "Not found." }),
        json!({ "results": "not a list" }),
        json!([{ "title": "missing id" }]),
    ] {
        let page: Page<ProgramSummary> = decode_list(body);
        assert!(page.is_empty());
        assert_eq!(page.count, 0);
    }
}

#[test]
fn test_discovery_feed_sections_default_to_empty() {
    init_test_logging();
    let feed = decode_discovery_feed(json!({
        "featured": [summary(9, "Template Strength")],
        "trending": []
    }));
    assert!(feed.new.is_empty());
    assert_eq!(feed.featured[0].id, 9);
    assert!(!feed.is_empty());

    assert!(decode_discovery_feed(json!([summary(1, "A")])).is_empty());
    assert!(decode_discovery_feed(json!({ "new": 7 })).is_empty());
}
