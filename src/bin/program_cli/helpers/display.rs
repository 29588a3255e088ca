// ABOUTME: Output formatting helpers for pierre-program-cli
// ABOUTME: Provides consistent display functions for validation, feeds, and exercise pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_program_builder::builder::ProgramBuilderStore;
use pierre_program_builder::models::{
    DiscoveryFeed, Exercise, ProgramDetail, ProgramSummary,
};
use pierre_program_builder::pagination::Page;

/// Display the program outline followed by its validation result
pub fn display_validation(store: &ProgramBuilderStore, errors: &[String]) {
    let program = store.program();
    println!("\nProgram: {}", program.title);
    println!("{}", "=".repeat(60));
    for week in &program.weeks {
        println!("  {} ({} sessions)", week.display_name(), week.sessions.len());
        for session in &week.sessions {
            println!(
                "    - {} [{}] ~{} min",
                session.title,
                session.day_of_week.label(),
                session.estimated_minutes()
            );
        }
    }
    println!("{}", "=".repeat(60));

    if errors.is_empty() {
        println!("Program is valid and ready to save");
        return;
    }
    println!("{} validation error(s):", errors.len());
    for error in errors {
        println!("  • {error}");
    }
}

/// Display the result of a successful save
pub fn display_saved_program(program: &ProgramDetail) {
    println!("\nProgram saved");
    println!("   ID: {}", program.id);
    println!("   Title: {}", program.title);
    println!("   Weeks: {}", program.weeks.len());
}

/// Display every discovery feed section
pub fn display_feed(feed: &DiscoveryFeed) {
    if feed.is_empty() {
        println!("Discovery feed is empty");
        return;
    }
    display_section("New", &feed.new);
    display_section("Featured", &feed.featured);
    display_section("Trending", &feed.trending);
}

fn display_section(name: &str, programs: &[ProgramSummary]) {
    println!("\n{name} ({})", programs.len());
    println!("{}", "-".repeat(40));
    for program in programs {
        println!(
            "  #{:<6} {} ({}, {})",
            program.id,
            program.title,
            program.focus.label(),
            program.difficulty.label()
        );
    }
}

/// Display one page of exercises
pub fn display_exercises(page: &Page<Exercise>) {
    println!(
        "\nExercises: showing {} of {}",
        page.results.len(),
        page.count
    );
    for exercise in &page.results {
        let category = exercise.category.as_deref().unwrap_or("Uncategorized");
        let marker = if exercise.is_official { "*" } else { " " };
        println!("  {marker}#{:<6} {} ({category})", exercise.id, exercise.name);
    }
    if page.has_more() {
        println!("  ... more results available");
    }
}
