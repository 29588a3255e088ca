// ABOUTME: Re-exports command modules for pierre-program-cli
// ABOUTME: Program file commands and catalog browsing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod library;
pub mod program;
