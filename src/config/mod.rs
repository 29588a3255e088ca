// ABOUTME: Configuration module for the program builder client
// ABOUTME: Environment-only settings for the backend connection and list paging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: backend URL, bearer token, timeouts, and page size read
//!   from environment variables

/// Client configuration from environment variables
pub mod environment;

pub use environment::ClientConfig;
