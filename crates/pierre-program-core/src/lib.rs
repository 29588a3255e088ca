// ABOUTME: Core types and constants for the Pierre program builder
// ABOUTME: Foundation crate with error handling, display models, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Program Core
//!
//! Foundation crate providing shared types and constants for the Pierre program
//! builder. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ApiError`
//! - **constants**: Builder defaults, validation messages, and endpoint paths
//! - **pagination**: Paginated list envelope returned by the backend
//! - **models**: Exercise, program, discovery, and profile display types
//! - **serde_helpers**: Lenient decoders for Django REST framework payloads

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Paginated list envelope for read-path responses
pub mod pagination;

/// Core data models (Exercise, ProgramDetail, PublicUser, domain enums)
pub mod models;

/// Lenient serde decoders for backend decimal fields
pub mod serde_helpers;
