// ABOUTME: Integration tests for environment-driven client configuration
// ABOUTME: Covers defaults, overrides, invalid values, and token redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use pierre_program_builder::config::environment::{
    keys, ClientConfig, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use pierre_program_builder::constants::pagination;
use pierre_program_builder::ErrorCode;
use serial_test::serial;

const ALL_KEYS: [&str; 5] = [
    keys::BASE_URL,
    keys::TOKEN,
    keys::TIMEOUT_SECS,
    keys::CONNECT_TIMEOUT_SECS,
    keys::PAGE_SIZE,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.base_url.as_str(), format!("{DEFAULT_BASE_URL}/"));
    assert_eq!(config.api_token, None);
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(
        config.connect_timeout,
        Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
    );
    assert_eq!(config.page_size, pagination::DEFAULT_PAGE_SIZE);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var(keys::BASE_URL, "https://programs.example.com");
    env::set_var(keys::TOKEN, "  abc123  ");
    env::set_var(keys::TIMEOUT_SECS, "5");
    env::set_var(keys::CONNECT_TIMEOUT_SECS, "2");
    env::set_var(keys::PAGE_SIZE, "50");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.base_url.as_str(), "https://programs.example.com/");
    assert_eq!(config.api_token.as_deref(), Some("abc123"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.connect_timeout, Duration::from_secs(2));
    assert_eq!(config.page_size, 50);
    assert!(config.summary().contains("auth=bearer"));
}

#[test]
#[serial]
fn test_blank_token_means_anonymous() {
    clear_env();
    env::set_var(keys::TOKEN, "   ");
    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_token, None);
    assert!(config.summary().contains("auth=none"));
}

#[test]
#[serial]
fn test_unparsable_timeout_is_config_invalid() {
    clear_env();
    env::set_var(keys::TIMEOUT_SECS, "soon");
    let err = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(keys::TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_zero_timeout_is_config_invalid() {
    clear_env();
    env::set_var(keys::CONNECT_TIMEOUT_SECS, "0");
    let err = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(keys::CONNECT_TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_page_size_out_of_range() {
    clear_env();
    for raw in ["0", "101", "-3"] {
        env::set_var(keys::PAGE_SIZE, raw);
        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "page size {raw}");
    }
    clear_env();
}

#[test]
#[serial]
fn test_non_http_base_url_rejected() {
    clear_env();
    env::set_var(keys::BASE_URL, "ftp://programs.example.com");
    let err = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("unsupported scheme"));
}

#[test]
fn test_debug_output_hides_token() {
    let config = ClientConfig::new("https://programs.example.com")
        .unwrap()
        .with_token("super-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(!config.summary().contains("super-secret"));
}

#[test]
fn test_validate_accepts_max_page_size() {
    let mut config = ClientConfig::new(DEFAULT_BASE_URL).unwrap();
    config.page_size = pagination::MAX_PAGE_SIZE;
    assert!(config.validate().is_ok());
}
