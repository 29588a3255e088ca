// ABOUTME: Environment-based client configuration for the program backend
// ABOUTME: Parses base URL, bearer token, timeouts, and page size with typed validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pierre_program_core::constants::pagination;
use pierre_program_core::errors::{AppError, AppResult};
use tracing::info;
use url::Url;

/// Environment variable names
pub mod keys {
    /// Backend origin
    pub const BASE_URL: &str = "PROGRAM_API_BASE_URL";
    /// Bearer token
    pub const TOKEN: &str = "PROGRAM_API_TOKEN";
    /// Request timeout in seconds
    pub const TIMEOUT_SECS: &str = "PROGRAM_API_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "PROGRAM_API_CONNECT_TIMEOUT_SECS";
    /// List page size
    pub const PAGE_SIZE: &str = "PROGRAM_PAGE_SIZE";
}

/// Default backend origin
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the program backend
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, endpoint paths are joined onto it
    pub base_url: Url,
    /// Bearer token sent on every request when set
    pub api_token: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// Items requested per list page
    pub page_size: u32,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration for a backend origin with default timeouts and paging
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            page_size: pagination::DEFAULT_PAGE_SIZE,
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to an unparsable value,
    /// the base URL is not http(s), or the page size is out of range.
    pub fn from_env() -> AppResult<Self> {
        let base_url = env::var(keys::BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let mut config = Self::new(&base_url)?;

        config.api_token = env::var(keys::TOKEN)
            .ok()
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty());
        config.timeout = Duration::from_secs(env_parse(keys::TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?);
        config.connect_timeout = Duration::from_secs(env_parse(
            keys::CONNECT_TIMEOUT_SECS,
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?);
        config.page_size = env_parse(keys::PAGE_SIZE, pagination::DEFAULT_PAGE_SIZE)?;

        config.validate()?;
        info!("{}", config.summary());
        Ok(config)
    }

    /// Use a bearer token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero timeout or a page size outside
    /// `1..=MAX_PAGE_SIZE`.
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout.is_zero() {
            return Err(AppError::config_invalid(
                keys::TIMEOUT_SECS,
                "must be greater than zero",
            ));
        }
        if self.connect_timeout.is_zero() {
            return Err(AppError::config_invalid(
                keys::CONNECT_TIMEOUT_SECS,
                "must be greater than zero",
            ));
        }
        if self.page_size == 0 || self.page_size > pagination::MAX_PAGE_SIZE {
            return Err(AppError::config_invalid(
                keys::PAGE_SIZE,
                format!("must be between 1 and {}", pagination::MAX_PAGE_SIZE),
            ));
        }
        Ok(())
    }

    /// Absolute URL for an endpoint path such as `/api/v1/core/programs/7/`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the path cannot be joined onto the base URL.
    pub fn endpoint_url(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::config_invalid(keys::BASE_URL, e))
    }

    /// One-line summary for logging, without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Program API client: base_url={}, auth={}, timeout={}s, connect_timeout={}s, page_size={}",
            self.base_url,
            if self.api_token.is_some() { "bearer" } else { "none" },
            self.timeout.as_secs(),
            self.connect_timeout.as_secs(),
            self.page_size,
        )
    }
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| AppError::config_invalid(keys::BASE_URL, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::config_invalid(
            keys::BASE_URL,
            format!("unsupported scheme '{other}', expected http or https"),
        )),
    }
}

fn env_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(key, format!("'{raw}': {e}"))),
        _ => Ok(default),
    }
}
