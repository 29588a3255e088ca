// ABOUTME: Error types for the backend program API collaborator
// ABOUTME: Transport, status, decode, and auth failures with conversion into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;

use super::{AppError, ErrorCode};

/// Failures reported by the program API collaborator.
///
/// The builder core never interprets these beyond routing them to the caller;
/// retries and user-facing messaging belong to the UI layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("Request to {endpoint} failed: {reason}")]
    Transport {
        /// Endpoint path that was being called
        endpoint: String,
        /// Underlying transport failure
        reason: String,
    },

    /// The backend answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path that was being called
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body as returned by the backend
        body: String,
    },

    /// The backend response did not match the expected shape
    #[error("Failed to decode response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint path that was being called
        endpoint: String,
        /// Decoder message
        reason: String,
    },

    /// The backend rejected the credentials
    #[error("Authentication rejected by {endpoint}")]
    Unauthorized {
        /// Endpoint path that was being called
        endpoint: String,
    },
}

impl ApiError {
    /// Create a transport error
    #[must_use]
    pub fn transport(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Create a status error, mapping 401/403 onto `Unauthorized`
    #[must_use]
    pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        if matches!(status, 401 | 403) {
            return Self::Unauthorized { endpoint };
        }
        Self::Status {
            endpoint,
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Get the endpoint associated with this error
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::Unauthorized { endpoint } => endpoint,
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Transport { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::Status { status: 404, .. } => ErrorCode::ResourceNotFound,
            Self::Status { status: 400, .. } => ErrorCode::InvalidInput,
            Self::Status { .. } => ErrorCode::ExternalServiceError,
            Self::Decode { .. } => ErrorCode::SerializationError,
            Self::Unauthorized { .. } => ErrorCode::AuthRequired,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        let details = match &error {
            ApiError::Status { status, body, .. } => json!({ "status": status, "body": body }),
            other => json!({ "endpoint": other.endpoint() }),
        };
        Self::new(error.code(), error.to_string())
            .with_details(details)
            .with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        let endpoint = error
            .url()
            .map_or_else(|| "<unknown>".to_owned(), |url| url.path().to_owned());
        if error.is_decode() {
            return Self::decode(endpoint, error.to_string());
        }
        match error.status() {
            Some(status) => Self::status(endpoint, status.as_u16(), String::new()),
            None => Self::transport(endpoint, error.to_string()),
        }
    }
}

/// Result type for API collaborator calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses_collapse() {
        let err = ApiError::status("/api/v1/core/programs/save-full/", 401, "");
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert_eq!(err.code(), ErrorCode::AuthRequired);
    }

    #[test]
    fn test_status_error_maps_into_app_error() {
        let err = ApiError::status("/api/v1/core/programs/7/", 404, "{\"detail\":\"Not found.\"}");
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::ResourceNotFound);
        assert_eq!(app.details["status"], 404);
    }
}
