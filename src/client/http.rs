// ABOUTME: reqwest-backed ProgramApi against the program backend REST endpoints
// ABOUTME: Bearer auth when configured, timeouts from ClientConfig, non-2xx mapped to ApiError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use pierre_program_core::constants::{endpoints, pagination};
use pierre_program_core::errors::{ApiError, ApiResult, AppError, AppResult};
use pierre_program_core::models::{
    DiscoveryFeed, Exercise, ExerciseQuery, ProgramDetail, ProgramQuery, ProgramSummary,
    PublicUser,
};
use pierre_program_core::pagination::{decode_list, Page};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::ProgramApi;
use crate::config::ClientConfig;
use crate::transform::{decode_discovery_feed, SaveProgramPayload};

/// Program API over HTTP
///
/// No retries are attempted; every failure is returned to the caller.
#[derive(Debug, Clone)]
pub struct HttpProgramApi {
    client: Client,
    config: ClientConfig,
}

impl HttpProgramApi {
    /// Build a client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns an internal error if the underlying HTTP client cannot be
    /// constructed (for example when no TLS backend is available).
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Build a client from environment variables
    ///
    /// # Errors
    ///
    /// Returns configuration errors from [`ClientConfig::from_env`] or
    /// construction errors from [`HttpProgramApi::new`].
    pub fn from_env() -> AppResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.config
            .endpoint_url(path)
            .map_err(|e| ApiError::transport(path, e.to_string()))
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let builder = self
            .client
            .request(method, self.url(path)?)
            .header("Accept", "application/json");
        Ok(match &self.config.api_token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        })
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::status(path, status.as_u16(), body));
        }
        debug!(endpoint = path, status = status.as_u16(), "Program API call succeeded");

        Ok(response.json::<Value>().await?)
    }

    async fn get_typed<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let value = self.send(path, self.request(Method::GET, path)?).await?;
        serde_json::from_value(value).map_err(|e| ApiError::decode(path, e.to_string()))
    }
}

#[async_trait]
impl ProgramApi for HttpProgramApi {
    async fn save_full_program(&self, payload: &SaveProgramPayload) -> ApiResult<ProgramDetail> {
        let path = endpoints::SAVE_FULL_PROGRAM;
        let request = self.request(Method::POST, path)?.json(payload);
        let value = self.send(path, request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::decode(path, e.to_string()))
    }

    async fn get_program(&self, program_id: i64) -> ApiResult<ProgramDetail> {
        self.get_typed(&endpoints::program_detail(program_id)).await
    }

    async fn list_public_programs(&self, query: &ProgramQuery) -> ApiResult<Page<ProgramSummary>> {
        let path = endpoints::PUBLIC_PROGRAMS;
        let mut query = query.clone();
        query.page_size.get_or_insert(self.config.page_size);
        let request = self.request(Method::GET, path)?.query(&query);
        Ok(decode_list(self.send(path, request).await?))
    }

    async fn discovery_feed(&self) -> ApiResult<DiscoveryFeed> {
        let path = endpoints::DISCOVERY_FEED;
        let request = self.request(Method::GET, path)?;
        Ok(decode_discovery_feed(self.send(path, request).await?))
    }

    async fn search_exercises(&self, query: &ExerciseQuery) -> ApiResult<Page<Exercise>> {
        let path = endpoints::EXERCISE_SEARCH;
        let mut query = query.clone();
        query
            .page_size
            .get_or_insert(pagination::EXERCISE_PAGE_SIZE);
        let request = self.request(Method::GET, path)?.query(&query);
        Ok(decode_list(self.send(path, request).await?))
    }

    async fn get_public_user(&self, user_id: i64) -> ApiResult<PublicUser> {
        self.get_typed(&endpoints::public_user(user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Serve one canned HTTP response on a loopback port
    fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0_u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ClientConfig::new(&format!("http://{addr}")).unwrap();
        let api = HttpProgramApi::new(config).unwrap();
        let err = api.get_program(7).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }), "{err:?}");
        assert_eq!(err.endpoint(), "/api/v1/core/programs/7/");
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let base = one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!",
        );
        let api = HttpProgramApi::new(ClientConfig::new(&base).unwrap()).unwrap();
        let err = api.discovery_feed().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let base = one_shot_server(
            "HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 23\r\nConnection: close\r\n\r\n{\"detail\":\"Not found.\"}",
        );
        let api = HttpProgramApi::new(ClientConfig::new(&base).unwrap()).unwrap();
        match api.get_public_user(3).await.unwrap_err() {
            ApiError::Status { status, body, .. } => {
                assert_eq!(status, 404);
                assert!(body.contains("Not found."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_urls_join_onto_base() {
        let config = ClientConfig::new("https://api.example.com").unwrap();
        let api = HttpProgramApi::new(config).unwrap();
        assert_eq!(
            api.url(endpoints::SAVE_FULL_PROGRAM).unwrap().as_str(),
            "https://api.example.com/api/v1/core/programs/save-full/"
        );
        assert_eq!(
            api.url(&endpoints::public_user(3)).unwrap().as_str(),
            "https://api.example.com/api/v1/accounts/users/3/"
        );
    }
}
