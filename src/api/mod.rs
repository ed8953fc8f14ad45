//! HTTP client for the StockChef API.
//!
//! One [`ApiClient`] wraps a reqwest client with the base URL and an
//! optional bearer token baked in. Resource operations live in the
//! per-domain submodules and all funnel through the request helpers
//! here, so status handling and error mapping stay in one place.

pub mod auth;
pub mod error;
pub mod inventory;
pub mod recipes;
pub mod users;
pub mod validation;

pub use error::ApiError;

use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::models::HealthStatus;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for one StockChef server, holding the API root URL.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for the given API root, attaching a bearer token
    /// to every request when one is provided.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, token, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::validation("Session token contains invalid characters"))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check service health.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse(response).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::parse(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).form(fields).send().await?;
        Self::parse(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::parse(response).await
    }

    /// Map a response to a typed value, turning non-success statuses
    /// into the matching error variant.
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.bytes().await.unwrap_or_default();
        let detail = error::detail_message(&body);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::unauthorized(
                detail.unwrap_or_else(|| "Not authenticated".to_string()),
            ));
        }

        Err(ApiError::api(
            status.as_u16(),
            detail.unwrap_or_else(|| "Something went wrong".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_bearer_token_attached_to_requests() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::GET)
                .path("/health")
                .header("authorization", "Bearer tok-123");
            then.status(200)
                .json_body(json!({"status": "healthy", "message": "StockChef API is running"}));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok-123")).unwrap();
        let health = client.health().await.unwrap();

        assert_eq!(mock.calls(), 1);
        assert!(health.is_healthy());
    }

    #[tokio::test]
    async fn test_health_without_token() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::GET).path("/health");
            then.status(200)
                .json_body(json!({"status": "healthy", "message": "StockChef API is running"}));
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let health = client.health().await.unwrap();
        assert_eq!(health.message, "StockChef API is running");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_error_variant() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::GET).path("/health");
            then.status(401)
                .json_body(json!({"detail": "Could not validate credentials"}));
        });

        let client = ApiClient::new(&server.base_url(), Some("stale")).unwrap();
        let err = client.health().await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("Could not validate credentials"));
    }

    #[tokio::test]
    async fn test_server_error_carries_detail() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::GET).path("/health");
            then.status(400).json_body(json!({"detail": "Bad request"}));
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let err = client.health().await.unwrap_err();

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bad request");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::GET).path("/health");
            then.status(502).body("<html>bad gateway</html>");
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let err = client.health().await.unwrap_err();

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Something went wrong");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::GET).path("/health");
            then.status(200)
                .json_body(json!({"status": "healthy", "message": "ok"}));
        });

        let base = format!("{}/", server.base_url());
        let client = ApiClient::new(&base, None).unwrap();
        assert!(client.health().await.is_ok());
    }

    #[test]
    fn test_invalid_token_rejected_before_any_request() {
        let err = ApiClient::new("http://localhost:8000/api", Some("bad\ntoken")).unwrap_err();
        assert!(err.is_validation());
    }
}
