//! Login and registration.

use crate::api::{ApiClient, ApiError};
use crate::models::{RegisterRequest, TokenResponse};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// The server exposes an OAuth2 password flow, so credentials go as
    /// form fields with the email under `username`.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.post_form("/auth/token", &[("username", email), ("password", password)])
            .await
    }

    /// Register a new account. The server signs the user straight in
    /// and returns a token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.post_json("/auth/register", request).await
    }
}
