//! Authentication payloads.

use serde::{Deserialize, Serialize};

/// Bearer token issued by `POST /auth/token` and `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub dietary_preference_id: i64,
    pub cuisine_preference_id: i64,
}
