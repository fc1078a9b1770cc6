//! Authentication endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::Validate;

use storynest_core::{AppError, AppResult};
use storynest_entity::admin::AdminIdentity;

use crate::http::ApiClient;

/// Credentials for the login endpoint.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Payload for the register endpoint.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1))]
    pub last_name: String,
}

/// Response shape shared by login and register.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque access token.
    pub access_token: String,
    /// Opaque refresh token.
    pub refresh_token: String,
    /// Remote user id.
    pub user_id: String,
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the account has admin privileges.
    pub is_admin: bool,
}

impl AuthResponse {
    /// Extract the identity fields for the session store.
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.user_id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_admin: self.is_admin,
        }
    }
}

/// Wrapper for the `/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    /// Shared HTTP client.
    client: Arc<ApiClient>,
}

impl AuthApi {
    /// Create the wrapper.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Authenticate with email and password.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client.post_json("/auth/login", request).await
    }

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client.post_json("/auth/register", request).await
    }

    /// Invalidate the server-side session.
    pub async fn logout(&self) -> AppResult<()> {
        self.client.post_empty("/auth/logout").await
    }
}
