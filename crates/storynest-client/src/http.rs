//! HTTP plumbing shared by all endpoint wrappers.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use storynest_auth::SessionStore;
use storynest_core::config::api::ApiConfig;
use storynest_core::types::ApiErrorResponse;
use storynest_core::{AppError, AppResult};

/// HTTP client for the remote commerce API.
///
/// Attaches `Authorization: Bearer <token>` from the session store whenever
/// a session is established; the store stays the single source of truth for
/// credentials, this client only reads them.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying reqwest client.
    http: ReqwestClient,
    /// API base URL, without a trailing slash.
    base_url: String,
    /// Session state supplying the bearer token.
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> AppResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::external_service(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Make a GET request with query parameters.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let request = self.request(Method::GET, path).query(query);
        self.send_json(request).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let request = self.request(Method::POST, path).json(body);
        self.send_json(request).await
    }

    /// Make a POST request with no body and no expected response payload.
    pub async fn post_empty(&self, path: &str) -> AppResult<()> {
        let request = self.request(Method::POST, path);
        self.send_empty(request).await
    }

    /// Make a PUT request with a JSON body.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let request = self.request(Method::PUT, path).json(body);
        self.send_json(request).await
    }

    /// Make a PATCH request with a JSON body.
    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let request = self.request(Method::PATCH, path).json(body);
        self.send_json(request).await
    }

    /// Make a PATCH request with no body.
    pub async fn patch_no_body<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let request = self.request(Method::PATCH, path);
        self.send_json(request).await
    }

    /// Make a DELETE request, ignoring any response body.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let request = self.request(Method::DELETE, path);
        self.send_empty(request).await
    }

    /// Make a multipart POST request (file uploads).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        let request = self.request(Method::POST, path).multipart(form);
        self.send_json(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "API request");
        let mut request = self.http.request(method, &url);
        if let Some(token) = self.session.access_token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = self.send(request).await?;
        response.json().await.map_err(|e| {
            error!(error = %e, "Failed to deserialize API response");
            AppError::external_service(format!("Malformed API response: {e}"))
        })
    }

    async fn send_empty(&self, request: RequestBuilder) -> AppResult<()> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            error!(error = %e, "API request failed");
            AppError::external_service(format!("Request failed: {e}"))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(%status, body, "API request rejected");
        Err(Self::error_for(status, body))
    }

    /// Map an HTTP error status to the unified error taxonomy.
    fn error_for(status: StatusCode, body: String) -> AppError {
        // Prefer the API's structured message when it sends one.
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        let message = if message.is_empty() {
            format!("API returned {status}")
        } else {
            message
        };

        match status {
            StatusCode::UNAUTHORIZED => AppError::authentication(message),
            StatusCode::FORBIDDEN => AppError::authorization(message),
            StatusCode::NOT_FOUND => AppError::not_found(message),
            StatusCode::CONFLICT => AppError::conflict(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::validation(message)
            }
            _ => AppError::external_service(format!("{status}: {message}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storynest_core::error::ErrorKind;
    use storynest_entity::admin::AdminIdentity;
    use storynest_store::MemoryStore;

    fn client_for(server: &mockito::ServerGuard, authed: bool) -> ApiClient {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new())));
        if authed {
            session
                .set_auth(
                    AdminIdentity {
                        id: "u-1".to_string(),
                        email: "a@b.test".to_string(),
                        first_name: "A".to_string(),
                        last_name: "B".to_string(),
                        is_admin: true,
                    },
                    "test-token",
                    "test-refresh",
                )
                .unwrap();
        }
        let config = ApiConfig {
            base_url: server.url(),
            timeout_seconds: 5,
        };
        ApiClient::new(&config, session).unwrap()
    }

    #[derive(Debug, serde::Deserialize)]
    struct Ping {
        message: String,
    }

    #[tokio::test]
    async fn test_attaches_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"ok"}"#)
            .create_async()
            .await;

        let client = client_for(&server, true);
        let reply: Ping = client.get_json("/ping", &[]).await.unwrap();
        assert_eq!(reply.message, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_token_when_signed_out() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"ok"}"#)
            .create_async()
            .await;

        let client = client_for(&server, false);
        let _: Ping = client.get_json("/ping", &[]).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        let _m401 = server
            .mock("GET", "/unauthorized")
            .with_status(401)
            .with_body(r#"{"error":"AUTH","message":"token expired"}"#)
            .create_async()
            .await;
        let _m404 = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("no such thing")
            .create_async()
            .await;

        let client = client_for(&server, true);

        let err = client
            .get_json::<Ping>("/unauthorized", &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, "token expired");

        let err = client.get_json::<Ping>("/missing", &[]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
