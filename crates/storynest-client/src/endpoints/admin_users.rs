//! Admin-account management endpoints.
//!
//! Served by the same Spring backend as the customer routes, so list calls
//! page from 0 and come back in the Spring envelope.

use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use storynest_core::types::{PageRequest, PageResponse};
use storynest_core::{AppError, AppResult};
use storynest_entity::admin::{
    AdminUserAccount, CreateAdminUserRequest, UpdateAdminUserRoleRequest,
};

use crate::http::ApiClient;
use crate::spring::SpringPage;

/// Sort direction accepted by the admin-users list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Sorting options for the admin-users list. Defaults to newest first.
#[derive(Debug, Clone)]
pub struct AdminUserSort {
    /// Field to sort by (camelCase, as the backend names it).
    pub sort_by: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Default for AdminUserSort {
    fn default() -> Self {
        Self {
            sort_by: "createdAt".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AccessCheckResponse {
    #[serde(rename = "hasAccess")]
    has_access: bool,
}

/// Wrapper for the admin-account endpoints.
#[derive(Debug, Clone)]
pub struct AdminUserApi {
    /// Shared HTTP client.
    client: Arc<ApiClient>,
}

impl AdminUserApi {
    /// Create the wrapper.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List admin accounts.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: &AdminUserSort,
    ) -> AppResult<PageResponse<AdminUserAccount>> {
        let query = vec![
            ("page", page.backend_index().to_string()),
            ("size", page.limit.to_string()),
            ("sortBy", sort.sort_by.clone()),
            ("sortDirection", sort.direction.as_str().to_string()),
        ];
        let spring: SpringPage<AdminUserAccount> =
            self.client.get_json("/admin/admin-users", &query).await?;
        Ok(spring.into_page_response())
    }

    /// Fetch a single admin account.
    pub async fn get(&self, id: &str) -> AppResult<AdminUserAccount> {
        self.client
            .get_json(&format!("/admin/admin-users/{id}"), &[])
            .await
    }

    /// Fetch the admin account behind the current session.
    pub async fn me(&self) -> AppResult<AdminUserAccount> {
        self.client.get_json("/admin/admin-users/me", &[]).await
    }

    /// Create a new admin account.
    pub async fn create(&self, request: &CreateAdminUserRequest) -> AppResult<AdminUserAccount> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client.post_json("/admin/admin-users", request).await
    }

    /// Change an admin account's role.
    pub async fn update_role(
        &self,
        id: &str,
        request: &UpdateAdminUserRoleRequest,
    ) -> AppResult<AdminUserAccount> {
        self.client
            .patch_json(&format!("/admin/admin-users/{id}/role"), request)
            .await
    }

    /// Flip an admin account between active and suspended.
    pub async fn toggle_status(&self, id: &str) -> AppResult<AdminUserAccount> {
        self.client
            .patch_no_body(&format!("/admin/admin-users/{id}/toggle-status"))
            .await
    }

    /// Delete an admin account.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.client
            .delete(&format!("/admin/admin-users/{id}"))
            .await
    }

    /// Ask the backend whether the current session may manage admin accounts.
    pub async fn check_access(&self) -> AppResult<bool> {
        let response: AccessCheckResponse = self
            .client
            .get_json("/admin/admin-users/check-access", &[])
            .await?;
        Ok(response.has_access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storynest_auth::SessionStore;
    use storynest_core::config::api::ApiConfig;
    use storynest_entity::admin::AdminRole;
    use storynest_store::MemoryStore;

    fn api_for(server: &mockito::ServerGuard) -> AdminUserApi {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new())));
        let config = ApiConfig {
            base_url: server.url(),
            timeout_seconds: 5,
        };
        AdminUserApi::new(Arc::new(ApiClient::new(&config, session).unwrap()))
    }

    #[tokio::test]
    async fn test_list_defaults_to_newest_first() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/admin-users")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "0".into()),
                mockito::Matcher::UrlEncoded("size".into(), "20".into()),
                mockito::Matcher::UrlEncoded("sortBy".into(), "createdAt".into()),
                mockito::Matcher::UrlEncoded("sortDirection".into(), "DESC".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"content":[],"number":0,"size":20,"totalElements":0,"totalPages":0}"#,
            )
            .create_async()
            .await;

        let api = api_for(&server);
        let page = api
            .list(&PageRequest::new(1, 20), &AdminUserSort::default())
            .await
            .unwrap();
        assert!(page.items.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_rejects_weak_password_locally() {
        let server = mockito::Server::new_async().await;
        let api = api_for(&server);
        let request = CreateAdminUserRequest {
            first_name: "Mira".to_string(),
            last_name: "Kline".to_string(),
            email: "mira@example.test".to_string(),
            password: "short".to_string(),
            role: AdminRole::Support,
        };
        let err = api.create(&request).await.unwrap_err();
        assert_eq!(err.kind, storynest_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_check_access() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/admin/admin-users/check-access")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"hasAccess":true}"#)
            .create_async()
            .await;

        let api = api_for(&server);
        assert!(api.check_access().await.unwrap());
    }
}
