//! Customer endpoints.
//!
//! The customer routes are served by a Spring backend that pages from 0 and
//! wraps results in its own page envelope; this wrapper translates both
//! directions so callers only ever see 1-based pages.

use std::sync::Arc;

use storynest_core::AppResult;
use storynest_core::types::{PageRequest, PageResponse};
use storynest_entity::customer::{Customer, CustomerPersonalization, UpdateCustomerRequest};
use storynest_entity::order::Order;

use crate::http::ApiClient;
use crate::spring::SpringPage;

/// Wrapper for the customer endpoints.
#[derive(Debug, Clone)]
pub struct CustomerApi {
    /// Shared HTTP client.
    client: Arc<ApiClient>,
}

impl CustomerApi {
    /// Create the wrapper.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List customers, optionally filtered by a free-text search.
    pub async fn list(
        &self,
        page: &PageRequest,
        search: Option<&str>,
    ) -> AppResult<PageResponse<Customer>> {
        let mut query = vec![
            ("page", page.backend_index().to_string()),
            ("size", page.limit.to_string()),
        ];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        let spring: SpringPage<Customer> = self.client.get_json("/admin/users", &query).await?;
        Ok(spring.into_page_response())
    }

    /// Fetch a single customer.
    pub async fn get(&self, user_id: &str) -> AppResult<Customer> {
        self.client
            .get_json(&format!("/admin/users/{user_id}"), &[])
            .await
    }

    /// Fetch a customer's order history.
    pub async fn orders(&self, user_id: &str) -> AppResult<Vec<Order>> {
        self.client
            .get_json(&format!("/admin/users/{user_id}/orders"), &[])
            .await
    }

    /// Fetch a customer's saved personalizations.
    pub async fn personalizations(&self, user_id: &str) -> AppResult<Vec<CustomerPersonalization>> {
        self.client
            .get_json(&format!("/admin/users/{user_id}/personalizations"), &[])
            .await
    }

    /// Update a customer's profile.
    pub async fn update(
        &self,
        user_id: &str,
        request: &UpdateCustomerRequest,
    ) -> AppResult<Customer> {
        self.client
            .put_json(&format!("/admin/users/{user_id}"), request)
            .await
    }

    /// Delete a customer account.
    pub async fn delete(&self, user_id: &str) -> AppResult<()> {
        self.client
            .delete(&format!("/admin/users/{user_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storynest_auth::SessionStore;
    use storynest_core::config::api::ApiConfig;
    use storynest_store::MemoryStore;

    fn api_for(server: &mockito::ServerGuard) -> CustomerApi {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new())));
        let config = ApiConfig {
            base_url: server.url(),
            timeout_seconds: 5,
        };
        CustomerApi::new(Arc::new(ApiClient::new(&config, session).unwrap()))
    }

    #[tokio::test]
    async fn test_list_translates_page_index() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/users")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "1".into()),
                mockito::Matcher::UrlEncoded("size".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"content":[],"number":1,"size":20,"totalElements":25,"totalPages":2}"#,
            )
            .create_async()
            .await;

        let api = api_for(&server);
        let page = PageRequest::new(2, 20);
        let response = api.list(&page, None).await.unwrap();

        // The backend answered with its 0-based index; callers see page 2.
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.pagination.total, 25);
        mock.assert_async().await;
    }
}
