//! Book catalog endpoints.

use std::path::Path;
use std::sync::Arc;

use validator::Validate;

use storynest_core::types::{PageRequest, PageResponse};
use storynest_core::{AppError, AppResult};
use storynest_entity::book::{BookDetail, BookSummary, CreateBookRequest, UpdateBookRequest};

use crate::http::ApiClient;

/// Optional filters for the book list endpoint.
#[derive(Debug, Clone, Default)]
pub struct BookListFilter {
    /// Free-text search.
    pub search: Option<String>,
    /// Filter by audience.
    pub ideal_for: Option<String>,
    /// Minimum age bound.
    pub age_min: Option<u32>,
    /// Maximum age bound.
    pub age_max: Option<u32>,
    /// Filter to featured books.
    pub featured: Option<bool>,
    /// Sort expression.
    pub sort: Option<String>,
}

/// Wrapper for the book endpoints.
#[derive(Debug, Clone)]
pub struct BookApi {
    /// Shared HTTP client.
    client: Arc<ApiClient>,
}

impl BookApi {
    /// Create the wrapper.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List books (admin view). This endpoint pages from 1.
    pub async fn list(
        &self,
        page: &PageRequest,
        filter: &BookListFilter,
    ) -> AppResult<PageResponse<BookSummary>> {
        let mut query = vec![
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ];
        if let Some(search) = &filter.search {
            query.push(("search", search.clone()));
        }
        if let Some(ideal_for) = &filter.ideal_for {
            query.push(("ideal_for", ideal_for.clone()));
        }
        if let Some(age_min) = filter.age_min {
            query.push(("age_min", age_min.to_string()));
        }
        if let Some(age_max) = filter.age_max {
            query.push(("age_max", age_max.to_string()));
        }
        if let Some(featured) = filter.featured {
            query.push(("featured", featured.to_string()));
        }
        if let Some(sort) = &filter.sort {
            query.push(("sort", sort.clone()));
        }
        self.client.get_json("/admin/books", &query).await
    }

    /// Fetch a book by id (admin view).
    pub async fn get(&self, id: &str) -> AppResult<BookDetail> {
        self.client.get_json(&format!("/admin/books/{id}"), &[]).await
    }

    /// Fetch a book by its public slug.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<BookDetail> {
        self.client.get_json(&format!("/books/{slug}"), &[]).await
    }

    /// Create a book.
    pub async fn create(&self, request: &CreateBookRequest) -> AppResult<BookDetail> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client.post_json("/admin/books", request).await
    }

    /// Create a book together with its media files in one multipart request.
    ///
    /// The book payload travels as a JSON string under the `book` part,
    /// followed by the optional cover image and any gallery images.
    pub async fn create_with_files(
        &self,
        request: &CreateBookRequest,
        cover_image: Option<&Path>,
        additional_images: &[&Path],
    ) -> AppResult<BookDetail> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let mut form =
            reqwest::multipart::Form::new().text("book", serde_json::to_string(request)?);
        if let Some(path) = cover_image {
            form = form.part("coverImage", file_part(path).await?);
        }
        for path in additional_images {
            form = form.part("additionalImages", file_part(path).await?);
        }
        self.client.post_multipart("/admin/books", form).await
    }

    /// Update a book.
    pub async fn update(&self, id: &str, request: &UpdateBookRequest) -> AppResult<BookDetail> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client
            .put_json(&format!("/admin/books/{id}"), request)
            .await
    }

    /// Delete a book.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.client.delete(&format!("/admin/books/{id}")).await
    }

    /// Upload an image for an existing book.
    pub async fn upload_image(
        &self,
        id: &str,
        file: &Path,
        image_type: &str,
    ) -> AppResult<serde_json::Value> {
        let form = reqwest::multipart::Form::new()
            .part("file", file_part(file).await?)
            .text("type", image_type.to_string());
        self.client
            .post_multipart(&format!("/admin/books/{id}/images"), form)
            .await
    }
}

/// Read a file into a multipart part carrying its file name.
pub(crate) async fn file_part(path: &Path) -> AppResult<reqwest::multipart::Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(reqwest::multipart::Part::bytes(bytes).file_name(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storynest_auth::SessionStore;
    use storynest_core::config::api::ApiConfig;
    use storynest_store::MemoryStore;

    fn api_for(server: &mockito::ServerGuard) -> BookApi {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new())));
        let config = ApiConfig {
            base_url: server.url(),
            timeout_seconds: 5,
        };
        BookApi::new(Arc::new(ApiClient::new(&config, session).unwrap()))
    }

    #[tokio::test]
    async fn test_list_sends_one_based_page() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/books")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "2".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "20".into()),
                mockito::Matcher::UrlEncoded("search".into(), "fox".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "items": [{
                        "id": "b1",
                        "slug": "brave-little-fox",
                        "title": "The Brave Little Fox",
                        "idealFor": "everyone",
                        "ageMin": 3,
                        "ageMax": 8,
                        "basePrice": 100.0,
                        "finalPrice": 75.0
                    }],
                    "pagination": {"page": 2, "limit": 20, "total": 21, "totalPages": 2}
                }"#,
            )
            .create_async()
            .await;

        let api = api_for(&server);
        let filter = BookListFilter {
            search: Some("fox".to_string()),
            ..Default::default()
        };
        let page = api.list(&PageRequest::new(2, 20), &filter).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.page, 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_featured_filter_serializes_as_bool_string() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/books")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "1".into()),
                mockito::Matcher::UrlEncoded("featured".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items": [], "pagination": {"page": 1, "limit": 20, "total": 0, "totalPages": 1}}"#,
            )
            .create_async()
            .await;

        let api = api_for(&server);
        let filter = BookListFilter {
            featured: Some(true),
            ..Default::default()
        };
        let page = api.list(&PageRequest::new(1, 20), &filter).await.unwrap();
        assert!(page.items.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_validates_before_sending() {
        let server = mockito::Server::new_async().await;
        let api = api_for(&server);
        let bad = CreateBookRequest {
            title: String::new(),
            slug: "x".to_string(),
            short_description: None,
            description: None,
            genre: None,
            ideal_for: "everyone".to_string(),
            age_min: 3,
            age_max: 8,
            page_count: 24,
            base_price: 10.0,
            discount_percentage: None,
            is_featured: None,
            is_bestseller: None,
            display_order: None,
        };
        let err = api.create(&bad).await.unwrap_err();
        assert_eq!(err.kind, storynest_core::error::ErrorKind::Validation);
    }
}
