//! Translation for the Spring-backed endpoints.
//!
//! The customer and admin-user endpoints page from 0 and wrap results in a
//! Spring `Page` envelope; the rest of the console speaks 1-based pages and
//! the flat `items`/`pagination` shape. The conversion lives here so no
//! caller ever sees a 0-based index.

use serde::Deserialize;

use storynest_core::types::PageResponse;

/// A Spring Data `Page` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringPage<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// 0-based page index.
    pub number: u64,
    /// Page size.
    pub size: u64,
    /// Total items across all pages.
    pub total_elements: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl<T> SpringPage<T> {
    /// Convert to the console's 1-based envelope.
    pub fn into_page_response(self) -> PageResponse<T> {
        let mut response =
            PageResponse::new(self.content, self.number + 1, self.size, self.total_elements);
        response.pagination.total_pages = self.total_pages.max(1);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_based_page_becomes_one_based() {
        let json = serde_json::json!({
            "content": [1, 2, 3],
            "number": 2,
            "size": 3,
            "totalElements": 9,
            "totalPages": 3
        });
        let page: SpringPage<u32> = serde_json::from_value(json).unwrap();
        let response = page.into_page_response();
        assert_eq!(response.pagination.page, 3);
        assert_eq!(response.pagination.limit, 3);
        assert_eq!(response.pagination.total, 9);
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_content_is_empty() {
        let json = serde_json::json!({
            "number": 0,
            "size": 20,
            "totalElements": 0,
            "totalPages": 0
        });
        let page: SpringPage<u32> = serde_json::from_value(json).unwrap();
        let response = page.into_page_response();
        assert!(response.items.is_empty());
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.total_pages, 1);
    }
}
