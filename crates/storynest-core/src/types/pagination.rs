//! Pagination types for list endpoints.
//!
//! The console pages are 1-based; parts of the remote API (the Spring-backed
//! customer and admin-user endpoints) use 0-based page indices. The
//! translation between the two conventions lives here.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Return the 0-based page index used by the Spring-backed endpoints.
    pub fn backend_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response envelope matching the admin API list shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

/// Pagination metadata (1-based).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(limit.max(1))
        };
        Self {
            items,
            pagination: PageInfo {
                page,
                limit,
                total,
                total_pages,
            },
        }
    }

    /// Whether there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.pagination.page < self.pagination.total_pages
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_index_is_zero_based() {
        assert_eq!(PageRequest::new(1, 20).backend_index(), 0);
        assert_eq!(PageRequest::new(5, 20).backend_index(), 4);
        // Page 0 is clamped to 1 before translation.
        assert_eq!(PageRequest::new(0, 20).backend_index(), 0);
    }

    #[test]
    fn test_page_size_clamped() {
        assert_eq!(PageRequest::new(1, 0).limit, 1);
        assert_eq!(PageRequest::new(1, 500).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages() {
        let resp: PageResponse<u32> = PageResponse::new(vec![], 1, 20, 0);
        assert_eq!(resp.pagination.total_pages, 1);
        assert!(!resp.has_next());

        let resp: PageResponse<u32> = PageResponse::new(vec![], 1, 20, 41);
        assert_eq!(resp.pagination.total_pages, 3);
        assert!(resp.has_next());
    }
}
