//! Offset pagination over list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: i64 = 20;
pub const MAX_PER_PAGE: i64 = 100;

/// Page selection taken from query parameters
///
/// Out-of-range values are clamped rather than rejected: page is at least 1,
/// page size sits between 1 and [`MAX_PER_PAGE`].
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationParams {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self { page, per_page }
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
    }

    pub fn limit(&self) -> i64 {
        self.per_page()
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }
}

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, per_page: i64, total_count: i64) -> Self {
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + per_page - 1) / per_page
        };
        Self {
            page,
            per_page,
            total_count,
            total_pages,
        }
    }

    pub fn for_params(params: &PaginationParams, total_count: i64) -> Self {
        Self::new(params.page(), params.per_page(), total_count)
    }
}
