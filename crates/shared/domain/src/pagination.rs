//! Pagination and sorting types for list queries.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Largest offset SQL backends accept (a signed 64-bit integer)
const MAX_SQL_OFFSET: u64 = i64::MAX as u64;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// User attributes a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSortField {
    #[default]
    Id,
    Username,
    CreatedAt,
}

/// Ordering for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sort {
    pub field: UserSortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: UserSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: UserSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Page request (1-based page number)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    #[serde(default)]
    pub sort: Option<Sort>,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page,
            sort: None,
        }
    }

    pub fn sorted(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Zero-based page index (page 0 is treated as page 1).
    ///
    /// Capped so that `index * limit` stays a valid SQL offset (`i64::MAX`).
    pub fn index(&self) -> u64 {
        let max_index = MAX_SQL_OFFSET / self.limit();
        self.page.saturating_sub(1).min(max_index)
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Whether a page exists after this one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
