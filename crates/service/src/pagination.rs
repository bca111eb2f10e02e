//! Pagination utilities for service layer
//!
//! `Pagination` normalizes caller input, `PageRequest` adds the sort order and
//! `Page` carries one slice of results plus total-count metadata.

use models::query::SortOrder;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 0-based page index
    pub page: u64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self { Self { page, per_page } }

    /// Clamp page size into `1..=MAX_PAGE_SIZE`; returns `(page_idx, per_page)`.
    pub fn normalize(self) -> (u64, u64) {
        (self.page, self.per_page.clamp(1, MAX_PAGE_SIZE))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 0, per_page: DEFAULT_PAGE_SIZE } }
}

/// Page index/size plus the caller's sort order over entity columns `C`.
#[derive(Clone, Debug)]
pub struct PageRequest<C> {
    pub pagination: Pagination,
    pub sort: Vec<SortOrder<C>>,
}

impl<C> PageRequest<C> {
    pub fn new(pagination: Pagination, sort: Vec<SortOrder<C>>) -> Self { Self { pagination, sort } }

    pub fn of(page: u64, per_page: u64) -> Self { Self::new(Pagination::new(page, per_page), Vec::new()) }

    pub fn sorted_by(mut self, order: SortOrder<C>) -> Self {
        self.sort.push(order);
        self
    }
}

impl<C> Default for PageRequest<C> {
    fn default() -> Self { Self::new(Pagination::default(), Vec::new()) }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    pub fn is_last(&self) -> bool { self.page + 1 >= self.total_pages }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
