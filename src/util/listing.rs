//! Filter encoding and page-window math for the listing pages.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::api::Query;

pub const COLLEGE_PAGE_SIZE: u32 = 12;
pub const QUESTION_LIMIT: u32 = 20;
/// Maximum number of numbered page buttons.
pub const PAGE_WINDOW: u32 = 5;

/// Append `(key, value)` unless the value is blank.
fn push_filter(query: &mut Query, key: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        query.push((key, value.to_owned()));
    }
}

/// Consultancy page filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollegeFilters {
    pub kind: String,
    pub state: String,
    pub city: String,
    pub search: String,
}

impl CollegeFilters {
    pub fn query(&self, pagination: &Pagination) -> Query {
        let mut query = Query::new();
        push_filter(&mut query, "type", &self.kind);
        push_filter(&mut query, "state", &self.state);
        push_filter(&mut query, "city", &self.city);
        push_filter(&mut query, "search", &self.search);
        query.push(("page", pagination.page.to_string()));
        query.push(("limit", pagination.limit.to_string()));
        query
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Course and roadmap filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    pub category: String,
    pub difficulty: String,
    pub search: String,
}

impl CatalogFilters {
    pub fn query(&self) -> Query {
        let mut query = Query::new();
        push_filter(&mut query, "category", &self.category);
        push_filter(&mut query, "difficulty", &self.difficulty);
        push_filter(&mut query, "search", &self.search);
        query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExamFilters {
    pub category: String,
    pub level: String,
}

impl ExamFilters {
    pub fn query(&self) -> Query {
        let mut query = Query::new();
        push_filter(&mut query, "category", &self.category);
        push_filter(&mut query, "level", &self.level);
        query
    }
}

pub fn questions_query() -> Query {
    vec![("limit", QUESTION_LIMIT.to_string())]
}

pub fn featured_colleges_query() -> Query {
    vec![("featured", "true".to_owned()), ("limit", "6".to_owned())]
}

pub fn featured_exams_query() -> Query {
    vec![("featured", "true".to_owned()), ("limit", "4".to_owned())]
}

pub fn popular_courses_query() -> Query {
    vec![("limit", "6".to_owned())]
}

/// Server-side pagination cursor. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            pages: 0,
        }
    }

    /// Record the totals from a listing response.
    pub fn update_totals(&mut self, total: u64, pages: u32) {
        self.total = total;
        self.pages = pages;
    }

    /// Back to page 1, used whenever a filter changes.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move to `page`, clamped to the known range.
    pub fn go_to(&mut self, page: u32) {
        self.page = page.clamp(1, self.pages.max(1));
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Controls are only shown when there is more than one page.
    pub fn show_controls(&self) -> bool {
        self.pages > 1
    }

    /// Numbered buttons to show: up to five pages, centred on the current
    /// page and pinned to either end near the edges.
    pub fn page_window(&self) -> Vec<u32> {
        let count = self.pages.min(PAGE_WINDOW);
        let first = if self.pages <= PAGE_WINDOW || self.page <= 3 {
            1
        } else if self.page + 2 >= self.pages {
            self.pages - (PAGE_WINDOW - 1)
        } else {
            self.page - 2
        };
        (first..first + count).collect()
    }
}
