//! Pagination and search value types shared between services and the
//! repository boundary.

use serde::{Deserialize, Serialize};

/// A page request: zero-based page index and page size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// One page of results together with the total element count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

/// Composable post search filter.
///
/// Every predicate is independently optional; present predicates combine
/// with logical AND. The tag predicate matches against the post's owned
/// tag set and switches the result ordering to newest-first by post
/// creation time; without it, pages come back in default store order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostSearchCriteria {
    /// Substring match on the title.
    pub title: Option<String>,
    /// Exact match on the creating identity.
    pub created_by: Option<String>,
    /// Exact match on a tag name.
    pub tag: Option<String>,
}

impl PostSearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.created_by.is_none() && self.tag.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
    }

    #[test]
    fn page_map_preserves_paging_fields() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(1, 3), 7);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.size, 3);
        assert_eq!(mapped.total, 7);
    }
}
