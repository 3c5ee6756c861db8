use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One page of a server-paginated list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    pub total_count: u64,
    /// 1-based
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub has_next_page: bool,
}

impl<T> PagedResult<T> {
    pub fn empty(page_size: u32) -> Self {
        Self {
            data: Vec::new(),
            total_count: 0,
            page_number: 1,
            page_size,
            total_pages: 0,
            has_previous_page: false,
            has_next_page: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Common paging/search parameters (`?pageNumber=&pageSize=&search=&includeDeleted=`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_number: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_deleted: bool,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            include_deleted: false,
        }
    }
}

impl PageQuery {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Set the search text; blank input clears it.
    pub fn set_search(&mut self, text: &str) {
        let trimmed = text.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.page_number = 1;
    }

    pub fn go_to(&mut self, page_number: u32) {
        self.page_number = page_number.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_paged_result() {
        let page: PagedResult<String> = serde_json::from_value(json!({
            "data": ["a", "b"],
            "totalCount": 12,
            "pageNumber": 2,
            "pageSize": 2,
            "totalPages": 6,
            "hasPreviousPage": true,
            "hasNextPage": true
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.page_number, 2);
        assert!(page.has_previous_page && page.has_next_page);
    }

    #[test]
    fn test_empty_page() {
        let page = PagedResult::<u8>::empty(50);
        assert!(page.is_empty());
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 50);
    }

    #[test]
    fn test_set_search_resets_page_and_trims() {
        let mut q = PageQuery::default();
        q.go_to(4);
        q.set_search("  shoes ");
        assert_eq!(q.search.as_deref(), Some("shoes"));
        assert_eq!(q.page_number, 1);
        q.set_search("   ");
        assert!(q.search.is_none());
    }

    #[test]
    fn test_go_to_clamps_to_first_page() {
        let mut q = PageQuery::default();
        q.go_to(0);
        assert_eq!(q.page_number, 1);
    }
}
