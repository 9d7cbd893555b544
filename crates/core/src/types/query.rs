//! List query parameters.

use serde::{Deserialize, Serialize};

/// Sort key for customer lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by name.
    #[default]
    Name,
    /// Sort by email address.
    Email,
    /// Sort by username.
    Username,
    /// Sort by city.
    City,
    /// Sort by country.
    Country,
    /// Sort by registration date.
    RegisteredDate,
}

impl SortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "username" => Some(Self::Username),
            "city" => Some(Self::City),
            "country" => Some(Self::Country),
            "registered_date" | "registered" => Some(Self::RegisteredDate),
            _ => None,
        }
    }

    /// Get the wire parameter string for this sort key (`sortBy=`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Username => "username",
            Self::City => "city",
            Self::Country => "country",
            Self::RegisteredDate => "registered_date",
        }
    }
}

/// Parameters for listing customers.
///
/// Transient state owned by the list coordinator, never persisted.
/// `page_index` is 0-based here; the Directory Service's wire format is
/// 1-based and the client converts at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Free-text search term. Empty means no filtering.
    pub search_term: String,
    /// 0-based page index. Reset to 0 whenever the search term changes.
    pub page_index: u32,
    /// Number of records per page.
    pub page_size: u32,
    /// Sort key.
    pub sort_key: SortKey,
}

impl ListQuery {
    /// Default number of records per page.
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Create a query for the first page with the given page size.
    #[must_use]
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page_index: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
            sort_key: SortKey::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_param_roundtrip() {
        for key in [
            SortKey::Name,
            SortKey::Email,
            SortKey::Username,
            SortKey::City,
            SortKey::Country,
            SortKey::RegisteredDate,
        ] {
            assert_eq!(SortKey::from_str_param(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str_param("bogus"), None);
    }

    #[test]
    fn test_default_query() {
        let query = ListQuery::default();
        assert_eq!(query.page_index, 0);
        assert_eq!(query.page_size, ListQuery::DEFAULT_PAGE_SIZE);
        assert_eq!(query.sort_key, SortKey::Name);
        assert!(query.search_term.is_empty());
    }

    #[test]
    fn test_with_page_size() {
        let query = ListQuery::with_page_size(25);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.page_index, 0);
    }
}
