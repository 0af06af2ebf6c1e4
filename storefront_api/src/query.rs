//! Pagination and search parameters shared by every list endpoint.

use url::Url;

/// Query builder for paginated list endpoints.
///
/// Only parameters that were explicitly set are serialized; an untouched
/// `PageQuery` contributes no query string at all, and an empty search term
/// is treated as unset.
#[derive(Clone, Debug, Default)]
pub struct PageQuery {
    /// Page number (0-indexed, as the backend counts pages). `None` uses the
    /// server default.
    pub page: Option<i64>,
    /// Results per page. `None` uses the server default.
    pub size: Option<i64>,
    /// Free-text search term.
    pub search: Option<String>,
}

impl PageQuery {
    /// Sets the page number.
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the free-text search term.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// Appends the set parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(page) = self.page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        }
        if let Some(size) = self.size {
            url.query_pairs_mut()
                .append_pair("size", &size.to_string());
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                url.query_pairs_mut().append_pair("search", search.as_str());
            }
        }
        url
    }
}
