//! Page URL construction
//!
//! Two strategies are available:
//! - [`PatternUrl`]: a target pattern with one `%d` placeholder
//!   (e.g. `/search/page/%d`)
//! - [`QueryUrl`]: the current request path with a `key=page` query
//!   parameter, keeping any other parameters already on the path
//!
//! Neither reads request state; the caller passes the path in.

use crate::{Error, Result};
use urlencoding::{decode, encode};

/// Placeholder replaced by the page number in a target pattern
pub const PAGE_PLACEHOLDER: &str = "%d";

/// Formats a page number into a link target
pub trait UrlBuilder {
    fn page_url(&self, page: i64) -> String;
}

/// Target pattern with exactly one [`PAGE_PLACEHOLDER`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternUrl {
    pattern: String,
}

impl PatternUrl {
    /// Validate and wrap a target pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use pagecrumbs::url::{PatternUrl, UrlBuilder};
    ///
    /// let url = PatternUrl::new("/articles/page/%d").unwrap();
    /// assert_eq!(url.page_url(3), "/articles/page/3");
    ///
    /// assert!(PatternUrl::new("/articles").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        match pattern.matches(PAGE_PLACEHOLDER).count() {
            1 => Ok(Self {
                pattern: pattern.to_string(),
            }),
            0 => Err(Error::InvalidTarget(format!(
                "'{}' has no {} placeholder",
                pattern, PAGE_PLACEHOLDER
            ))),
            n => Err(Error::InvalidTarget(format!(
                "'{}' has {} {} placeholders, expected one",
                pattern, n, PAGE_PLACEHOLDER
            ))),
        }
    }
}

impl UrlBuilder for PatternUrl {
    fn page_url(&self, page: i64) -> String {
        self.pattern.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)
    }
}

/// Request path plus a `key=page` query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrl {
    path: String,
    /// Other query parameters, kept as they appeared on the request
    preserved: Vec<String>,
    key: String,
}

impl QueryUrl {
    /// Split `request_path` into path and query, dropping any existing
    /// value for `key`
    ///
    /// # Examples
    ///
    /// ```
    /// use pagecrumbs::url::{QueryUrl, UrlBuilder};
    ///
    /// let url = QueryUrl::new("/search?q=rust&page=2", "page");
    /// assert_eq!(url.page_url(3), "/search?q=rust&page=3");
    /// ```
    pub fn new(request_path: &str, key: &str) -> Self {
        let without_fragment = request_path.split('#').next().unwrap_or("");
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };

        let preserved = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                let name = pair.split('=').next().unwrap_or("");
                decode(name).map(|n| n != key).unwrap_or(true)
            })
            .map(str::to_string)
            .collect();

        Self {
            path: path.to_string(),
            preserved,
            key: key.to_string(),
        }
    }
}

impl UrlBuilder for QueryUrl {
    fn page_url(&self, page: i64) -> String {
        let mut query = self.preserved.join("&");
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&format!("{}={}", encode(&self.key), page));

        format!("{}?{}", self.path, query)
    }
}

/// Path portion of a request path, without query string or fragment
pub fn strip_query(request_path: &str) -> &str {
    let end = request_path
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(request_path.len());
    &request_path[..end]
}
