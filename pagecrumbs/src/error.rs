//! Error types for pagination state and rendering

use thiserror::Error;

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating, computing or rendering pagination
///
/// All variants are local configuration errors. Nothing is retried; the
/// caller fixes the configuration and calls again.
#[derive(Error, Debug)]
pub enum Error {
    /// Current page was never set
    #[error("Current page is not set")]
    MissingCurrentPage,

    /// Total item count was never set
    #[error("Total item count is not set")]
    MissingTotal,

    /// Current page is below 1
    #[error("Page {current} is below the first page")]
    PageBelowRange { current: i64 },

    /// Current page is past the last page
    #[error("Page {current} is past the last page ({page_count})")]
    PageAboveRange { current: i64, page_count: i64 },

    /// Items per page must be positive
    #[error("Items per page must be at least 1")]
    InvalidItemsPerPage,

    /// Crumb budget must be positive
    #[error("Crumb budget must be at least 1")]
    InvalidCrumbBudget,

    /// Total and items per page give more pages than an `i64` can number
    #[error("{total} items at {items_per_page} per page exceed the largest page number")]
    TooManyPages { total: u64, items_per_page: u64 },

    /// Target pattern does not contain exactly one `%d` placeholder
    #[error("Invalid target pattern: {0}")]
    InvalidTarget(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON rendering error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error comes from the page range check rather than
    /// from missing or malformed configuration
    pub fn is_range_error(&self) -> bool {
        matches!(self, Error::PageBelowRange { .. } | Error::PageAboveRange { .. })
    }
}
