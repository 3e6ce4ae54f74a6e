//! # pagecrumbs
//!
//! Pagination state for server-rendered listings:
//! - Page count from total items and items per page
//! - Crumb window (numbered links around the current page)
//! - First/previous/next/last link targets
//! - Canonical URL and rel prev/next hrefs
//! - HTML and JSON rendering of the pagination bar
//!
//! # Examples
//!
//! ```
//! use pagecrumbs::{HtmlRenderer, PaginationState};
//!
//! let mut state = PaginationState::new();
//! state
//!     .set_current(10)
//!     .set_total(200)
//!     .set_request_path("/search?q=rust");
//!
//! assert_eq!(state.page_count().unwrap(), 20);
//!
//! let crumbs: Vec<i64> = state
//!     .build_links()
//!     .unwrap()
//!     .iter()
//!     .filter(|l| l.kind.is_crumb())
//!     .filter_map(|l| l.page_number)
//!     .collect();
//! assert_eq!(crumbs, vec![8, 9, 10, 11, 12]);
//!
//! let html = state.render(&HtmlRenderer).unwrap();
//! assert!(html.starts_with(r#"<ul class="clearfix pagination">"#));
//! ```

pub mod config;
pub mod crumbs;
pub mod error;
pub mod link;
pub mod render;
pub mod state;
pub mod url;

pub use config::{DisplayMode, Labels, PaginationConfig};
pub use crumbs::CrumbWindow;
pub use error::{Error, Result};
pub use link::{LinkDescriptor, LinkKind, Rel, RelLink};
pub use render::{HtmlRenderer, JsonRenderer, RenderAdapter};
pub use state::{ItemRange, PaginationState};
pub use url::{PatternUrl, QueryUrl, UrlBuilder};
