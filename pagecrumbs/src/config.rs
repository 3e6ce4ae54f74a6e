//! Pagination configuration and site-wide defaults
//!
//! Per-request values (current page, total items, request path) are set in
//! code. Everything else has a built-in default and can be overridden from
//! a TOML file shared by every listing on a site:
//!
//! ```toml
//! items_per_page = 25
//! max_crumbs = 7
//! key = "p"
//! mode = "clean"
//! classes = ["pager"]
//!
//! [labels]
//! next = "Older"
//! previous = "Newer"
//! ```
//!
//! Resolution order for the defaults file:
//! 1. Explicit path from the caller (highest priority)
//! 2. `PAGECRUMBS_CONFIG` environment variable
//! 3. Built-in defaults
//!
//! A missing or malformed file never aborts resolution; it is logged and
//! the built-in defaults are used.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming a defaults file
pub const CONFIG_ENV_VAR: &str = "PAGECRUMBS_CONFIG";

/// Numbered crumbs or bare prev/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// First, previous, numbered crumbs, next, last
    #[default]
    Full,
    /// First, previous, next, last only
    Clean,
}

/// Text of the four navigation controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_first_label")]
    pub first: String,
    #[serde(default = "default_previous_label")]
    pub previous: String,
    #[serde(default = "default_next_label")]
    pub next: String,
    #[serde(default = "default_last_label")]
    pub last: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: default_first_label(),
            previous: default_previous_label(),
            next: default_next_label(),
            last: default_last_label(),
        }
    }
}

/// Complete input of a pagination state
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationConfig {
    /// Current page, 1-based; range checked at build time
    #[serde(skip)]
    pub current_page: Option<i64>,

    /// Total number of items in the listing
    #[serde(skip)]
    pub total_items: Option<u64>,

    /// Path (optionally with query string) of the page being rendered
    ///
    /// Used to build links when no target pattern is set.
    #[serde(skip, default = "default_request_path")]
    pub request_path: String,

    /// Default: 10
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u64,

    /// Maximum numbered crumbs shown at once, current page included
    ///
    /// Default: 5
    #[serde(default = "default_max_crumbs")]
    pub max_crumbs: u32,

    /// Query parameter carrying the page number
    ///
    /// Default: "page"
    #[serde(default = "default_key")]
    pub key: String,

    /// Target pattern with one `%d` placeholder; empty means unset
    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub mode: DisplayMode,

    /// Render controls even when there is at most one page
    #[serde(default)]
    pub always_show: bool,

    #[serde(default)]
    pub labels: Labels,

    /// Classes of the container element, ordered and duplicate-free
    ///
    /// Default: ["clearfix", "pagination"]
    #[serde(default = "default_classes", deserialize_with = "deserialize_class_set")]
    pub classes: Vec<String>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            current_page: None,
            total_items: None,
            request_path: default_request_path(),
            items_per_page: default_items_per_page(),
            max_crumbs: default_max_crumbs(),
            key: default_key(),
            target: String::new(),
            mode: DisplayMode::default(),
            always_show: false,
            labels: Labels::default(),
            classes: default_classes(),
        }
    }
}

impl PaginationConfig {
    /// Parse site-wide defaults from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load site-wide defaults from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded pagination defaults from {}", path.display());
        Ok(config)
    }

    /// Resolve site-wide defaults, falling back to built-in values
    ///
    /// See the module documentation for the priority order.
    pub fn resolve(cli_path: Option<&Path>) -> Self {
        let path = match cli_path {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from),
        };

        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Could not load pagination defaults from {}: {}, using built-in defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// Append `class` unless it is empty or already present
pub(crate) fn insert_class(classes: &mut Vec<String>, class: &str) {
    let class = class.trim();
    if !class.is_empty() && !classes.iter().any(|c| c == class) {
        classes.push(class.to_string());
    }
}

fn deserialize_class_set<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut classes = Vec::with_capacity(raw.len());
    for class in &raw {
        insert_class(&mut classes, class);
    }
    Ok(classes)
}

fn default_request_path() -> String {
    "/".to_string()
}

fn default_items_per_page() -> u64 {
    10
}

fn default_max_crumbs() -> u32 {
    5
}

fn default_key() -> String {
    "page".to_string()
}

fn default_classes() -> Vec<String> {
    vec!["clearfix".to_string(), "pagination".to_string()]
}

fn default_first_label() -> String {
    "« First".to_string()
}

fn default_previous_label() -> String {
    "« Previous".to_string()
}

fn default_next_label() -> String {
    "Next »".to_string()
}

fn default_last_label() -> String {
    "Last »»".to_string()
}
