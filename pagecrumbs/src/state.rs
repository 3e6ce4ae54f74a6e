//! Pagination state: configuration plus memoized derived values
//!
//! A [`PaginationState`] is built per request with chainable setters, then
//! asked for link descriptors, SEO hrefs or rendered markup. Page count
//! and crumb window are computed lazily and cached until a setter changes
//! one of their inputs.
//!
//! The memo cells are not thread-safe, so a state is `Send` but not
//! `Sync`. Share a [`PaginationConfig`] across requests and build one
//! state per request from a clone of it.

use crate::config::{insert_class, DisplayMode, Labels, PaginationConfig};
use crate::crumbs::CrumbWindow;
use crate::link::{LinkDescriptor, LinkKind, Rel, RelLink};
use crate::render::RenderAdapter;
use crate::url::{strip_query, PatternUrl, QueryUrl, UrlBuilder};
use crate::{Error, Result};
use once_cell::unsync::OnceCell;
use serde::Serialize;
use tracing::debug;

/// 1-based inclusive range of the items shown on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRange {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

/// Pagination configuration with lazily computed page count and window
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    config: PaginationConfig,
    page_count: OnceCell<i64>,
    window: OnceCell<CrumbWindow>,
}

impl PaginationState {
    /// State with built-in defaults; current page and total still unset
    pub fn new() -> Self {
        Self::default()
    }

    /// State starting from shared site-wide defaults
    pub fn from_config(config: PaginationConfig) -> Self {
        Self {
            config,
            page_count: OnceCell::new(),
            window: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    fn invalidate(&mut self) {
        self.page_count.take();
        self.window.take();
    }

    // === Setters ===

    /// Set the current page; range is checked when links are built
    pub fn set_current(&mut self, page: i64) -> &mut Self {
        self.config.current_page = Some(page);
        self.invalidate();
        self
    }

    pub fn set_total(&mut self, total: u64) -> &mut Self {
        self.config.total_items = Some(total);
        self.invalidate();
        self
    }

    pub fn set_items_per_page(&mut self, items_per_page: u64) -> &mut Self {
        self.config.items_per_page = items_per_page;
        self.invalidate();
        self
    }

    /// Set the maximum number of numbered crumbs, current page included
    pub fn set_max_crumbs(&mut self, max_crumbs: u32) -> &mut Self {
        self.config.max_crumbs = max_crumbs;
        self.invalidate();
        self
    }

    /// Set the query parameter carrying the page number
    pub fn set_key(&mut self, key: &str) -> &mut Self {
        self.config.key = key.to_string();
        self
    }

    /// Set a target pattern with one `%d` placeholder; empty clears it
    pub fn set_target(&mut self, target: &str) -> &mut Self {
        self.config.target = target.to_string();
        self
    }

    /// Set the path of the page being rendered, query string included
    pub fn set_request_path(&mut self, request_path: &str) -> &mut Self {
        self.config.request_path = request_path.to_string();
        self
    }

    pub fn set_first_label(&mut self, label: &str) -> &mut Self {
        self.config.labels.first = label.to_string();
        self
    }

    pub fn set_previous_label(&mut self, label: &str) -> &mut Self {
        self.config.labels.previous = label.to_string();
        self
    }

    pub fn set_next_label(&mut self, label: &str) -> &mut Self {
        self.config.labels.next = label.to_string();
        self
    }

    pub fn set_last_label(&mut self, label: &str) -> &mut Self {
        self.config.labels.last = label.to_string();
        self
    }

    pub fn set_labels(&mut self, labels: Labels) -> &mut Self {
        self.config.labels = labels;
        self
    }

    /// Replace the container classes, dropping duplicates
    pub fn set_classes<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.classes.clear();
        for class in classes {
            insert_class(&mut self.config.classes, class.as_ref());
        }
        self
    }

    pub fn add_class(&mut self, class: &str) -> &mut Self {
        insert_class(&mut self.config.classes, class);
        self
    }

    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        self.config.classes.retain(|c| c != class);
        self
    }

    /// Show only first/previous/next/last controls
    pub fn clean(&mut self) -> &mut Self {
        self.config.mode = DisplayMode::Clean;
        self
    }

    /// Show numbered crumbs between the controls
    pub fn full(&mut self) -> &mut Self {
        self.config.mode = DisplayMode::Full;
        self
    }

    pub fn set_always_show(&mut self, always_show: bool) -> &mut Self {
        self.config.always_show = always_show;
        self
    }

    // === Computation ===

    /// Check that current page and total are set and that the divisor and
    /// crumb budget are usable
    pub fn validate(&self) -> Result<()> {
        if self.config.current_page.is_none() {
            return Err(Error::MissingCurrentPage);
        }
        if self.config.total_items.is_none() {
            return Err(Error::MissingTotal);
        }
        if self.config.items_per_page == 0 {
            return Err(Error::InvalidItemsPerPage);
        }
        if self.config.max_crumbs == 0 {
            return Err(Error::InvalidCrumbBudget);
        }
        Ok(())
    }

    /// Number of pages needed for all items; 0 for an empty listing
    ///
    /// Fails with [`Error::TooManyPages`] when the count does not fit the
    /// `i64` page numbers used everywhere else.
    pub fn page_count(&self) -> Result<i64> {
        let total = self.config.total_items.ok_or(Error::MissingTotal)?;
        let items_per_page = self.config.items_per_page;
        if items_per_page == 0 {
            return Err(Error::InvalidItemsPerPage);
        }

        let pages = self.page_count.get_or_try_init(|| {
            i64::try_from(total.div_ceil(items_per_page)).map_err(|_| Error::TooManyPages {
                total,
                items_per_page,
            })
        })?;
        Ok(*pages)
    }

    /// Current page and effective page count after validation and range
    /// checks
    ///
    /// An empty listing is treated as a single page so that page 1 stays
    /// addressable.
    fn checked_position(&self) -> Result<(i64, i64)> {
        self.validate()?;
        let current = self.config.current_page.ok_or(Error::MissingCurrentPage)?;
        if current < 1 {
            return Err(Error::PageBelowRange { current });
        }

        let pages = self.page_count()?;
        if current > pages.max(1) {
            return Err(Error::PageAboveRange {
                current,
                page_count: pages,
            });
        }
        Ok((current, pages.max(1)))
    }

    /// Crumbs before and after the current page
    pub fn crumb_window(&self) -> Result<CrumbWindow> {
        let (current, pages) = self.checked_position()?;
        let max_crumbs = i64::from(self.config.max_crumbs);
        let window = self
            .window
            .get_or_init(|| CrumbWindow::compute(current, pages, max_crumbs));
        Ok(*window)
    }

    fn url_builder(&self) -> Result<Box<dyn UrlBuilder>> {
        if self.config.target.is_empty() {
            Ok(Box::new(QueryUrl::new(
                &self.config.request_path,
                &self.config.key,
            )))
        } else {
            Ok(Box::new(PatternUrl::new(&self.config.target)?))
        }
    }

    /// Href of `page` under the configured target or request path
    pub fn url_for(&self, page: i64) -> Result<String> {
        Ok(self.url_builder()?.page_url(page))
    }

    /// Ordered link descriptors: first, previous, crumbs (full mode only),
    /// next, last
    ///
    /// Returns no links when there is at most one page, unless
    /// `always_show` is set.
    pub fn build_links(&self) -> Result<Vec<LinkDescriptor>> {
        let (current, pages) = self.checked_position()?;
        if pages <= 1 && !self.config.always_show {
            debug!(current, pages, "Single page, no pagination links");
            return Ok(Vec::new());
        }

        let urls = self.url_builder()?;
        let labels = &self.config.labels;
        let mut links = Vec::with_capacity(self.config.max_crumbs as usize + 4);

        if current > 1 {
            links.push(LinkDescriptor::enabled(
                LinkKind::First,
                1,
                urls.page_url(1),
                labels.first.clone(),
            ));
            links.push(LinkDescriptor::enabled(
                LinkKind::Previous,
                current - 1,
                urls.page_url(current - 1),
                labels.previous.clone(),
            ));
        } else {
            links.push(LinkDescriptor::disabled(LinkKind::First, labels.first.clone()));
            links.push(LinkDescriptor::disabled(
                LinkKind::Previous,
                labels.previous.clone(),
            ));
        }

        if self.config.mode == DisplayMode::Full {
            let window = self.crumb_window()?;
            let crumb = |kind, page: i64| {
                LinkDescriptor::enabled(kind, page, urls.page_url(page), page.to_string())
            };

            links.extend(
                window
                    .leading_pages(current)
                    .map(|page| crumb(LinkKind::PageNumber, page)),
            );
            links.push(crumb(LinkKind::Current, current));
            links.extend(
                window
                    .trailing_pages(current)
                    .map(|page| crumb(LinkKind::PageNumber, page)),
            );
        }

        if current < pages {
            links.push(LinkDescriptor::enabled(
                LinkKind::Next,
                current + 1,
                urls.page_url(current + 1),
                labels.next.clone(),
            ));
            links.push(LinkDescriptor::enabled(
                LinkKind::Last,
                pages,
                urls.page_url(pages),
                labels.last.clone(),
            ));
        } else {
            links.push(LinkDescriptor::disabled(LinkKind::Next, labels.next.clone()));
            links.push(LinkDescriptor::disabled(LinkKind::Last, labels.last.clone()));
        }

        debug!(current, pages, links = links.len(), "Built pagination links");
        Ok(links)
    }

    /// Build links and hand them to `renderer` with the container classes
    pub fn render<R: RenderAdapter + ?Sized>(&self, renderer: &R) -> Result<String> {
        let links = self.build_links()?;
        renderer.render(&self.config.classes, &links)
    }

    /// SEO-preferred absolute URL of the current page
    ///
    /// `host` includes the scheme (e.g. `https://example.com`). Page 1 maps
    /// to `request_path` without its query string, with or without a target
    /// pattern. Other pages use the target pattern when one is set, and
    /// otherwise the bare path with only the page parameter.
    pub fn canonical_url(&self, request_path: &str, host: &str) -> Result<String> {
        let (current, _) = self.checked_position()?;
        let host = host.trim_end_matches('/');

        let pattern = if self.config.target.is_empty() {
            None
        } else {
            Some(PatternUrl::new(&self.config.target)?)
        };

        let path = match pattern {
            _ if current == 1 => strip_query(request_path).to_string(),
            Some(pattern) => pattern.page_url(current),
            None => QueryUrl::new(strip_query(request_path), &self.config.key).page_url(current),
        };

        Ok(format!("{}{}", host, path))
    }

    /// Hrefs for `<link rel="prev">` and `<link rel="next">`
    ///
    /// Previous is omitted on the first page, next on the last.
    pub fn rel_prev_next_links(&self) -> Result<Vec<RelLink>> {
        let (current, pages) = self.checked_position()?;
        let mut rels = Vec::with_capacity(2);
        if pages <= 1 {
            return Ok(rels);
        }

        let urls = self.url_builder()?;
        if current > 1 {
            rels.push(RelLink {
                rel: Rel::Prev,
                href: urls.page_url(current - 1),
            });
        }
        if current < pages {
            rels.push(RelLink {
                rel: Rel::Next,
                href: urls.page_url(current + 1),
            });
        }
        Ok(rels)
    }

    /// Row offset of the current page for SQL `LIMIT/OFFSET`
    pub fn offset(&self) -> Result<u64> {
        let (current, _) = self.checked_position()?;
        Ok((current as u64 - 1).saturating_mul(self.config.items_per_page))
    }

    /// Row limit for SQL `LIMIT/OFFSET`
    pub fn limit(&self) -> u64 {
        self.config.items_per_page
    }

    /// Items shown on the current page; `None` for an empty listing
    pub fn item_range(&self) -> Result<Option<ItemRange>> {
        let offset = self.offset()?;
        let total = self.config.total_items.ok_or(Error::MissingTotal)?;
        if total == 0 {
            return Ok(None);
        }

        Ok(Some(ItemRange {
            first: offset + 1,
            last: offset.saturating_add(self.config.items_per_page).min(total),
            total,
        }))
    }
}
