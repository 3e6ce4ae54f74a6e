//! Crumb-window selection
//!
//! A crumb is a numbered page link shown around the current page. The
//! window keeps a constant number of crumbs while the current page moves,
//! except near either end of the page range where it cannot extend on one
//! side. There the unused budget shifts to the other side instead of
//! shrinking the window.

use serde::Serialize;
use std::ops::{Range, RangeInclusive};
use tracing::debug;

/// Number of crumbs shown before and after the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrumbWindow {
    /// Crumbs shown before the current page
    pub leading_count: i64,
    /// Crumbs shown after the current page
    pub trailing_count: i64,
    /// Crumb budget after clamping to the page count
    pub max_crumbs_effective: i64,
}

impl CrumbWindow {
    /// Select the window for `current` out of `pages` with at most
    /// `max_crumbs` crumbs (the current page included)
    ///
    /// `current` must already be within `[1, pages]` and `pages` must be at
    /// least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagecrumbs::crumbs::CrumbWindow;
    ///
    /// // Middle of the range: symmetric window
    /// let w = CrumbWindow::compute(10, 20, 5);
    /// assert_eq!((w.leading_count, w.trailing_count), (2, 2));
    ///
    /// // First page: budget moves to the trailing side
    /// let w = CrumbWindow::compute(1, 20, 5);
    /// assert_eq!((w.leading_count, w.trailing_count), (0, 4));
    ///
    /// // Last page: budget moves to the leading side
    /// let w = CrumbWindow::compute(20, 20, 5);
    /// assert_eq!((w.leading_count, w.trailing_count), (4, 0));
    /// ```
    pub fn compute(current: i64, pages: i64, max_crumbs: i64) -> Self {
        let budget = pages.min(max_crumbs);
        let half = budget / 2;

        let mut leading = half;

        // Near the start: fewer pages exist before the current one
        for index in 0..half {
            if current == index + 1 {
                leading = index;
                break;
            }
        }

        // Near the end: runs second and overwrites the near-start result
        for index in (pages - half)..pages {
            if current == index + 1 {
                leading = budget - (pages - index);
                break;
            }
        }

        let trailing = budget - leading - 1;

        debug!(
            current,
            pages, budget, leading, trailing, "Computed crumb window"
        );

        Self {
            leading_count: leading,
            trailing_count: trailing,
            max_crumbs_effective: budget,
        }
    }

    /// Page numbers of the crumbs before `current`, ascending
    pub fn leading_pages(&self, current: i64) -> Range<i64> {
        (current - self.leading_count)..current
    }

    /// Page numbers of the crumbs after `current`, ascending
    ///
    /// Never steps past `current + trailing_count`, so the last page of a
    /// listing with `i64::MAX` pages is safe.
    pub fn trailing_pages(&self, current: i64) -> impl Iterator<Item = i64> {
        (1..=self.trailing_count).map(move |offset| current + offset)
    }

    /// Every crumb page number including `current`, ascending
    pub fn pages(&self, current: i64) -> RangeInclusive<i64> {
        (current - self.leading_count)..=(current + self.trailing_count)
    }
}
