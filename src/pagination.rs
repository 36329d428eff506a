use serde::{Deserialize, Serialize};

use crate::{DEFAULT_NEIGHBOURS, prelude::*};

/// Marker for a run of hidden pages on one side of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentinel {
    #[display(fmt = "previous")]
    Previous,
    #[display(fmt = "next")]
    Next,
}

/// One entry of a pager, left to right as displayed.
///
/// Serializes untagged: pages as numbers, sentinels as `"previous"` / `"next"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageToken {
    /// A 1-based page number
    #[display(fmt = "{_0}")]
    Page(u32),
    #[display(fmt = "{_0}")]
    Sentinel(Sentinel),
}

impl PageToken {
    pub const PREVIOUS: Self = Self::Sentinel(Sentinel::Previous);
    pub const NEXT: Self = Self::Sentinel(Sentinel::Next);

    /// The page number, if this token is one
    pub const fn page(self) -> Option<u32> {
        match self {
            Self::Page(page) => Some(page),
            Self::Sentinel(_) => None,
        }
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Sentinel(_))
    }
}

/// Shape of the pager.
///
/// Field names deserialize in camelCase (`nextAndPrevious`, `neighboursLeft`, ...)
/// and every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationOptions {
    /// Show `previous` / `next` next to hidden runs
    pub next_and_previous: bool,
    /// Always show page 1 and the last page
    pub first_and_last:    bool,
    /// Overrides both `neighbours_left` and `neighbours_right` when set
    pub neighbours:        Option<u32>,
    pub neighbours_left:   u32,
    pub neighbours_right:  u32,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            next_and_previous: true,
            first_and_last:    true,
            neighbours:        None,
            neighbours_left:   DEFAULT_NEIGHBOURS,
            neighbours_right:  DEFAULT_NEIGHBOURS,
        }
    }
}

impl PaginationOptions {
    pub const fn with_next_and_previous(mut self, enabled: bool) -> Self {
        self.next_and_previous = enabled;
        self
    }

    pub const fn with_first_and_last(mut self, enabled: bool) -> Self {
        self.first_and_last = enabled;
        self
    }

    pub const fn with_neighbours(mut self, neighbours: u32) -> Self {
        self.neighbours = Some(neighbours);
        self
    }

    pub const fn with_neighbours_left(mut self, neighbours: u32) -> Self {
        self.neighbours_left = neighbours;
        self
    }

    pub const fn with_neighbours_right(mut self, neighbours: u32) -> Self {
        self.neighbours_right = neighbours;
        self
    }

    /// Number of entries a pager with these options shows once pages are hidden.
    ///
    /// Page counts up to this value are listed in full.
    pub const fn pages_displayed(&self) -> u32 {
        self.resolve().pages_displayed()
    }

    const fn resolve(&self) -> Resolved {
        let (left, right) = match self.neighbours {
            Some(n) => (n, n),
            None => (self.neighbours_left, self.neighbours_right),
        };
        Resolved {
            next_and_previous: self.next_and_previous,
            first_and_last: self.first_and_last,
            left,
            right,
        }
    }
}

/// Options with `neighbours` already folded into left and right.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    next_and_previous: bool,
    first_and_last:    bool,
    left:              u32,
    right:             u32,
}

impl Resolved {
    const fn edge_pages(self) -> u32 {
        if self.first_and_last { 2 } else { 0 }
    }

    const fn sentinels(self) -> u32 {
        if self.next_and_previous { 2 } else { 0 }
    }

    const fn pages_displayed(self) -> u32 {
        self.left
            .saturating_add(1)
            .saturating_add(self.right)
            .saturating_add(self.sentinels())
            .saturating_add(self.edge_pages())
    }
}

/// Error type for the checked pagination entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// There must be at least one page.
    #[error("Total pages must be at least 1")]
    NoPages,

    /// Pages are numbered from 1.
    #[error("Current page must be at least 1")]
    ZeroCurrentPage,

    #[error("Current page {current} is past the last page {total}")]
    CurrentPageOutOfRange { current: u32, total: u32 },
}

/// Builds the entries of a pager for `current` out of `total` pages.
///
/// Small page counts (up to [`PaginationOptions::pages_displayed`]) are listed
/// in full with no sentinels. Otherwise a window of neighbours surrounds
/// `current`; when exactly one side hides pages the window is topped up on
/// the other side so the pager keeps its width. When both sides hide pages
/// nothing is added.
///
/// Inputs are expected to satisfy `1 <= current <= total`; see
/// [`try_pagination`] for a validating wrapper. Out-of-range inputs never
/// panic but the result is unspecified.
pub fn pagination(current: u32, total: u32, options: &PaginationOptions) -> Vec<PageToken> {
    let opts = options.resolve();
    let displayed = opts.pages_displayed();

    if total <= displayed {
        return (1..=total).map(PageToken::Page).collect();
    }

    let first_page = if opts.first_and_last { 2 } else { 1 };
    let last_page = total - u32::from(opts.first_and_last);
    let start = first_page.max(current.saturating_sub(opts.left));
    // Exclusive upper bound of the window.
    let end = last_page.min(current.saturating_add(opts.right)).saturating_add(1);
    let window_len = end.saturating_sub(start);

    let left_spill = start > first_page;
    let right_spill = end <= last_page;

    let spill_offset = displayed.saturating_sub(
        window_len + u32::from(opts.next_and_previous) + opts.edge_pages(),
    );

    log::trace!(
        "pagination {current}/{total}: window {start}..{end}, spill left={left_spill} right={right_spill}, offset {spill_offset}"
    );

    // Only a one-sided spill is topped up.
    let (fill_left, fill_right) = match (left_spill, right_spill) {
        (true, false) => (spill_offset, 0),
        (false, true) => (0, spill_offset),
        _ => (0, 0),
    };
    let run = start.saturating_sub(fill_left).max(1)..end.saturating_add(fill_right);

    let mut pages = Vec::with_capacity(displayed as usize);
    if opts.first_and_last {
        pages.push(PageToken::Page(1));
    }
    if opts.next_and_previous && left_spill {
        pages.push(PageToken::PREVIOUS);
    }
    pages.extend(run.map(PageToken::Page));
    if opts.next_and_previous && right_spill {
        pages.push(PageToken::NEXT);
    }
    if opts.first_and_last {
        pages.push(PageToken::Page(total));
    }
    pages
}

/// Validating wrapper around [`pagination`].
///
/// # Errors
/// Returns `PaginationError` when `total` is zero, `current` is zero, or
/// `current` is greater than `total`.
pub fn try_pagination(
    current: u32,
    total: u32,
    options: &PaginationOptions,
) -> Result<Vec<PageToken>, PaginationError> {
    if total == 0 {
        return Err(PaginationError::NoPages);
    }
    if current == 0 {
        return Err(PaginationError::ZeroCurrentPage);
    }
    if current > total {
        return Err(PaginationError::CurrentPageOutOfRange { current, total });
    }
    Ok(pagination(current, total, options))
}
