//! Deterministic page slicing and page metadata.

use crate::sort::Direction;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// How the `next` link value is derived.
///
/// Catalog clients have always been sent `next = page + 1`, even on or past
/// the last page where that page is empty. That stays the default; stopping
/// at the last page is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextLinkPolicy {
    /// `next = page + 1`, always present
    #[default]
    Verbatim,
    /// `next = page + 1` only while it is within `last`
    Clamped,
}

/// Next-link policy applied when configuration does not choose one.
pub const DEFAULT_NEXT_LINK_POLICY: NextLinkPolicy = NextLinkPolicy::Verbatim;

/// Link values the serving layer renders as `self` / `last` / `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub current: usize,
    pub last: usize,
    pub next: Option<usize>,
}

/// Metadata describing one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    /// `max(1, ceil(total_count / page_size))`
    pub total_pages: usize,
    pub direction: Direction,
    pub links: PageLinks,
}

/// Slices ordered sequences into fixed-size pages.
///
/// # Examples
///
/// ```
/// use pkgq_core::{Direction, NextLinkPolicy, Paginator};
/// use std::num::NonZeroUsize;
///
/// let paginator = Paginator::new(NonZeroUsize::new(3).unwrap(), NextLinkPolicy::Verbatim);
/// let items: Vec<u32> = (1..=7).collect();
///
/// let (slice, page) = paginator.paginate(&items, 3, Direction::Desc);
/// assert_eq!(slice, [7]);
/// assert_eq!(page.total_pages, 3);
///
/// let (slice, page) = paginator.paginate(&items, 4, Direction::Desc);
/// assert!(slice.is_empty());
/// assert_eq!(page.links.last, 3);
/// assert_eq!(page.links.next, Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    next_link: NextLinkPolicy,
}

impl Paginator {
    pub const fn new(page_size: NonZeroUsize, next_link: NextLinkPolicy) -> Self {
        Self {
            page_size,
            next_link,
        }
    }

    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Number of pages for `total_count` items; at least 1.
    pub fn total_pages(&self, total_count: usize) -> usize {
        total_count.div_ceil(self.page_size.get()).max(1)
    }

    /// Returns page `page` of `items` and its descriptor.
    ///
    /// Pages are 1-based; `0` is treated as `1`. A page past the end yields
    /// an empty slice, never an error. `direction` is carried into the
    /// descriptor only.
    pub fn paginate<'a, T>(
        &self,
        items: &'a [T],
        page: usize,
        direction: Direction,
    ) -> (&'a [T], PageDescriptor) {
        let page = page.max(1);
        let size = self.page_size.get();
        let total_count = items.len();
        let total_pages = self.total_pages(total_count);

        let start = (page - 1).saturating_mul(size).min(total_count);
        let end = page.saturating_mul(size).min(total_count);

        let next = match self.next_link {
            NextLinkPolicy::Verbatim => Some(page.saturating_add(1)),
            NextLinkPolicy::Clamped => (page < total_pages).then(|| page + 1),
        };

        let descriptor = PageDescriptor {
            page,
            page_size: size,
            total_count,
            total_pages,
            direction,
            links: PageLinks {
                current: page,
                last: total_pages,
                next,
            },
        };

        (&items[start..end], descriptor)
    }
}
