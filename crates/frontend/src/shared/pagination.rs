//! Client-side pagination over a catalog already held in memory.
//!
//! Page numbers are 1-based throughout. Nothing here fails: out-of-range
//! input degrades to an empty page or an empty pager.

/// One entry of the pager strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// Link to a 1-based page number
    Page(usize),
    /// Elided run of pages, rendered as "..."
    Gap,
}

/// Returns the rows of page `page_number`, clamped to the bounds of `items`.
pub fn slice<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `item_count` rows; 0 for an empty catalog.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Running 1-based row number of the `index`-th row on a page
pub fn serial_number(page_number: usize, page_size: usize, index: usize) -> usize {
    page_number.saturating_sub(1) * page_size + index + 1
}

/// Builds the pager strip: `margin` pages at both edges, `range` pages
/// around `current`, and gaps for everything elided.
///
/// A gap that would hide a single page shows that page instead.
pub fn page_links(total_pages: usize, current: usize, range: usize, margin: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let before = range / 2;
    let after = range.saturating_sub(1).saturating_sub(before);
    let window_start = current.saturating_sub(before).max(1);
    let window_end = (current + after).min(total_pages);

    let mut links = Vec::new();
    let mut last_shown = 0;

    for page in 1..=total_pages {
        let in_margin = page <= margin || page > total_pages.saturating_sub(margin);
        let in_window = (window_start..=window_end).contains(&page);
        if !(in_margin || in_window) {
            continue;
        }

        if page == last_shown + 2 {
            links.push(PageLink::Page(last_shown + 1));
        } else if page > last_shown + 2 {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(page));
        last_shown = page;
    }

    links
}
