//! Page slicing and page-link rendering

use serde::Serialize;

/// One page of a filtered list
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Effective (clamped) page number, 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// 0 when there are no items
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Pagination controls are hidden for an empty result
    pub fn has_controls(&self) -> bool {
        self.total_pages > 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page links for the pagination bar
    pub fn links(&self) -> Vec<PageLink> {
        page_links(self.page, self.total_pages)
    }

    /// Convert the items, keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Slice `items` into the requested page.
///
/// `total_pages = ceil(N / P)` and the requested page is clamped into
/// `[1, max(1, total_pages)]`. A zero page size is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let page = requested.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    }
}

/// Entry in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Build the pagination bar.
///
/// Always shows the first page, the last page, the current page and its
/// direct neighbours. A gap of exactly one page shows that page; a larger
/// gap collapses into one ellipsis.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);

    let mut visible = vec![1, total_pages, current];
    if current > 1 {
        visible.push(current - 1);
    }
    if current < total_pages {
        visible.push(current + 1);
    }
    visible.sort_unstable();
    visible.dedup();

    let link = |number: usize| PageLink::Page {
        number,
        current: number == current,
    };

    let mut links = Vec::with_capacity(visible.len() + 2);
    let mut previous: Option<usize> = None;
    for number in visible {
        if let Some(prev) = previous {
            match number - prev {
                1 => {}
                2 => links.push(link(prev + 1)),
                _ => links.push(PageLink::Ellipsis),
            }
        }
        links.push(link(number));
        previous = Some(number);
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<Option<usize>> {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        let items: Vec<u32> = (0..95).collect();
        assert_eq!(paginate(&items, 10, 1).total_pages, 10);
        let items: Vec<u32> = (0..100).collect();
        assert_eq!(paginate(&items, 10, 1).total_pages, 10);
        let items: Vec<u32> = (0..101).collect();
        assert_eq!(paginate(&items, 10, 1).total_pages, 11);
    }

    #[test]
    fn test_requested_page_is_clamped() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 10, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());

        let page = paginate(&items, 10, 99);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![21, 22, 23]);
    }

    #[test]
    fn test_empty_input_hides_controls() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 5, 4);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_controls());
        assert!(page.links().is_empty());
    }

    #[test]
    fn test_pages_partition_input_in_order() {
        for n in [0usize, 1, 5, 9, 10, 11, 37] {
            for size in [1usize, 3, 5, 10] {
                let items: Vec<usize> = (0..n).collect();
                let first = paginate(&items, size, 1);
                let mut seen = Vec::new();
                for page in 1..=first.total_pages {
                    seen.extend(paginate(&items, size, page).items);
                }
                assert_eq!(seen, items, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn test_navigation_flags() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 10, 2);
        assert!(page.has_previous());
        assert!(page.has_next());
        let last = paginate(&items, 10, 3);
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_links_small_range() {
        assert_eq!(numbers(&page_links(1, 1)), vec![Some(1)]);
        assert_eq!(
            numbers(&page_links(2, 3)),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_page_links_collapse_large_gaps() {
        assert_eq!(
            numbers(&page_links(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_links(1, 10)),
            vec![Some(1), Some(2), None, Some(10)]
        );
    }

    #[test]
    fn test_page_links_single_page_gap_shows_page() {
        // current 4: visible 1,3,4,5,7 -> page 2 and page 6 fill one-page gaps
        assert_eq!(
            numbers(&page_links(4, 7)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
    }

    #[test]
    fn test_page_links_mark_current() {
        let links = page_links(2, 5);
        assert!(links.contains(&PageLink::Page {
            number: 2,
            current: true
        }));
        assert!(links.contains(&PageLink::Page {
            number: 1,
            current: false
        }));
    }
}
