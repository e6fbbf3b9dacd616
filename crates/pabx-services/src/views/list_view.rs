//! Generic filtered list view
//!
//! One instance per data page. Holds the query state across requests and
//! derives the visible page from the record store on every read.

use crate::store::RecordStore;
use pabx_core::query::{paginate, ListSpec, Page, QueryState};
use pabx_core::traits::Record;
use parking_lot::Mutex;
use serde::Deserialize;
use std::sync::Arc;
use tracing::trace;

/// Query parameters as sent by the front-end; absent fields are unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    /// Categorical filter; "all" or empty clears it
    #[serde(alias = "category", alias = "filter")]
    pub status: Option<String>,
    pub page: Option<usize>,
}

pub struct ListView<T: Record> {
    store: RecordStore<T>,
    spec: ListSpec<T>,
    page_size: usize,
    query: Arc<Mutex<QueryState>>,
}

impl<T: Record> ListView<T> {
    pub fn new(store: RecordStore<T>, spec: ListSpec<T>, page_size: usize) -> Self {
        Self {
            store,
            spec,
            page_size: page_size.max(1),
            query: Arc::new(Mutex::new(QueryState::new())),
        }
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn query(&self) -> QueryState {
        self.query.lock().clone()
    }

    /// Shared handle on the query state, for deferred updates
    pub(crate) fn query_handle(&self) -> Arc<Mutex<QueryState>> {
        Arc::clone(&self.query)
    }

    /// Returns true if the search changed (and the page was reset)
    pub fn set_search(&self, search: impl Into<String>) -> bool {
        self.query.lock().set_search(search)
    }

    pub fn set_filter(&self, filter: Option<&str>) -> bool {
        self.query.lock().set_filter(filter)
    }

    pub fn set_page(&self, page: usize) {
        self.query.lock().set_page(page);
    }

    /// Apply the present parameters in order search, filter, page.
    ///
    /// A changed search or filter resets to page 1 and the requested page
    /// is ignored for that request.
    pub fn apply(&self, params: &ListQuery) -> Page<T> {
        {
            let mut query = self.query.lock();
            let mut changed = false;
            if let Some(search) = &params.search {
                changed |= query.set_search(search.as_str());
            }
            if let Some(status) = &params.status {
                changed |= query.set_filter(Some(status.as_str()));
            }
            match params.page {
                Some(page) if !changed => query.set_page(page),
                Some(page) => trace!(page, "Requested page dropped after query change"),
                None => {}
            }
        }
        self.current_page()
    }

    /// All records matching the current query, in store order
    pub fn filtered(&self) -> Vec<T> {
        let query = self.query();
        self.store.with(|records| {
            self.spec
                .apply(records, &query)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// The visible page for the current query
    pub fn current_page(&self) -> Page<T> {
        let query = self.query();
        let filtered = self.filtered();
        let page = paginate(&filtered, self.page_size, query.page());
        trace!(
            page = page.page,
            total_pages = page.total_pages,
            total_items = page.total_items,
            "List page derived"
        );
        page
    }

    /// Ids visible on the current page
    pub fn visible_ids(&self) -> Vec<u32> {
        self.current_page().items.iter().map(Record::id).collect()
    }

    /// Ids of every record matching the current query
    pub fn matching_ids(&self) -> Vec<u32> {
        self.filtered().iter().map(Record::id).collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pabx_core::models::Agent;

    fn agents_view() -> ListView<Agent> {
        ListView::new(RecordStore::new(seed::agents()), Agent::list_spec(), 10)
    }

    #[test]
    fn test_pages_partition_filtered_set() {
        let view = ListView::new(
            RecordStore::new(seed::cdrs()),
            pabx_core::models::CdrRecord::list_spec(),
            4,
        );
        let all = view.filtered();
        let first = view.current_page();

        let mut seen = Vec::new();
        for n in 1..=first.total_pages {
            view.set_page(n);
            seen.extend(view.current_page().items);
        }
        assert_eq!(seen, all);
    }

    #[test]
    fn test_search_resets_page_but_repeat_does_not() {
        let view = agents_view();
        view.apply(&ListQuery {
            page: Some(2),
            ..Default::default()
        });
        assert_eq!(view.query().page(), 2);

        let page = view.apply(&ListQuery {
            search: Some("a".to_string()),
            ..Default::default()
        });
        assert_eq!(page.page, 1);

        view.set_page(2);
        view.apply(&ListQuery {
            search: Some("a".to_string()),
            ..Default::default()
        });
        assert_eq!(view.query().page(), 2);
    }

    #[test]
    fn test_changed_search_ignores_page_sent_with_it() {
        let view = ListView::new(RecordStore::new(seed::agents()), Agent::list_spec(), 5);
        view.set_page(2);

        let page = view.apply(&ListQuery {
            search: Some("a".to_string()),
            status: None,
            page: Some(2),
        });
        assert_eq!(page.page, 1);
        assert_eq!(view.query().page(), 1);

        // same search again: the page is honoured
        let page = view.apply(&ListQuery {
            search: Some("a".to_string()),
            status: None,
            page: Some(2),
        });
        assert_eq!(page.page, 2);

        let page = view.apply(&ListQuery {
            search: None,
            status: Some("online".to_string()),
            page: Some(2),
        });
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_status_filter() {
        let view = agents_view();
        let page = view.apply(&ListQuery {
            status: Some("pause".to_string()),
            ..Default::default()
        });
        assert_eq!(page.total_items, 2);
        assert!(page.items.iter().all(|a| a.status.as_str() == "pause"));

        let page = view.apply(&ListQuery {
            status: Some("all".to_string()),
            ..Default::default()
        });
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_no_matches_hides_controls() {
        let view = agents_view();
        let page = view.apply(&ListQuery {
            search: Some("zzz".to_string()),
            ..Default::default()
        });
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_controls());
    }

    #[test]
    fn test_requested_page_is_clamped() {
        let view = agents_view();
        let page = view.apply(&ListQuery {
            page: Some(99),
            ..Default::default()
        });
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 2);
    }
}
