//! Search and categorical filtering

use serde::Serialize;

/// Filter value meaning "no categorical filter"
pub const FILTER_ALL: &str = "all";

/// Borrowing accessor for one text field of a record
pub type FieldAccessor<T> = for<'a> fn(&'a T) -> &'a str;

/// Which fields of `T` the search box and the category dropdown look at
pub struct ListSpec<T> {
    search_fields: Vec<FieldAccessor<T>>,
    category: Option<FieldAccessor<T>>,
}

impl<T> Clone for ListSpec<T> {
    fn clone(&self) -> Self {
        Self {
            search_fields: self.search_fields.clone(),
            category: self.category,
        }
    }
}

impl<T> Default for ListSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ListSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListSpec")
            .field("search_fields", &self.search_fields.len())
            .field("has_category", &self.category.is_some())
            .finish()
    }
}

impl<T> ListSpec<T> {
    pub fn new() -> Self {
        Self {
            search_fields: Vec::new(),
            category: None,
        }
    }

    /// Add a field matched by the free-text search
    pub fn search(mut self, field: FieldAccessor<T>) -> Self {
        self.search_fields.push(field);
        self
    }

    /// Set the field compared against the categorical filter
    pub fn category(mut self, field: FieldAccessor<T>) -> Self {
        self.category = Some(field);
        self
    }

    /// Check a single record against the query.
    ///
    /// Search is a case-insensitive substring match on any search field;
    /// the category must match exactly. Both conditions must hold.
    pub fn matches(&self, record: &T, query: &QueryState) -> bool {
        self.matches_search(record, &query.search.to_lowercase())
            && self.matches_category(record, query.filter.as_deref())
    }

    fn matches_search(&self, record: &T, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.search_fields
            .iter()
            .any(|field| field(record).to_lowercase().contains(needle))
    }

    fn matches_category(&self, record: &T, filter: Option<&str>) -> bool {
        match (filter, self.category) {
            (None, _) | (_, None) => true,
            (Some(wanted), Some(field)) => field(record) == wanted,
        }
    }

    /// Filter records, preserving their relative order
    pub fn apply<'a>(&self, records: &'a [T], query: &QueryState) -> Vec<&'a T> {
        let needle = query.search.to_lowercase();
        records
            .iter()
            .filter(|record| {
                self.matches_search(record, &needle)
                    && self.matches_category(record, query.filter.as_deref())
            })
            .collect()
    }
}

/// User-controlled list parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    search: String,
    /// `None` means "all"
    filter: Option<String>,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: None,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Requested page; the paginator clamps it against the result size
    pub fn page(&self) -> usize {
        self.page
    }

    /// Update the search text. A changed value resets the page to 1.
    ///
    /// Returns true if the value changed.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        if search == self.search {
            return false;
        }
        self.search = search;
        self.page = 1;
        true
    }

    /// Update the categorical filter. Empty or "all" clears it.
    /// A changed value resets the page to 1.
    pub fn set_filter(&mut self, filter: Option<&str>) -> bool {
        let filter = filter
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(FILTER_ALL))
            .map(str::to_lowercase);
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        ext: String,
        status: &'static str,
    }

    fn row_name(row: &Row) -> &str {
        &row.name
    }

    fn row_ext(row: &Row) -> &str {
        &row.ext
    }

    fn row_status(row: &Row) -> &str {
        row.status
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Ana Torres".into(), ext: "101".into(), status: "online" },
            Row { name: "Bruno Diaz".into(), ext: "102".into(), status: "offline" },
            Row { name: "Carla Ruiz".into(), ext: "201".into(), status: "online" },
            Row { name: "Daniel Paz".into(), ext: "310".into(), status: "pause" },
        ]
    }

    fn spec() -> ListSpec<Row> {
        ListSpec::new()
            .search(row_name)
            .search(row_ext)
            .category(row_status)
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let data = rows();
        let result = spec().apply(&data, &QueryState::new());
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].name, "Ana Torres");
        assert_eq!(result[3].name, "Daniel Paz");
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let data = rows();
        let mut query = QueryState::new();
        query.set_search("RUIZ");
        let result = spec().apply(&data, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].ext, "201");

        query.set_search("10");
        let names: Vec<_> = spec().apply(&data, &query).iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Ana Torres", "Bruno Diaz", "Daniel Paz"]);
    }

    #[test]
    fn test_search_and_filter_combine_with_and() {
        let data = rows();
        let mut query = QueryState::new();
        query.set_search("1");
        query.set_filter(Some("online"));
        let result = spec().apply(&data, &query);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.status == "online"));
    }

    #[test]
    fn test_all_filter_is_no_filter() {
        let mut query = QueryState::new();
        query.set_filter(Some("online"));
        assert_eq!(query.filter(), Some("online"));
        query.set_filter(Some("all"));
        assert_eq!(query.filter(), None);
        query.set_filter(Some(""));
        assert_eq!(query.filter(), None);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let data = rows();
        for needle in ["", "a", "ZZ", "0", "paz"] {
            let mut query = QueryState::new();
            query.set_search(needle);
            let once: Vec<Row> = spec().apply(&data, &query).into_iter().cloned().collect();
            let twice: Vec<Row> = spec().apply(&once, &query).into_iter().cloned().collect();
            assert_eq!(once, twice, "search {:?}", needle);
        }
    }

    #[test]
    fn test_changing_query_resets_page() {
        let mut query = QueryState::new();
        query.set_page(3);
        assert!(query.set_search("ana"));
        assert_eq!(query.page(), 1);

        query.set_page(2);
        assert!(!query.set_search("ana"));
        assert_eq!(query.page(), 2);

        assert!(query.set_filter(Some("pause")));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_spec_without_category_ignores_filter() {
        let data = rows();
        let spec = ListSpec::new().search(row_name);
        let mut query = QueryState::new();
        query.set_filter(Some("online"));
        assert_eq!(spec.apply(&data, &query).len(), 4);
    }
}
