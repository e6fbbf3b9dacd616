//! Row selection for bulk actions

use serde::Serialize;
use std::collections::BTreeSet;

/// Set of selected record ids.
///
/// Selection survives page navigation; only select-all, select-none,
/// toggling, or a delete change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionTracker {
    selected: BTreeSet<u32>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with exactly `ids` when checked, clear it otherwise
    pub fn select_all<I>(&mut self, checked: bool, ids: I)
    where
        I: IntoIterator<Item = u32>,
    {
        self.selected.clear();
        if checked {
            self.selected.extend(ids);
        }
    }

    /// Add or remove a single id
    pub fn toggle(&mut self, id: u32, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    /// True when every id in `ids` is selected and `ids` is not empty
    pub fn covers<I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = u32>,
    {
        let mut any = false;
        for id in ids {
            if !self.selected.contains(&id) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_takes_exactly_visible_ids() {
        let mut selection = SelectionTracker::new();
        selection.toggle(99, true);
        selection.select_all(true, vec![1, 2, 3]);
        assert_eq!(selection.ids(), vec![1, 2, 3]);
        assert!(!selection.is_selected(99));
        assert!(selection.covers(vec![1, 2, 3]));
    }

    #[test]
    fn test_select_none_clears() {
        let mut selection = SelectionTracker::new();
        selection.select_all(true, vec![4, 5]);
        selection.select_all(false, vec![4, 5]);
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionTracker::new();
        selection.toggle(7, true);
        selection.toggle(8, true);
        selection.toggle(7, false);
        assert_eq!(selection.ids(), vec![8]);
        assert!(!selection.covers(vec![7, 8]));
        assert!(!selection.covers(Vec::new()));
    }
}
