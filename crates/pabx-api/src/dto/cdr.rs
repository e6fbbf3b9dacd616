//! CDR selection and search DTOs

use pabx_core::config::SelectAllScope;
use pabx_core::query::SelectionTracker;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SelectAllRequest {
    pub checked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleRequest {
    pub id: u32,
    pub checked: bool,
}

/// Keystroke in the debounced search box
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionResponse {
    pub selected: Vec<u32>,
    pub count: usize,
    /// Header checkbox state for the visible page
    pub page_fully_selected: bool,
    pub scope: &'static str,
}

impl SelectionResponse {
    pub fn new(selection: &SelectionTracker, page_fully_selected: bool, scope: SelectAllScope) -> Self {
        Self {
            selected: selection.ids(),
            count: selection.len(),
            page_fully_selected,
            scope: match scope {
                SelectAllScope::CurrentPage => "current_page",
                SelectAllScope::AllMatches => "all_matches",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchAccepted {
    pub pending: bool,
    pub debounce_ms: u64,
}
