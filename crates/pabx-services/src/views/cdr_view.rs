//! Call detail record view
//!
//! The CDR page adds row selection, bulk delete and a debounced search
//! box on top of the generic list view. Deletes always apply to the
//! in-memory store, whatever facade the modals use.

use super::list_view::{ListQuery, ListView};
use crate::debounce::Debouncer;
use crate::mutation::InMemoryFacade;
use crate::store::RecordStore;
use pabx_core::config::SelectAllScope;
use pabx_core::models::{CdrRecord, Notification};
use pabx_core::query::{Page, SelectionTracker};
use pabx_core::traits::{MutationFacade, NotificationEmitter};
use pabx_core::{AppError, AppResult};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

fn assign_cdr_id(record: &mut CdrRecord, id: u32) {
    record.id = id;
}

pub struct CdrView {
    list: ListView<CdrRecord>,
    selection: Mutex<SelectionTracker>,
    scope: SelectAllScope,
    facade: InMemoryFacade<CdrRecord>,
    notifier: Arc<dyn NotificationEmitter>,
    debouncer: Debouncer,
}

impl CdrView {
    pub fn new(
        store: RecordStore<CdrRecord>,
        page_size: usize,
        scope: SelectAllScope,
        debounce: Duration,
        notifier: Arc<dyn NotificationEmitter>,
    ) -> Self {
        Self {
            list: ListView::new(store.clone(), CdrRecord::list_spec(), page_size),
            selection: Mutex::new(SelectionTracker::new()),
            scope,
            facade: InMemoryFacade::new("cdr", store, assign_cdr_id),
            notifier,
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn list(&self) -> &ListView<CdrRecord> {
        &self.list
    }

    pub fn scope(&self) -> SelectAllScope {
        self.scope
    }

    pub fn apply(&self, params: &ListQuery) -> Page<CdrRecord> {
        self.list.apply(params)
    }

    pub fn selection(&self) -> SelectionTracker {
        self.selection.lock().clone()
    }

    /// Check or uncheck the header box.
    ///
    /// Checking selects exactly the visible page, or every match when the
    /// scope is `AllMatches`. Unchecking clears the whole selection.
    #[instrument(skip(self), fields(scope = ?self.scope))]
    pub fn select_all(&self, checked: bool) -> SelectionTracker {
        let ids = match self.scope {
            SelectAllScope::CurrentPage => self.list.visible_ids(),
            SelectAllScope::AllMatches => self.list.matching_ids(),
        };
        let mut selection = self.selection.lock();
        selection.select_all(checked, ids);
        debug!(selected = selection.len(), "Select all");
        selection.clone()
    }

    pub fn toggle(&self, id: u32, checked: bool) -> AppResult<SelectionTracker> {
        if checked && !self.list.store().contains(id) {
            return Err(AppError::NotFound(format!("cdr {}", id)));
        }
        let mut selection = self.selection.lock();
        selection.toggle(id, checked);
        Ok(selection.clone())
    }

    /// Whether the header box shows as checked
    pub fn page_fully_selected(&self) -> bool {
        self.selection.lock().covers(self.list.visible_ids())
    }

    /// Delete every selected record and clear the selection
    #[instrument(skip(self))]
    pub async fn delete_selected(&self) -> AppResult<usize> {
        let ids = self.selection.lock().ids();
        if ids.is_empty() {
            let err = AppError::InvalidInput("No records selected".to_string());
            self.notifier
                .emit(Notification::error("Nothing to delete", err.to_string()));
            return Err(err);
        }

        let removed = self.facade.delete(&ids).await?;
        self.selection.lock().clear();

        info!(removed, "Selected records deleted");
        self.notifier.emit(Notification::success(
            "Records deleted",
            format!("{} record(s) deleted", removed),
        ));
        Ok(removed)
    }

    /// Record a keystroke in the search box. The search commits once the
    /// debounce delay passes with no further keystroke.
    pub fn search_debounced(&self, text: impl Into<String>) {
        let text = text.into();
        let query = self.list.query_handle();
        self.debouncer.call(async move {
            if query.lock().set_search(text.as_str()) {
                debug!(search = %text, "Debounced search committed");
            }
        });
    }

    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debouncer.delay()
    }
}
