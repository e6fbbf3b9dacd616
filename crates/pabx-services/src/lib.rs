//! View controllers and services for the PABX console
//!
//! Each console page is backed by a view controller holding its query
//! state, selection and modal form. Controllers read from in-memory record
//! stores seeded with mock data and report every outcome through the
//! notification center.
//!
//! # Services
//!
//! - `ListView` - search, filter and pagination over one record store
//! - `CdrView` - selection, bulk delete and debounced search for CDRs
//! - `ActiveCallsView` - duration ticker bound to mount/unmount
//! - `ModalController` - create/edit forms saved through a `MutationFacade`
//! - `ExportService` - simulated exports
//! - `Dashboard` - every view, built from `AppConfig`

pub mod dashboard;
pub mod debounce;
pub mod export;
pub mod forms;
pub mod modal;
pub mod mutation;
pub mod notifications;
pub mod reports;
pub mod seed;
pub mod store;
pub mod views;

pub use dashboard::Dashboard;
pub use debounce::Debouncer;
pub use export::{ExportFormat, ExportReceipt, ExportService};
pub use modal::{EntityForm, FormModal, ModalController};
pub use mutation::{facade_for, InMemoryFacade, LoggingFacade};
pub use notifications::NotificationCenter;
pub use store::RecordStore;
pub use views::{ActiveCallsView, CdrView, ListQuery, ListView, SettingsView};
