//! Page view controllers

pub mod active_calls;
pub mod cdr_view;
pub mod list_view;
pub mod settings_view;

pub use active_calls::ActiveCallsView;
pub use cdr_view::CdrView;
pub use list_view::{ListQuery, ListView};
pub use settings_view::SettingsView;
