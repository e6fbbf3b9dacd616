//! Modal forms for each editable record kind
//!
//! Validation is presence-based: required strings must be non-empty and
//! named numbers must be positive. Formats (email, phone) are not checked.

pub mod agent;
pub mod audio;
pub mod plan;
pub mod rate;
pub mod settings;
pub mod user;

pub use agent::AgentForm;
pub use audio::AudioForm;
pub use plan::PlanForm;
pub use rate::RateForm;
pub use settings::{Settings, SettingsForm};
pub use user::UserForm;

use chrono::{Local, NaiveDate};
use pabx_core::{AppError, AppResult};
use validator::ValidationErrors;

/// Merge derive-validation failures with hand-checked fields into one
/// missing-fields error, field names sorted.
pub(crate) fn require(
    result: Result<(), ValidationErrors>,
    extra: impl IntoIterator<Item = &'static str>,
) -> AppResult<()> {
    let mut fields: Vec<String> = match &result {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect(),
    };
    fields.extend(extra.into_iter().map(str::to_string));
    fields.sort();
    fields.dedup();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing_fields(fields))
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
