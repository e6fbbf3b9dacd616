//! CDR (Call Detail Record) model
//!
//! Completed, missed and abandoned calls for reporting.

use crate::error::AppError;
use crate::query::ListSpec;
use crate::traits::Record;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Final disposition of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CdrStatus {
    Completed,
    Missed,
    Abandoned,
}

impl CdrStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CdrStatus::Completed => "completed",
            CdrStatus::Missed => "missed",
            CdrStatus::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for CdrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CdrStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(CdrStatus::Completed),
            "missed" => Ok(CdrStatus::Missed),
            "abandoned" => Ok(CdrStatus::Abandoned),
            other => Err(AppError::InvalidInput(format!(
                "Invalid CDR status: {}",
                other
            ))),
        }
    }
}

/// Call detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdrRecord {
    pub id: u32,
    pub date_time: NaiveDateTime,
    pub from: String,
    pub to: String,
    pub agent: String,
    /// Talk time in seconds
    pub duration: u32,
    pub status: CdrStatus,
    pub cost: Decimal,
}

impl CdrRecord {
    #[inline]
    pub fn was_answered(&self) -> bool {
        self.status == CdrStatus::Completed
    }

    pub fn formatted_duration(&self) -> String {
        super::format_duration(self.duration)
    }
}

impl CdrRecord {
    /// Search over caller number and agent
    pub fn list_spec() -> ListSpec<CdrRecord> {
        ListSpec::new()
            .search(from_field)
            .search(agent_field)
            .category(status_field)
    }
}

fn from_field(record: &CdrRecord) -> &str {
    &record.from
}

fn agent_field(record: &CdrRecord) -> &str {
    &record.agent
}

fn status_field(record: &CdrRecord) -> &str {
    record.status.as_str()
}

impl Record for CdrRecord {
    fn id(&self) -> u32 {
        self.id
    }
}
