//! Active call tracking
//!
//! Calls currently in progress, as shown on the Active Calls view.

use crate::error::AppError;
use crate::traits::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Live call state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Talking,
    Ringing,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Talking => "talking",
            CallStatus::Ringing => "ringing",
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "talking" => Ok(CallStatus::Talking),
            "ringing" => Ok(CallStatus::Ringing),
            other => Err(AppError::InvalidInput(format!(
                "Invalid call status: {}",
                other
            ))),
        }
    }
}

/// Active call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveCall {
    pub id: u32,
    pub extension: String,
    pub agent: String,
    pub caller_id: String,
    pub destination: String,
    /// Elapsed seconds, advanced by the duration ticker
    pub duration: u32,
    pub status: CallStatus,
}

impl ActiveCall {
    /// Elapsed time for display
    pub fn formatted_duration(&self) -> String {
        super::format_duration(self.duration)
    }
}

impl Record for ActiveCall {
    fn id(&self) -> u32 {
        self.id
    }
}
