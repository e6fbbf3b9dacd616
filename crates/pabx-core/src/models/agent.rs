//! Agent model
//!
//! Call-center agents registered on the PBX.

use crate::error::AppError;
use crate::query::ListSpec;
use crate::traits::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Agent presence status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Online,
    #[default]
    Offline,
    Pause,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Online => "online",
            AgentStatus::Offline => "offline",
            AgentStatus::Pause => "pause",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(AgentStatus::Online),
            "offline" => Ok(AgentStatus::Offline),
            "pause" => Ok(AgentStatus::Pause),
            other => Err(AppError::InvalidInput(format!(
                "Invalid agent status: {}. Must be one of: online, offline, pause",
                other
            ))),
        }
    }
}

/// Agent entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub name: String,
    /// Three digit extension number
    pub extension: String,
    pub caller_id: String,
    pub status: AgentStatus,
}

impl Agent {
    /// Search over name and extension
    pub fn list_spec() -> ListSpec<Agent> {
        ListSpec::new()
            .search(name_field)
            .search(extension_field)
            .category(status_field)
    }
}

fn name_field(record: &Agent) -> &str {
    &record.name
}

fn extension_field(record: &Agent) -> &str {
    &record.extension
}

fn status_field(record: &Agent) -> &str {
    record.status.as_str()
}

impl Record for Agent {
    fn id(&self) -> u32 {
        self.id
    }
}
