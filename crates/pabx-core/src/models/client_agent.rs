//! Client agent model
//!
//! Agents belonging to a reseller's customers. Read-only in the console.

use crate::error::AppError;
use crate::query::ListSpec;
use crate::traits::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientAgentStatus {
    Online,
    Offline,
    Busy,
}

impl ClientAgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientAgentStatus::Online => "online",
            ClientAgentStatus::Offline => "offline",
            ClientAgentStatus::Busy => "busy",
        }
    }
}

impl fmt::Display for ClientAgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientAgentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(ClientAgentStatus::Online),
            "offline" => Ok(ClientAgentStatus::Offline),
            "busy" => Ok(ClientAgentStatus::Busy),
            other => Err(AppError::InvalidInput(format!(
                "Invalid client agent status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientAgent {
    pub id: u32,
    pub name: String,
    pub extension: String,
    pub client_name: String,
    pub client_company: String,
    pub status: ClientAgentStatus,
    pub caller_id: String,
}

impl ClientAgent {
    pub fn list_spec() -> ListSpec<ClientAgent> {
        ListSpec::new()
            .search(name_field)
            .search(extension_field)
            .search(client_name_field)
            .search(client_company_field)
            .category(status_field)
    }
}

fn name_field(record: &ClientAgent) -> &str {
    &record.name
}

fn extension_field(record: &ClientAgent) -> &str {
    &record.extension
}

fn client_name_field(record: &ClientAgent) -> &str {
    &record.client_name
}

fn client_company_field(record: &ClientAgent) -> &str {
    &record.client_company
}

fn status_field(record: &ClientAgent) -> &str {
    record.status.as_str()
}

impl Record for ClientAgent {
    fn id(&self) -> u32 {
        self.id
    }
}
