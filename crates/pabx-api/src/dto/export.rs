//! Export DTOs

use pabx_services::ExportFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    /// Which list to export: agents, cdr, users, rates, audios or client-agents
    pub dataset: String,
    #[serde(default)]
    pub format: ExportFormat,
}
