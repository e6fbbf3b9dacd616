//! Simulated data export
//!
//! No file is produced: the export waits out a fixed delay and reports
//! success through a notification.

use chrono::{DateTime, Utc};
use pabx_core::models::Notification;
use pabx_core::traits::NotificationEmitter;
use pabx_core::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(AppError::InvalidInput(format!(
                "Invalid export format: {}. Must be one of: csv, excel, pdf",
                other
            ))),
        }
    }
}

/// What an export would have contained
#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    pub dataset: String,
    pub format: ExportFormat,
    pub records: usize,
    pub completed_at: DateTime<Utc>,
}

pub struct ExportService {
    delay: Duration,
    notifier: Arc<dyn NotificationEmitter>,
}

impl ExportService {
    pub fn new(delay: Duration, notifier: Arc<dyn NotificationEmitter>) -> Self {
        Self { delay, notifier }
    }

    #[instrument(skip(self))]
    pub async fn export(&self, dataset: &str, records: usize, format: ExportFormat) -> ExportReceipt {
        tokio::time::sleep(self.delay).await;

        info!("Export simulated");
        self.notifier.emit(Notification::success(
            "Export complete",
            format!("{} records exported as {}", records, format),
        ));

        ExportReceipt {
            dataset: dataset.to_string(),
            format,
            records,
            completed_at: Utc::now(),
        }
    }
}
