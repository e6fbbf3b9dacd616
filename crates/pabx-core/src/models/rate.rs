//! Rate model
//!
//! Per-minute termination prices by destination prefix.

use crate::error::AppError;
use crate::query::ListSpec;
use crate::traits::Record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RateStatus {
    #[default]
    Active,
    Inactive,
}

impl RateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateStatus::Active => "active",
            RateStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for RateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(RateStatus::Active),
            "inactive" => Ok(RateStatus::Inactive),
            other => Err(AppError::InvalidInput(format!(
                "Invalid rate status: {}",
                other
            ))),
        }
    }
}

/// Destination rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub id: u32,
    /// Dialled number prefix, e.g. "1" or "5511"
    pub prefix: String,
    pub destination: String,
    pub price_per_minute: Decimal,
    pub currency: String,
    pub status: RateStatus,
}

impl Rate {
    /// Cost of a call of `seconds` length, billed per started minute
    pub fn cost_for(&self, seconds: u32) -> Decimal {
        let minutes = (seconds + 59) / 60;
        self.price_per_minute * Decimal::from(minutes)
    }
}

impl Rate {
    pub fn list_spec() -> ListSpec<Rate> {
        ListSpec::new()
            .search(prefix_field)
            .search(destination_field)
            .category(status_field)
    }
}

fn prefix_field(record: &Rate) -> &str {
    &record.prefix
}

fn destination_field(record: &Rate) -> &str {
    &record.destination
}

fn status_field(record: &Rate) -> &str {
    record.status.as_str()
}

impl Record for Rate {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_rounds_up_to_started_minute() {
        let rate = Rate {
            id: 1,
            prefix: "1".to_string(),
            destination: "USA".to_string(),
            price_per_minute: dec!(0.02),
            currency: "USD".to_string(),
            status: RateStatus::Active,
        };
        assert_eq!(rate.cost_for(0), dec!(0));
        assert_eq!(rate.cost_for(1), dec!(0.02));
        assert_eq!(rate.cost_for(60), dec!(0.02));
        assert_eq!(rate.cost_for(61), dec!(0.04));
    }
}
