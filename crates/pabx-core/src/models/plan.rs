//! Billing plan model
//!
//! Subscription plans offered to customers.

use crate::traits::Record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u32,
    pub name: String,
    /// Monthly price
    pub price: Decimal,
    /// Included minutes per month
    pub minutes: u32,
    /// Maximum number of agents
    pub agents: u32,
    /// Maximum concurrent calls
    pub concurrent: u32,
    /// Feature bullet points, in display order
    pub features: Vec<String>,
}

impl Record for Plan {
    fn id(&self) -> u32 {
        self.id
    }
}
