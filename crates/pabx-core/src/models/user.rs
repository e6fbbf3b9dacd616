//! Customer user model
//!
//! Customer accounts managed from the Users view: plan, balances and
//! subscription window.

use crate::error::AppError;
use crate::query::ListSpec;
use crate::traits::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Customer account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "suspended" => Ok(UserStatus::Suspended),
            other => Err(AppError::InvalidInput(format!(
                "Invalid user status: {}. Must be one of: active, suspended",
                other
            ))),
        }
    }
}

/// Customer user entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub company: String,
    /// Plan name
    pub plan: String,
    pub status: UserStatus,
    pub registered_at: NaiveDate,
    /// Prepaid money balance
    pub balance: Decimal,
    /// Remaining included minutes
    pub minute_balance: u32,
    pub plan_activation_date: NaiveDate,
    pub plan_expiration_date: NaiveDate,
}

impl User {
    /// Days until the plan expires, negative once it has expired.
    ///
    /// Derived at render time; never stored.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.plan_expiration_date - today).num_days()
    }

    /// Check if the plan is past its expiration date
    pub fn is_plan_expired(&self, today: NaiveDate) -> bool {
        self.days_remaining(today) < 0
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

impl User {
    /// Search over name, email and company
    pub fn list_spec() -> ListSpec<User> {
        ListSpec::new()
            .search(name_field)
            .search(email_field)
            .search(company_field)
            .category(status_field)
    }
}

fn name_field(record: &User) -> &str {
    &record.name
}

fn email_field(record: &User) -> &str {
    &record.email
}

fn company_field(record: &User) -> &str {
    &record.company
}

fn status_field(record: &User) -> &str {
    record.status.as_str()
}

impl Record for User {
    fn id(&self) -> u32 {
        self.id
    }
}
