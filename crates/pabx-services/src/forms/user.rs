//! User (customer account) form

use super::{require, today};
use crate::modal::EntityForm;
use chrono::Duration;
use pabx_core::models::{User, UserStatus};
use pabx_core::AppResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Plan assigned to users created without one
pub const DEFAULT_PLAN: &str = "Basic";

/// Length of a newly activated plan
const PLAN_PERIOD_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Not format-checked
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[serde(default = "default_plan")]
    pub plan: String,

    #[serde(default)]
    pub status: UserStatus,
}

fn default_plan() -> String {
    DEFAULT_PLAN.to_string()
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            plan: default_plan(),
            status: UserStatus::default(),
        }
    }
}

impl EntityForm for UserForm {
    type Entity = User;
    const LABEL: &'static str = "User";

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            company: user.company.clone(),
            plan: user.plan.clone(),
            status: user.status,
        }
    }

    fn check(&self, _editing: Option<&User>) -> AppResult<()> {
        require(self.validate(), None::<&str>)
    }

    fn build(&self, editing: Option<&User>) -> User {
        let plan = if self.plan.is_empty() {
            default_plan()
        } else {
            self.plan.clone()
        };

        match editing {
            Some(user) => User {
                name: self.name.clone(),
                email: self.email.clone(),
                company: self.company.clone(),
                plan,
                status: self.status,
                ..user.clone()
            },
            None => {
                let today = today();
                User {
                    id: 0,
                    name: self.name.clone(),
                    email: self.email.clone(),
                    company: self.company.clone(),
                    plan,
                    status: self.status,
                    registered_at: today,
                    balance: Decimal::ZERO,
                    minute_balance: 0,
                    plan_activation_date: today,
                    plan_expiration_date: today + Duration::days(PLAN_PERIOD_DAYS),
                }
            }
        }
    }
}
