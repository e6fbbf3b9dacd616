//! User page DTOs

use chrono::NaiveDate;
use pabx_core::models::User;
use serde::Serialize;

/// A user row with its subscription window derived for display
#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    #[serde(flatten)]
    pub user: User,
    /// Negative once the plan has expired
    pub days_remaining: i64,
    pub plan_expired: bool,
}

impl UserRow {
    pub fn new(user: User, today: NaiveDate) -> Self {
        Self {
            days_remaining: user.days_remaining(today),
            plan_expired: user.is_plan_expired(today),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pabx_core::models::UserStatus;
    use rust_decimal::Decimal;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn user() -> User {
        User {
            id: 4,
            name: "Laura Chen".to_string(),
            email: "laura@voxline.net".to_string(),
            company: "Voxline".to_string(),
            plan: "Basic".to_string(),
            status: UserStatus::Active,
            registered_at: date(2024, 1, 1),
            balance: Decimal::ZERO,
            minute_balance: 0,
            plan_activation_date: date(2024, 1, 1),
            plan_expiration_date: date(2024, 1, 31),
        }
    }

    #[test]
    fn test_row_derives_days_remaining() {
        let row = UserRow::new(user(), date(2024, 1, 21));
        assert_eq!(row.days_remaining, 10);
        assert!(!row.plan_expired);

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["name"], "Laura Chen");
        assert_eq!(value["days_remaining"], 10);
    }

    #[test]
    fn test_row_after_expiry() {
        let row = UserRow::new(user(), date(2024, 2, 2));
        assert_eq!(row.days_remaining, -2);
        assert!(row.plan_expired);
    }
}
