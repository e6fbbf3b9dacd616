//! Rate form

use super::require;
use crate::modal::EntityForm;
use pabx_core::models::{Rate, RateStatus};
use pabx_core::AppResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RateForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Prefix is required"))]
    pub prefix: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,

    #[serde(default, alias = "pricePerMinute")]
    pub price_per_minute: Decimal,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub status: RateStatus,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for RateForm {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            destination: String::new(),
            price_per_minute: Decimal::ZERO,
            currency: default_currency(),
            status: RateStatus::default(),
        }
    }
}

impl EntityForm for RateForm {
    type Entity = Rate;
    const LABEL: &'static str = "Rate";

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(rate: &Rate) -> Self {
        Self {
            prefix: rate.prefix.clone(),
            destination: rate.destination.clone(),
            price_per_minute: rate.price_per_minute,
            currency: rate.currency.clone(),
            status: rate.status,
        }
    }

    fn check(&self, _editing: Option<&Rate>) -> AppResult<()> {
        require(
            self.validate(),
            (self.price_per_minute <= Decimal::ZERO).then_some("price_per_minute"),
        )
    }

    fn build(&self, editing: Option<&Rate>) -> Rate {
        Rate {
            id: editing.map_or(0, |rate| rate.id),
            prefix: self.prefix.trim().to_string(),
            destination: self.destination.clone(),
            price_per_minute: self.price_per_minute,
            currency: if self.currency.is_empty() {
                default_currency()
            } else {
                self.currency.clone()
            },
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pabx_core::AppError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_requires_positive_price() {
        let form = RateForm {
            prefix: "44".to_string(),
            destination: "United Kingdom".to_string(),
            ..RateForm::blank()
        };
        match form.check(None) {
            Err(AppError::MissingFields(fields)) => assert_eq!(fields, "price_per_minute"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_valid_rate() {
        let form = RateForm {
            prefix: " 44 ".to_string(),
            destination: "United Kingdom".to_string(),
            price_per_minute: dec!(0.02),
            ..RateForm::blank()
        };
        assert!(form.check(None).is_ok());
        let rate = form.build(None);
        assert_eq!(rate.prefix, "44");
        assert_eq!(rate.currency, "USD");
    }
}
