//! Plan form

use super::require;
use crate::modal::EntityForm;
use pabx_core::models::Plan;
use pabx_core::AppResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlanForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Plan name is required"))]
    pub name: String,

    /// Monthly price, must be positive
    #[serde(default)]
    pub price: Decimal,

    #[serde(default)]
    #[validate(range(min = 1, message = "Minutes must be positive"))]
    pub minutes: u32,

    #[serde(default)]
    #[validate(range(min = 1, message = "Agents must be positive"))]
    pub agents: u32,

    #[serde(default)]
    #[validate(range(min = 1, message = "Concurrent calls must be positive"))]
    pub concurrent: u32,

    #[serde(default)]
    pub features: Vec<String>,
}

impl EntityForm for PlanForm {
    type Entity = Plan;
    const LABEL: &'static str = "Plan";

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            price: plan.price,
            minutes: plan.minutes,
            agents: plan.agents,
            concurrent: plan.concurrent,
            features: plan.features.clone(),
        }
    }

    fn check(&self, _editing: Option<&Plan>) -> AppResult<()> {
        require(
            self.validate(),
            (self.price <= Decimal::ZERO).then_some("price"),
        )
    }

    fn build(&self, editing: Option<&Plan>) -> Plan {
        Plan {
            id: editing.map_or(0, |plan| plan.id),
            name: self.name.clone(),
            price: self.price,
            minutes: self.minutes,
            agents: self.agents,
            concurrent: self.concurrent,
            features: self
                .features
                .iter()
                .map(|feature| feature.trim())
                .filter(|feature| !feature.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pabx_core::AppError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_blank_plan_reports_every_number() {
        match PlanForm::blank().check(None) {
            Err(AppError::MissingFields(fields)) => {
                assert_eq!(fields, "agents, concurrent, minutes, name, price")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_valid_plan_drops_blank_features() {
        let form = PlanForm {
            name: "Starter".to_string(),
            price: dec!(9.99),
            minutes: 100,
            agents: 1,
            concurrent: 1,
            features: vec!["IVR".to_string(), "  ".to_string()],
        };
        assert!(form.check(None).is_ok());
        assert_eq!(form.build(None).features, vec!["IVR"]);
    }

    #[test]
    fn test_negative_price_rejected() {
        let form = PlanForm {
            name: "Broken".to_string(),
            price: dec!(-1),
            minutes: 1,
            agents: 1,
            concurrent: 1,
            features: Vec::new(),
        };
        assert!(matches!(form.check(None), Err(AppError::MissingFields(f)) if f == "price"));
    }
}
