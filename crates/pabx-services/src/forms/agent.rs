//! Agent form

use super::require;
use crate::modal::EntityForm;
use pabx_core::models::{Agent, AgentStatus};
use pabx_core::AppResult;
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Range new extensions are drawn from
pub const EXTENSION_RANGE: std::ops::RangeInclusive<u32> = 100..=999;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AgentForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub extension: String,

    #[serde(default, alias = "callerId")]
    #[validate(length(min = 1, message = "Caller ID is required"))]
    pub caller_id: String,

    /// SIP password; required only for new agents
    #[serde(default, skip_serializing)]
    pub password: String,

    #[serde(default)]
    pub status: AgentStatus,
}

/// Random three digit extension
pub fn random_extension() -> String {
    rand::thread_rng().gen_range(EXTENSION_RANGE).to_string()
}

impl EntityForm for AgentForm {
    type Entity = Agent;
    const LABEL: &'static str = "Agent";

    fn blank() -> Self {
        Self {
            extension: random_extension(),
            ..Self::default()
        }
    }

    fn from_entity(agent: &Agent) -> Self {
        Self {
            name: agent.name.clone(),
            extension: agent.extension.clone(),
            caller_id: agent.caller_id.clone(),
            password: String::new(),
            status: agent.status,
        }
    }

    fn check(&self, editing: Option<&Agent>) -> AppResult<()> {
        let password_missing = editing.is_none() && self.password.is_empty();
        require(
            self.validate(),
            password_missing.then_some("password"),
        )
    }

    fn build(&self, editing: Option<&Agent>) -> Agent {
        let extension = if self.extension.is_empty() {
            editing
                .map(|agent| agent.extension.clone())
                .unwrap_or_else(random_extension)
        } else {
            self.extension.clone()
        };
        Agent {
            id: editing.map_or(0, |agent| agent.id),
            name: self.name.clone(),
            extension,
            caller_id: self.caller_id.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pabx_core::AppError;

    fn agent() -> Agent {
        Agent {
            id: 4,
            name: "Luis Rodriguez".to_string(),
            extension: "104".to_string(),
            caller_id: "+1 555 0104".to_string(),
            status: AgentStatus::Offline,
        }
    }

    #[test]
    fn test_blank_form_has_three_digit_extension() {
        for _ in 0..50 {
            let form = AgentForm::blank();
            let ext: u32 = form.extension.parse().unwrap();
            assert!(EXTENSION_RANGE.contains(&ext));
            assert_eq!(form.extension.len(), 3);
            assert!(form.name.is_empty());
        }
    }

    #[test]
    fn test_new_agent_requires_name_caller_id_and_password() {
        let form = AgentForm::blank();
        match form.check(None) {
            Err(AppError::MissingFields(fields)) => {
                assert_eq!(fields, "caller_id, name, password")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_password_optional_when_editing() {
        let existing = agent();
        let form = AgentForm::from_entity(&existing);
        assert!(form.password.is_empty());
        assert!(form.check(Some(&existing)).is_ok());
        assert_eq!(form.build(Some(&existing)), existing);
    }

    #[test]
    fn test_caller_id_format_not_checked() {
        let form = AgentForm {
            name: "X".to_string(),
            caller_id: "not a number".to_string(),
            password: "pw".to_string(),
            ..AgentForm::blank()
        };
        assert!(form.check(None).is_ok());
        assert_eq!(form.build(None).id, 0);
    }
}
