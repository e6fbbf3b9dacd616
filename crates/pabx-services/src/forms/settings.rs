//! Company settings form
//!
//! Settings are a single in-memory record, not a list, so they are saved
//! directly rather than through a mutation facade.

use super::require;
use pabx_core::AppResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub company_name: String,
    pub timezone: String,
    pub language: String,
    pub currency: String,
    /// Address receiving voicemail and alert emails
    pub notification_email: String,
    pub call_recording: bool,
    pub voicemail_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            company_name: "PABX Corp".to_string(),
            timezone: "UTC".to_string(),
            language: "en".to_string(),
            currency: "USD".to_string(),
            notification_email: "admin@pabx.com".to_string(),
            call_recording: true,
            voicemail_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SettingsForm {
    #[serde(default, alias = "companyName")]
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[serde(default)]
    pub timezone: String,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub currency: String,

    #[serde(default, alias = "notificationEmail")]
    pub notification_email: String,

    #[serde(default, alias = "callRecording")]
    pub call_recording: bool,

    #[serde(default, alias = "voicemailEnabled")]
    pub voicemail_enabled: bool,
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            company_name: settings.company_name.clone(),
            timezone: settings.timezone.clone(),
            language: settings.language.clone(),
            currency: settings.currency.clone(),
            notification_email: settings.notification_email.clone(),
            call_recording: settings.call_recording,
            voicemail_enabled: settings.voicemail_enabled,
        }
    }

    pub fn check(&self) -> AppResult<()> {
        require(self.validate(), None::<&str>)
    }

    /// Apply over `current`; empty optional text fields keep their value
    pub fn apply(&self, current: &Settings) -> Settings {
        let keep = |value: &str, old: &str| {
            if value.is_empty() {
                old.to_string()
            } else {
                value.to_string()
            }
        };
        Settings {
            company_name: self.company_name.clone(),
            timezone: keep(&self.timezone, &current.timezone),
            language: keep(&self.language, &current.language),
            currency: keep(&self.currency, &current.currency),
            notification_email: keep(&self.notification_email, &current.notification_email),
            call_recording: self.call_recording,
            voicemail_enabled: self.voicemail_enabled,
        }
    }
}
