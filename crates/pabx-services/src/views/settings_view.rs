//! Company settings page

use crate::forms::{Settings, SettingsForm};
use pabx_core::models::Notification;
use pabx_core::traits::NotificationEmitter;
use pabx_core::AppResult;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct SettingsView {
    current: RwLock<Settings>,
    notifier: Arc<dyn NotificationEmitter>,
}

impl SettingsView {
    pub fn new(notifier: Arc<dyn NotificationEmitter>) -> Self {
        Self {
            current: RwLock::new(Settings::default()),
            notifier,
        }
    }

    pub fn current(&self) -> Settings {
        self.current.read().clone()
    }

    /// Form pre-filled with the current settings
    pub fn form(&self) -> SettingsForm {
        SettingsForm::from_settings(&self.current.read())
    }

    #[instrument(skip(self, form), fields(company = %form.company_name))]
    pub fn save(&self, form: &SettingsForm) -> AppResult<Settings> {
        if let Err(err) = form.check() {
            self.notifier
                .emit(Notification::error("Validation error", err.to_string()));
            return Err(err);
        }

        let updated = {
            let mut current = self.current.write();
            *current = form.apply(&current);
            current.clone()
        };
        info!("Settings saved");
        self.notifier
            .emit(Notification::success("Settings saved", "Your settings have been updated"));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationCenter;

    #[test]
    fn test_save_and_reject() {
        let center = Arc::new(NotificationCenter::default());
        let view = SettingsView::new(center.clone());

        let mut form = view.form();
        form.company_name.clear();
        assert!(view.save(&form).is_err());
        assert!(center.last().unwrap().is_error());
        assert_eq!(view.current().company_name, "PABX Corp");

        form.company_name = "Acme".to_string();
        let saved = view.save(&form).unwrap();
        assert_eq!(saved.company_name, "Acme");
        assert_eq!(view.current(), saved);
    }
}
