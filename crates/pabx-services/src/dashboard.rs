//! The console's view state, built once from configuration
//!
//! One `Dashboard` is shared by every request. Each page owns its view
//! controller; list pages share their record store with the modal facade
//! so the in-memory mode shows saved records straight away.

use crate::export::ExportService;
use crate::forms::{AgentForm, AudioForm, PlanForm, RateForm, UserForm};
use crate::modal::ModalController;
use crate::mutation::facade_for;
use crate::notifications::NotificationCenter;
use crate::reports::{self, AgentPerformance, AgentReport, DashboardSummary, SystemComponent};
use crate::seed;
use crate::store::RecordStore;
use crate::views::{ActiveCallsView, CdrView, ListView, SettingsView};
use pabx_core::models::{Agent, Audio, ClientAgent, Plan, Rate, User};
use pabx_core::traits::NotificationEmitter;
use pabx_core::AppConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Dashboard {
    pub notifications: Arc<NotificationCenter>,

    pub agents: ListView<Agent>,
    pub agent_modal: ModalController<AgentForm>,

    pub users: ListView<User>,
    pub user_modal: ModalController<UserForm>,

    pub rates: ListView<Rate>,
    pub rate_modal: ModalController<RateForm>,

    pub audios: ListView<Audio>,
    pub audio_modal: ModalController<AudioForm>,

    pub plans: RecordStore<Plan>,
    pub plan_modal: ModalController<PlanForm>,

    pub client_agents: ListView<ClientAgent>,
    pub cdr: CdrView,
    pub active_calls: ActiveCallsView,
    pub settings: SettingsView,
    pub exports: ExportService,
}

impl Dashboard {
    pub fn new(config: &AppConfig, notifications: Arc<NotificationCenter>) -> Self {
        let ui = &config.ui;
        let mode = config.mutations.mode;
        let notifier: Arc<dyn NotificationEmitter> = notifications.clone();

        let agents = RecordStore::new(seed::agents());
        let users = RecordStore::new(seed::users());
        let rates = RecordStore::new(seed::rates());
        let audios = RecordStore::new(seed::audios());
        let plans = RecordStore::new(seed::plans());

        let dashboard = Self {
            agent_modal: ModalController::new(
                facade_for(mode, "agent", &agents, |a, id| a.id = id),
                notifier.clone(),
            ),
            agents: ListView::new(agents, Agent::list_spec(), ui.agents_page_size),

            user_modal: ModalController::new(
                facade_for(mode, "user", &users, |u, id| u.id = id),
                notifier.clone(),
            ),
            users: ListView::new(users, User::list_spec(), ui.users_page_size),

            rate_modal: ModalController::new(
                facade_for(mode, "rate", &rates, |r, id| r.id = id),
                notifier.clone(),
            ),
            rates: ListView::new(rates, Rate::list_spec(), ui.rates_page_size),

            audio_modal: ModalController::new(
                facade_for(mode, "audio", &audios, |a, id| a.id = id),
                notifier.clone(),
            ),
            audios: ListView::new(audios, Audio::list_spec(), ui.audios_page_size),

            plan_modal: ModalController::new(
                facade_for(mode, "plan", &plans, |p, id| p.id = id),
                notifier.clone(),
            ),
            plans,

            client_agents: ListView::new(
                RecordStore::new(seed::client_agents()),
                ClientAgent::list_spec(),
                ui.client_agents_page_size,
            ),
            cdr: CdrView::new(
                RecordStore::new(seed::cdrs()),
                ui.cdr_page_size,
                ui.select_all_scope,
                Duration::from_millis(config.search.debounce_ms),
                notifier.clone(),
            ),
            active_calls: ActiveCallsView::new(
                Duration::from_millis(config.ticker.interval_ms),
                notifier.clone(),
            ),
            settings: SettingsView::new(notifier.clone()),
            exports: ExportService::new(Duration::from_millis(config.export.delay_ms), notifier),
            notifications,
        };

        info!(
            mutations = ?mode,
            select_all_scope = ?ui.select_all_scope,
            "Dashboard initialized"
        );
        dashboard
    }

    pub fn summary(&self) -> DashboardSummary {
        reports::dashboard_summary(
            &self.agents.store().snapshot(),
            &self.active_calls.snapshot(),
            &self.cdr.list().store().snapshot(),
        )
    }

    pub fn agent_reports(&self) -> Vec<AgentReport> {
        self.cdr.list().store().with(reports::agent_reports)
    }

    pub fn performance(&self) -> Vec<AgentPerformance> {
        self.cdr.list().store().with(reports::agent_performance)
    }

    pub fn system_status(&self) -> Vec<SystemComponent> {
        reports::system_status()
    }
}
