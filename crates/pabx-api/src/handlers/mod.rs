//! HTTP request handlers
//!
//! One module per console page. Each exposes a `configure` function that
//! registers its routes; `configure_api` mounts them all under `/api/v1`.

pub mod active_calls;
pub mod agents;
pub mod audios;
pub mod auth;
pub mod cdr;
pub mod client_agents;
pub mod crud;
pub mod export;
pub mod health;
pub mod navigation;
pub mod notifications;
pub mod plans;
pub mod rates;
pub mod reports;
pub mod settings;
pub mod users;

use actix_web::web;

pub use active_calls::configure as configure_active_calls;
pub use agents::configure as configure_agents;
pub use audios::configure as configure_audios;
pub use auth::configure as configure_auth;
pub use cdr::configure as configure_cdr;
pub use client_agents::configure as configure_client_agents;
pub use export::configure as configure_export;
pub use health::configure as configure_health;
pub use navigation::configure as configure_navigation;
pub use notifications::configure as configure_notifications;
pub use plans::configure as configure_plans;
pub use rates::configure as configure_rates;
pub use reports::configure as configure_reports;
pub use settings::configure as configure_settings;
pub use users::configure as configure_users;

/// Register every console route under `/api/v1`
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(configure_health)
            .configure(configure_auth)
            .configure(configure_navigation)
            .configure(configure_notifications)
            .configure(configure_reports)
            .configure(configure_agents)
            .configure(configure_users)
            .configure(configure_plans)
            .configure(configure_rates)
            .configure(configure_audios)
            .configure(configure_client_agents)
            .configure(configure_cdr)
            .configure(configure_active_calls)
            .configure(configure_settings)
            .configure(configure_export),
    );
}
