//! Domain models for the PABX console
//!
//! This module contains all the records rendered by the console views.
//! Records are flat and carry no cross-entity referential integrity; an
//! active call's `agent` field simply matches an agent's `name`.

pub mod active_call;
pub mod agent;
pub mod audio;
pub mod cdr;
pub mod client_agent;
pub mod notification;
pub mod plan;
pub mod rate;
pub mod session;
pub mod user;

pub use active_call::{ActiveCall, CallStatus};
pub use agent::{Agent, AgentStatus};
pub use audio::{Audio, AudioCategory, ACCEPTED_AUDIO_EXTENSIONS};
pub use cdr::{CdrRecord, CdrStatus};
pub use client_agent::{ClientAgent, ClientAgentStatus};
pub use notification::{Notification, NotificationLevel};
pub use plan::Plan;
pub use rate::{Rate, RateStatus};
pub use session::{AuthUser, Role};
pub use user::{User, UserStatus};

/// Format a duration in seconds as `mm:ss`, or `h:mm:ss` from one hour up
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}
