//! Dashboard, report and performance summaries
//!
//! Derived on demand from the current records; nothing is cached.

use pabx_core::models::{
    format_duration, ActiveCall, Agent, AgentStatus, CallStatus, CdrRecord, CdrStatus,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentCounts {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub pause: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallCounts {
    pub total: usize,
    pub talking: usize,
    pub ringing: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CdrCounts {
    pub total: usize,
    pub completed: usize,
    pub missed: usize,
    pub abandoned: usize,
}

impl CdrCounts {
    fn add(&mut self, status: CdrStatus) {
        self.total += 1;
        match status {
            CdrStatus::Completed => self.completed += 1,
            CdrStatus::Missed => self.missed += 1,
            CdrStatus::Abandoned => self.abandoned += 1,
        }
    }
}

/// Headline numbers for the dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub agents: AgentCounts,
    pub active_calls: CallCounts,
    pub cdr: CdrCounts,
    pub total_cost: Decimal,
    /// Seconds
    pub total_talk_time: u64,
    pub formatted_talk_time: String,
}

pub fn dashboard_summary(
    agents: &[Agent],
    calls: &[ActiveCall],
    cdrs: &[CdrRecord],
) -> DashboardSummary {
    let mut agent_counts = AgentCounts {
        total: agents.len(),
        ..Default::default()
    };
    for agent in agents {
        match agent.status {
            AgentStatus::Online => agent_counts.online += 1,
            AgentStatus::Offline => agent_counts.offline += 1,
            AgentStatus::Pause => agent_counts.pause += 1,
        }
    }

    let call_counts = CallCounts {
        total: calls.len(),
        talking: calls.iter().filter(|c| c.status == CallStatus::Talking).count(),
        ringing: calls.iter().filter(|c| c.status == CallStatus::Ringing).count(),
    };

    let mut cdr_counts = CdrCounts::default();
    let mut total_cost = Decimal::ZERO;
    let mut total_talk_time = 0u64;
    for record in cdrs {
        cdr_counts.add(record.status);
        total_cost += record.cost;
        total_talk_time += u64::from(record.duration);
    }

    DashboardSummary {
        agents: agent_counts,
        active_calls: call_counts,
        cdr: cdr_counts,
        total_cost,
        total_talk_time,
        formatted_talk_time: format_duration(u32::try_from(total_talk_time).unwrap_or(u32::MAX)),
    }
}

/// CDR aggregates for one agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReport {
    pub agent: String,
    pub calls: CdrCounts,
    /// Seconds
    pub total_duration: u64,
    /// Seconds, over completed calls
    pub average_duration: u64,
    pub total_cost: Decimal,
}

/// Per-agent report, sorted by agent name
pub fn agent_reports(cdrs: &[CdrRecord]) -> Vec<AgentReport> {
    let mut by_agent: BTreeMap<&str, AgentReport> = BTreeMap::new();
    for record in cdrs {
        let report = by_agent
            .entry(record.agent.as_str())
            .or_insert_with(|| AgentReport {
                agent: record.agent.clone(),
                calls: CdrCounts::default(),
                total_duration: 0,
                average_duration: 0,
                total_cost: Decimal::ZERO,
            });
        report.calls.add(record.status);
        report.total_duration += u64::from(record.duration);
        report.total_cost += record.cost;
    }

    by_agent
        .into_values()
        .map(|mut report| {
            if report.calls.completed > 0 {
                report.average_duration = report.total_duration / report.calls.completed as u64;
            }
            report
        })
        .collect()
}

/// Answer rate for one agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentPerformance {
    pub agent: String,
    pub calls: usize,
    pub answered: usize,
    /// Percent, one decimal place
    pub answer_rate: Decimal,
    pub average_duration: u64,
}

pub fn agent_performance(cdrs: &[CdrRecord]) -> Vec<AgentPerformance> {
    agent_reports(cdrs)
        .into_iter()
        .map(|report| {
            let rate = if report.calls.total == 0 {
                Decimal::ZERO
            } else {
                (Decimal::from(report.calls.completed) * dec!(100)
                    / Decimal::from(report.calls.total))
                .round_dp(1)
            };
            AgentPerformance {
                agent: report.agent,
                calls: report.calls.total,
                answered: report.calls.completed,
                answer_rate: rate,
                average_duration: report.average_duration,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Operational,
    Degraded,
    Down,
}

/// One row of the system status page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemComponent {
    pub name: &'static str,
    pub status: ComponentStatus,
    /// Percent over the last 30 days
    pub uptime: Decimal,
    pub detail: &'static str,
}

/// Static component list shown on the system status page
pub fn system_status() -> Vec<SystemComponent> {
    let component = |name, status, uptime, detail| SystemComponent {
        name,
        status,
        uptime,
        detail,
    };
    vec![
        component("SIP Proxy", ComponentStatus::Operational, dec!(99.98), "All trunks registered"),
        component("Media Server", ComponentStatus::Operational, dec!(99.95), "Transcoding nominal"),
        component("Voicemail", ComponentStatus::Operational, dec!(99.90), "Storage at 42%"),
        component("Call Recording", ComponentStatus::Degraded, dec!(98.70), "Upload queue delayed"),
        component("Billing", ComponentStatus::Operational, dec!(99.99), "Rating up to date"),
        component("Web Console", ComponentStatus::Operational, dec!(100.00), "Serving requests"),
    ]
}
