//! Mock data the console starts with
//!
//! Every view is seeded from these fixed sets at start-up. Active calls are
//! re-read from here on every mount of the Active Calls view.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pabx_core::models::{
    ActiveCall, Agent, AgentStatus, Audio, AudioCategory, CallStatus, CdrRecord, CdrStatus,
    ClientAgent, ClientAgentStatus, Plan, Rate, RateStatus, User, UserStatus,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn agent(id: u32, name: &str, extension: &str, status: AgentStatus) -> Agent {
    Agent {
        id,
        name: name.to_string(),
        extension: extension.to_string(),
        caller_id: format!("+1 555 01{}", extension),
        status,
    }
}

pub fn agents() -> Vec<Agent> {
    vec![
        agent(1, "Maria Garcia", "101", AgentStatus::Online),
        agent(2, "Carlos Lopez", "102", AgentStatus::Online),
        agent(3, "Ana Martinez", "103", AgentStatus::Pause),
        agent(4, "Luis Rodriguez", "104", AgentStatus::Offline),
        agent(5, "Sofia Hernandez", "105", AgentStatus::Online),
        agent(6, "Diego Torres", "106", AgentStatus::Offline),
        agent(7, "Valentina Ruiz", "107", AgentStatus::Online),
        agent(8, "Jorge Ramirez", "108", AgentStatus::Pause),
        agent(9, "Camila Flores", "109", AgentStatus::Online),
        agent(10, "Mateo Castro", "110", AgentStatus::Offline),
        agent(11, "Lucia Morales", "111", AgentStatus::Online),
        agent(12, "Andres Vargas", "112", AgentStatus::Online),
    ]
}

pub fn active_calls() -> Vec<ActiveCall> {
    let call = |id: u32, ext: &str, agent: &str, from: &str, to: &str, duration: u32, status| {
        ActiveCall {
            id,
            extension: ext.to_string(),
            agent: agent.to_string(),
            caller_id: from.to_string(),
            destination: to.to_string(),
            duration,
            status,
        }
    };
    vec![
        call(1, "101", "Maria Garcia", "+1 555 234 8812", "+1 555 900 1001", 245, CallStatus::Talking),
        call(2, "102", "Carlos Lopez", "+1 555 771 0923", "+1 555 900 1001", 132, CallStatus::Talking),
        call(3, "105", "Sofia Hernandez", "+44 20 7946 0321", "+1 555 900 1002", 12, CallStatus::Ringing),
        call(4, "107", "Valentina Ruiz", "+34 91 555 2040", "+1 555 900 1003", 3721, CallStatus::Talking),
        call(5, "109", "Camila Flores", "+1 555 402 7788", "+1 555 900 1001", 5, CallStatus::Ringing),
    ]
}

const CDR_AGENTS: [&str; 5] = [
    "Maria Garcia",
    "Carlos Lopez",
    "Ana Martinez",
    "Sofia Hernandez",
    "Valentina Ruiz",
];

const CDR_CALLERS: [&str; 6] = [
    "+1 555 234 8812",
    "+1 555 771 0923",
    "+44 20 7946 0321",
    "+34 91 555 2040",
    "+1 555 402 7788",
    "+52 55 5555 0199",
];

/// Per-minute price applied to completed mock calls
const CDR_RATE: Decimal = dec!(0.05);

/// Twenty-five call records spread over one day, newest last
pub fn cdrs() -> Vec<CdrRecord> {
    let start: NaiveDateTime = date(2024, 1, 15).and_hms_opt(8, 30, 0).unwrap_or_default();

    (0..25u32)
        .map(|i| {
            let status = match i % 5 {
                0..=2 => CdrStatus::Completed,
                3 => CdrStatus::Missed,
                _ => CdrStatus::Abandoned,
            };
            let duration = match status {
                CdrStatus::Completed => 45 + (i * 37) % 600,
                CdrStatus::Missed => 0,
                CdrStatus::Abandoned => 5 + i % 20,
            };
            let cost = match status {
                CdrStatus::Completed => CDR_RATE * Decimal::from((duration + 59) / 60),
                _ => Decimal::ZERO,
            };
            CdrRecord {
                id: i + 1,
                date_time: start + Duration::minutes(i64::from(i) * 17),
                from: CDR_CALLERS[i as usize % CDR_CALLERS.len()].to_string(),
                to: format!("+1 555 900 100{}", 1 + i % 3),
                agent: CDR_AGENTS[i as usize % CDR_AGENTS.len()].to_string(),
                duration,
                status,
                cost,
            }
        })
        .collect()
}

pub fn audios() -> Vec<Audio> {
    let audio = |id: u32, name: &str, duration: u32, category, day: u32| Audio {
        id,
        name: name.to_string(),
        duration,
        category,
        upload_date: date(2024, 1, day),
    };
    vec![
        audio(1, "Welcome Message", 15, AudioCategory::Greeting, 2),
        audio(2, "Main Menu", 32, AudioCategory::Ivr, 3),
        audio(3, "Hold Music Jazz", 180, AudioCategory::Hold, 3),
        audio(4, "Holiday Closure", 20, AudioCategory::Announcement, 5),
        audio(5, "After Hours Greeting", 18, AudioCategory::Greeting, 8),
        audio(6, "Sales Submenu", 25, AudioCategory::Ivr, 9),
        audio(7, "Hold Music Classic", 240, AudioCategory::Hold, 10),
        audio(8, "Maintenance Notice", 14, AudioCategory::Announcement, 12),
        audio(9, "Support Submenu", 28, AudioCategory::Ivr, 14),
        audio(10, "Spanish Welcome", 16, AudioCategory::Greeting, 15),
    ]
}

pub fn plans() -> Vec<Plan> {
    let plan = |id: u32, name: &str, price: Decimal, minutes, agents, concurrent, features: &[&str]| Plan {
        id,
        name: name.to_string(),
        price,
        minutes,
        agents,
        concurrent,
        features: features.iter().map(|f| f.to_string()).collect(),
    };
    vec![
        plan(
            1,
            "Basic",
            dec!(29.99),
            1000,
            5,
            2,
            &["IVR", "Voicemail", "Call recording (7 days)"],
        ),
        plan(
            2,
            "Professional",
            dec!(79.99),
            5000,
            20,
            10,
            &["IVR", "Voicemail", "Call recording (30 days)", "Queues", "Reports"],
        ),
        plan(
            3,
            "Enterprise",
            dec!(199.99),
            20000,
            100,
            50,
            &[
                "IVR",
                "Voicemail",
                "Call recording (1 year)",
                "Queues",
                "Reports",
                "API access",
                "Dedicated support",
            ],
        ),
    ]
}

pub fn users() -> Vec<User> {
    let user = |id: u32,
                name: &str,
                email: &str,
                company: &str,
                plan: &str,
                status,
                balance: Decimal,
                minutes: u32,
                activated: NaiveDate,
                expires: NaiveDate| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
        plan: plan.to_string(),
        status,
        registered_at: activated,
        balance,
        minute_balance: minutes,
        plan_activation_date: activated,
        plan_expiration_date: expires,
    };
    vec![
        user(1, "John Smith", "john@acme.com", "Acme Contact Center", "Professional", UserStatus::Active, dec!(150.00), 3200, date(2023, 11, 1), date(2024, 11, 1)),
        user(2, "Emily Davis", "emily@brightcall.io", "BrightCall", "Basic", UserStatus::Active, dec!(25.50), 640, date(2024, 1, 5), date(2024, 2, 5)),
        user(3, "Michael Brown", "mbrown@northwind.com", "Northwind Traders", "Enterprise", UserStatus::Active, dec!(980.00), 15400, date(2023, 6, 15), date(2024, 6, 15)),
        user(4, "Sarah Wilson", "sarah@helpdeskpro.com", "HelpDesk Pro", "Professional", UserStatus::Suspended, dec!(0.00), 0, date(2023, 3, 1), date(2023, 12, 31)),
        user(5, "David Lee", "dlee@quickreach.net", "QuickReach", "Basic", UserStatus::Active, dec!(12.75), 210, date(2023, 12, 20), date(2024, 1, 20)),
        user(6, "Laura Chen", "laura@voxline.com", "Voxline", "Enterprise", UserStatus::Active, dec!(1450.00), 18800, date(2024, 1, 1), date(2025, 1, 1)),
        user(7, "Robert Taylor", "rtaylor@callmax.com", "CallMax", "Professional", UserStatus::Active, dec!(64.20), 2750, date(2023, 9, 10), date(2024, 9, 10)),
        user(8, "Jessica Moore", "jess@servicenow.example", "ServiceNow Example", "Basic", UserStatus::Suspended, dec!(3.10), 15, date(2023, 5, 2), date(2023, 11, 2)),
        user(9, "Daniel Kim", "daniel@orbitcomms.com", "Orbit Comms", "Professional", UserStatus::Active, dec!(205.00), 4100, date(2023, 10, 12), date(2024, 10, 12)),
        user(10, "Olivia Martin", "olivia@greenline.io", "Greenline", "Basic", UserStatus::Active, dec!(40.00), 900, date(2024, 1, 10), date(2024, 2, 10)),
        user(11, "James White", "jwhite@telesales.com", "TeleSales Inc", "Enterprise", UserStatus::Active, dec!(760.40), 12200, date(2023, 8, 1), date(2024, 8, 1)),
        user(12, "Sophia Clark", "sophia@nimbusvoice.com", "Nimbus Voice", "Professional", UserStatus::Active, dec!(88.00), 3900, date(2023, 12, 1), date(2024, 12, 1)),
    ]
}

pub fn rates() -> Vec<Rate> {
    let rate = |id: u32, prefix: &str, destination: &str, price: Decimal, status| Rate {
        id,
        prefix: prefix.to_string(),
        destination: destination.to_string(),
        price_per_minute: price,
        currency: "USD".to_string(),
        status,
    };
    vec![
        rate(1, "1", "United States", dec!(0.010), RateStatus::Active),
        rate(2, "1204", "Canada - Manitoba", dec!(0.012), RateStatus::Active),
        rate(3, "44", "United Kingdom", dec!(0.020), RateStatus::Active),
        rate(4, "447", "United Kingdom Mobile", dec!(0.080), RateStatus::Active),
        rate(5, "34", "Spain", dec!(0.025), RateStatus::Active),
        rate(6, "346", "Spain Mobile", dec!(0.090), RateStatus::Active),
        rate(7, "52", "Mexico", dec!(0.030), RateStatus::Active),
        rate(8, "5255", "Mexico City", dec!(0.028), RateStatus::Active),
        rate(9, "54", "Argentina", dec!(0.045), RateStatus::Inactive),
        rate(10, "56", "Chile", dec!(0.040), RateStatus::Active),
        rate(11, "57", "Colombia", dec!(0.050), RateStatus::Inactive),
        rate(12, "49", "Germany", dec!(0.022), RateStatus::Active),
    ]
}

pub fn client_agents() -> Vec<ClientAgent> {
    let client_agent = |id: u32, name: &str, ext: &str, client: &str, company: &str, status| ClientAgent {
        id,
        name: name.to_string(),
        extension: ext.to_string(),
        client_name: client.to_string(),
        client_company: company.to_string(),
        status,
        caller_id: format!("+1 555 02{}", ext),
    };
    vec![
        client_agent(1, "Peter Hall", "201", "John Smith", "Acme Contact Center", ClientAgentStatus::Online),
        client_agent(2, "Nina Scott", "202", "John Smith", "Acme Contact Center", ClientAgentStatus::Busy),
        client_agent(3, "Oscar Young", "203", "Emily Davis", "BrightCall", ClientAgentStatus::Offline),
        client_agent(4, "Grace King", "204", "Michael Brown", "Northwind Traders", ClientAgentStatus::Online),
        client_agent(5, "Henry Wright", "205", "Michael Brown", "Northwind Traders", ClientAgentStatus::Online),
        client_agent(6, "Ivy Green", "206", "Laura Chen", "Voxline", ClientAgentStatus::Busy),
        client_agent(7, "Jack Adams", "207", "Robert Taylor", "CallMax", ClientAgentStatus::Offline),
        client_agent(8, "Kara Baker", "208", "Daniel Kim", "Orbit Comms", ClientAgentStatus::Online),
    ]
}
