//! Role-based navigation menus

use crate::routes::Route;
use pabx_core::models::Role;
use serde::Serialize;

/// One sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn item(route: Route, path: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        route,
        path,
        label,
        icon,
    }
}

const ADMIN_MENU: &[NavItem] = &[
    item(Route::Dashboard, "/dashboard", "Dashboard", "layout-dashboard"),
    item(Route::Users, "/users", "Users", "users"),
    item(Route::Plans, "/plans", "Plans", "package"),
    item(Route::Rates, "/rates", "Rates", "dollar-sign"),
    item(Route::Agents, "/agents", "Agents", "headphones"),
    item(Route::ActiveCalls, "/active-calls", "Active Calls", "phone-call"),
    item(Route::Cdr, "/cdr", "Call Records", "file-text"),
    item(Route::Reports, "/reports", "Reports", "bar-chart"),
    item(Route::SystemStatus, "/system-status", "System Status", "activity"),
    item(Route::Settings, "/settings", "Settings", "settings"),
];

const USER_MENU: &[NavItem] = &[
    item(Route::Dashboard, "/dashboard", "Dashboard", "layout-dashboard"),
    item(Route::Agents, "/agents", "Agents", "headphones"),
    item(Route::ActiveCalls, "/active-calls", "Active Calls", "phone-call"),
    item(Route::Cdr, "/cdr", "Call Records", "file-text"),
    item(Route::Audios, "/audios", "Audios", "music"),
    item(Route::Reports, "/reports", "Reports", "bar-chart"),
    item(Route::Performance, "/performance", "Performance", "trending-up"),
    item(Route::Settings, "/settings", "Settings", "settings"),
];

const RESELLER_MENU: &[NavItem] = &[
    item(Route::Dashboard, "/dashboard", "Dashboard", "layout-dashboard"),
    item(Route::Users, "/users", "Clients", "users"),
    item(Route::ClientAgents, "/client-agents", "Client Agents", "headphones"),
    item(Route::Plans, "/plans", "Plans", "package"),
    item(Route::Rates, "/rates", "Rates", "dollar-sign"),
    item(Route::Reports, "/reports", "Reports", "bar-chart"),
    item(Route::Settings, "/settings", "Settings", "settings"),
];

/// Sidebar entries for a role, in display order
pub fn navigation_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::User => USER_MENU,
        Role::Reseller => RESELLER_MENU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_routes() {
        for role in [Role::Admin, Role::User, Role::Reseller] {
            for entry in navigation_for(role) {
                assert_eq!(entry.path, entry.route.path());
            }
        }
    }

    #[test]
    fn test_menus_start_at_dashboard() {
        for role in [Role::Admin, Role::User, Role::Reseller] {
            assert_eq!(navigation_for(role)[0].route, Route::Dashboard);
        }
    }

    #[test]
    fn test_role_specific_entries() {
        let has = |role: Role, route: Route| navigation_for(role).iter().any(|i| i.route == route);

        assert!(has(Role::Admin, Route::SystemStatus));
        assert!(!has(Role::User, Route::SystemStatus));
        assert!(has(Role::Reseller, Route::ClientAgents));
        assert!(!has(Role::Admin, Route::ClientAgents));
        assert!(has(Role::User, Route::Performance));
    }

    #[test]
    fn test_no_public_routes_in_menus() {
        for role in [Role::Admin, Role::User, Role::Reseller] {
            assert!(navigation_for(role).iter().all(|i| !i.route.is_public()));
        }
    }
}
