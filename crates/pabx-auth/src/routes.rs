//! Console route table
//!
//! Path-based navigation over a fixed set of pages. Resolution only looks
//! at whether a session exists; per-role menus live in `navigation`.

use pabx_core::models::AuthUser;
use serde::Serialize;
use std::fmt;

/// Where unauthenticated requests for protected pages are sent
pub const LOGIN_PATH: &str = "/login";

/// Landing page once signed in
pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Agents,
    ActiveCalls,
    Cdr,
    Audios,
    Settings,
    Plans,
    Users,
    Reports,
    Performance,
    SystemStatus,
    ClientAgents,
    Rates,
    NotFound,
}

impl Route {
    /// Every route with a concrete path
    pub const ALL: [Route; 15] = [
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Agents,
        Route::ActiveCalls,
        Route::Cdr,
        Route::Audios,
        Route::Settings,
        Route::Plans,
        Route::Users,
        Route::Reports,
        Route::Performance,
        Route::SystemStatus,
        Route::ClientAgents,
        Route::Rates,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Agents => "/agents",
            Route::ActiveCalls => "/active-calls",
            Route::Cdr => "/cdr",
            Route::Audios => "/audios",
            Route::Settings => "/settings",
            Route::Plans => "/plans",
            Route::Users => "/users",
            Route::Reports => "/reports",
            Route::Performance => "/performance",
            Route::SystemStatus => "/system-status",
            Route::ClientAgents => "/client-agents",
            Route::Rates => "/rates",
            Route::NotFound => "*",
        }
    }

    /// Match a request path. Unknown paths map to `NotFound`.
    ///
    /// A trailing slash is ignored; `/` is the dashboard.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Dashboard;
        }
        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::NotFound)
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a path against the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum RouteDecision {
    Render { route: Route },
    Redirect { to: &'static str },
}

/// Resolve a path for the given session.
///
/// Unauthenticated access to anything but a public route redirects to
/// the login page, unknown paths included. Signed-in users asking for the
/// login page land on the dashboard.
pub fn resolve(path: &str, user: Option<&AuthUser>) -> RouteDecision {
    let route = Route::from_path(path);
    match (route, user) {
        (Route::Login, Some(_)) => RouteDecision::Redirect { to: HOME_PATH },
        (route, None) if !route.is_public() => RouteDecision::Redirect { to: LOGIN_PATH },
        (route, _) => RouteDecision::Render { route },
    }
}
