//! Page routes and the navigation seam

use crate::core::models::Role;
use parking_lot::Mutex;
use std::fmt;

/// Shown by the login view after a forced navigation
pub const SESSION_EXPIRED_NOTICE: &str = "Votre session a expiré. Veuillez vous reconnecter.";

/// Console pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login { session_expired: bool },
    Upload,
    Batches,
    Validate,
    Validated,
    Reports,
    Settings,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login {
                session_expired: true,
            } => "/login?error=session_expired",
            Self::Login { .. } => "/login",
            Self::Upload => "/upload",
            Self::Batches => "/batches",
            Self::Validate => "/validate",
            Self::Validated => "/validated",
            Self::Reports => "/reports",
            Self::Settings => "/settings",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Landing page after login
    pub fn for_role(role: &Role) -> Self {
        match role {
            Role::Inputter => Self::Upload,
            Role::Authoriser => Self::Validate,
            _ => Self::Dashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Performs page changes requested by the client layer
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Announces navigations on stderr
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        if let Route::Login {
            session_expired: true,
        } = route
        {
            eprintln!("{}", SESSION_EXPIRED_NOTICE);
        }
        eprintln!("-> {}", route);
    }
}

/// Keeps every navigation for later inspection
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}
