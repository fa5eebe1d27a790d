//! Login view

use super::context::Console;
use crate::client::{Route, SESSION_EXPIRED_NOTICE};
use crate::utils::error::Result;

/// Login form; remembers whether it was reached through an expired session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginPage {
    session_expired: bool,
}

impl LoginPage {
    pub fn new(session_expired: bool) -> Self {
        Self { session_expired }
    }

    /// Login page for `route`; any other route gives a plain login
    pub fn from_route(route: Route) -> Self {
        match route {
            Route::Login { session_expired } => Self::new(session_expired),
            _ => Self::default(),
        }
    }

    /// Message shown above the form
    pub fn notice(&self) -> Option<&'static str> {
        self.session_expired.then_some(SESSION_EXPIRED_NOTICE)
    }

    /// Landing page of an already logged-in user
    pub fn resume(ctx: &Console) -> Option<Route> {
        ctx.api.session().role().map(|role| Route::for_role(&role))
    }

    /// Log in, then go to the role's landing page
    pub async fn submit(&self, ctx: &Console, username: &str, password: &str) -> Result<Route> {
        let login = ctx.report(ctx.api.login(username, password).await)?;
        let route = Route::for_role(&login.role);
        ctx.api.client().navigator().navigate(route);
        Ok(route)
    }
}
