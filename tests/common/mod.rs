//! Common test utilities for batch-console
//!
//! [`TestBackend`] starts a wiremock server and builds a [`Console`] bound to
//! it, with recording navigator and notifier so tests can assert on what the
//! operator would have seen.

pub mod fixtures;

use batch_console::api::ConsoleApi;
use batch_console::client::{RecordingNavigator, Session, SessionStore};
use batch_console::config::Config;
use batch_console::core::models::Role;
use batch_console::ui::Console;
use batch_console::utils::notify::RecordingNotifier;
use std::sync::Arc;
use wiremock::MockServer;

/// Mock backend plus a logged-in console
pub struct TestBackend {
    pub server: MockServer,
    pub console: Console,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub session: Arc<SessionStore>,
}

impl TestBackend {
    /// Console logged in as `awa.diop` with `role`
    pub async fn logged_in(role: Role) -> Self {
        let backend = Self::logged_out().await;
        backend
            .session
            .save(Session {
                username: Some("awa.diop".to_string()),
                role: Some(role),
                auth_token: Some("tok-123".to_string()),
            })
            .await
            .unwrap();
        backend
    }

    /// Console with an empty session
    pub async fn logged_out() -> Self {
        let server = MockServer::start().await;

        let mut config = Config::default();
        config.api.base_url = server.uri();
        config.reports.page_size = 2;

        let session = Arc::new(SessionStore::in_memory());
        let navigator = Arc::new(RecordingNavigator::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let api = ConsoleApi::new(&config.api, session.clone(), navigator.clone()).unwrap();
        let console = Console::new(api, notifier.clone(), Arc::new(config));

        Self {
            server,
            console,
            navigator,
            notifier,
            session,
        }
    }
}
