//! Forced logout when the backend rejects the session

#[cfg(test)]
mod tests {
    use crate::common::TestBackend;
    use batch_console::client::Route;
    use batch_console::core::models::Role;
    use batch_console::ui::{BatchListPage, BatchListRole, SummaryPage};
    use batch_console::utils::error::ConsoleError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_401_clears_session_and_navigates_once() {
        let backend = TestBackend::logged_in(Role::Authoriser).await;
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/batches/counts"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = BatchListPage::new(BatchListRole::Validator);
        let err = page.load(ctx).await.unwrap_err();
        assert!(err.is_session_expired());
        assert!(page.batches().is_empty());

        assert!(!backend.session.current().is_authenticated());
        assert_eq!(
            backend.navigator.routes(),
            vec![Route::Login {
                session_expired: true
            }]
        );
        // The login view shows the notice, not an error notification
        assert!(backend.notifier.is_empty());

        // Later actions do not reach the backend
        let err = SummaryPage::load(ctx, "b1").await.unwrap_err();
        assert!(matches!(err, ConsoleError::SessionExpired));
        assert_eq!(backend.navigator.routes().len(), 1);
    }

    #[tokio::test]
    async fn test_other_errors_keep_the_session() {
        let backend = TestBackend::logged_in(Role::Inputter).await;
        Mock::given(method("GET"))
            .and(path("/api/batches/b1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Batch introuvable"))
            .mount(&backend.server)
            .await;

        let err = SummaryPage::load(&backend.console, "b1").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Batch introuvable");
        assert!(backend.session.current().is_authenticated());
        assert!(backend.navigator.routes().is_empty());
    }
}
