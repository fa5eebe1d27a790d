//! Login and logout against the mock backend

#[cfg(test)]
mod tests {
    use crate::common::TestBackend;
    use batch_console::client::Route;
    use batch_console::core::models::Role;
    use batch_console::ui::LoginPage;
    use batch_console::utils::notify::NoticeLevel;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_login_lands_on_role_page_and_sends_cookie() {
        let backend = TestBackend::logged_out().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "AuthToken=abc123; Path=/; HttpOnly")
                    .set_body_json(json!({"username": "moussa", "role": "AUTHORISER"})),
            )
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/applications"))
            .and(header("cookie", "AuthToken=abc123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"code": "FUNDS_TRANSFER", "label": "Virements"}])),
            )
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        assert_eq!(LoginPage::resume(ctx), None);

        let route = LoginPage::default()
            .submit(ctx, " moussa ", "secret")
            .await
            .unwrap();
        assert_eq!(route, Route::Validate);
        assert_eq!(backend.navigator.routes(), vec![Route::Validate]);
        assert_eq!(backend.session.role(), Some(Role::Authoriser));
        assert_eq!(LoginPage::resume(ctx), Some(Route::Validate));

        let apps = ctx.api.list_applications().await.unwrap();
        assert_eq!(apps[0].code, "FUNDS_TRANSFER");
    }

    #[tokio::test]
    async fn test_wrong_credentials_show_backend_message() {
        let backend = TestBackend::logged_out().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"message": "Mot de passe incorrect"})),
            )
            .mount(&backend.server)
            .await;

        let err = LoginPage::default()
            .submit(&backend.console, "moussa", "bad")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Mot de passe incorrect"));
        assert!(backend.navigator.routes().is_empty());
        assert_eq!(backend.notifier.messages(NoticeLevel::Error).len(), 1);
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_backend() {
        let backend = TestBackend::logged_out().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&backend.server)
            .await;

        let err = LoginPage::default()
            .submit(&backend.console, "  ", "secret")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Remplissez tous les champs.");
    }
}
