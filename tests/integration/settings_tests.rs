//! Settings page: reference data creation and local validation

#[cfg(test)]
mod tests {
    use crate::common::TestBackend;
    use batch_console::core::models::Role;
    use batch_console::ui::{FixedAnswer, SettingsPage, View};
    use batch_console::utils::notify::NoticeLevel;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, ResponseTemplate};

    async fn backend() -> TestBackend {
        let backend = TestBackend::logged_in(Role::Admin).await;
        Mock::given(method("GET"))
            .and(path("/api/country/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"code": "SN", "companyId": "SN0010001"}
            ])))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/departments/list"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"code": 10, "description": "Trésorerie"}])),
            )
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"username": "awa.diop", "countryCode": "SN", "role": "INPUTTER"}
            ])))
            .mount(&backend.server)
            .await;
        backend
    }

    #[tokio::test]
    async fn test_load_and_render() {
        let backend = backend().await;
        let page = SettingsPage::load(&backend.console).await.unwrap();
        assert_eq!(page.countries().len(), 1);
        assert_eq!(page.departments()[0].code, 10);

        let text = page.render();
        assert!(text.contains("Sénégal"));
        assert!(text.contains("🇸🇳"));
        assert!(text.contains("awa.diop"));
    }

    #[tokio::test]
    async fn test_create_country_normalizes_payload() {
        let backend = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/country"))
            .and(body_json(json!({"code": "CI", "companyId": "CI0010001"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = SettingsPage::load(ctx).await.unwrap();
        page.create_country(ctx, " ci ", " CI0010001 ").await.unwrap();
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Success),
            vec!["Pays créé avec succès !".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_user_requires_every_field() {
        let backend = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = SettingsPage::load(ctx).await.unwrap();
        assert!(page.create_user(ctx, "fatou", "", "INPUTTER", "SN").await.is_err());
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Error),
            vec!["Invalid input: Tous les champs sont requis".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_user_shows_backend_reply() {
        let backend = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .and(body_string_contains("username=fatou"))
            .and(body_string_contains("role=AUTHORISER"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Utilisateur fatou créé"))
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = SettingsPage::load(ctx).await.unwrap();
        page.create_user(ctx, "fatou", "pw", "authoriser", "sn")
            .await
            .unwrap();
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Success),
            vec!["Utilisateur fatou créé".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_department_needs_confirmation() {
        let backend = backend().await;
        Mock::given(method("DELETE"))
            .and(path("/api/departments/10"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = SettingsPage::load(ctx).await.unwrap();
        assert!(!page.delete_department(ctx, 10, &FixedAnswer(false)).await.unwrap());
        assert!(page.delete_department(ctx, 10, &FixedAnswer(true)).await.unwrap());
    }
}
