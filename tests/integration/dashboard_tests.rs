//! Admin dashboard: stats, feature flags, logs and auto refresh

#[cfg(test)]
mod tests {
    use crate::common::{TestBackend, fixtures};
    use batch_console::core::models::Role;
    use batch_console::ui::{DashboardPage, View};
    use batch_console::utils::error::ConsoleError;
    use batch_console::utils::notify::NoticeLevel;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    async fn backend() -> TestBackend {
        let backend = TestBackend::logged_in(Role::Admin).await;
        Mock::given(method("GET"))
            .and(path("/api/batches/counts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::counts()))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/admin/features"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"configKey": "T24_SCHEDULER", "isEnabled": true, "description": "Envoi vers T24",
                 "lastUpdated": "2026-02-01T08:00:00Z"}
            ])))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/batches/recent-batches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "b1", "status": "PROCESSED", "filename": "ft.csv", "uploadedAt": "2026-02-01T09:00:00Z"}
            ])))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/batches/processing-logs"))
            .and(query_param("batchId", "b1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"batchId": "b1", "level": "INFO", "message": "Batch started", "timestamp": "2026-02-01T09:00:00Z"},
                {"batchId": "b1", "level": "ERROR", "message": "Ligne 3 rejetée", "timestamp": "2026-02-01T09:00:04Z"}
            ])))
            .mount(&backend.server)
            .await;
        backend
    }

    #[tokio::test]
    async fn test_load_all_sections() {
        let backend = backend().await;
        let page = DashboardPage::load(&backend.console, Some("b1".to_string()), Some("error".to_string()))
            .await
            .unwrap();

        let stats = page.stats().unwrap();
        assert_eq!(stats.total, 9);
        assert_eq!(stats.pending, 3);
        assert_eq!(page.features()[0].config_key, "T24_SCHEDULER");
        assert_eq!(page.recent_batches().len(), 1);

        let logs = page.visible_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "Ligne 3 rejetée");

        let text = page.render();
        assert!(text.contains("Actif"));
        assert!(text.contains("[ERROR] Ligne 3 rejetée"));
        assert!(!text.contains("Batch started"));
    }

    #[tokio::test]
    async fn test_toggle_feature() {
        let backend = backend().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/features/toggle/T24_SCHEDULER"))
            .and(query_param("enabled", "false"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = DashboardPage::load(ctx, None, None).await.unwrap();
        assert!(!page.toggle_feature(ctx, "T24_SCHEDULER").await.unwrap());
        assert!(!page.features()[0].is_enabled);

        let err = page.toggle_feature(ctx, "UNKNOWN").await.unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_export_logs() {
        let backend = backend().await;
        let ctx = &backend.console;
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

        let mut page = DashboardPage::load(ctx, Some("b1".to_string()), None)
            .await
            .unwrap();
        let (name, csv) = page.export_logs(ctx, today).unwrap();
        assert_eq!(name, "processing_logs_2026-02-01.csv");
        assert_eq!(csv.lines().count(), 3);

        page.set_level(Some("WARN".to_string()));
        let err = page.export_logs(ctx, today).unwrap_err();
        assert!(matches!(err, ConsoleError::EmptyData(_)));
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Info),
            vec!["Aucun log à exporter".to_string()]
        );
    }

    #[tokio::test]
    async fn test_watch_refreshes_until_stopped() {
        let backend = backend().await;
        let ctx = &backend.console;
        let mut page = DashboardPage::new(Some("b1".to_string()), None);

        let mut refreshes = 0;
        let stop = tokio::time::sleep(Duration::from_millis(300));
        page.watch(ctx, Duration::from_secs(3600), stop, |p| {
            assert!(p.stats().is_some());
            refreshes += 1;
        })
        .await
        .unwrap();

        assert_eq!(refreshes, 1);
        assert_eq!(page.visible_logs().len(), 2);
    }
}
