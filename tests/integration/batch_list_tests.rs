//! Batch lists, validation, deletion and execution summaries

#[cfg(test)]
mod tests {
    use crate::common::{TestBackend, fixtures};
    use batch_console::core::models::{BatchStatus, Role};
    use batch_console::ui::{BatchListPage, BatchListRole, FixedAnswer, SummaryPage, View, download_batch};
    use batch_console::utils::notify::NoticeLevel;
    use serde_json::json;
    use batch_console::cli::{Cli, run};
    use clap::Parser;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, ResponseTemplate};

    async fn mount_counts(backend: &TestBackend) {
        Mock::given(method("GET"))
            .and(path("/api/batches/counts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::counts()))
            .mount(&backend.server)
            .await;
    }

    #[tokio::test]
    async fn test_inputter_list_is_scoped_and_filtered() {
        let backend = TestBackend::logged_in(Role::Inputter).await;
        mount_counts(&backend).await;
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .and(query_param("uploadedById", "awa.diop"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::page(
                vec![
                    fixtures::batch("b1", "UPLOADED"),
                    fixtures::batch("b2", "PROCESSED"),
                    fixtures::batch("b3", "UPLOADED_FAILED"),
                ],
                0,
                1,
            )))
            .expect(1)
            .mount(&backend.server)
            .await;

        let mut page = BatchListPage::new(BatchListRole::Inputter);
        page.load(&backend.console).await.unwrap();

        let ids: Vec<&str> = page.batches().iter().map(|b| b.batch_id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2"]);
        assert_eq!(page.counters()["uploadedCount"], 2);
        assert_eq!(page.counters()["validatedCount"], 7);
        assert!(page.render().contains("b2.csv"));
    }

    #[tokio::test]
    async fn test_validate_after_confirmation() {
        let backend = TestBackend::logged_in(Role::Authoriser).await;
        mount_counts(&backend).await;
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .and(query_param("status", "UPLOADED"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([fixtures::batch("b1", "UPLOADED")])),
            )
            .mount(&backend.server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/batches/b1"))
            .and(body_json(json!({"status": "VALIDATED"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = BatchListPage::new(BatchListRole::Validator);
        page.load(ctx).await.unwrap();

        // Declining sends nothing
        assert!(!page.validate(ctx, &FixedAnswer(false), "b1").await.unwrap());
        assert!(backend.notifier.is_empty());

        assert!(page.validate(ctx, &FixedAnswer(true), "b1").await.unwrap());
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Success),
            vec!["Batch validé et envoyé pour traitement !".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_refused_for_processed_batch() {
        let backend = TestBackend::logged_in(Role::Inputter).await;
        mount_counts(&backend).await;
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([fixtures::batch("b2", "PROCESSED")])),
            )
            .mount(&backend.server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = BatchListPage::new(BatchListRole::Inputter);
        page.load(ctx).await.unwrap();
        assert_eq!(page.batches()[0].status, BatchStatus::Processed);
        assert!(page.delete(ctx, &FixedAnswer(true), "b2").await.is_err());
        assert_eq!(backend.notifier.messages(NoticeLevel::Error).len(), 1);
    }

    #[tokio::test]
    async fn test_authoriser_deletes_pending_batch_of_another_user() {
        let backend = TestBackend::logged_in(Role::Authoriser).await;
        mount_counts(&backend).await;
        let mut pending = fixtures::batch("b-other", "UPLOADED");
        pending["uploadedBy"] = json!("moussa");
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .and(query_param("status", "UPLOADED"))
            .and(query_param_is_missing("uploadedById"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([pending])))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .and(query_param("uploadedById", "awa.diop"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&backend.server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/batches/b-other"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&backend.server)
            .await;

        let cli = Cli::try_parse_from(["batch-console", "delete", "b-other", "--yes"]).unwrap();
        run(cli, &backend.console).await.unwrap();

        assert_eq!(
            backend.notifier.messages(NoticeLevel::Success),
            vec!["Batch supprimé avec succès".to_string()]
        );
        assert!(backend.notifier.messages(NoticeLevel::Error).is_empty());
    }

    #[tokio::test]
    async fn test_execution_summary_and_report() {
        let backend = TestBackend::logged_in(Role::Inputter).await;
        Mock::given(method("GET"))
            .and(path("/api/batches/65f0a1b2c3d4e5f6"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::executed_detail("65f0a1b2c3d4e5f6")),
            )
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let page = SummaryPage::load(ctx, "65f0a1b2c3d4e5f6").await.unwrap();
        let summary = page.summary();
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure, 1);
        assert_eq!(summary.financial_total, Some(170.0));
        assert_eq!(summary.errors[0].message, "ACCOUNT CLOSED");

        let (name, csv) = page.export(ctx).unwrap();
        assert_eq!(name, "Report_FUNDS_TRANSFER_c3d4e5f6.csv");
        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.contains("FT2603400001"));
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Success),
            vec!["Rapport CSV généré avec succès".to_string()]
        );
    }

    #[tokio::test]
    async fn test_download_batch_csv() {
        let backend = TestBackend::logged_in(Role::Authoriser).await;
        Mock::given(method("GET"))
            .and(path("/api/batches/b9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::executed_detail("b9")))
            .mount(&backend.server)
            .await;

        let (name, csv) = download_batch(&backend.console, "b9").await.unwrap();
        assert_eq!(name, "batch_b9.csv");
        assert_eq!(csv.lines().count(), 3);
    }
}
