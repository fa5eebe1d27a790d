//! Upload page flows: duplicate pre-check, success and row validation errors

#[cfg(test)]
mod tests {
    use crate::common::TestBackend;
    use batch_console::core::models::Role;
    use batch_console::core::upload::UploadState;
    use batch_console::ui::UploadPage;
    use batch_console::utils::error::ConsoleError;
    use batch_console::utils::notify::NoticeLevel;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    const CSV: &[u8] = b"DEBIT.ACCT.NO,DEBIT.AMOUNT\nSN001,100\nSN002,\"1,5\"\n";

    async fn backend_with_fields() -> TestBackend {
        let backend = TestBackend::logged_in(Role::Inputter).await;
        Mock::given(method("GET"))
            .and(path("/api/applications/FUNDS_TRANSFER/fields"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "application": "FUNDS_TRANSFER",
                "mandatory": [
                    {"fieldName": "DEBIT.ACCT.NO", "dataType": "STRING"},
                    {"fieldName": "DEBIT.AMOUNT", "dataType": "AMOUNT"}
                ],
                "optional": [{"fieldName": "ORDERING.BANK", "dataType": "STRING"}]
            })))
            .mount(&backend.server)
            .await;
        backend
    }

    #[tokio::test]
    async fn test_duplicate_file_name_blocks_upload() {
        let backend = backend_with_fields().await;
        Mock::given(method("GET"))
            .and(path("/api/inputter/check-filename"))
            .and(query_param("applicationName", "FUNDS_TRANSFER"))
            .and(query_param("filename", "ft.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exists": true})))
            .expect(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/inputter/upload"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = UploadPage::new();
        page.select_application(ctx, "FUNDS_TRANSFER").await.unwrap();
        assert_eq!(page.header_line(), "DEBIT.ACCT.NO,DEBIT.AMOUNT");
        page.select_file(ctx, "ft.csv", CSV.to_vec()).unwrap();

        let err = page.submit(ctx).await.unwrap_err();
        assert!(matches!(err, ConsoleError::DuplicateFile(_)));
        assert!(matches!(page.state(), UploadState::Failed { .. }));

        let errors = backend.notifier.messages(NoticeLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ft.csv"));
    }

    #[tokio::test]
    async fn test_successful_upload() {
        let backend = backend_with_fields().await;
        Mock::given(method("GET"))
            .and(path("/api/inputter/check-filename"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exists": false})))
            .mount(&backend.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/inputter/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "batchId": "65f0a1", "status": "UPLOADED", "recordCount": 2
            })))
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = UploadPage::new();
        page.select_application(ctx, "FUNDS_TRANSFER").await.unwrap();
        page.select_file(ctx, "ft.csv", CSV.to_vec()).unwrap();

        let batch_id = page.submit(ctx).await.unwrap();
        assert_eq!(batch_id, "65f0a1");
        assert_eq!(
            page.state(),
            &UploadState::Success {
                batch_id: "65f0a1".to_string()
            }
        );
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Success),
            vec!["Upload réussi !".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_pre_check_still_uploads() {
        let backend = backend_with_fields().await;
        Mock::given(method("GET"))
            .and(path("/api/inputter/check-filename"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&backend.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/inputter/upload"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "Validation failed",
                "details": [
                    {"line": 3, "field": "DEBIT.AMOUNT", "message": "Ligne 3 : montant invalide"}
                ]
            })))
            .expect(1)
            .mount(&backend.server)
            .await;

        let ctx = &backend.console;
        let mut page = UploadPage::new();
        page.select_application(ctx, "FUNDS_TRANSFER").await.unwrap();
        page.select_file(ctx, "ft.csv", CSV.to_vec()).unwrap();

        let err = page.submit(ctx).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(ref rows) if rows.len() == 1));
        assert_eq!(page.validation_errors()[0].line, Some(3));
        assert_eq!(
            backend.notifier.messages(NoticeLevel::Error),
            vec!["Ligne 3 : montant invalide".to_string()]
        );
        assert!(page.render_validation_errors().contains("montant invalide"));
    }

    #[tokio::test]
    async fn test_non_csv_file_is_rejected_locally() {
        let backend = backend_with_fields().await;
        let ctx = &backend.console;
        let mut page = UploadPage::new();
        page.select_application(ctx, "FUNDS_TRANSFER").await.unwrap();

        let err = page.select_file(ctx, "ft.xlsx", CSV.to_vec()).unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidInput(_)));
        assert_eq!(page.state(), &UploadState::Idle);
        assert!(page.submit(ctx).await.is_err());
        assert_eq!(backend.notifier.messages(NoticeLevel::Error).len(), 1);
    }
}
