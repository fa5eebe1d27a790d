//! Reports page: paged fetch, filters, pagination and exports

#[cfg(test)]
mod tests {
    use crate::common::{TestBackend, fixtures};
    use batch_console::core::csv::parse_csv;
    use batch_console::core::filters::{FilterKey, ReportFilters};
    use batch_console::core::models::Role;
    use batch_console::ui::{ReportsPage, View};
    use batch_console::utils::notify::NoticeLevel;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    async fn loaded_page() -> (TestBackend, ReportsPage) {
        let backend = TestBackend::logged_in(Role::Admin).await;
        Mock::given(method("GET"))
            .and(path("/api/country/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"code": "SN", "companyId": "SN0010001"},
                {"code": "CI", "companyId": "CI0010001"}
            ])))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/departments/list"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .and(query_param("from", "2026-02-01"))
            .and(query_param("to", "2026-02-15"))
            .and(query_param("page", "0"))
            .and(query_param("size", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::page(
                vec![
                    fixtures::reported_batch("r1", "PROCESSED", "SN", "moussa", 0),
                    fixtures::reported_batch("r2", "PROCESSED_WITH_ERROR", "CI", "fatou", 3),
                ],
                0,
                2,
            )))
            .expect(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/batches"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::page(
                vec![
                    fixtures::reported_batch("r3", "PROCESSED", "SN", "fatou", 0),
                    fixtures::batch("r4", "VALIDATED"),
                ],
                1,
                2,
            )))
            .expect(1)
            .mount(&backend.server)
            .await;

        let page = ReportsPage::load(&backend.console, day(1), day(15))
            .await
            .unwrap();
        (backend, page)
    }

    #[tokio::test]
    async fn test_load_walks_pages_and_keeps_processed() {
        let (_backend, page) = loaded_page().await;

        let ids: Vec<&str> = page.batches().iter().map(|b| b.batch_id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
        assert_eq!(page.countries().len(), 2);
        // A failed department list leaves the filter empty
        assert!(page.departments().is_empty());

        let (inputters, validators) = page.filter_options();
        assert_eq!(inputters, ["awa.diop"]);
        assert_eq!(validators, ["fatou", "moussa"]);
    }

    #[tokio::test]
    async fn test_filters_reset_pagination() {
        let (_backend, mut page) = loaded_page().await;

        assert_eq!(page.paginator().total_pages(), 2);
        assert!(page.next_page());
        assert_eq!(page.visible_rows().len(), 1);

        page.apply_filters(ReportFilters {
            country: Some("SN".to_string()),
            ..ReportFilters::default()
        });
        assert_eq!(page.paginator().current_page(), 1);
        assert_eq!(page.filtered().len(), 2);
        assert_eq!(page.chips()[0].value, "Sénégal");
        assert!(page.render().contains("[Pays: Sénégal]"));

        page.set_search("FATOU");
        let rows = page.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].batch_id, "r3");

        page.clear_filter(FilterKey::Country);
        assert_eq!(page.filtered().len(), 3);
    }

    #[tokio::test]
    async fn test_csv_and_pdf_exports() {
        let (backend, mut page) = loaded_page().await;
        page.apply_filters(ReportFilters {
            validator: Some("fatou".to_string()),
            ..ReportFilters::default()
        });

        let (name, csv) = page.export_csv(&backend.console, day(15)).unwrap();
        assert_eq!(name, "batches_report_2026-02-15.csv");
        let parsed = parse_csv(&csv).unwrap();
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.header[0], "Batch ID");

        let generated = day(15).and_hms_opt(16, 45, 0).unwrap();
        let (name, pdf) = page.export_pdf(&backend.console, generated);
        assert_eq!(name, "rapport_batches_2026-02-01_2026-02-15_2026-02-15.pdf");
        assert!(pdf.starts_with(b"%PDF-1.4"));

        assert_eq!(
            backend.notifier.messages(NoticeLevel::Success),
            vec!["Export CSV réussi !".to_string(), "Export PDF réussi !".to_string()]
        );
    }
}
