//! Reports page: processed batches over a date window, filters and exports

use super::components::{Table, View};
use super::context::Console;
use crate::api::{BatchQuery, MAX_PAGE_SIZE};
use crate::core::filters::{FilterChip, FilterKey, ReportFilters, country_name, filter_options, is_reportable};
use crate::core::models::{BatchStatus, BatchView, Country, Department};
use crate::core::number::format_fr;
use crate::core::pagination::Paginator;
use crate::core::report::{
    ReportPdf, ReportTotals, reports_csv, reports_csv_file_name, render_report_pdf,
    report_pdf_file_name, search_rows, table_cells, REPORT_CSV_HEADERS,
};
use crate::utils::error::{ConsoleError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

const REPORT_STATUSES: [BatchStatus; 2] = [BatchStatus::Processed, BatchStatus::ProcessedWithError];

/// Reports page state
#[derive(Debug, Clone)]
pub struct ReportsPage {
    start: NaiveDate,
    end: NaiveDate,
    countries: Vec<Country>,
    departments: Vec<Department>,
    all: Vec<BatchView>,
    filtered: Vec<BatchView>,
    filters: ReportFilters,
    paginator: Paginator,
    search: String,
}

/// Date window of a report; the start defaults to `window_days` before the end
pub fn report_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    window_days: u32,
) -> Result<(NaiveDate, NaiveDate)> {
    let end = end.unwrap_or(today);
    let start = start.unwrap_or(end - Duration::days(i64::from(window_days)));
    if start > end {
        return Err(ConsoleError::invalid_input(
            "La date de début doit précéder la date de fin",
        ));
    }
    Ok((start, end))
}

impl ReportsPage {
    /// Fetch reference data and the processed batches of `[start, end]`
    pub async fn load(ctx: &Console, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let fetch_size = u32::try_from(ctx.config.reports.fetch_size).unwrap_or(MAX_PAGE_SIZE);
        let query = BatchQuery::with_statuses(&REPORT_STATUSES)
            .between(start, end)
            .page(0, fetch_size);
        let (countries, departments, batches) = tokio::join!(
            ctx.api.list_countries(),
            ctx.api.list_departments(),
            ctx.api.list_all_batches(&query),
        );

        let countries = match countries {
            Ok(c) => c,
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => {
                warn!("Error loading countries: {}", e);
                Vec::new()
            }
        };
        let departments = match departments {
            Ok(d) => d,
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => {
                warn!("Error loading departments: {}", e);
                Vec::new()
            }
        };
        let batches = match batches {
            Ok(b) => b,
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => {
                warn!("Error loading batch data: {}", e);
                ctx.notifier.error("Erreur lors du chargement des batchs");
                return Err(e);
            }
        };

        let all: Vec<BatchView> = batches
            .into_iter()
            .filter(|b| is_reportable(&b.status))
            .collect();
        info!("Loaded {} reportable batches from {} to {}", all.len(), start, end);

        let page_size = ctx.config.reports.page_size;
        Ok(Self {
            start,
            end,
            countries,
            departments,
            paginator: Paginator::new(page_size, all.len()),
            filtered: all.clone(),
            all,
            filters: ReportFilters::default(),
            search: String::new(),
        })
    }

    pub fn period(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn batches(&self) -> &[BatchView] {
        &self.all
    }

    pub fn filtered(&self) -> &[BatchView] {
        &self.filtered
    }

    pub fn filters(&self) -> &ReportFilters {
        &self.filters
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Inputter and validator choices offered by the filter form
    pub fn filter_options(&self) -> (Vec<String>, Vec<String>) {
        filter_options(&self.all)
    }

    /// Replace the filters and go back to page 1
    pub fn apply_filters(&mut self, filters: ReportFilters) {
        self.filters = filters;
        self.refilter();
    }

    pub fn clear_filter(&mut self, key: FilterKey) {
        self.filters.clear(key);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = self.filters.apply(&self.all);
        self.paginator.reset(self.filtered.len());
        debug!("{} batches match the active filters", self.filtered.len());
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        self.filters.chips()
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next()
    }

    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev()
    }

    pub fn go_to(&mut self, page: usize) {
        self.paginator.go_to(page);
    }

    /// Search term applied to the rows of the current page
    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_string();
    }

    /// Rows shown on the current page after the search
    pub fn visible_rows(&self) -> Vec<&BatchView> {
        search_rows(self.paginator.slice(&self.filtered), &self.search)
    }

    pub fn totals(&self) -> ReportTotals {
        ReportTotals::from_batches(&self.filtered)
    }

    /// CSV of the filtered batches as `(file name, content)`
    pub fn export_csv(&self, ctx: &Console, today: NaiveDate) -> Result<(String, String)> {
        let csv = ctx.report(reports_csv(&self.filtered))?;
        ctx.notifier.success("Export CSV réussi !");
        Ok((reports_csv_file_name(today), csv))
    }

    /// PDF of the filtered batches as `(file name, bytes)`
    pub fn export_pdf(&self, ctx: &Console, generated_at: NaiveDateTime) -> (String, Vec<u8>) {
        let report = ReportPdf {
            start: self.start,
            end: self.end,
            filters: self.filters.summary_parts(),
            batches: &self.filtered,
            generated_at,
        };
        let bytes = render_report_pdf(&report);
        ctx.notifier.success("Export PDF réussi !");
        (
            report_pdf_file_name(self.start, self.end, generated_at.date()),
            bytes,
        )
    }
}

impl View for ReportsPage {
    fn render(&self) -> String {
        let mut out = format!("Période: {} au {}\n", self.start, self.end);

        let chips = self.chips();
        if !chips.is_empty() {
            let chips: Vec<String> = chips
                .iter()
                .map(|c| format!("[{}: {}]", c.label, c.value))
                .collect();
            out.push_str(&chips.join(" "));
            out.push('\n');
        }

        let totals = self.totals();
        out.push_str(&format!(
            "Total: {} batchs | Succès: {} | Avec erreurs: {} | Records: {} | Erreurs: {}\n\n",
            totals.batches,
            totals.processed,
            totals.with_errors,
            format_fr(totals.records as f64, 0),
            format_fr(totals.errors as f64, 0),
        ));

        let mut table = Table::new(&REPORT_CSV_HEADERS)
            .with_empty_message("Aucun batch trouvé avec les filtres actifs");
        for batch in self.visible_rows() {
            let mut cells = table_cells(batch);
            if let Some(country) = batch.country.as_deref().filter(|c| !c.is_empty()) {
                cells[5] = format!("{} ({})", country_name(country), country);
            }
            table.push_row(cells);
        }
        out.push_str(&table.render());

        let p = &self.paginator;
        out.push_str(&format!(
            "\n\nAffichage {} à {} sur {} | Page {} / {}",
            p.showing_from(),
            p.showing_to(),
            p.total(),
            p.current_page(),
            p.display_total_pages(),
        ));
        out
    }
}
