//! Landscape PDF rendering of the reports page

use super::ReportTotals;
use super::pdf::{Font, PdfDocument, Rgb, text_width_mm};
use crate::core::models::BatchView;
use crate::core::models::time::format_date;
use crate::core::number::format_fr;
use chrono::{NaiveDate, NaiveDateTime};

const ORANGE: Rgb = Rgb(255, 121, 0);
const STRIPE: Rgb = Rgb(245, 245, 245);
const MARGIN: f64 = 14.0;
const TABLE_MARGIN: f64 = 14.11;
const CELL_PADDING: f64 = 1.5;
const BODY_SIZE: f64 = 7.0;
const LINE_HEIGHT: f64 = 1.15;
const PT_PER_MM: f64 = 72.0 / 25.4;

const HEAD: [&str; 11] = [
    "Batch ID",
    "Application",
    "Statut",
    "Inputter",
    "Validateur",
    "Pays",
    "Dept",
    "Records",
    "Err.",
    "Upload",
    "Validation",
];
const WIDTHS: [f64; 11] = [25.0, 20.0, 25.0, 18.0, 18.0, 12.0, 15.0, 15.0, 12.0, 20.0, 20.0];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
    Right,
}

fn column_align(col: usize) -> Align {
    match col {
        2 | 5 | 6 | 8 => Align::Center,
        7 => Align::Right,
        _ => Align::Left,
    }
}

fn column_size(col: usize) -> f64 {
    match col {
        0 | 9 | 10 => 6.0,
        _ => BODY_SIZE,
    }
}

/// Input of the PDF export
#[derive(Debug, Clone)]
pub struct ReportPdf<'a> {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Active filter descriptions, e.g. `Pays: SN`
    pub filters: Vec<String>,
    pub batches: &'a [BatchView],
    pub generated_at: NaiveDateTime,
}

fn truncate(value: Option<&str>, max: usize) -> String {
    match value {
        Some(v) if !v.is_empty() => v.chars().take(max).collect(),
        _ => "-".to_string(),
    }
}

fn pdf_cells(batch: &BatchView) -> [String; 11] {
    [
        truncate(Some(&batch.batch_id), 20),
        truncate(Some(&batch.application), 15),
        truncate(Some(batch.status.as_str()), usize::MAX),
        truncate(batch.uploaded_by.as_deref(), 12),
        truncate(batch.validated_by.as_deref(), 12),
        truncate(batch.country.as_deref(), usize::MAX),
        truncate(batch.department.as_deref(), usize::MAX),
        batch.total_records.to_string(),
        batch.error_count.to_string(),
        format_date(batch.uploaded_at.as_ref()),
        format_date(batch.validated_at.as_ref()),
    ]
}

/// Break `text` into lines no wider than `max_mm`
fn wrap(text: &str, font: Font, size: f64, max_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(&candidate, font, size) <= max_mm {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        // Words wider than the column are split between characters.
        for c in word.chars() {
            current.push(c);
            if text_width_mm(&current, font, size) > max_mm && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::replace(&mut current, c.to_string()));
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct Table<'d> {
    doc: &'d mut PdfDocument,
    y: f64,
}

impl Table<'_> {
    fn row_height(cells: &[Vec<String>], sizes: &[f64]) -> f64 {
        cells
            .iter()
            .zip(sizes)
            .map(|(lines, size)| lines.len() as f64 * size * LINE_HEIGHT / PT_PER_MM)
            .fold(0.0, f64::max)
            + 2.0 * CELL_PADDING
    }

    fn draw_row(
        &mut self,
        cells: &[Vec<String>],
        sizes: &[f64],
        aligns: &[Align],
        font: Font,
        color: Rgb,
        fill: Option<Rgb>,
    ) {
        let height = Self::row_height(cells, sizes);
        let total_width: f64 = WIDTHS.iter().sum();
        if let Some(fill) = fill {
            self.doc.fill_rect(TABLE_MARGIN, self.y, total_width, height, fill);
        }

        let mut x = TABLE_MARGIN;
        for (col, lines) in cells.iter().enumerate() {
            let size = sizes[col];
            let line_mm = size * LINE_HEIGHT / PT_PER_MM;
            for (i, line) in lines.iter().enumerate() {
                let inner = WIDTHS[col] - 2.0 * CELL_PADDING;
                let offset = match aligns[col] {
                    Align::Left => 0.0,
                    Align::Center => (inner - text_width_mm(line, font, size)) / 2.0,
                    Align::Right => inner - text_width_mm(line, font, size),
                };
                // Baseline sits roughly at the cap height below the line top.
                let baseline = self.y + CELL_PADDING + line_mm * i as f64 + size * 0.8 / PT_PER_MM;
                self.doc
                    .text(line, x + CELL_PADDING + offset, baseline, font, size, color);
            }
            x += WIDTHS[col];
        }
        self.y += height;
    }
}

fn layout_cells(values: &[String], sizes: &[f64], font: Font) -> Vec<Vec<String>> {
    values
        .iter()
        .enumerate()
        .map(|(col, v)| wrap(v, font, sizes[col], WIDTHS[col] - 2.0 * CELL_PADDING))
        .collect()
}

/// Render the report to PDF bytes
pub fn render_report_pdf(report: &ReportPdf<'_>) -> Vec<u8> {
    let mut doc = PdfDocument::a4_landscape();
    let (page_w, page_h) = (doc.width_mm(), doc.height_mm());

    doc.text(
        "RAPPORT DÉTAILLÉ DES BATCHS",
        MARGIN,
        20.0,
        Font::Helvetica,
        20.0,
        ORANGE,
    );
    doc.text(
        &format!("Période: {} au {}", report.start, report.end),
        MARGIN,
        28.0,
        Font::Helvetica,
        10.0,
        Rgb::gray(100),
    );
    if !report.filters.is_empty() {
        doc.text(
            &format!("Filtres appliqués: {}", report.filters.join(" | ")),
            MARGIN,
            33.0,
            Font::Helvetica,
            9.0,
            Rgb::gray(80),
        );
    }

    let totals = ReportTotals::from_batches(report.batches);
    let y = if report.filters.is_empty() { 35.0 } else { 40.0 };
    doc.text(
        &format!(
            "Total Batchs: {}  |  Succès: {}  |  Avec Erreurs: {}  |  Total Records: {}  |  Total Erreurs: {}",
            totals.batches,
            totals.processed,
            totals.with_errors,
            format_fr(totals.records as f64, 0),
            totals.errors
        ),
        MARGIN,
        y,
        Font::Helvetica,
        11.0,
        Rgb::BLACK,
    );
    doc.line(MARGIN, y + 3.0, page_w - MARGIN, y + 3.0, 0.5, ORANGE);

    let head: Vec<String> = HEAD.iter().map(|h| h.to_string()).collect();
    let head_sizes = [BODY_SIZE; 11];
    let head_cells = layout_cells(&head, &head_sizes, Font::HelveticaBold);
    let head_aligns = [Align::Center; 11];
    let body_sizes: Vec<f64> = (0..11).map(column_size).collect();
    let body_aligns: Vec<Align> = (0..11).map(column_align).collect();
    let bottom = page_h - TABLE_MARGIN;

    let mut table = Table {
        doc: &mut doc,
        y: y + 6.0,
    };
    table.draw_row(
        &head_cells,
        &head_sizes,
        &head_aligns,
        Font::HelveticaBold,
        Rgb::WHITE,
        Some(ORANGE),
    );

    for (i, batch) in report.batches.iter().enumerate() {
        let cells = layout_cells(&pdf_cells(batch), &body_sizes, Font::Helvetica);
        if table.y + Table::row_height(&cells, &body_sizes) > bottom {
            table.doc.add_page();
            table.y = TABLE_MARGIN;
            table.draw_row(
                &head_cells,
                &head_sizes,
                &head_aligns,
                Font::HelveticaBold,
                Rgb::WHITE,
                Some(ORANGE),
            );
        }
        let fill = (i % 2 == 1).then_some(STRIPE);
        table.draw_row(
            &cells,
            &body_sizes,
            &body_aligns,
            Font::Helvetica,
            Rgb::BLACK,
            fill,
        );
    }

    let generated = format!(
        "Généré le {} à {}",
        report.generated_at.format("%d/%m/%Y"),
        report.generated_at.format("%H:%M:%S")
    );
    let pages = doc.page_count();
    let footer_y = page_h - 10.0;
    for page in 1..=pages {
        doc.set_page(page);
        let gray = Rgb::gray(150);
        doc.text(
            "Orange Bank - Rapport Confidentiel",
            MARGIN,
            footer_y,
            Font::Helvetica,
            8.0,
            gray,
        );
        let gen_w = text_width_mm(&generated, Font::Helvetica, 8.0);
        doc.text(
            &generated,
            page_w - MARGIN - gen_w,
            footer_y,
            Font::Helvetica,
            8.0,
            gray,
        );
        let page_text = format!("Page {page} / {pages}");
        let page_text_w = text_width_mm(&page_text, Font::Helvetica, 8.0);
        doc.text(
            &page_text,
            (page_w - page_text_w) / 2.0,
            footer_y,
            Font::Helvetica,
            8.0,
            gray,
        );
    }

    doc.to_bytes()
}

/// `rapport_batches_{start}_{end}_{today}.pdf`
pub fn report_pdf_file_name(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> String {
    format!(
        "rapport_batches_{}_{}_{}.pdf",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        today.format("%Y-%m-%d")
    )
}
