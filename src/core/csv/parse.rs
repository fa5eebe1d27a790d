use crate::utils::error::{ConsoleError, Result};

/// Rows shown inline under the file picker
pub const INLINE_PREVIEW_ROWS: usize = 5;
/// Rows shown at most in the full preview
pub const FULL_PREVIEW_MAX_ROWS: usize = 1000;

/// Header and data rows of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCsv {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A window over the data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvPreview<'a> {
    pub rows: &'a [Vec<String>],
    pub total: usize,
    pub truncated: bool,
}

/// Split one line into trimmed fields
///
/// A `"` toggles quoted mode and is dropped; commas split fields only
/// outside quotes. Inside quotes, `""` stands for one literal quote.
pub fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            other => current.push(other),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parse a whole file: `\r?\n` lines, blank lines dropped, first line is the header
///
/// Lines are split before quotes are scanned, so a quoted cell cannot span
/// lines.
pub fn parse_csv(text: &str) -> Result<ParsedCsv> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .map(parse_csv_row)
        .ok_or_else(|| ConsoleError::empty_data("CSV vide"))?;
    let rows = lines.map(parse_csv_row).collect();

    Ok(ParsedCsv { header, rows })
}

impl ParsedCsv {
    /// First rows shown inline
    pub fn inline_preview(&self) -> CsvPreview<'_> {
        self.preview(INLINE_PREVIEW_ROWS)
    }

    /// Full preview, capped for very large files
    pub fn full_preview(&self) -> CsvPreview<'_> {
        self.preview(FULL_PREVIEW_MAX_ROWS)
    }

    fn preview(&self, limit: usize) -> CsvPreview<'_> {
        let end = self.rows.len().min(limit);
        CsvPreview {
            rows: &self.rows[..end],
            total: self.rows.len(),
            truncated: self.rows.len() > limit,
        }
    }

    /// Whether more rows exist than the inline preview shows
    pub fn has_more_than_inline(&self) -> bool {
        self.rows.len() > INLINE_PREVIEW_ROWS
    }

    /// Index of the first header matching `pred` after trimming and upper-casing
    pub fn find_column<F>(&self, pred: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.header
            .iter()
            .position(|h| pred(h.trim().to_uppercase().as_str()))
    }
}
