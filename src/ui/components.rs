//! Text components the pages render with

/// Printable width of `text`, ignoring colour escapes
pub fn visible_width(text: &str) -> usize {
    console::measure_text_width(text)
}

/// Anything a page can put on screen
pub trait View {
    fn render(&self) -> String;
}

/// Column-aligned table with a header rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    empty_message: String,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
            empty_message: "Aucune donnée.".to_string(),
        }
    }

    pub fn with_empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn with_rows<I: IntoIterator<Item = Vec<String>>>(mut self, rows: I) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl View for Table {
    fn render(&self) -> String {
        if self.rows.is_empty() {
            return self.empty_message.clone();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = visible_width(cell);
                match widths.get_mut(i) {
                    Some(current) => *current = (*current).max(w),
                    None => widths.push(w),
                }
            }
        }

        let line = |cells: &[String]| {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!("{}{}", cell, " ".repeat(w - visible_width(cell)))
                })
                .collect();
            padded.join("  ").trim_end().to_string()
        };

        let mut out = vec![line(&self.headers)];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        out.extend(self.rows.iter().map(|r| line(r)));
        out.join("\n")
    }
}

/// `label: value` lines with aligned values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, label: &str, value: impl ToString) -> Self {
        self.entries.push((label.to_string(), value.to_string()));
        self
    }
}

impl View for Fields {
    fn render(&self) -> String {
        let width = self
            .entries
            .iter()
            .map(|(l, _)| visible_width(l))
            .max()
            .unwrap_or(0);
        self.entries
            .iter()
            .map(|(l, v)| format!("{}{} : {}", l, " ".repeat(width - visible_width(l)), v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
