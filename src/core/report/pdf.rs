//! Minimal PDF writer for tabular reports
//!
//! Pages are drawn with the two standard Helvetica faces, so no font is
//! embedded. Coordinates are millimetres from the top-left corner.

use std::fmt::Write as _;

const PT_PER_MM: f64 = 72.0 / 25.4;

/// Standard font faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn gray(level: u8) -> Self {
        Rgb(level, level, level)
    }

    fn components(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3}",
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0
        )
    }
}

// Helvetica and Helvetica-Bold advance widths for 0x20..=0x7E (1/1000 em).
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, 556, 556, 556,
    556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, 1015, 667, 667, 722, 722, 667,
    611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667,
    667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500,
    222, 833, 556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, 556, 556, 556,
    556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, 975, 722, 722, 722, 722, 667,
    611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667,
    667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556,
    278, 889, 611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// WinAnsi byte for a character, `?` when it has none
fn win_ansi(c: char) -> u8 {
    match c as u32 {
        0x20..=0x7E => c as u8,
        0xA0..=0xFF => c as u32 as u8,
        0x202F => 0xA0,
        0x20AC => 0x80,
        0x2026 => 0x85,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2013 => 0x96,
        0x2014 => 0x97,
        _ => b'?',
    }
}

fn glyph_width(font: Font, byte: u8) -> u16 {
    let table = match font {
        Font::Helvetica => &HELVETICA_WIDTHS,
        Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
    };
    match byte {
        0x20..=0x7E => table[(byte - 0x20) as usize],
        0xA0 => table[0],
        // Accented capitals and lowercase letters share their base letter width.
        0xC0..=0xDF => 667,
        _ => 556,
    }
}

/// Width of `text` in millimetres
pub fn text_width_mm(text: &str, font: Font, size_pt: f64) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| glyph_width(font, win_ansi(c)) as u32)
        .sum();
    units as f64 / 1000.0 * size_pt / PT_PER_MM
}

fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for c in text.chars() {
        match win_ansi(c) {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            b @ 0x20..=0x7E => out.push(b as char),
            b => {
                let _ = write!(out, "\\{:03o}", b);
            }
        }
    }
    out.push(')');
    out
}

/// Multi-page document with an A4 page size
#[derive(Debug, Clone)]
pub struct PdfDocument {
    width_mm: f64,
    height_mm: f64,
    pages: Vec<String>,
    current: usize,
}

impl PdfDocument {
    /// A4 landscape, one empty page
    pub fn a4_landscape() -> Self {
        Self {
            width_mm: 297.0,
            height_mm: 210.0,
            pages: vec![String::new()],
            current: 0,
        }
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a page and make it current
    pub fn add_page(&mut self) {
        self.pages.push(String::new());
        self.current = self.pages.len() - 1;
    }

    /// Select a page by 1-based number; out-of-range numbers are ignored
    pub fn set_page(&mut self, number: usize) {
        if (1..=self.pages.len()).contains(&number) {
            self.current = number - 1;
        }
    }

    fn y(&self, y_mm: f64) -> f64 {
        (self.height_mm - y_mm) * PT_PER_MM
    }

    fn ops(&mut self) -> &mut String {
        &mut self.pages[self.current]
    }

    /// Draw text with its baseline at `y_mm`
    pub fn text(&mut self, text: &str, x_mm: f64, y_mm: f64, font: Font, size_pt: f64, color: Rgb) {
        let (x, y) = (x_mm * PT_PER_MM, self.y(y_mm));
        let op = format!(
            "BT /{} {:.2} Tf {} rg {:.2} {:.2} Td {} Tj ET\n",
            font.resource(),
            size_pt,
            color.components(),
            x,
            y,
            pdf_string(text)
        );
        self.ops().push_str(&op);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width_mm: f64, color: Rgb) {
        let op = format!(
            "{:.2} w {} RG {:.2} {:.2} m {:.2} {:.2} l S\n",
            width_mm * PT_PER_MM,
            color.components(),
            x1 * PT_PER_MM,
            self.y(y1),
            x2 * PT_PER_MM,
            self.y(y2)
        );
        self.ops().push_str(&op);
    }

    /// Filled rectangle whose top-left corner is at (`x`, `y`)
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let op = format!(
            "{} rg {:.2} {:.2} {:.2} {:.2} re f\n",
            color.components(),
            x * PT_PER_MM,
            self.y(y + h),
            w * PT_PER_MM,
            h * PT_PER_MM
        );
        self.ops().push_str(&op);
    }

    /// Serialize the document
    pub fn to_bytes(&self) -> Vec<u8> {
        let page_count = self.pages.len();
        // 1 catalog, 2 pages, 3-4 fonts, then a page and a content object per page.
        let page_obj = |i: usize| 5 + 2 * i;
        let mut objects: Vec<String> = Vec::with_capacity(4 + 2 * page_count);

        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", page_obj(i)))
            .collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ));
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );

        let (w, h) = (self.width_mm * PT_PER_MM, self.height_mm * PT_PER_MM);
        for (i, content) in self.pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                w,
                h,
                page_obj(i) + 1
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ));
        }

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            let _ = write!(out, "{} 0 obj\n{}\nendobj\n", i + 1, body);
        }

        let xref_at = out.len();
        let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            let _ = writeln!(out, "{:010} 00000 n ", offset);
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        );
        out.into_bytes()
    }
}
