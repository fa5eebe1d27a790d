use crate::utils::error::{ConsoleError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// UTF-8 byte order mark, for spreadsheet tools that sniff the encoding
pub const UTF8_BOM: &str = "\u{feff}";

/// Quoting policy of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvQuoting {
    /// Quote only cells holding a delimiter, quote or line break
    Necessary,
    /// Quote every cell that is not a number
    NonNumeric,
}

impl From<CsvQuoting> for QuoteStyle {
    fn from(q: CsvQuoting) -> Self {
        match q {
            CsvQuoting::Necessary => QuoteStyle::Necessary,
            CsvQuoting::NonNumeric => QuoteStyle::NonNumeric,
        }
    }
}

/// Write a header and rows into a CSV document
///
/// Lines end with `\n`. Quotes inside cells are doubled. A cell holding a
/// line break is quoted and kept whole, but [`parse_csv`](super::parse_csv)
/// reads line by line and splits it, so only commas and quotes round-trip.
pub fn write_csv<H, R, C>(header: &[H], rows: R, quoting: CsvQuoting, bom: bool) -> Result<String>
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<C>>,
    C: AsRef<str>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(quoting.into())
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(header.iter().map(|h| h.as_ref()))?;
    for row in rows {
        writer.write_record(row.iter().map(|c| c.as_ref()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConsoleError::Io(std::io::Error::other(e.to_string())))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| ConsoleError::invalid_input(format!("CSV output is not UTF-8: {}", e)))?;

    Ok(if bom {
        format!("{}{}", UTF8_BOM, body)
    } else {
        body
    })
}

#[cfg(test)]
mod tests {
    use super::super::parse::parse_csv;
    use super::*;

    #[test]
    fn test_necessary_quoting() {
        let out = write_csv(
            &["A", "B"],
            vec![vec!["plain", "has,comma"], vec!["say \"hi\"", ""]],
            CsvQuoting::Necessary,
            false,
        )
        .unwrap();
        assert_eq!(out, "A,B\nplain,\"has,comma\"\n\"say \"\"hi\"\"\",\n");
    }

    #[test]
    fn test_non_numeric_quoting_leaves_numbers_bare() {
        let out = write_csv(&["Ligne", "Statut"], vec![vec!["2", "SUCCESS"]], CsvQuoting::NonNumeric, false)
            .unwrap();
        assert!(out.ends_with("2,\"SUCCESS\"\n"));
    }

    #[test]
    fn test_bom_prefix() {
        let out = write_csv(&["A"], Vec::<Vec<&str>>::new(), CsvQuoting::Necessary, true).unwrap();
        assert!(out.starts_with(UTF8_BOM));
    }

    #[test]
    fn test_round_trip_through_parser() {
        let cells = vec![
            vec!["Dakar, Plateau", "He said \"ok\"", "plain"],
            vec!["\"quoted\"", "a,b,c", "x"],
        ];
        let out = write_csv(&["C1", "C2", "C3"], cells.clone(), CsvQuoting::Necessary, false).unwrap();
        let parsed = parse_csv(&out).unwrap();

        assert_eq!(parsed.header, vec!["C1", "C2", "C3"]);
        let expected: Vec<Vec<String>> = cells
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(parsed.rows, expected);
    }

    #[test]
    fn test_line_break_in_cell_does_not_round_trip() {
        let out = write_csv(&["A", "B"], vec![vec!["x\ny", "z"]], CsvQuoting::Necessary, false).unwrap();
        assert_eq!(out, "A,B\n\"x\ny\",z\n");

        let parsed = parse_csv(&out).unwrap();
        assert_eq!(parsed.rows, vec![vec!["x".to_string()], vec!["y,z".to_string()]]);
    }
}
