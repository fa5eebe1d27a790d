//! CSV reading and writing
//!
//! Reading mirrors what operators see in the upload preview: a forgiving
//! line scanner. Writing goes through the `csv` crate.

mod export;
mod parse;

pub use export::{CsvQuoting, write_csv};
pub use parse::{
    CsvPreview, FULL_PREVIEW_MAX_ROWS, INLINE_PREVIEW_ROWS, ParsedCsv, parse_csv, parse_csv_row,
};
