//! Reading tab-separated localization tables.
//!
//! The first line is the header: its first column names the key column and
//! is ignored, the remaining columns are language identifiers. Every later
//! line is a key followed by one value per language.
//!
//! Quotes have no special meaning, blank lines (including tab-only ones) are
//! skipped, and `\r\n` or a lone `\r` end a line just like `\n`.
use std::io::BufRead;

use tracing::debug;

use crate::{
    error::Error,
    traits::Parser,
    types::{LocalizationRow, Table},
};

impl Parser for Table {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut lines = rdr.records();

        let header = match lines.next() {
            Some(header) => header?,
            None => return Err(Error::EmptyTable),
        };
        let languages: Vec<String> = header.iter().skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            // Whitespace-only or tab-only lines are blank rows.
            if line.iter().all(|column| column.trim().is_empty()) {
                continue;
            }

            let mut columns = line.iter();
            let Some(key) = columns.next() else {
                continue;
            };

            rows.push(LocalizationRow {
                key: key.to_string(),
                values: columns.map(|value| value.trim().to_string()).collect(),
            });
        }

        debug!(
            languages = languages.len(),
            rows = rows.len(),
            "parsed localization table"
        );

        Ok(Table { languages, rows })
    }
}
