//! Traits for parsing localization tables.

use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing a localization table from text, a reader, or a file.
///
/// # Example
///
/// ```rust,no_run
/// use tsvstrings::{Table, traits::Parser};
/// let table = Table::read_from("Localizable.tsv")?;
/// println!("{} languages", table.languages.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from file path.
    ///
    /// The file is decoded with BOM sniffing, so UTF-16 input carrying a BOM is
    /// accepted; anything else must be valid UTF-8.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let read_error = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(read_error)?;

        Self::from_str(&decoded)
    }
}
