//! Core types for tsvstrings.
//! The reader decodes into these; the emitter projects them into `.strings` files.

use unic_langid::LanguageIdentifier;

use crate::formats::strings::{Format, Pair};

/// One translation key and its values across all languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationRow {
    /// Translation key, taken verbatim from the first column.
    pub key: String,

    /// One value per language column, in header order.
    ///
    /// May be shorter than the language list when the row has fewer columns
    /// than the header; the trailing languages then have no entry for this key.
    pub values: Vec<String>,
}

impl LocalizationRow {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// The value for the language at `index`, if the row has that column.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

/// A parsed localization table: the header's languages and the data rows.
///
/// `rows[n].values[i]` belongs to `languages[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Language identifiers from the header row, verbatim and in order.
    pub languages: Vec<String>,

    /// Data rows in input order. Duplicate keys are kept.
    pub rows: Vec<LocalizationRow>,
}

impl Table {
    pub fn new(languages: Vec<String>, rows: Vec<LocalizationRow>) -> Self {
        Self { languages, rows }
    }

    /// Parses the language at `index` as a BCP 47 identifier.
    pub fn parse_language_identifier(&self, index: usize) -> Option<LanguageIdentifier> {
        self.languages.get(index)?.parse().ok()
    }

    /// Projects the language column at `index` into a `.strings` file.
    ///
    /// Pairs follow row order; rows without a value for this column are left out.
    /// Returns `None` when `index` is past the language list.
    pub fn project(&self, index: usize) -> Option<Format> {
        let language = self.languages.get(index)?;

        let pairs = self
            .rows
            .iter()
            .filter_map(|row| {
                row.value(index).map(|value| Pair {
                    key: row.key.clone(),
                    value: value.to_string(),
                })
            })
            .collect();

        Some(Format {
            language: language.clone(),
            pairs,
        })
    }
}
