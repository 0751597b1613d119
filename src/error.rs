//! All error types for the tsvstrings crate.
//!
//! Reading the table fails as a whole; emitting fails per language, and the
//! emitter keeps going with the remaining languages.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("TSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("table is empty: expected a header row with language identifiers")]
    EmptyTable,

    #[error("invalid language identifier `{0}`")]
    InvalidLanguage(String),

    #[error("failed to create folder `{}` for language `{language}`: {source}", path.display())]
    DirectoryCreate {
        language: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write `{}` for language `{language}`: {source}", path.display())]
    Write {
        language: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The language an error is scoped to, if any.
    pub fn language(&self) -> Option<&str> {
        match self {
            Error::InvalidLanguage(language) => Some(language),
            Error::DirectoryCreate { language, .. } | Error::Write { language, .. } => {
                Some(language)
            }
            Error::Read { .. } | Error::Parse(_) | Error::EmptyTable => None,
        }
    }

    /// Whether the error stops the whole run rather than a single language.
    pub fn is_fatal(&self) -> bool {
        self.language().is_none()
    }
}
