#![forbid(unsafe_code)]
//! Generate per-language Apple `.strings` files from a tab-separated localization table.
//!
//! The table's first row lists the languages after a key column; every other
//! row is a key followed by one value per language. Each language ends up in
//! `<output>/Resources/<language>/Localizable.strings`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tsvstrings::{Emitter, Table, traits::Parser};
//!
//! let table = Table::read_from("Localizable.tsv")?;
//! let report = Emitter::new("build").emit(&table);
//! for path in report.written() {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod emitter;
pub mod error;
pub mod formats;
pub mod reader;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    emitter::{EmitOptions, EmitReport, Emitter, LanguageOutcome},
    error::Error,
    formats::StringsFormat,
    types::{LocalizationRow, Table},
};
