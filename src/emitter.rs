//! Emitting one `.strings` file per language.
//!
//! Each language is an independent unit of work: a failure for one language is
//! recorded in the [`EmitReport`] and the remaining languages are still written.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{error::Error, formats::strings::Format, types::Table};

/// Output layout for [`Emitter`].
///
/// The default layout is `Resources/<language>/Localizable.strings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Folder created under the output directory that holds the language folders.
    pub resources_dir: String,
    /// Appended to each language folder name, e.g. `.lproj`.
    pub folder_suffix: String,
    /// Name of the file written into each language folder.
    pub file_name: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            resources_dir: "Resources".to_string(),
            folder_suffix: String::new(),
            file_name: "Localizable.strings".to_string(),
        }
    }
}

impl EmitOptions {
    /// Creates default emit options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resources folder name.
    pub fn with_resources_dir(mut self, resources_dir: impl Into<String>) -> Self {
        self.resources_dir = resources_dir.into();
        self
    }

    /// Sets the language folder suffix.
    pub fn with_folder_suffix(mut self, folder_suffix: impl Into<String>) -> Self {
        self.folder_suffix = folder_suffix.into();
        self
    }

    /// Sets the output file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

/// The result of emitting a single language.
#[derive(Debug)]
pub struct LanguageOutcome {
    pub language: String,
    /// The written file, or why this language was skipped.
    pub result: Result<PathBuf, Error>,
}

/// Per-language outcomes in header order.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub outcomes: Vec<LanguageOutcome>,
}

impl EmitReport {
    /// Paths of the files that were written.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok().map(PathBuf::as_path))
    }

    /// Errors of the languages that were skipped.
    pub fn failures(&self) -> impl Iterator<Item = &Error> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Writes the `.strings` files of a [`Table`] under an output directory.
#[derive(Debug, Clone)]
pub struct Emitter {
    output_dir: PathBuf,
    options: EmitOptions,
}

impl Emitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            options: EmitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// The folder that holds the file for `language`.
    pub fn language_folder(&self, language: &str) -> PathBuf {
        self.output_dir
            .join(&self.options.resources_dir)
            .join(format!("{}{}", language, self.options.folder_suffix))
    }

    /// The file written for `language`.
    pub fn output_path(&self, language: &str) -> PathBuf {
        self.language_folder(language).join(&self.options.file_name)
    }

    /// Writes one file per language of `table`, in header order.
    pub fn emit(&self, table: &Table) -> EmitReport {
        let outcomes = (0..table.languages.len())
            .filter_map(|index| {
                let format = table.project(index)?;
                let result = validate_language(&format.language).and_then(|()| {
                    if table.parse_language_identifier(index).is_none() {
                        warn!(
                            language = %format.language,
                            "not a BCP 47 language identifier, using it verbatim"
                        );
                    }
                    self.write_language(&format)
                });
                if let Err(e) = &result {
                    warn!(language = %format.language, error = %e, "skipping language");
                }
                Some(LanguageOutcome {
                    language: format.language,
                    result,
                })
            })
            .collect();

        EmitReport { outcomes }
    }

    /// Writes one projected language and returns the file path.
    fn write_language(&self, format: &Format) -> Result<PathBuf, Error> {
        let folder = self.language_folder(&format.language);
        fs::create_dir_all(&folder).map_err(|source| Error::DirectoryCreate {
            language: format.language.clone(),
            path: folder.clone(),
            source,
        })?;

        let path = self.output_path(&format.language);
        format.write_to(&path)?;

        debug!(
            language = %format.language,
            entries = format.pairs.len(),
            path = %path.display(),
            "wrote strings file"
        );

        Ok(path)
    }
}

/// Rejects identifiers that cannot safely name a single folder.
fn validate_language(language: &str) -> Result<(), Error> {
    let trimmed = language.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || language.contains(['/', '\\'])
    {
        return Err(Error::InvalidLanguage(language.to_string()));
    }
    Ok(())
}
