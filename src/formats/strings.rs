use std::{fmt::Display, fs, io::Write, path::Path};

use tempfile::{Builder, NamedTempFile};

use crate::error::Error;

/// A writer for Apple's .strings format.
///
/// Every pair becomes one `"key" = "value";` line. The file carries no header
/// and no comments, so regenerating it from the same table is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub language: String,
    pub pairs: Vec<Pair>,
}

impl Format {
    /// Write to any writer (file, memory, etc.).
    pub fn to_writer<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }

    /// Atomically replace the file at `path` with this content.
    ///
    /// The content goes to a temporary file next to `path` first and is then
    /// renamed over it, so readers see either the old file or the new one.
    /// The result keeps the permissions of the file it replaces, and a new
    /// file gets the same permissions `fs::write` would give it.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let folder = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let write_error = |source| Error::Write {
            language: self.language.clone(),
            path: path.to_path_buf(),
            source,
        };

        let mut temp = temp_file_in(folder).map_err(write_error)?;
        if let Ok(existing) = fs::metadata(path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_error)?;
        }
        self.to_writer(&mut temp).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(path).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}

/// A temporary file created with the default mode for new files (0o666 minus
/// the umask) instead of tempfile's owner-only 0o600.
fn temp_file_in(folder: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(folder)
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pair in &self.pairs {
            writeln!(f, "{}", pair)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    /// The value with every `"` escaped as `\"`.
    ///
    /// Keys are written as they are; only values are escaped.
    pub fn escaped_value(&self) -> String {
        escape_quotes(&self.value)
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.escaped_value())
    }
}

pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}
