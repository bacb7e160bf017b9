//! The version identifier shipped next to the binary as a plain-text file.
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// File name looked up in the working directory.
pub const VERSION_FILE: &str = "VERSION";

/// Verbatim content of the version file, trailing newline included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Version {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Version(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Without surrounding whitespace, for `--version` and the help header.
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Version(value.to_string())
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Version(value)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
