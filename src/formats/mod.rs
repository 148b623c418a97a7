//! Format-specific translation pipelines.

pub mod ini;
pub mod json;

use std::fmt;

use crate::error::Error;

/// Structured file formats that can be translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Ini,
}

impl FileFormat {
    /// Picks the format from the `--json`/`--ini` flags. Exactly one must be set.
    pub const fn from_flags(json: bool, ini: bool) -> Result<Self, Error> {
        match (json, ini) {
            (true, false) => Ok(Self::Json),
            (false, true) => Ok(Self::Ini),
            _ => Err(Error::AmbiguousFormat),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Ini => f.write_str("INI"),
        }
    }
}
