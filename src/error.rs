//! Error kinds surfaced by a translation run.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// A failed call to the translation service.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Failed to reach translation service")]
    Transport(#[from] reqwest::Error),

    #[error("Translation service returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Malformed response from translation service: {0}")]
    Malformed(String),
}

/// Any failure that aborts a run. Every variant maps to exit status 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] anyhow::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Exactly one of --json or --ini must be given")]
    AmbiguousFormat,

    #[error("LibreTranslate is not reachable at {0}")]
    ServiceUnreachable(String),

    #[error("Failed to read file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Input size ({:.1} MB) exceeds maximum allowed size (10 MB)",
        megabytes(.size)
    )]
    InputTooLarge { size: u64 },

    #[error("Failed to parse JSON input")]
    Parse(#[from] serde_json::Error),

    #[error("Translation failed")]
    Translation(#[from] TranslateError),

    #[error("Failed to write file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn megabytes(size: &u64) -> f64 {
    *size as f64 / 1024.0 / 1024.0
}
