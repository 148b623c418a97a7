//! # libre-tl - structured file translation with LibreTranslate
//!
//! `libre-tl` reads a JSON or INI file, sends every human-readable string
//! value to a LibreTranslate server, and writes a translated copy next to the
//! original. Structure is preserved: JSON key order and non-string values,
//! INI sections, comments and blank lines all survive unchanged.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a JSON locale file to French
//! libre-tl --libretranslate-url http://localhost:5000 --to fr --json locales/en.json
//! # -> locales/en_translated.json
//!
//! # Translate an INI file from English to German
//! libre-tl --libretranslate-url http://localhost:5000 --from en --to de --ini app.ini
//! ```
//!
//! ## Configuration
//!
//! Defaults can be stored in `~/.config/libre-tl/config.toml`:
//!
//! ```toml
//! [libretranslate]
//! url = "http://localhost:5000"
//! api_key_env = "LIBRETRANSLATE_API_KEY"
//!
//! [defaults]
//! from = "auto"
//! to = "fr"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and option resolution.
pub mod config;

/// Error kinds for a translation run.
pub mod error;

/// JSON and INI translation pipelines.
pub mod formats;

/// File system utilities.
pub mod fs;

/// Input file reading.
pub mod input;

/// A single file translation run.
pub mod job;

/// Global output configuration (quiet mode, colors, stdout/stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// LibreTranslate client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
