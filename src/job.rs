//! A single file translation run.
//!
//! A run moves through validation, a service probe, the format-specific
//! pipeline and finally the write of the output file. Any failure stops the
//! run before anything is written.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::formats::{FileFormat, ini, json};
use crate::fs;
use crate::input::InputReader;
use crate::translation::{LanguagePair, TranslationService};
use crate::ui::{Spinner, Style};

/// Validated, immutable description of one run.
#[derive(Debug, Clone)]
pub struct TranslateJob {
    input: PathBuf,
    format: FileFormat,
    languages: LanguagePair,
    output: PathBuf,
    jobs: NonZeroUsize,
}

impl TranslateJob {
    /// Validates the input path and format flags.
    ///
    /// The input file is checked first, then the `--json`/`--ini` choice.
    pub fn new(
        input: PathBuf,
        json: bool,
        ini: bool,
        languages: LanguagePair,
        output: Option<PathBuf>,
        jobs: NonZeroUsize,
    ) -> Result<Self, Error> {
        if !input.is_file() {
            return Err(Error::FileNotFound(input));
        }

        let format = FileFormat::from_flags(json, ini)?;
        let output = output.unwrap_or_else(|| fs::translated_path(&input));

        Ok(Self {
            input,
            format,
            languages,
            output,
            jobs,
        })
    }

    pub const fn format(&self) -> FileFormat {
        self.format
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Runs the job against `service` and returns the path written.
    pub async fn run<S: TranslationService>(&self, service: &S) -> Result<PathBuf, Error> {
        self.probe(service).await?;

        let content = InputReader::read(&self.input)?;

        crate::status!(
            "Translating {} file {} ({} -> {})",
            self.format,
            Style::value(self.input.display()),
            self.languages.source,
            self.languages.target
        );

        let translated = match self.format {
            FileFormat::Json => {
                json::translate_json(&content, &self.languages, service, self.jobs.get()).await?
            }
            FileFormat::Ini => ini::translate_ini(&content, &self.languages, service).await?,
        };

        fs::atomic_write(&self.output, &translated).map_err(|source| Error::Write {
            path: self.output.clone(),
            source,
        })?;

        Ok(self.output.clone())
    }

    async fn probe<S: TranslationService>(&self, service: &S) -> Result<(), Error> {
        let spinner = Spinner::new(&format!(
            "Checking LibreTranslate at {}...",
            service.endpoint()
        ));
        let reachable = service.probe().await;
        spinner.stop();

        if !reachable {
            return Err(Error::ServiceUnreachable(service.endpoint().to_string()));
        }

        crate::status!(
            "LibreTranslate is available at {}",
            Style::secondary(service.endpoint())
        );
        Ok(())
    }
}
