mod client;

pub use client::LibreTranslateClient;

use std::future::Future;

use crate::error::TranslateError;

/// Source and target language codes for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// Source language code, or `auto` to let the service detect it.
    pub source: String,
    /// Target language code.
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A remote service that can translate individual strings.
pub trait TranslationService: Sync {
    /// Base URL of the service, used in diagnostics.
    fn endpoint(&self) -> &str;

    /// Checks that the service is reachable. Failures collapse to `false`.
    fn probe(&self) -> impl Future<Output = bool> + Send;

    /// Translates one string.
    fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> impl Future<Output = Result<String, TranslateError>> + Send;
}

#[cfg(test)]
pub(crate) mod mock;
