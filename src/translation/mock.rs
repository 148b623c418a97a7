//! In-memory translation service for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{LanguagePair, TranslationService};
use crate::error::TranslateError;

/// Translates through a fixed dictionary and records every request.
///
/// Unknown strings are returned wrapped as `<target>:<text>`; strings listed
/// in `failing` produce a malformed-response error.
#[derive(Default)]
pub struct MockTranslator {
    pub reachable: bool,
    pub dictionary: HashMap<String, String>,
    pub failing: Vec<String>,
    pub requests: Mutex<Vec<String>>,
}

impl MockTranslator {
    pub fn with_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            reachable: true,
            dictionary: pairs
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.push(text.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl TranslationService for MockTranslator {
    fn endpoint(&self) -> &str {
        "http://mock.invalid"
    }

    async fn probe(&self) -> bool {
        self.reachable
    }

    async fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<String, TranslateError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(text.to_string());
        }

        if self.failing.iter().any(|f| f == text) {
            return Err(TranslateError::Malformed(format!("no translation for {text:?}")));
        }

        Ok(self
            .dictionary
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("{}:{text}", languages.target)))
    }
}
