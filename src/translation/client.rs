use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{LanguagePair, TranslationService};
use crate::error::TranslateError;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for a LibreTranslate server.
pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.base_url.trim_end_matches('/'))
    }
}

impl TranslationService for LibreTranslateClient {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn probe(&self) -> bool {
        self.client
            .get(&self.base_url)
            .send()
            .await
            .is_ok_and(|response| response.status().is_success())
    }

    async fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<String, TranslateError> {
        crate::info!("Translating: {text}");

        let body = TranslateRequest {
            q: text,
            source: &languages.source,
            target: &languages.target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.translate_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;

        if !status.is_success() {
            // LibreTranslate reports failures as {"error": "..."}
            let message = serde_json::from_str::<ErrorResponse>(&payload)
                .map_or(payload, |e| e.error);
            return Err(TranslateError::Status { status, message });
        }

        serde_json::from_str::<TranslateResponse>(&payload)
            .map(|r| r.translated_text)
            .map_err(|e| TranslateError::Malformed(e.to_string()))
    }
}
