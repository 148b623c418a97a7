//! JSON value walker.
//!
//! Every non-blank string leaf is replaced by its translation. Keys, numbers,
//! booleans and nulls pass through untouched, and object key order and array
//! order are preserved.

use futures_util::future::{BoxFuture, FutureExt};
use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde_json::{Map, Value};

use crate::error::{Error, TranslateError};
use crate::translation::{LanguagePair, TranslationService};

/// Translates a whole JSON document and renders it pretty-printed.
pub async fn translate_json<S: TranslationService>(
    content: &str,
    languages: &LanguagePair,
    service: &S,
    jobs: usize,
) -> Result<String, Error> {
    let document: Value = serde_json::from_str(content)?;
    let translated = translate_value(&document, languages, service, jobs).await?;

    let mut rendered = serde_json::to_string_pretty(&translated)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Recursively translates a JSON value.
///
/// Children of one array or object are translated with up to `jobs` requests
/// in flight at that level (nested containers each get their own window);
/// results are reassembled in input order. The first failure
/// aborts the walk.
pub fn translate_value<'a, S: TranslationService>(
    value: &'a Value,
    languages: &'a LanguagePair,
    service: &'a S,
    jobs: usize,
) -> BoxFuture<'a, Result<Value, TranslateError>> {
    async move {
        match value {
            Value::String(text) if text.trim().is_empty() => Ok(value.clone()),
            Value::String(text) => service.translate(text, languages).await.map(Value::String),
            Value::Array(items) => {
                let pending: Vec<_> = items
                    .iter()
                    .map(|item| translate_value(item, languages, service, jobs))
                    .collect();
                let translated: Vec<Value> = stream::iter(pending)
                    .buffered(jobs.max(1))
                    .try_collect()
                    .await?;
                Ok(Value::Array(translated))
            }
            Value::Object(entries) => {
                let pending: Vec<_> = entries
                    .values()
                    .map(|item| translate_value(item, languages, service, jobs))
                    .collect();
                let translated: Vec<Value> = stream::iter(pending)
                    .buffered(jobs.max(1))
                    .try_collect()
                    .await?;
                let object: Map<String, Value> =
                    entries.keys().cloned().zip(translated).collect();
                Ok(Value::Object(object))
            }
            Value::Number(_) | Value::Bool(_) | Value::Null => Ok(value.clone()),
        }
    }
    .boxed()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::mock::MockTranslator;
    use serde_json::json;

    fn languages() -> LanguagePair {
        LanguagePair::new("auto", "fr")
    }

    #[tokio::test]
    async fn test_translates_nested_document() {
        let service = MockTranslator::with_pairs(&[("hello", "bonjour"), ("bye", "au revoir")]);
        let input = json!({"greeting": "hello", "count": 3, "nested": {"msg": "bye"}});

        let output = translate_value(&input, &languages(), &service, 4)
            .await
            .unwrap();

        assert_eq!(
            output,
            json!({"greeting": "bonjour", "count": 3, "nested": {"msg": "au revoir"}})
        );
    }

    #[tokio::test]
    async fn test_non_string_leaves_unchanged() {
        let service = MockTranslator::with_pairs(&[]);
        let input = json!({"n": 1.5, "big": 12345678901234567890_u64, "yes": true, "none": null});

        let output = translate_value(&input, &languages(), &service, 4)
            .await
            .unwrap();

        assert_eq!(output, input);
        assert!(service.requests().is_empty());
    }

    #[tokio::test]
    async fn test_blank_strings_are_not_sent() {
        let service = MockTranslator::with_pairs(&[]);
        let input = json!({"empty": "", "spaces": "   ", "tab": "\t\n"});

        let output = translate_value(&input, &languages(), &service, 4)
            .await
            .unwrap();

        assert_eq!(output, input);
        assert!(service.requests().is_empty());
    }

    #[tokio::test]
    async fn test_keys_are_never_translated() {
        let service = MockTranslator::with_pairs(&[("title", "titre"), ("Home", "Accueil")]);
        let input = json!({"title": "Home"});

        let output = translate_value(&input, &languages(), &service, 4)
            .await
            .unwrap();

        assert_eq!(output, json!({"title": "Accueil"}));
        assert_eq!(service.requests(), vec!["Home"]);
    }

    #[tokio::test]
    async fn test_array_order_preserved_with_concurrency() {
        let service = MockTranslator::with_pairs(&[("one", "un"), ("two", "deux"), ("three", "trois")]);
        let input = json!(["one", 2, "two", ["three", ""], null]);

        let output = translate_value(&input, &languages(), &service, 8)
            .await
            .unwrap();

        assert_eq!(output, json!(["un", 2, "deux", ["trois", ""], null]));
    }

    #[tokio::test]
    async fn test_object_key_order_preserved() {
        let service = MockTranslator::with_pairs(&[]);
        let content = r#"{"zeta": "z", "alpha": "a", "mid": {"b": "b", "a": "a"}}"#;

        let rendered = translate_json(content, &languages(), &service, 2)
            .await
            .unwrap();
        let output: Value = serde_json::from_str(&rendered).unwrap();

        let keys: Vec<&String> = output.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        let nested: Vec<&String> = output["mid"].as_object().unwrap().keys().collect();
        assert_eq!(nested, ["b", "a"]);
    }

    #[tokio::test]
    async fn test_failure_aborts_walk() {
        let service = MockTranslator::with_pairs(&[]).failing_on("broken");
        let input = json!({"ok": "fine", "list": ["broken"]});

        let result = translate_value(&input, &languages(), &service, 1).await;

        assert!(matches!(result, Err(TranslateError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_translate_json_renders_pretty_output() {
        let service = MockTranslator::with_pairs(&[("hello", "bonjour")]);

        let rendered = translate_json(r#"{"greeting":"hello","count":3}"#, &languages(), &service, 4)
            .await
            .unwrap();

        assert_eq!(rendered, "{\n  \"greeting\": \"bonjour\",\n  \"count\": 3\n}\n");
    }

    #[tokio::test]
    async fn test_translate_json_keeps_number_text() {
        let service = MockTranslator::with_pairs(&[]);

        let rendered = translate_json(
            r#"{"ratio": 1.50, "big": 123456789012345678901234567890}"#,
            &languages(),
            &service,
            4,
        )
        .await
        .unwrap();

        assert!(rendered.contains("\"ratio\": 1.50"));
        assert!(rendered.contains("\"big\": 123456789012345678901234567890"));
    }

    #[tokio::test]
    async fn test_deeply_nested_containers() {
        let service = MockTranslator::with_pairs(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let input = json!({"l1": [{"l2": ["a", {"l3": ["b", 1]}]}, "c"]});

        let output = translate_value(&input, &languages(), &service, 2)
            .await
            .unwrap();

        assert_eq!(output, json!({"l1": [{"l2": ["A", {"l3": ["B", 1]}]}, "C"]}));
    }

    #[tokio::test]
    async fn test_translate_json_rejects_malformed_input() {
        let service = MockTranslator::with_pairs(&[]);

        let result = translate_json("{\"unterminated\": ", &languages(), &service, 4).await;

        assert!(matches!(result, Err(Error::Parse(_))));
        assert!(service.requests().is_empty());
    }
}
